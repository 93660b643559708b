//! External message signer.
//!
//! The SDK never holds wallet keys. Callers plug in whatever signs personal
//! messages for them (a local key, a hardware wallet, a remote KMS) and the
//! auth sub-client wraps any failure as [`SdkError::Signing`].
//!
//! [`SdkError::Signing`]: crate::error::SdkError::Signing

use std::future::Future;
use std::pin::Pin;

/// Error type returned by signer implementations.
pub type SignerError = Box<dyn std::error::Error + Send + Sync>;

/// Signs a plain-text message and returns the signature as a hex string.
///
/// # Example Implementation
///
/// ```rust,ignore
/// use unblock_sdk::auth::{MessageSigner, SignerError};
///
/// struct FixedSigner;
///
/// impl MessageSigner for FixedSigner {
///     fn sign_message<'a>(
///         &'a self,
///         _message: &'a str,
///     ) -> Pin<Box<dyn Future<Output = Result<String, SignerError>> + Send + 'a>> {
///         Box::pin(async { Ok("0xSIG".to_string()) })
///     }
/// }
/// ```
pub trait MessageSigner: Send + Sync {
    fn sign_message<'a>(
        &'a self,
        message: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, SignerError>> + Send + 'a>>;
}
