//! Unified SDK error types.
//!
//! Every failure surfaces as exactly one [`SdkError`]:
//!
//! - [`SdkError::Api`]: the remote answered with a non-2xx status.
//! - [`SdkError::Unexpected`]: anything else thrown during the call (network
//!   failure, undecodable body).
//! - [`SdkError::BadRequest`]: a caller-side precondition failed; raised before
//!   any request is sent.
//! - [`SdkError::Signing`]: the injected message signer failed.

use std::fmt;

use thiserror::Error;

use crate::config::Environment;
use crate::shared::Currency;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Api error: {status} {body}")]
    Api { status: u16, body: WireBody },

    #[error("Unexpected error: {0}")]
    Unexpected(String),

    #[error("Bad request: {0}")]
    BadRequest(#[from] BadRequestError),

    #[error("Signing error: {0}")]
    Signing(String),
}

impl SdkError {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error was raised client-side before any request was sent.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::BadRequest(_))
    }

    pub fn is_session_not_set(&self) -> bool {
        matches!(self, Self::BadRequest(BadRequestError::SessionNotSet(_)))
    }
}

impl From<TransportError> for SdkError {
    fn from(e: TransportError) -> Self {
        Self::Unexpected(e.to_string())
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        Self::Unexpected(e.to_string())
    }
}

/// Precondition failures detected before a request is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BadRequestError {
    #[error("session not set, missing {0}")]
    SessionNotSet(&'static str),

    #[error("invalid account details: {0}")]
    InvalidAccountDetails(String),

    #[error("{operation} is only available in sandbox, not {environment}")]
    UnsupportedEnvironment {
        operation: &'static str,
        environment: Environment,
    },

    #[error("currency mismatch: {input} -> {output} must pair one fiat and one crypto currency")]
    CurrencyMismatch { input: Currency, output: Currency },

    #[error("currency not supported: {0}")]
    CurrencyNotSupported(Currency),

    #[error("invalid signing url: {0}")]
    InvalidSigningUrl(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Failures produced at the transport boundary, before any HTTP status exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("{0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(e.to_string())
        }
    }
}

/// Body of a failed API response.
///
/// Displays JSON in relaxed object notation (`{foo: bar}`): keys and string
/// values are written without quotes, entries separated by `, `.
#[derive(Debug, Clone, PartialEq)]
pub struct WireBody(pub serde_json::Value);

impl WireBody {
    /// Parse a raw response body, keeping non-JSON text verbatim.
    pub fn from_text(text: &str) -> Self {
        match serde_json::from_str(text) {
            Ok(value) => Self(value),
            Err(_) => Self(serde_json::Value::String(text.to_string())),
        }
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl fmt::Display for WireBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_relaxed(f, &self.0)
    }
}

fn write_relaxed(f: &mut fmt::Formatter<'_>, value: &serde_json::Value) -> fmt::Result {
    use serde_json::Value;

    match value {
        Value::String(s) => f.write_str(s),
        Value::Array(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_relaxed(f, item)?;
            }
            f.write_str("]")
        }
        Value::Object(map) => {
            f.write_str("{")?;
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}: ", key)?;
                write_relaxed(f, item)?;
            }
            f.write_str("}")
        }
        other => write!(f, "{}", other),
    }
}
