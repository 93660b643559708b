//! Authentication: SIWE message generation, signer seam, login flows.
//!
//! ## Flows
//!
//! - **Sign-In with Ethereum**: build a [`SiweMessage`], have the wallet sign it
//!   (through a [`MessageSigner`] or externally), then submit it with
//!   `client.auth().login_with_siwe(...)`. The response carries both the user id
//!   and the session id.
//! - **Email one-time code**: `client.auth().request_email_login(user_id)` makes
//!   the API email a code; `client.auth().verify_email_code(code)` exchanges it
//!   for a session id.
//!
//! Sessions never expire client-side; there is no refresh.

pub mod client;
pub mod signer;
pub(crate) mod wire;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BadRequestError;

pub use signer::{MessageSigner, SignerError};

/// Statement line embedded in every sign-in message.
pub const SIWE_STATEMENT: &str = "Sign in with Ethereum";

/// SIWE message version.
pub const SIWE_VERSION: &str = "1";

/// How long a sign-in message stays valid.
pub const SIWE_VALIDITY_HOURS: i64 = 4;

const NONCE_LENGTH: usize = 17;

/// Input for building a sign-in message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiweParams {
    pub wallet_address: String,
    /// Full URL of the site requesting the signature, e.g. `https://app.example.com`.
    pub signing_url: String,
    pub chain_id: u64,
}

/// An EIP-4361 sign-in message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiweMessage {
    pub domain: String,
    pub address: String,
    pub statement: String,
    pub uri: String,
    pub version: String,
    pub chain_id: u64,
    pub nonce: String,
    pub issued_at: DateTime<Utc>,
    pub expiration_time: DateTime<Utc>,
}

impl SiweMessage {
    /// Build a message issued now with a fresh random nonce.
    pub fn new(params: &SiweParams) -> Result<Self, BadRequestError> {
        Self::issued_at(params, Utc::now(), generate_nonce())
    }

    /// Build a message with an explicit issue time and nonce.
    pub fn issued_at(
        params: &SiweParams,
        issued_at: DateTime<Utc>,
        nonce: impl Into<String>,
    ) -> Result<Self, BadRequestError> {
        Ok(Self {
            domain: signing_domain(&params.signing_url)?,
            address: params.wallet_address.clone(),
            statement: SIWE_STATEMENT.to_string(),
            uri: params.signing_url.clone(),
            version: SIWE_VERSION.to_string(),
            chain_id: params.chain_id,
            nonce: nonce.into(),
            issued_at,
            expiration_time: issued_at + Duration::hours(SIWE_VALIDITY_HOURS),
        })
    }
}

impl fmt::Display for SiweMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} wants you to sign in with your Ethereum account:", self.domain)?;
        writeln!(f, "{}", self.address)?;
        writeln!(f)?;
        writeln!(f, "{}", self.statement)?;
        writeln!(f)?;
        writeln!(f, "URI: {}", self.uri)?;
        writeln!(f, "Version: {}", self.version)?;
        writeln!(f, "Chain ID: {}", self.chain_id)?;
        writeln!(f, "Nonce: {}", self.nonce)?;
        writeln!(
            f,
            "Issued At: {}",
            self.issued_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        )?;
        write!(
            f,
            "Expiration Time: {}",
            self.expiration_time.to_rfc3339_opts(SecondsFormat::Millis, true)
        )
    }
}

/// Random alphanumeric nonce for a sign-in message.
pub fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LENGTH)
        .map(char::from)
        .collect()
}

/// Host (and port, if any) of the signing URL.
fn signing_domain(signing_url: &str) -> Result<String, BadRequestError> {
    let url = reqwest::Url::parse(signing_url)
        .map_err(|e| BadRequestError::InvalidSigningUrl(format!("{}: {}", signing_url, e)))?;
    let host = url
        .host_str()
        .ok_or_else(|| BadRequestError::InvalidSigningUrl(format!("{}: missing host", signing_url)))?;
    Ok(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}
