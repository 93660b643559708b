//! Shared types used across all domain modules.
//!
//! Currency and chain enums serialize identically on the wire and in the SDK's
//! own DTOs, so they are used on both sides without conversion.

pub mod serde_util;
pub mod wire;

use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Currency ────────────────────────────────────────────────────────────────

/// Fiat and crypto currencies understood by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "GBP")]
    Gbp,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "USDC")]
    Usdc,
    #[serde(rename = "USDT")]
    Usdt,
    #[serde(rename = "EURe")]
    Eure,
}

impl Currency {
    pub fn is_fiat(&self) -> bool {
        matches!(self, Self::Eur | Self::Gbp | Self::Usd)
    }

    pub fn is_crypto(&self) -> bool {
        !self.is_fiat()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Usd => "USD",
            Self::Usdc => "USDC",
            Self::Usdt => "USDT",
            Self::Eure => "EURe",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Chain ───────────────────────────────────────────────────────────────────

/// EVM chain a crypto balance settles on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Ethereum,
    Polygon,
    Arbitrum,
    Optimism,
    Base,
    Celo,
}

impl Chain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::Polygon => "polygon",
            Self::Arbitrum => "arbitrum",
            Self::Optimism => "optimism",
            Self::Base => "base",
            Self::Celo => "celo",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Address ─────────────────────────────────────────────────────────────────

/// Postal address, used by KYC applicants, companies and corporates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address_line_1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    pub city: String,
    pub post_code: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
}
