//! User domain: account creation and profile reads.

pub mod client;
mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};

/// Input for `POST /user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Wallet that receives on-ramped funds.
    pub target_address: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
}

/// Result of creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedUser {
    pub user_id: String,
    pub status: String,
}

/// Full user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub target_address: String,
    pub country: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}
