//! Wire types for `/auth` requests and responses.

use serde::{Deserialize, Serialize};

/// `POST /auth/login` body for Sign-In with Ethereum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiweLoginBody {
    pub message: String,
    pub signature: String,
}

/// `POST /auth/login` body for the email flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailLoginBody {
    pub user_uuid: String,
}

/// `POST /auth/otp` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpBody {
    pub user_uuid: String,
    pub otp: String,
}

/// SIWE login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user_uuid: String,
    pub unblock_session_id: String,
}

/// OTP verification response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpResponse {
    pub unblock_session_id: String,
}
