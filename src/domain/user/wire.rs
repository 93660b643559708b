//! Wire types for `/user` requests and responses.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserBody {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub target_address: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub user_uuid: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetailsResponse {
    pub user_uuid: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub target_address: String,
    pub country: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}
