//! Conversions between user DTOs and wire types.

use super::wire::{CreateUserBody, CreateUserResponse, UserDetailsResponse};
use super::{CreateUserRequest, CreatedUser, UserDetails};

impl From<&CreateUserRequest> for CreateUserBody {
    fn from(r: &CreateUserRequest) -> Self {
        Self {
            first_name: r.first_name.clone(),
            last_name: r.last_name.clone(),
            email: r.email.clone(),
            target_address: r.target_address.clone(),
            country: r.country.clone(),
        }
    }
}

impl From<CreateUserResponse> for CreatedUser {
    fn from(r: CreateUserResponse) -> Self {
        Self {
            user_id: r.user_uuid,
            status: r.status,
        }
    }
}

impl From<UserDetailsResponse> for UserDetails {
    fn from(r: UserDetailsResponse) -> Self {
        Self {
            user_id: r.user_uuid,
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            target_address: r.target_address,
            country: r.country,
            status: r.status,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}
