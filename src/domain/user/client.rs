//! Users sub-client: create a user, read the current user's profile.

use crate::client::UnblockClient;
use crate::domain::user::wire::{CreateUserBody, CreateUserResponse, UserDetailsResponse};
use crate::domain::user::{CreateUserRequest, CreatedUser, UserDetails};
use crate::error::SdkError;
use crate::http::AuthMode;

pub struct Users<'a> {
    pub(crate) client: &'a UnblockClient,
}

impl<'a> Users<'a> {
    /// Register a new user. Only the API key is needed.
    pub async fn create(&self, request: &CreateUserRequest) -> Result<CreatedUser, SdkError> {
        let body = CreateUserBody::from(request);
        let resp: CreateUserResponse = self
            .client
            .http
            .post("/user", Some(&body), AuthMode::ApiKey)
            .await?;
        Ok(resp.into())
    }

    /// Profile of the user identified by the session.
    pub async fn details(&self) -> Result<UserDetails, SdkError> {
        let resp: UserDetailsResponse = self
            .client
            .http
            .get("/user", AuthMode::UserOrSession)
            .await?;
        Ok(resp.into())
    }
}
