//! Token preferences sub-client.

use crate::client::UnblockClient;
use crate::domain::token_preference::wire::{TokenPreferenceBody, UpdateTokenPreferencesBody};
use crate::domain::token_preference::TokenPreference;
use crate::error::SdkError;
use crate::http::{path_segment, AuthMode};

pub struct TokenPreferences<'a> {
    pub(crate) client: &'a UnblockClient,
}

impl<'a> TokenPreferences<'a> {
    pub async fn get(&self) -> Result<Vec<TokenPreference>, SdkError> {
        let user_id = self.client.http.require_user_id().await?;
        let path = format!("/user/{}/token-preferences", path_segment(&user_id));
        let resp: Vec<TokenPreferenceBody> = self.client.http.get(&path, AuthMode::Session).await?;
        Ok(resp.into_iter().map(Into::into).collect())
    }

    /// Replace the user's preferences. Each must pair a fiat with a crypto
    /// currency; nothing is sent if any does not.
    pub async fn update(
        &self,
        preferences: &[TokenPreference],
    ) -> Result<Vec<TokenPreference>, SdkError> {
        let body = UpdateTokenPreferencesBody::try_from(preferences)?;
        let user_id = self.client.http.require_user_id().await?;
        let path = format!("/user/{}/token-preferences", path_segment(&user_id));
        let resp: Vec<TokenPreferenceBody> = self
            .client
            .http
            .patch(&path, &body, AuthMode::Session)
            .await?;
        Ok(resp.into_iter().map(Into::into).collect())
    }
}
