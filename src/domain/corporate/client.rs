//! Corporates sub-client.

use crate::client::UnblockClient;
use crate::domain::corporate::wire::{CorporateResponse, CreateCorporateBody, UpdateCorporateBody};
use crate::domain::corporate::{Corporate, CreateCorporateRequest, UpdateCorporateRequest};
use crate::error::SdkError;
use crate::http::{path_segment, AuthMode};

pub struct Corporates<'a> {
    pub(crate) client: &'a UnblockClient,
}

impl<'a> Corporates<'a> {
    pub async fn create(&self, request: &CreateCorporateRequest) -> Result<Corporate, SdkError> {
        let resp: CorporateResponse = self
            .client
            .http
            .post("/corporate", Some(&CreateCorporateBody::from(request)), AuthMode::Session)
            .await?;
        Ok(resp.into())
    }

    pub async fn update(
        &self,
        corporate_id: &str,
        request: &UpdateCorporateRequest,
    ) -> Result<Corporate, SdkError> {
        let path = format!("/corporate/{}", path_segment(corporate_id));
        let resp: CorporateResponse = self
            .client
            .http
            .patch(&path, &UpdateCorporateBody::from(request), AuthMode::Session)
            .await?;
        Ok(resp.into())
    }

    /// Read a corporate, identified by `user-uuid` when known, else by session.
    pub async fn details(&self, corporate_id: &str) -> Result<Corporate, SdkError> {
        let path = format!("/corporate/{}", path_segment(corporate_id));
        let resp: CorporateResponse = self
            .client
            .http
            .get(&path, AuthMode::UserOrSession)
            .await?;
        Ok(resp.into())
    }
}
