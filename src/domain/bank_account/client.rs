//! Bank accounts sub-client.
//!
//! Every path is scoped to the session user, so each call needs both the user
//! id and the session id before anything is sent.

use crate::client::UnblockClient;
use crate::config::Environment;
use crate::domain::bank_account::wire::{
    CreateRemoteAccountBody, CreateUnblockAccountBody, RemoteAccountResponse,
    SetMainAccountBody, SimulateDepositBody, UnblockAccountResponse,
};
use crate::domain::bank_account::{
    CreateRemoteAccountRequest, CreateUnblockAccountRequest, RemoteAccount,
    SimulateDepositRequest, UnblockAccount,
};
use crate::error::{BadRequestError, SdkError};
use crate::http::{path_segment, AuthMode};

pub struct BankAccounts<'a> {
    pub(crate) client: &'a UnblockClient,
}

impl<'a> BankAccounts<'a> {
    async fn base_path(&self, kind: &str) -> Result<String, SdkError> {
        let user_id = self.client.http.require_user_id().await?;
        Ok(format!("/user/{}/bank-account/{}", path_segment(&user_id), kind))
    }

    // ── Remote (user-owned) accounts ─────────────────────────────────────

    /// Register a payout account. Fails before sending when the request has
    /// neither an IBAN nor a complete account number and sort code.
    pub async fn create_remote(
        &self,
        request: &CreateRemoteAccountRequest,
    ) -> Result<RemoteAccount, SdkError> {
        let body = CreateRemoteAccountBody::try_from(request)?;
        let path = self.base_path("remote").await?;
        let resp: RemoteAccountResponse = self
            .client
            .http
            .post(&path, Some(&body), AuthMode::Session)
            .await?;
        Ok(resp.into())
    }

    pub async fn list_remote(&self) -> Result<Vec<RemoteAccount>, SdkError> {
        let path = self.base_path("remote").await?;
        let resp: Vec<RemoteAccountResponse> =
            self.client.http.get(&path, AuthMode::Session).await?;
        Ok(resp.into_iter().map(Into::into).collect())
    }

    pub async fn get_remote(&self, account_id: &str) -> Result<RemoteAccount, SdkError> {
        let path = format!("{}/{}", self.base_path("remote").await?, path_segment(account_id));
        let resp: RemoteAccountResponse = self.client.http.get(&path, AuthMode::Session).await?;
        Ok(resp.into())
    }

    /// Make `account_id` the main beneficiary for off-ramp payouts.
    pub async fn set_main_remote(&self, account_id: &str) -> Result<(), SdkError> {
        let path = self.base_path("remote").await?;
        let body = SetMainAccountBody {
            account_uuid: account_id.to_string(),
        };
        let _: serde_json::Value = self
            .client
            .http
            .patch(&path, &body, AuthMode::Session)
            .await?;
        Ok(())
    }

    pub async fn delete_remote(&self, account_id: &str) -> Result<(), SdkError> {
        let path = format!("{}/{}", self.base_path("remote").await?, path_segment(account_id));
        let _: serde_json::Value = self.client.http.delete(&path, AuthMode::Session).await?;
        Ok(())
    }

    // ── Unblock-issued accounts ──────────────────────────────────────────

    pub async fn create_unblock(
        &self,
        request: &CreateUnblockAccountRequest,
    ) -> Result<UnblockAccount, SdkError> {
        let path = self.base_path("unblock").await?;
        let resp: UnblockAccountResponse = self
            .client
            .http
            .post(&path, Some(&CreateUnblockAccountBody::from(request)), AuthMode::Session)
            .await?;
        Ok(resp.into())
    }

    pub async fn list_unblock(&self) -> Result<Vec<UnblockAccount>, SdkError> {
        let path = self.base_path("unblock").await?;
        let resp: Vec<UnblockAccountResponse> =
            self.client.http.get(&path, AuthMode::Session).await?;
        Ok(resp.into_iter().map(Into::into).collect())
    }

    pub async fn get_unblock(&self, account_id: &str) -> Result<UnblockAccount, SdkError> {
        let path = format!("{}/{}", self.base_path("unblock").await?, path_segment(account_id));
        let resp: UnblockAccountResponse = self.client.http.get(&path, AuthMode::Session).await?;
        Ok(resp.into())
    }

    /// Credit an Unblock account with test funds. Sandbox only.
    pub async fn simulate_deposit(&self, request: &SimulateDepositRequest) -> Result<(), SdkError> {
        let environment = self.client.http.environment();
        if environment != Environment::Sandbox {
            return Err(BadRequestError::UnsupportedEnvironment {
                operation: "simulate_deposit",
                environment,
            }
            .into());
        }

        let path = self.base_path("unblock/simulate").await?;
        let _: serde_json::Value = self
            .client
            .http
            .post(&path, Some(&SimulateDepositBody::from(request)), AuthMode::Session)
            .await?;
        tracing::debug!(account = %request.account_id, amount = %request.amount, "simulated deposit");
        Ok(())
    }
}
