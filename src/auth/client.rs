//! Auth sub-client: SIWE login, email one-time code, session management.
//!
//! This is the only sub-client that writes the session context.

use crate::auth::signer::MessageSigner;
use crate::auth::wire::{EmailLoginBody, LoginResponse, OtpBody, OtpResponse, SiweLoginBody};
use crate::auth::{SiweMessage, SiweParams};
use crate::client::UnblockClient;
use crate::error::SdkError;
use crate::http::AuthMode;
use crate::session::{AuthState, SessionContext};

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a UnblockClient,
}

impl<'a> Auth<'a> {
    /// Build a sign-in message for `params`, valid for four hours.
    pub fn siwe_message(&self, params: &SiweParams) -> Result<SiweMessage, SdkError> {
        Ok(SiweMessage::new(params)?)
    }

    /// Submit a signed SIWE message and store the returned session.
    pub async fn login_with_siwe(
        &self,
        message: &str,
        signature: &str,
    ) -> Result<SessionContext, SdkError> {
        let body = SiweLoginBody {
            message: message.to_string(),
            signature: signature.to_string(),
        };
        let resp: LoginResponse = self
            .client
            .http
            .post("/auth/login", Some(&body), AuthMode::ApiKey)
            .await?;

        let session = SessionContext::new(resp.unblock_session_id, resp.user_uuid);
        self.client.http.session().replace(session.clone()).await;
        Ok(session)
    }

    /// Build a sign-in message, sign it with `signer`, and log in.
    ///
    /// Signer failures surface as [`SdkError::Signing`] and nothing is sent.
    pub async fn login_with_signer(
        &self,
        signer: &dyn MessageSigner,
        params: &SiweParams,
    ) -> Result<SessionContext, SdkError> {
        let message = SiweMessage::new(params)?.to_string();
        let signature = signer
            .sign_message(&message)
            .await
            .map_err(|e| SdkError::Signing(e.to_string()))?;
        self.login_with_siwe(&message, &signature).await
    }

    /// Ask the API to email a one-time code to `user_id`.
    ///
    /// Replaces the session with just this user id, moving it to
    /// [`AuthState::AwaitingVerification`]. Any earlier session id is dropped.
    pub async fn request_email_login(&self, user_id: &str) -> Result<(), SdkError> {
        let body = EmailLoginBody {
            user_uuid: user_id.to_string(),
        };
        let _: serde_json::Value = self
            .client
            .http
            .post("/auth/login", Some(&body), AuthMode::ApiKey)
            .await?;

        self.client
            .http
            .session()
            .replace(SessionContext {
                session_id: None,
                user_id: Some(user_id.to_string()),
            })
            .await;
        Ok(())
    }

    /// Exchange the emailed code for a session id.
    ///
    /// Requires a user id in the session (set by [`Self::request_email_login`]
    /// or [`Self::restore_session`]).
    pub async fn verify_email_code(&self, code: &str) -> Result<SessionContext, SdkError> {
        let user_id = self.client.http.require_user_id().await?;
        let body = OtpBody {
            user_uuid: user_id,
            otp: code.to_string(),
        };
        let resp: OtpResponse = self
            .client
            .http
            .post("/auth/otp", Some(&body), AuthMode::ApiKey)
            .await?;

        self.client
            .http
            .session()
            .set_session_id(resp.unblock_session_id)
            .await;
        Ok(self.client.http.session().snapshot().await)
    }

    /// Seed the session with identifiers obtained earlier.
    pub async fn restore_session(&self, session: SessionContext) {
        self.client.http.session().replace(session).await;
    }

    /// Forget the local session. The API keeps no logout endpoint.
    pub async fn logout(&self) {
        self.client.http.session().clear().await;
    }

    pub async fn session(&self) -> SessionContext {
        self.client.http.session().snapshot().await
    }

    pub async fn state(&self) -> AuthState {
        self.client.http.session().state().await
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state().await == AuthState::Authenticated
    }
}
