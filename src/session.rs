//! Session context shared by every sub-client of one [`UnblockClient`].
//!
//! The context holds the `unblock-session-id` and the user id obtained from an
//! authentication flow. Both fields are set independently: the email flow learns
//! the user id first and the session id only after the code is verified.
//!
//! Reads go through [`SessionStore::snapshot`]. Writes are crate-private and
//! only the auth sub-client performs them. Running an authentication call
//! concurrently with session-scoped calls on the same client is the caller's
//! responsibility; the store does not order them.
//!
//! [`UnblockClient`]: crate::client::UnblockClient

use std::sync::Arc;

use async_lock::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::BadRequestError;

/// Identifiers obtained after authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    pub session_id: Option<String>,
    pub user_id: Option<String>,
}

impl SessionContext {
    pub fn new(session_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            session_id: Some(session_id.into()),
            user_id: Some(user_id.into()),
        }
    }

    pub fn state(&self) -> AuthState {
        match (&self.session_id, &self.user_id) {
            (Some(_), _) => AuthState::Authenticated,
            (None, Some(_)) => AuthState::AwaitingVerification,
            (None, None) => AuthState::Unauthenticated,
        }
    }

    pub fn require_session_id(&self) -> Result<&str, BadRequestError> {
        self.session_id
            .as_deref()
            .ok_or(BadRequestError::SessionNotSet("session id"))
    }

    pub fn require_user_id(&self) -> Result<&str, BadRequestError> {
        self.user_id
            .as_deref()
            .ok_or(BadRequestError::SessionNotSet("user id"))
    }
}

/// Where the authentication flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// Nothing known yet.
    Unauthenticated,
    /// Email flow started: user id known, one-time code not verified.
    AwaitingVerification,
    /// Session id present; session-scoped operations are allowed.
    Authenticated,
}

/// Shared handle to the session context.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<SessionContext>>,
}

impl SessionStore {
    pub fn new(initial: SessionContext) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    /// Copy of the current context.
    pub async fn snapshot(&self) -> SessionContext {
        self.inner.read().await.clone()
    }

    pub async fn state(&self) -> AuthState {
        self.inner.read().await.state()
    }

    pub(crate) async fn set_session_id(&self, session_id: impl Into<String>) {
        self.inner.write().await.session_id = Some(session_id.into());
        tracing::debug!("session id updated");
    }

    pub(crate) async fn replace(&self, context: SessionContext) {
        *self.inner.write().await = context;
        tracing::debug!("session context replaced");
    }

    pub(crate) async fn clear(&self) {
        *self.inner.write().await = SessionContext::default();
        tracing::debug!("session context cleared");
    }
}
