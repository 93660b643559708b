//! Low-level HTTP client: `UnblockHttp`.
//!
//! Resolves auth headers from the settings and session, builds the request,
//! sends it through the [`Transport`] and classifies the outcome. Sub-clients
//! build paths and wire bodies and call the verb helpers here.

use std::fmt;
use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{Environment, Settings};
use crate::error::{BadRequestError, SdkError, WireBody};
use crate::http::transport::{HttpRequest, Transport};
use crate::session::SessionStore;

pub const HEADER_ACCEPT: &str = "accept";
pub const HEADER_CONTENT_TYPE: &str = "content-type";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_SESSION_ID: &str = "unblock-session-id";
pub const HEADER_USER_UUID: &str = "user-uuid";

const JSON: &str = "application/json";

/// Which identification headers a request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Only `accept` / `content-type`.
    None,
    /// `Authorization: <api key>`.
    ApiKey,
    /// API key plus `unblock-session-id`; fails without a session id.
    Session,
    /// API key plus `user-uuid` when a user id is known, else
    /// `unblock-session-id`; fails when neither is set.
    UserOrSession,
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::ApiKey => "api_key",
            Self::Session => "session",
            Self::UserOrSession => "user_or_session",
        };
        f.write_str(s)
    }
}

/// Low-level HTTP client for the Unblock REST API.
#[derive(Clone)]
pub struct UnblockHttp {
    settings: Arc<Settings>,
    session: SessionStore,
    transport: Arc<dyn Transport>,
}

impl UnblockHttp {
    pub fn new(settings: Settings, session: SessionStore, transport: Arc<dyn Transport>) -> Self {
        Self {
            settings: Arc::new(settings),
            session,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        self.settings.base_url.trim_end_matches('/')
    }

    pub fn environment(&self) -> Environment {
        self.settings.environment
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// User id from the session, required by `/user/{id}/...` paths.
    pub async fn require_user_id(&self) -> Result<String, SdkError> {
        let ctx = self.session.snapshot().await;
        match ctx.user_id {
            Some(id) => Ok(id),
            None => {
                tracing::debug!("rejecting request: session user id not set");
                Err(BadRequestError::SessionNotSet("user id").into())
            }
        }
    }

    /// Header set for `auth`, failing fast when the session lacks what it needs.
    pub async fn resolve_headers(
        &self,
        auth: AuthMode,
        has_body: bool,
    ) -> Result<Vec<(String, String)>, SdkError> {
        let mut headers = vec![(HEADER_ACCEPT.to_string(), JSON.to_string())];
        if has_body {
            headers.push((HEADER_CONTENT_TYPE.to_string(), JSON.to_string()));
        }
        if auth == AuthMode::None {
            return Ok(headers);
        }

        headers.push((
            HEADER_AUTHORIZATION.to_string(),
            self.settings.api_key.clone(),
        ));

        match auth {
            AuthMode::None | AuthMode::ApiKey => {}
            AuthMode::Session => {
                let ctx = self.session.snapshot().await;
                let session_id = ctx.require_session_id()?;
                headers.push((HEADER_SESSION_ID.to_string(), session_id.to_string()));
            }
            AuthMode::UserOrSession => {
                let ctx = self.session.snapshot().await;
                match (ctx.user_id, ctx.session_id) {
                    (Some(user_id), _) => {
                        headers.push((HEADER_USER_UUID.to_string(), user_id));
                    }
                    (None, Some(session_id)) => {
                        headers.push((HEADER_SESSION_ID.to_string(), session_id));
                    }
                    (None, None) => {
                        return Err(BadRequestError::SessionNotSet("user id or session id").into())
                    }
                }
            }
        }

        Ok(headers)
    }

    // ── Verb helpers ─────────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(&self, path: &str, auth: AuthMode) -> Result<T, SdkError> {
        self.execute(Method::GET, path, auth, None).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
        auth: AuthMode,
    ) -> Result<T, SdkError> {
        let body = body.map(serde_json::to_value).transpose()?;
        self.execute(Method::POST, path, auth, body).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        auth: AuthMode,
    ) -> Result<T, SdkError> {
        let body = serde_json::to_value(body)?;
        self.execute(Method::PUT, path, auth, Some(body)).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        auth: AuthMode,
    ) -> Result<T, SdkError> {
        let body = serde_json::to_value(body)?;
        self.execute(Method::PATCH, path, auth, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        auth: AuthMode,
    ) -> Result<T, SdkError> {
        self.execute(Method::DELETE, path, auth, None).await
    }

    // ── Internal ─────────────────────────────────────────────────────────

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        auth: AuthMode,
        body: Option<serde_json::Value>,
    ) -> Result<T, SdkError> {
        let headers = match self.resolve_headers(auth, body.is_some()).await {
            Ok(h) => h,
            Err(e) => {
                tracing::debug!(%method, path, %auth, "rejecting request: {}", e);
                return Err(e);
            }
        };

        let request = HttpRequest {
            method: method.clone(),
            url: format!("{}{}", self.base_url(), path),
            headers,
            body,
        };

        tracing::debug!(%method, path, %auth, "sending request");
        let resp = self.transport.send(request).await?;

        if !resp.is_success() {
            tracing::warn!(%method, path, status = resp.status, "request failed");
            return Err(SdkError::Api {
                status: resp.status,
                body: WireBody::from_text(&resp.body),
            });
        }

        let text = if resp.body.trim().is_empty() {
            "null"
        } else {
            resp.body.as_str()
        };
        serde_json::from_str(text).map_err(|e| {
            SdkError::Unexpected(format!("failed to decode response from {}: {}", path, e))
        })
    }
}

/// Percent-encode an id for use as one path segment, so `/` or `?` in the
/// id cannot change the route.
pub fn path_segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// Build a `?k=v&...` query string with percent-encoded values.
pub fn query_string(params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect();
    format!("?{}", pairs.join("&"))
}
