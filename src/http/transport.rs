//! Transport seam: the only place a request leaves the process.
//!
//! [`UnblockHttp`](super::UnblockHttp) hands a fully built [`HttpRequest`] to a
//! [`Transport`] and gets back either a status + body or a [`TransportError`].
//! Anything with a status is classified by the caller; the transport never
//! interprets status codes and never retries.

use std::future::Future;
use std::pin::Pin;

use reqwest::{Client, Method};

use crate::config::Settings;
use crate::error::{SdkError, TransportError};

/// A request ready to send: absolute URL, headers, optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Value of the first header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<HttpResponse, TransportError>> + Send + 'a>>;

/// Sends one HTTP request.
///
/// Implement this to route requests through a custom client or a test double.
pub trait Transport: Send + Sync {
    fn send(&self, request: HttpRequest) -> TransportFuture<'_>;
}

/// Default transport backed by `reqwest`, pinned to the configured timeout.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(settings: &Settings) -> Result<Self, SdkError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| SdkError::Unexpected(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: HttpRequest) -> TransportFuture<'_> {
        Box::pin(async move {
            let mut req = self.client.request(request.method, &request.url);
            for (name, value) in &request.headers {
                req = req.header(name.as_str(), value.as_str());
            }
            if let Some(body) = &request.body {
                req = req.json(body);
            }

            let resp = req.send().await?;
            let status = resp.status().as_u16();
            let body = resp.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}
