//! Shared helpers for integration tests: a recording stub transport and
//! client constructors.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use unblock_sdk::client::UnblockClient;
use unblock_sdk::config::Environment;
use unblock_sdk::error::TransportError;
use unblock_sdk::http::{HttpRequest, HttpResponse, Transport, TransportFuture};
use unblock_sdk::session::SessionContext;

/// Replies with queued outcomes in order and records every request it sees.
#[derive(Default)]
pub struct StubTransport {
    replies: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    calls: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a response with `status` and a JSON body.
    pub fn reply(&self, status: u16, body: serde_json::Value) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(status, body.to_string())));
        self
    }

    pub fn reply_raw(&self, status: u16, body: &str) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub fn fail(&self, error: TransportError) -> &Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<HttpRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> HttpRequest {
        self.calls
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for StubTransport {
    fn send(&self, request: HttpRequest) -> TransportFuture<'_> {
        self.calls.lock().unwrap().push(request);
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no stubbed reply".into())));
        Box::pin(async move { reply })
    }
}

pub const BASE_URL: &str = "https://stub.unblock.test";

pub fn client(stub: &Arc<StubTransport>, session: SessionContext) -> UnblockClient {
    client_in(stub, session, Environment::Sandbox)
}

pub fn client_in(
    stub: &Arc<StubTransport>,
    session: SessionContext,
    environment: Environment,
) -> UnblockClient {
    UnblockClient::builder("test-api-key")
        .environment(environment)
        .base_url(BASE_URL)
        .session(session)
        .transport(stub.clone())
        .build()
        .expect("client should build")
}

pub fn authed(stub: &Arc<StubTransport>) -> UnblockClient {
    client(stub, SessionContext::new("s1", "u1"))
}

pub fn anonymous(stub: &Arc<StubTransport>) -> UnblockClient {
    client(stub, SessionContext::default())
}

pub fn url(path: &str) -> String {
    format!("{}{}", BASE_URL, path)
}
