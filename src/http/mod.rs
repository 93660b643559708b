//! HTTP layer: `UnblockHttp` request builder over a pluggable [`Transport`].

pub mod client;
pub mod transport;

pub use client::{path_segment, query_string, AuthMode, UnblockHttp};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportFuture};
