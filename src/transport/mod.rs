//! Transport Layer
//!
//! Abstracts the HTTP POST the client needs so the protocol layer can be
//! exercised without a network. Provides:
//! - Transport trait: send one request body, receive status + body
//! - HttpTransport: reqwest-backed implementation for production
//! - MockTransport: canned responses for tests and offline use

mod http;
mod mock;

pub use http::HttpTransport;
pub use mock::{MockTransport, RecordedRequest};

/// A minimal HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body bytes
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport trait for RPC communication
///
/// Implementations own connection handling, TLS and timeouts. A failure to
/// obtain any response at all is a [`TransportError`]; a response with a
/// non-2xx status is still `Ok`.
pub trait Transport: Send + Sync {
    /// POST `body` to `url` and return the response.
    fn post(
        &self,
        url: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<HttpResponse, TransportError>;
}

/// Transport errors
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
