//! [`reqwest`]-backed implementation of [`Transport`].

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use tracing::warn;

use super::{HttpResponse, Transport, TransportError};

/// Blocking HTTP transport for production use.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Create a transport with reqwest's default settings.
    pub fn new() -> Self {
        Self {
            inner: reqwest::blocking::Client::new(),
        }
    }

    /// Create a transport whose requests fail after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            inner: reqwest::blocking::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|err| {
                    warn!(
                        timeout_ms = timeout.as_millis() as u64,
                        error = %err,
                        "cannot apply timeout; falling back to default HTTP client"
                    );
                    reqwest::blocking::Client::new()
                }),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection(err.to_string())
    } else {
        TransportError::Http(err)
    }
}

impl Transport for HttpTransport {
    fn post(
        &self,
        url: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<HttpResponse, TransportError> {
        let resp = self
            .inner
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .map_err(classify)?;

        let status = resp.status().as_u16();
        let body = resp.bytes().map_err(classify)?.to_vec();

        Ok(HttpResponse { status, body })
    }
}
