//! In-process transport returning canned responses.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{HttpResponse, Transport, TransportError};

/// A request seen by [`MockTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// The body parsed as JSON, or `Null` if it is not JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

/// Mock transport for testing
///
/// Queued responses are returned in order. Once the queue is empty the
/// fallback response is returned, if one is set; otherwise the call fails
/// with [`TransportError::Connection`].
#[derive(Debug, Default)]
pub struct MockTransport {
    queue: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    fallback: Mutex<Option<HttpResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport that answers every request with the same response.
    pub fn always(status: u16, body: impl Into<Vec<u8>>) -> Self {
        let transport = Self::new();
        *lock(&transport.fallback) = Some(HttpResponse::new(status, body));
        transport
    }

    /// Queue a response.
    pub fn push_response(&self, status: u16, body: impl Into<Vec<u8>>) -> &Self {
        lock(&self.queue).push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    /// Queue a 200 response carrying `value` as JSON.
    pub fn push_json(&self, value: &serde_json::Value) -> &Self {
        self.push_response(200, value.to_string())
    }

    /// Queue a transport failure.
    pub fn push_error(&self, error: TransportError) -> &Self {
        lock(&self.queue).push_back(Err(error));
        self
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        lock(&self.requests).last().cloned()
    }
}

impl Transport for MockTransport {
    fn post(
        &self,
        url: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<HttpResponse, TransportError> {
        lock(&self.requests).push(RecordedRequest {
            url: url.to_string(),
            content_type: content_type.to_string(),
            body,
        });

        if let Some(next) = lock(&self.queue).pop_front() {
            return next;
        }
        lock(&self.fallback).clone().ok_or_else(|| {
            TransportError::Connection("mock transport has no response queued".to_string())
        })
    }
}
