//! JSON-RPC Envelope Types
//!
//! Request: `{jsonrpc: "2.0", method, params, id}` POSTed to the invoke
//! endpoint. Response: `{jsonrpc, result | error, id}`.
//!
//! The inner `result` is kept undecoded here. Its shape depends on which
//! method was called, so decoding waits until the caller supplies the
//! [`ResultKind`](crate::method::ResultKind).

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::error::{ErrorRecord, ProtocolError};
use crate::method::Method;
use crate::{JSONRPC_VERSION, REQUEST_ID};

/// Request envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEnvelope<P> {
    /// Always "2.0"
    pub jsonrpc: String,

    /// Method to invoke
    pub method: Method,

    /// Method-specific parameter record
    pub params: P,

    /// Constant request ID
    pub id: i64,
}

impl<P> RequestEnvelope<P> {
    /// Wrap `params` for `method`.
    pub fn new(method: Method, params: P) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method,
            params,
            id: REQUEST_ID,
        }
    }
}

/// Response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Protocol version echoed by the service
    #[serde(default)]
    pub jsonrpc: String,

    /// Method-dependent result document, undecoded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Box<RawValue>>,

    /// Error details (present in lieu of `result`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorRecord>,

    /// Echoed request ID
    #[serde(default)]
    pub id: Option<i64>,
}

impl ResponseEnvelope {
    /// Split the envelope into either the raw result or the service error.
    ///
    /// An `error` object with an empty message counts as absent.
    pub fn into_outcome(self) -> Result<Result<Box<RawValue>, ErrorRecord>, ProtocolError> {
        match (self.error, self.result) {
            (Some(error), _) if !error.is_empty() => Ok(Err(error)),
            (_, Some(result)) => Ok(Ok(result)),
            _ => Err(ProtocolError::MissingResult),
        }
    }

    /// Returns the service error if the envelope carries a non-empty one.
    pub fn service_error(&self) -> Option<&ErrorRecord> {
        self.error.as_ref().filter(|e| !e.is_empty())
    }
}

/// Serialize a request envelope for `method`.
pub fn encode_request<P: Serialize>(
    method: Method,
    params: &P,
) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&RequestEnvelope::new(method, params))
}

/// Parse a response envelope. The inner result is left undecoded.
pub fn decode_response(bytes: &[u8]) -> Result<ResponseEnvelope, ProtocolError> {
    serde_json::from_slice(bytes).map_err(ProtocolError::Envelope)
}
