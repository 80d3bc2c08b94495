//! Error types for the RPC protocol.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::extract::ElementKind;
use crate::method::ResultKind;

/// Error object carried in the `error` field of a response envelope.
///
/// The service reports a numeric code, a message and optionally a list of
/// values the message refers to (field names, limits, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Service error code, e.g. 400 for a malformed API key.
    #[serde(default)]
    pub code: i64,
    /// Human-readable, single-line message.
    #[serde(default)]
    pub message: String,
    /// Values substituted into the message by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<serde_json::Value>>,
}

impl ErrorRecord {
    /// Create a new error record.
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Attach service data to the record.
    pub fn with_data(mut self, data: Vec<serde_json::Value>) -> Self {
        self.data = Some(data);
        self
    }

    /// An error object with no message means "no error" on the wire.
    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code: {}, Error: {}", self.code, self.message)
    }
}

impl std::error::Error for ErrorRecord {}

/// A response that arrived intact but does not have the shape the requested
/// method guarantees.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("malformed response envelope: {0}")]
    Envelope(#[source] serde_json::Error),

    #[error("response carries neither a result nor an error")]
    MissingResult,

    #[error("expected a {expected} result, decoded a {actual} result")]
    UnexpectedKind {
        expected: ResultKind,
        actual: ResultKind,
    },

    #[error("{kind} result has unexpected shape: {source}")]
    Shape {
        kind: ResultKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("element {index}: expected {expected}, found {found}")]
    ElementKind {
        index: usize,
        expected: ElementKind,
        found: &'static str,
    },

    #[error("expected {expected} elements, service returned {actual}")]
    Count { expected: usize, actual: usize },

    #[error("element {index} ({value}) is outside [{min}, {max}]")]
    OutOfRange {
        index: usize,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("signed result lacks `{0}`")]
    MissingField(&'static str),
}
