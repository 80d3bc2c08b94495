//! Client error taxonomy.
//!
//! Every failure falls in one of three kinds:
//! - client: the call never produced a usable response (bad parameters,
//!   encoding, transport, non-2xx with an unreadable body)
//! - service: the service answered with an error object
//! - contract: the service answered, but not in the shape the method guarantees

use truerng_protocol::{ErrorRecord, ParamError, ProtocolError};

use crate::transport::TransportError;

/// Code reported for errors that did not come from the service.
pub const CLIENT_ERROR_CODE: i64 = 409;

/// Which side of the call an error is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Client,
    Service,
    Contract,
}

/// Errors returned by every client operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid parameters: {0}")]
    InvalidParams(#[from] ParamError),

    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("HTTP {status} with unreadable body")]
    HttpStatus { status: u16, body: String },

    #[error("Service error {}: {}", .0.code, .0.message)]
    Service(ErrorRecord),

    #[error("Unexpected response: {0}")]
    Contract(#[from] ProtocolError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidParams(_)
            | Error::Encode(_)
            | Error::Transport(_)
            | Error::HttpStatus { .. } => ErrorKind::Client,
            Error::Service(_) => ErrorKind::Service,
            Error::Contract(_) => ErrorKind::Contract,
        }
    }

    /// The service's code for service errors, [`CLIENT_ERROR_CODE`] otherwise.
    pub fn code(&self) -> i64 {
        match self {
            Error::Service(record) => record.code,
            _ => CLIENT_ERROR_CODE,
        }
    }

    /// The service's message for service errors, the display text otherwise.
    pub fn message(&self) -> String {
        match self {
            Error::Service(record) => record.message.clone(),
            other => other.to_string(),
        }
    }

    /// The error as a wire-style record.
    pub fn to_record(&self) -> ErrorRecord {
        match self {
            Error::Service(record) => record.clone(),
            other => ErrorRecord::new(CLIENT_ERROR_CODE, other.to_string()),
        }
    }
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_passes_through() {
        let record =
            ErrorRecord::new(400, "Invalid API key").with_data(vec![serde_json::json!("apiKey")]);
        let err = Error::Service(record.clone());

        assert_eq!(err.kind(), ErrorKind::Service);
        assert_eq!(err.code(), 400);
        assert_eq!(err.message(), "Invalid API key");
        assert_eq!(err.to_record(), record);
    }

    #[test]
    fn test_client_errors_use_synthetic_code() {
        let err = Error::HttpStatus {
            status: 503,
            body: "oops".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Client);
        assert_eq!(err.code(), CLIENT_ERROR_CODE);
        assert_eq!(err.to_record().message, "HTTP 503 with unreadable body");

        let err = Error::Transport(TransportError::Timeout);
        assert_eq!(err.kind(), ErrorKind::Client);
    }

    #[test]
    fn test_contract_kind() {
        let err = Error::from(ProtocolError::MissingResult);
        assert_eq!(err.kind(), ErrorKind::Contract);
        assert_eq!(err.code(), CLIENT_ERROR_CODE);
    }
}
