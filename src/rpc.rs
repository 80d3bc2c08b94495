//! RPC Dispatcher
//!
//! Sends one request envelope and decodes the answer into the result
//! shape the method prescribes. Knows nothing about individual operations.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};
use truerng_protocol::{
    decode_response, decode_result, encode_request, ErrorRecord, Method, RpcResult, CONTENT_TYPE,
};

use crate::error::{Error, Result};
use crate::transport::{HttpResponse, Transport};

/// Generic request/response cycle over a [`Transport`].
#[derive(Clone)]
pub struct RpcClient {
    transport: Arc<dyn Transport>,
    endpoint: String,
}

impl RpcClient {
    pub fn new(transport: Arc<dyn Transport>, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Invoke `method` with an already complete parameter record.
    ///
    /// `params` goes on the wire as-is; callers add the API key where the
    /// method needs one.
    pub fn call<P: Serialize>(&self, method: Method, params: &P) -> Result<RpcResult> {
        let body = encode_request(method, params).map_err(Error::Encode)?;
        debug!(%method, request_bytes = body.len(), "sending request");

        let response = self.transport.post(&self.endpoint, CONTENT_TYPE, body)?;
        debug!(
            %method,
            status = response.status,
            response_bytes = response.body.len(),
            "received response"
        );

        if !response.is_success() {
            let err = status_error(response);
            warn!(%method, error = %err, "request rejected");
            return Err(err);
        }

        let envelope = decode_response(&response.body)?;
        let raw = match envelope.into_outcome()? {
            Ok(raw) => raw,
            Err(record) => {
                warn!(
                    %method,
                    code = record.code,
                    message = %record.message,
                    "service returned an error"
                );
                return Err(Error::Service(record));
            }
        };

        Ok(decode_result(method.result_kind(), &raw)?)
    }
}

/// Map a non-2xx response to an error.
///
/// The body may hold a full envelope or a bare error object; when neither
/// yields a message the status itself is reported.
fn status_error(response: HttpResponse) -> Error {
    if let Ok(envelope) = decode_response(&response.body) {
        if let Some(record) = envelope.service_error() {
            return Error::Service(record.clone());
        }
    }
    if let Ok(record) = serde_json::from_slice::<ErrorRecord>(&response.body) {
        if !record.is_empty() {
            return Error::Service(record);
        }
    }
    Error::HttpStatus {
        status: response.status,
        body: String::from_utf8_lossy(&response.body).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::transport::MockTransport;
    use serde_json::json;
    use truerng_protocol::{Content, ResultKind, Usage};

    fn client(transport: MockTransport) -> (RpcClient, Arc<MockTransport>) {
        let transport = Arc::new(transport);
        (RpcClient::new(transport.clone(), "https://example.test/invoke"), transport)
    }

    fn status_body() -> serde_json::Value {
        json!({
            "jsonrpc": "2.0",
            "result": {
                "status": "running", "creationTime": "2013-02-01 17:53:40Z",
                "bitsLeft": 100, "requestsLeft": 10, "totalBits": 5, "totalRequests": 2
            },
            "id": 1
        })
    }

    #[test]
    fn test_call_posts_envelope() {
        let (rpc, transport) = client(MockTransport::new());
        transport.push_json(&status_body());

        let result = rpc.call(Method::GetUsage, &Usage::default()).unwrap();
        assert_eq!(result.kind(), ResultKind::Status);
        assert!(matches!(result.content(), Content::Status(s) if s.bits_left == 100));

        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "https://example.test/invoke");
        assert_eq!(request.content_type, "application/json-rpc");
        assert_eq!(request.json()["method"], "getUsage");
        assert_eq!(request.json()["id"], 1);
    }

    #[test]
    fn test_non_2xx_with_envelope_error() {
        let body = json!({
            "jsonrpc": "2.0",
            "error": {"code": 401, "message": "Unauthorized"},
            "id": 1
        });
        let (rpc, _) = client(MockTransport::always(401, body.to_string()));

        let err = rpc.call(Method::GetUsage, &Usage::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Service);
        assert_eq!(err.code(), 401);
    }

    #[test]
    fn test_non_2xx_with_bare_error_record() {
        let transport = MockTransport::always(429, r#"{"code":402,"message":"Quota exceeded"}"#);
        let (rpc, _) = client(transport);

        let err = rpc.call(Method::GetUsage, &Usage::default()).unwrap_err();
        assert_eq!(err.message(), "Quota exceeded");
    }

    #[test]
    fn test_non_2xx_unreadable_body() {
        let (rpc, _) = client(MockTransport::always(503, "Service Unavailable"));

        let err = rpc.call(Method::GetUsage, &Usage::default()).unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
        assert_eq!(err.kind(), ErrorKind::Client);
    }

    #[test]
    fn test_malformed_200_is_contract_violation() {
        let (rpc, _) = client(MockTransport::always(200, "not json"));

        let err = rpc.call(Method::GetUsage, &Usage::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Contract);
    }

    #[test]
    fn test_transport_failure() {
        let (rpc, _) = client(MockTransport::new());

        let err = rpc.call(Method::GetUsage, &Usage::default()).unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }
}
