//! RANDOM.org Protocol Types
//!
//! Defines the JSON-RPC envelope, per-method parameter records and the
//! result shapes returned by the service. Nothing here performs I/O.

pub mod envelope;
pub mod error;
pub mod extract;
pub mod method;
pub mod params;
pub mod raw;
pub mod result;

pub use envelope::{decode_response, encode_request, RequestEnvelope, ResponseEnvelope};
pub use error::{ErrorRecord, ProtocolError};
pub use extract::{check_range, extract, extract_exact, Element, ElementKind, SignedData};
pub use method::{Method, ResultKind};
pub use params::{
    Authenticated, BlobDecodeError, BlobFormat, Blobs, DecimalFractions, Gaussians, Integers,
    ParamError, Params, Strings, Usage, Uuids, VerifySignature,
};
pub use raw::RawPayload;
pub use result::{
    decode_result, Content, PlainResult, Random, RpcResult, SignedResult, Status,
    VerifiedSignature,
};

/// JSON-RPC version string carried by every envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// Request ID sent with every call. The service does not support batching,
/// so correlation is never needed.
pub const REQUEST_ID: i64 = 1;

/// Content type the service expects on request bodies.
pub const CONTENT_TYPE: &str = "application/json-rpc";

/// Public invoke endpoint of the service.
pub const DEFAULT_ENDPOINT: &str = "https://api.random.org/json-rpc/1/invoke";
