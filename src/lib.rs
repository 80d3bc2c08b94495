//! truerng - typed client for the RANDOM.org JSON-RPC service
//!
//! Requests integers, decimal fractions, Gaussians, strings, UUIDs and
//! blobs, optionally signed by the service, and verifies those signatures.
//! Wire types live in `truerng-protocol`; this crate adds the transport,
//! the error taxonomy and the per-operation client.

pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod rpc;
pub mod transport;

pub use client::TrueRng;
pub use config::{ClientConfig, ConfigError};
pub use credential::Credential;
pub use error::{Error, ErrorKind, Result, CLIENT_ERROR_CODE};
pub use rpc::RpcClient;
pub use transport::{HttpResponse, HttpTransport, MockTransport, Transport, TransportError};

pub use truerng_protocol as protocol;
pub use truerng_protocol::{
    BlobFormat, Blobs, DecimalFractions, Gaussians, Integers, PlainResult, RawPayload, SignedData,
    Status, Strings, Uuids,
};
