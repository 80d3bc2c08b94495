//! Public client
//!
//! One method per service capability. Each call validates its parameters,
//! adds the API key, dispatches through [`RpcClient`] and narrows the
//! result to the element type the operation returns.

use std::sync::Arc;

use tracing::debug;
use truerng_protocol::{
    check_range, extract_exact, Authenticated, Blobs, DecimalFractions, Element, Gaussians,
    Integers, Method, Params, PlainResult, ProtocolError, RawPayload, ResultKind, RpcResult,
    SignedData, SignedResult, Status, Strings, Usage, Uuids, VerifySignature, DEFAULT_ENDPOINT,
};
use uuid::Uuid;

use crate::config::{ClientConfig, ConfigError};
use crate::credential::Credential;
use crate::error::Result;
use crate::rpc::RpcClient;
use crate::transport::{HttpTransport, Transport};

/// Client for the randomness service.
///
/// Cheap to clone and safe to share between threads; calls are
/// independent request/response cycles.
#[derive(Clone)]
pub struct TrueRng {
    credential: Credential,
    rpc: RpcClient,
}

impl TrueRng {
    /// Create a client talking to the public endpoint through `transport`.
    pub fn new(credential: Credential, transport: Arc<dyn Transport>) -> Self {
        Self::with_endpoint(credential, transport, DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(
        credential: Credential,
        transport: Arc<dyn Transport>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            credential,
            rpc: RpcClient::new(transport, endpoint),
        }
    }

    /// Create an HTTP client from resolved configuration.
    pub fn from_config(config: &ClientConfig) -> std::result::Result<Self, ConfigError> {
        let credential = config.credential()?;
        let transport = Arc::new(HttpTransport::with_timeout(config.timeout()));
        Ok(Self::with_endpoint(credential, transport, config.endpoint.clone()))
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn endpoint(&self) -> &str {
        self.rpc.endpoint()
    }

    fn call<P: Params>(&self, method: Method, params: &P) -> Result<RpcResult> {
        params.validate()?;
        self.rpc.call(method, &Authenticated::new(self.credential.expose(), params))
    }

    fn plain<P: Params>(&self, params: &P) -> Result<PlainResult> {
        match self.call(P::METHOD, params)? {
            RpcResult::Plain(result) => {
                debug!(
                    method = %P::METHOD,
                    bits_left = result.bits_left,
                    requests_left = result.requests_left,
                    advisory_delay_ms = result.advisory_delay,
                    "plain result"
                );
                Ok(result)
            }
            other => Err(unexpected(ResultKind::Plain, &other)),
        }
    }

    fn signed<P: Params>(&self, params: &P) -> Result<SignedResult> {
        let method = P::METHOD.signed();
        match self.call(method, params)? {
            RpcResult::Signed(result) => {
                debug!(
                    %method,
                    bits_left = result.bits_left,
                    requests_left = result.requests_left,
                    advisory_delay_ms = result.advisory_delay,
                    "signed result"
                );
                Ok(result)
            }
            other => Err(unexpected(ResultKind::Signed, &other)),
        }
    }

    fn generate<P: Params, T: Element>(&self, params: &P, n: u32) -> Result<Vec<T>> {
        let result = self.plain(params)?;
        Ok(extract_exact(&result.random.data, n as usize)?)
    }

    fn generate_signed<P: Params, T: Element>(&self, params: &P, n: u32) -> Result<SignedData<T>> {
        let result = self.signed(params)?;
        Ok(SignedData::from_signed(result, n as usize)?)
    }

    // === Plain generators ===

    /// `n` integers in `[min, max]`.
    pub fn generate_integers(&self, params: &Integers) -> Result<Vec<i64>> {
        let data: Vec<i64> = self.generate(params, params.n)?;
        check_range(&data, params.min, params.max)?;
        Ok(data)
    }

    /// `n` fractions in `[0, 1)` with `decimal_places` digits.
    pub fn generate_decimal_fractions(&self, params: &DecimalFractions) -> Result<Vec<f64>> {
        self.generate(params, params.n)
    }

    pub fn generate_gaussians(&self, params: &Gaussians) -> Result<Vec<f64>> {
        self.generate(params, params.n)
    }

    pub fn generate_strings(&self, params: &Strings) -> Result<Vec<String>> {
        self.generate(params, params.n)
    }

    pub fn generate_uuids(&self, params: &Uuids) -> Result<Vec<Uuid>> {
        self.generate(params, params.n)
    }

    /// Blobs encoded as `params.format`.
    ///
    /// See [`BlobFormat::decode`](truerng_protocol::BlobFormat::decode).
    pub fn generate_blobs(&self, params: &Blobs) -> Result<Vec<String>> {
        self.generate(params, params.n)
    }

    // === Undecoded plain results ===

    pub fn generate_integers_raw(&self, params: &Integers) -> Result<PlainResult> {
        self.plain(params)
    }

    pub fn generate_decimal_fractions_raw(&self, params: &DecimalFractions) -> Result<PlainResult> {
        self.plain(params)
    }

    pub fn generate_gaussians_raw(&self, params: &Gaussians) -> Result<PlainResult> {
        self.plain(params)
    }

    pub fn generate_strings_raw(&self, params: &Strings) -> Result<PlainResult> {
        self.plain(params)
    }

    pub fn generate_uuids_raw(&self, params: &Uuids) -> Result<PlainResult> {
        self.plain(params)
    }

    pub fn generate_blobs_raw(&self, params: &Blobs) -> Result<PlainResult> {
        self.plain(params)
    }

    // === Signed generators ===

    pub fn generate_signed_integers(&self, params: &Integers) -> Result<SignedData<i64>> {
        let signed: SignedData<i64> = self.generate_signed(params, params.n)?;
        check_range(&signed.data, params.min, params.max)?;
        Ok(signed)
    }

    pub fn generate_signed_decimal_fractions(
        &self,
        params: &DecimalFractions,
    ) -> Result<SignedData<f64>> {
        self.generate_signed(params, params.n)
    }

    pub fn generate_signed_gaussians(&self, params: &Gaussians) -> Result<SignedData<f64>> {
        self.generate_signed(params, params.n)
    }

    pub fn generate_signed_strings(&self, params: &Strings) -> Result<SignedData<String>> {
        self.generate_signed(params, params.n)
    }

    pub fn generate_signed_uuids(&self, params: &Uuids) -> Result<SignedData<Uuid>> {
        self.generate_signed(params, params.n)
    }

    pub fn generate_signed_blobs(&self, params: &Blobs) -> Result<SignedData<String>> {
        self.generate_signed(params, params.n)
    }

    // === Account and verification ===

    /// Current quota of the API key.
    pub fn get_usage(&self) -> Result<Status> {
        match self.call(Method::GetUsage, &Usage::default())? {
            RpcResult::Status(status) => Ok(status),
            other => Err(unexpected(ResultKind::Status, &other)),
        }
    }

    /// Ask the service whether `signature` covers `random`.
    ///
    /// `random` is sent exactly as it was received. No API key is attached.
    pub fn verify_signature(&self, random: &RawPayload, signature: &str) -> Result<bool> {
        let params = VerifySignature::new(random.clone(), signature);
        params.validate()?;
        match self.rpc.call(Method::VerifySignature, &params)? {
            RpcResult::Verification(verified) => Ok(verified.authentic),
            other => Err(unexpected(ResultKind::Verification, &other)),
        }
    }

    /// [`verify_signature`](Self::verify_signature) for a signed result.
    pub fn verify<T>(&self, signed: &SignedData<T>) -> Result<bool> {
        self.verify_signature(&signed.raw, &signed.signature)
    }
}

fn unexpected(expected: ResultKind, actual: &RpcResult) -> crate::error::Error {
    ProtocolError::UnexpectedKind {
        expected,
        actual: actual.kind(),
    }
    .into()
}
