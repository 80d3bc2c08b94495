//! Per-method parameter records.
//!
//! Each record carries exactly the fields its method accepts, under the
//! service's wire names. The API key is not part of the records; it is
//! added by [`Authenticated`] when the request is built.

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::method::Method;
use crate::raw::RawPayload;

/// A parameter value the service would reject.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for '{field}': {reason}")]
pub struct ParamError {
    /// Wire name of the offending field.
    pub field: &'static str,
    pub reason: String,
}

impl ParamError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// A parameter record for one method.
pub trait Params: Serialize {
    /// Method the record belongs to. Generators also serve their signed
    /// counterpart via [`Method::signed`].
    const METHOD: Method;

    /// Check the record before anything is sent.
    fn validate(&self) -> Result<(), ParamError>;
}

/// A parameter record with the caller's API key prepended.
#[derive(Debug, Clone, Serialize)]
pub struct Authenticated<'a, P> {
    #[serde(rename = "apiKey")]
    pub api_key: &'a str,
    #[serde(flatten)]
    pub params: P,
}

impl<'a, P: Serialize> Authenticated<'a, P> {
    pub fn new(api_key: &'a str, params: P) -> Self {
        Self { api_key, params }
    }
}

fn require_count(n: u32) -> Result<(), ParamError> {
    if n == 0 {
        return Err(ParamError::new("n", "must be at least 1"));
    }
    Ok(())
}

fn default_replacement() -> bool {
    true
}

/// `generateIntegers` / `generateSignedIntegers`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integers {
    pub n: u32,
    pub min: i64,
    pub max: i64,
    /// Sent explicitly; the service defaults to `true` when omitted.
    #[serde(default = "default_replacement")]
    pub replacement: bool,
}

impl Integers {
    pub fn new(n: u32, min: i64, max: i64) -> Self {
        Self {
            n,
            min,
            max,
            replacement: true,
        }
    }

    pub fn with_replacement(mut self, replacement: bool) -> Self {
        self.replacement = replacement;
        self
    }
}

impl Params for Integers {
    const METHOD: Method = Method::GenerateIntegers;

    fn validate(&self) -> Result<(), ParamError> {
        require_count(self.n)?;
        if self.min > self.max {
            return Err(ParamError::new(
                "min",
                format!("{} is greater than max {}", self.min, self.max),
            ));
        }
        Ok(())
    }
}

/// `generateDecimalFractions` / `generateSignedDecimalFractions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecimalFractions {
    pub n: u32,
    pub decimal_places: u32,
    #[serde(default = "default_replacement")]
    pub replacement: bool,
}

impl DecimalFractions {
    pub fn new(n: u32, decimal_places: u32) -> Self {
        Self {
            n,
            decimal_places,
            replacement: true,
        }
    }

    pub fn with_replacement(mut self, replacement: bool) -> Self {
        self.replacement = replacement;
        self
    }
}

impl Params for DecimalFractions {
    const METHOD: Method = Method::GenerateDecimalFractions;

    fn validate(&self) -> Result<(), ParamError> {
        require_count(self.n)?;
        if self.decimal_places == 0 {
            return Err(ParamError::new("decimalPlaces", "must be at least 1"));
        }
        Ok(())
    }
}

/// `generateGaussians` / `generateSignedGaussians`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gaussians {
    pub n: u32,
    pub mean: f64,
    pub standard_deviation: f64,
    pub significant_digits: u32,
}

impl Gaussians {
    pub fn new(n: u32, mean: f64, standard_deviation: f64, significant_digits: u32) -> Self {
        Self {
            n,
            mean,
            standard_deviation,
            significant_digits,
        }
    }
}

impl Params for Gaussians {
    const METHOD: Method = Method::GenerateGaussians;

    fn validate(&self) -> Result<(), ParamError> {
        require_count(self.n)?;
        if !self.mean.is_finite() {
            return Err(ParamError::new("mean", "must be a finite number"));
        }
        if !self.standard_deviation.is_finite() || self.standard_deviation < 0.0 {
            return Err(ParamError::new(
                "standardDeviation",
                "must be a finite, non-negative number",
            ));
        }
        if self.significant_digits == 0 {
            return Err(ParamError::new("significantDigits", "must be at least 1"));
        }
        Ok(())
    }
}

/// `generateStrings` / `generateSignedStrings`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strings {
    pub n: u32,
    pub length: u32,
    /// Alphabet the service draws characters from.
    pub characters: String,
    #[serde(default = "default_replacement")]
    pub replacement: bool,
}

impl Strings {
    pub fn new(n: u32, length: u32, characters: impl Into<String>) -> Self {
        Self {
            n,
            length,
            characters: characters.into(),
            replacement: true,
        }
    }

    pub fn with_replacement(mut self, replacement: bool) -> Self {
        self.replacement = replacement;
        self
    }
}

impl Params for Strings {
    const METHOD: Method = Method::GenerateStrings;

    fn validate(&self) -> Result<(), ParamError> {
        require_count(self.n)?;
        if self.length == 0 {
            return Err(ParamError::new("length", "must be at least 1"));
        }
        if self.characters.is_empty() {
            return Err(ParamError::new("characters", "must not be empty"));
        }
        Ok(())
    }
}

/// `generateUUIDs` / `generateSignedUUIDs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uuids {
    pub n: u32,
}

impl Uuids {
    pub fn new(n: u32) -> Self {
        Self { n }
    }
}

impl Params for Uuids {
    const METHOD: Method = Method::GenerateUuids;

    fn validate(&self) -> Result<(), ParamError> {
        require_count(self.n)
    }
}

/// Encoding of returned blobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlobFormat {
    #[default]
    Base64,
    Hex,
}

/// A returned blob that is not valid in its declared format.
#[derive(Debug, thiserror::Error)]
pub enum BlobDecodeError {
    #[error("invalid base64 blob: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid hex blob: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl BlobFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlobFormat::Base64 => "base64",
            BlobFormat::Hex => "hex",
        }
    }

    /// Turn a blob returned in this format into its bytes.
    pub fn decode(&self, blob: &str) -> Result<Vec<u8>, BlobDecodeError> {
        match self {
            BlobFormat::Base64 => Ok(base64::engine::general_purpose::STANDARD.decode(blob)?),
            BlobFormat::Hex => Ok(hex::decode(blob)?),
        }
    }
}

impl std::str::FromStr for BlobFormat {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base64" => Ok(BlobFormat::Base64),
            "hex" => Ok(BlobFormat::Hex),
            other => Err(ParamError::new(
                "format",
                format!("'{}' is not one of base64, hex", other),
            )),
        }
    }
}

/// `generateBlobs` / `generateSignedBlobs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blobs {
    pub n: u32,
    /// Blob size in bits.
    pub size: u32,
    #[serde(default)]
    pub format: BlobFormat,
}

impl Blobs {
    pub fn new(n: u32, size: u32) -> Self {
        Self {
            n,
            size,
            format: BlobFormat::default(),
        }
    }

    pub fn with_format(mut self, format: BlobFormat) -> Self {
        self.format = format;
        self
    }
}

impl Params for Blobs {
    const METHOD: Method = Method::GenerateBlobs;

    fn validate(&self) -> Result<(), ParamError> {
        require_count(self.n)?;
        if self.size == 0 || self.size % 8 != 0 {
            return Err(ParamError::new(
                "size",
                format!("{} is not a positive multiple of 8", self.size),
            ));
        }
        Ok(())
    }
}

/// `getUsage` takes nothing but the API key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {}

impl Params for Usage {
    const METHOD: Method = Method::GetUsage;

    fn validate(&self) -> Result<(), ParamError> {
        Ok(())
    }
}

/// `verifySignature`. Sent without an API key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifySignature {
    /// The signed `random` object, exactly as the service returned it.
    pub random: RawPayload,
    pub signature: String,
}

impl VerifySignature {
    pub fn new(random: RawPayload, signature: impl Into<String>) -> Self {
        Self {
            random,
            signature: signature.into(),
        }
    }
}

impl Params for VerifySignature {
    const METHOD: Method = Method::VerifySignature;

    fn validate(&self) -> Result<(), ParamError> {
        if self.random.is_empty() {
            return Err(ParamError::new("random", "must not be empty"));
        }
        if self.signature.is_empty() {
            return Err(ParamError::new("signature", "must not be empty"));
        }
        Ok(())
    }
}
