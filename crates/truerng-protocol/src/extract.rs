//! Typed extraction of generated values.
//!
//! The service returns `data` as a JSON array. Each operation knows what
//! element type it asked for, so extraction takes that type as a parameter
//! and fails on the first element that does not match.

use serde_json::Value;
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

use crate::error::ProtocolError;
use crate::raw::RawPayload;
use crate::result::SignedResult;

/// Expected element type of a `data` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Integer,
    Float,
    String,
    Uuid,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Integer => write!(f, "integer"),
            ElementKind::Float => write!(f, "float"),
            ElementKind::String => write!(f, "string"),
            ElementKind::Uuid => write!(f, "uuid"),
        }
    }
}

/// A type a `data` element can be narrowed to.
pub trait Element: Sized {
    const KIND: ElementKind;

    /// Narrow one element, or `None` if it has the wrong JSON type.
    fn from_element(value: &Value) -> Option<Self>;
}

// 2^63, exactly representable as f64.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

impl Element for i64 {
    const KIND: ElementKind = ElementKind::Integer;

    // The service sends integral numbers; anything fractional is truncated.
    // Floats beyond the i64 range are rejected rather than saturated.
    fn from_element(value: &Value) -> Option<Self> {
        value.as_i64().or_else(|| {
            value
                .as_f64()
                .map(f64::trunc)
                .filter(|f| *f >= -I64_BOUND && *f < I64_BOUND)
                .map(|f| f as i64)
        })
    }
}

impl Element for f64 {
    const KIND: ElementKind = ElementKind::Float;

    fn from_element(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl Element for String {
    const KIND: ElementKind = ElementKind::String;

    fn from_element(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl Element for Uuid {
    const KIND: ElementKind = ElementKind::Uuid;

    fn from_element(value: &Value) -> Option<Self> {
        value.as_str().and_then(|s| Uuid::parse_str(s).ok())
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Narrow every element of `data` to `T`.
pub fn extract<T: Element>(data: &[Value]) -> Result<Vec<T>, ProtocolError> {
    data.iter()
        .enumerate()
        .map(|(index, value)| {
            T::from_element(value).ok_or_else(|| ProtocolError::ElementKind {
                index,
                expected: T::KIND,
                found: describe(value),
            })
        })
        .collect()
}

/// Like [`extract`], but also require exactly `expected` elements.
pub fn extract_exact<T: Element>(
    data: &[Value],
    expected: usize,
) -> Result<Vec<T>, ProtocolError> {
    if data.len() != expected {
        return Err(ProtocolError::Count {
            expected,
            actual: data.len(),
        });
    }
    extract(data)
}

/// Require every integer to lie within `[min, max]`.
pub fn check_range(values: &[i64], min: i64, max: i64) -> Result<(), ProtocolError> {
    match values.iter().position(|v| *v < min || *v > max) {
        Some(index) => Err(ProtocolError::OutOfRange {
            index,
            value: values[index],
            min,
            max,
        }),
        None => Ok(()),
    }
}

/// Typed view of a signed result.
///
/// `raw` and `signature` are what [`verifySignature`](crate::Method::VerifySignature)
/// needs; the remaining fields come from a separate decode of `raw`.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedData<T> {
    pub data: Vec<T>,
    pub raw: RawPayload,
    pub signature: String,
    pub hashed_api_key: String,
    pub serial_number: i64,
    pub completion_time: String,
    pub bits_used: i64,
    pub bits_left: i64,
    pub requests_left: i64,
    pub advisory_delay: Duration,
}

impl<T: Element> SignedData<T> {
    /// Build from a signed result, expecting `n` elements.
    ///
    /// The signed `random` object must name its `hashedApiKey` and
    /// `serialNumber`.
    pub fn from_signed(result: SignedResult, n: usize) -> Result<Self, ProtocolError> {
        let random = result.decode_random()?;
        let hashed_api_key = random
            .hashed_api_key
            .ok_or(ProtocolError::MissingField("hashedApiKey"))?;
        let serial_number = random
            .serial_number
            .ok_or(ProtocolError::MissingField("serialNumber"))?;
        let data = extract_exact(&random.data, n)?;
        let advisory_delay = result.advisory_delay();

        Ok(Self {
            data,
            raw: result.random,
            signature: result.signature,
            hashed_api_key,
            serial_number,
            completion_time: random.completion_time,
            bits_used: result.bits_used,
            bits_left: result.bits_left,
            requests_left: result.requests_left,
            advisory_delay,
        })
    }
}
