//! Result shapes of the `result` field.
//!
//! Four shapes exist. Which one applies is decided by the method that was
//! called ([`ResultKind`]), never by sniffing the payload.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::Value;
use std::time::Duration;

use crate::error::ProtocolError;
use crate::method::ResultKind;
use crate::raw::RawPayload;

/// Timestamp layout used by the service, e.g. `2011-10-10 13:19:12Z`.
const SERVICE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn parse_service_time(s: &str) -> Option<DateTime<Utc>> {
    let trimmed = s.trim_end_matches('Z');
    NaiveDateTime::parse_from_str(trimmed, SERVICE_TIME_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// The `random` object: the generated values plus provenance fields.
///
/// `serialNumber` and `hashedApiKey` only appear in signed results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Random {
    pub data: Vec<Value>,
    pub completion_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashed_api_key: Option<String>,
}

impl Random {
    /// `completionTime` as a UTC timestamp, if it parses.
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        parse_service_time(&self.completion_time)
    }
}

/// Result of a plain `generate*` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlainResult {
    pub random: Random,
    pub bits_used: i64,
    pub bits_left: i64,
    pub requests_left: i64,
    /// Milliseconds the service asks the caller to wait before the next call.
    pub advisory_delay: u64,
}

impl PlainResult {
    pub fn advisory_delay(&self) -> Duration {
        Duration::from_millis(self.advisory_delay)
    }
}

/// Result of a `generateSigned*` call.
///
/// `random` is kept byte-for-byte; see [`RawPayload`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedResult {
    pub random: RawPayload,
    pub signature: String,
    pub bits_used: i64,
    pub bits_left: i64,
    pub requests_left: i64,
    pub advisory_delay: u64,
}

impl SignedResult {
    pub fn advisory_delay(&self) -> Duration {
        Duration::from_millis(self.advisory_delay)
    }

    /// Decode a separate copy of the signed `random` object.
    pub fn decode_random(&self) -> Result<Random, ProtocolError> {
        self.random.decode().map_err(|source| ProtocolError::Shape {
            kind: ResultKind::Signed,
            source,
        })
    }
}

/// Result of `getUsage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    /// `running`, `stopped` or `paused`
    pub status: String,
    pub creation_time: String,
    pub bits_left: i64,
    pub requests_left: i64,
    pub total_bits: i64,
    pub total_requests: i64,
}

impl Status {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_service_time(&self.creation_time)
    }

    pub fn is_running(&self) -> bool {
        self.status == "running"
    }
}

/// Result of `verifySignature`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedSignature {
    #[serde(rename = "authenticity")]
    pub authentic: bool,
}

/// A decoded `result` field.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcResult {
    Plain(PlainResult),
    Signed(SignedResult),
    Status(Status),
    Verification(VerifiedSignature),
}

/// Uniform view of the payload a result carries.
///
/// Plain results expose their data array; the other shapes expose
/// themselves so signed consumers keep the signature and raw bytes together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Content<'a> {
    Data(&'a [Value]),
    Signed(&'a SignedResult),
    Status(&'a Status),
    Verification(&'a VerifiedSignature),
}

impl RpcResult {
    pub fn kind(&self) -> ResultKind {
        match self {
            RpcResult::Plain(_) => ResultKind::Plain,
            RpcResult::Signed(_) => ResultKind::Signed,
            RpcResult::Status(_) => ResultKind::Status,
            RpcResult::Verification(_) => ResultKind::Verification,
        }
    }

    pub fn content(&self) -> Content<'_> {
        match self {
            RpcResult::Plain(r) => Content::Data(&r.random.data),
            RpcResult::Signed(r) => Content::Signed(r),
            RpcResult::Status(s) => Content::Status(s),
            RpcResult::Verification(v) => Content::Verification(v),
        }
    }

    pub fn into_plain(self) -> Option<PlainResult> {
        match self {
            RpcResult::Plain(r) => Some(r),
            _ => None,
        }
    }

    pub fn into_signed(self) -> Option<SignedResult> {
        match self {
            RpcResult::Signed(r) => Some(r),
            _ => None,
        }
    }

    pub fn into_status(self) -> Option<Status> {
        match self {
            RpcResult::Status(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_verification(self) -> Option<VerifiedSignature> {
        match self {
            RpcResult::Verification(v) => Some(v),
            _ => None,
        }
    }
}

/// Decode a raw `result` document as the shape `kind` prescribes.
pub fn decode_result(kind: ResultKind, raw: &RawValue) -> Result<RpcResult, ProtocolError> {
    let json = raw.get();
    let shape = |source| ProtocolError::Shape { kind, source };

    Ok(match kind {
        ResultKind::Plain => RpcResult::Plain(serde_json::from_str(json).map_err(shape)?),
        ResultKind::Signed => RpcResult::Signed(serde_json::from_str(json).map_err(shape)?),
        ResultKind::Status => RpcResult::Status(serde_json::from_str(json).map_err(shape)?),
        ResultKind::Verification => {
            RpcResult::Verification(serde_json::from_str(json).map_err(shape)?)
        }
    })
}
