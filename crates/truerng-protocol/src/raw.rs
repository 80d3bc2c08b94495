//! Byte-preserving JSON payloads.
//!
//! The `random` object of a signed result is what the service's signature
//! covers. It must reach `verifySignature` exactly as it was received: any
//! change in key order, whitespace or number formatting invalidates the
//! signature. [`RawPayload`] keeps the received bytes and is never decoded
//! and re-encoded; typed access goes through [`RawPayload::decode`], which
//! works on a separate copy.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use std::fmt;

/// An immutable JSON document kept exactly as it appeared on the wire.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPayload(Box<RawValue>);

impl RawPayload {
    /// Wrap a JSON document, keeping its bytes verbatim.
    ///
    /// Fails if `json` is not a single valid JSON value.
    pub fn from_json(json: String) -> Result<Self, serde_json::Error> {
        RawValue::from_string(json).map(Self)
    }

    /// The document as received.
    pub fn as_str(&self) -> &str {
        self.0.get()
    }

    /// The document bytes as received.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.get().as_bytes()
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Decode an independent typed copy. The stored bytes are untouched.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(self.0.get())
    }
}

impl From<Box<RawValue>> for RawPayload {
    fn from(raw: Box<RawValue>) -> Self {
        Self(raw)
    }
}

impl Clone for RawPayload {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl PartialEq for RawPayload {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for RawPayload {}

impl fmt::Debug for RawPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPayload").field(&self.as_str()).finish()
    }
}

impl fmt::Display for RawPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Deliberately odd formatting: spacing, key order and an exponent float.
    const ODD: &str = r#"{"serialNumber":7,  "data":[1.0e0, 2,3],"method" : "generateSignedIntegers"}"#;

    #[test]
    fn test_from_json_keeps_bytes() {
        let raw = RawPayload::from_json(ODD.to_string()).unwrap();
        assert_eq!(raw.as_str(), ODD);
        assert_eq!(raw.len(), ODD.len());
    }

    #[test]
    fn test_serialize_is_verbatim() {
        let raw = RawPayload::from_json(ODD.to_string()).unwrap();

        #[derive(Serialize)]
        struct Wrapper<'a> {
            random: &'a RawPayload,
        }
        let out = serde_json::to_string(&Wrapper { random: &raw }).unwrap();
        assert_eq!(out, format!(r#"{{"random":{}}}"#, ODD));
    }

    #[test]
    fn test_nested_deserialize_keeps_bytes() {
        let doc = format!(r#"{{"random":{},"signature":"abc"}}"#, ODD);

        #[derive(Deserialize)]
        struct Outer {
            random: RawPayload,
        }
        let outer: Outer = serde_json::from_str(&doc).unwrap();
        assert_eq!(outer.random.as_str(), ODD);
    }

    #[test]
    fn test_decode_leaves_bytes_intact() {
        let raw = RawPayload::from_json(ODD.to_string()).unwrap();
        let value: serde_json::Value = raw.decode().unwrap();
        assert_eq!(value["serialNumber"], 7);
        assert_eq!(raw.as_str(), ODD);
    }

    #[test]
    fn test_rejects_invalid_json() {
        assert!(RawPayload::from_json("{not json".to_string()).is_err());
    }
}
