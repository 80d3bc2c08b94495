//! Wire method names and the result shape each one produces.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Methods understood by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    #[serde(rename = "generateIntegers")]
    GenerateIntegers,
    #[serde(rename = "generateDecimalFractions")]
    GenerateDecimalFractions,
    #[serde(rename = "generateGaussians")]
    GenerateGaussians,
    #[serde(rename = "generateStrings")]
    GenerateStrings,
    #[serde(rename = "generateUUIDs")]
    GenerateUuids,
    #[serde(rename = "generateBlobs")]
    GenerateBlobs,
    #[serde(rename = "generateSignedIntegers")]
    GenerateSignedIntegers,
    #[serde(rename = "generateSignedDecimalFractions")]
    GenerateSignedDecimalFractions,
    #[serde(rename = "generateSignedGaussians")]
    GenerateSignedGaussians,
    #[serde(rename = "generateSignedStrings")]
    GenerateSignedStrings,
    #[serde(rename = "generateSignedUUIDs")]
    GenerateSignedUuids,
    #[serde(rename = "generateSignedBlobs")]
    GenerateSignedBlobs,
    #[serde(rename = "getUsage")]
    GetUsage,
    #[serde(rename = "verifySignature")]
    VerifySignature,
}

/// The inner `result` shape a method answers with.
///
/// The shape is a property of the request, not of the payload, so the
/// decoder is always told which one to expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    /// `{random: {data, ...}, bitsUsed, ...}`
    Plain,
    /// `{random: <raw>, signature, bitsUsed, ...}`
    Signed,
    /// `{status, creationTime, ...}` from `getUsage`
    Status,
    /// `{authenticity}` from `verifySignature`
    Verification,
}

impl Method {
    /// Every method, plain generators first.
    pub const ALL: [Method; 14] = [
        Method::GenerateIntegers,
        Method::GenerateDecimalFractions,
        Method::GenerateGaussians,
        Method::GenerateStrings,
        Method::GenerateUuids,
        Method::GenerateBlobs,
        Method::GenerateSignedIntegers,
        Method::GenerateSignedDecimalFractions,
        Method::GenerateSignedGaussians,
        Method::GenerateSignedStrings,
        Method::GenerateSignedUuids,
        Method::GenerateSignedBlobs,
        Method::GetUsage,
        Method::VerifySignature,
    ];

    /// Returns the method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GenerateIntegers => "generateIntegers",
            Method::GenerateDecimalFractions => "generateDecimalFractions",
            Method::GenerateGaussians => "generateGaussians",
            Method::GenerateStrings => "generateStrings",
            Method::GenerateUuids => "generateUUIDs",
            Method::GenerateBlobs => "generateBlobs",
            Method::GenerateSignedIntegers => "generateSignedIntegers",
            Method::GenerateSignedDecimalFractions => "generateSignedDecimalFractions",
            Method::GenerateSignedGaussians => "generateSignedGaussians",
            Method::GenerateSignedStrings => "generateSignedStrings",
            Method::GenerateSignedUuids => "generateSignedUUIDs",
            Method::GenerateSignedBlobs => "generateSignedBlobs",
            Method::GetUsage => "getUsage",
            Method::VerifySignature => "verifySignature",
        }
    }

    /// Which result shape the service answers this method with.
    pub fn result_kind(&self) -> ResultKind {
        match self {
            Method::GetUsage => ResultKind::Status,
            Method::VerifySignature => ResultKind::Verification,
            Method::GenerateSignedIntegers
            | Method::GenerateSignedDecimalFractions
            | Method::GenerateSignedGaussians
            | Method::GenerateSignedStrings
            | Method::GenerateSignedUuids
            | Method::GenerateSignedBlobs => ResultKind::Signed,
            _ => ResultKind::Plain,
        }
    }

    /// Returns true for the `generateSigned*` family.
    pub fn is_signed(&self) -> bool {
        self.result_kind() == ResultKind::Signed
    }

    /// Signed counterpart of a plain generator. Other methods map to themselves.
    pub fn signed(self) -> Method {
        match self {
            Method::GenerateIntegers => Method::GenerateSignedIntegers,
            Method::GenerateDecimalFractions => Method::GenerateSignedDecimalFractions,
            Method::GenerateGaussians => Method::GenerateSignedGaussians,
            Method::GenerateStrings => Method::GenerateSignedStrings,
            Method::GenerateUuids => Method::GenerateSignedUuids,
            Method::GenerateBlobs => Method::GenerateSignedBlobs,
            other => other,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultKind::Plain => write!(f, "plain"),
            ResultKind::Signed => write!(f, "signed"),
            ResultKind::Status => write!(f, "status"),
            ResultKind::Verification => write!(f, "verification"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_serde() {
        for method in Method::ALL {
            let json = serde_json::to_string(&method).unwrap();
            assert_eq!(json, format!("\"{}\"", method.as_str()));
        }
    }

    #[test]
    fn test_result_kind_dispatch() {
        assert_eq!(Method::GetUsage.result_kind(), ResultKind::Status);
        assert_eq!(Method::VerifySignature.result_kind(), ResultKind::Verification);
        assert_eq!(Method::GenerateSignedBlobs.result_kind(), ResultKind::Signed);
        assert_eq!(Method::GenerateUuids.result_kind(), ResultKind::Plain);
    }

    #[test]
    fn test_signed_counterpart() {
        for method in &Method::ALL[..6] {
            let signed = method.signed();
            assert!(signed.is_signed(), "{} has no signed counterpart", method);
            assert!(signed.as_str().starts_with("generateSigned"));
        }
        assert_eq!(Method::GetUsage.signed(), Method::GetUsage);
    }
}
