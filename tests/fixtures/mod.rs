//! Canned service responses for integration tests.
//!
//! Shapes follow the service's JSON-RPC API; values are made up.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use truerng::{Credential, MockTransport, TrueRng};

pub const API_KEY: &str = "6b1e65b9-4186-45c2-8981-b77a9842c4f0";

/// A client wired to a fresh mock transport.
pub fn client() -> (TrueRng, Arc<MockTransport>) {
    client_with(MockTransport::new())
}

pub fn client_with(transport: MockTransport) -> (TrueRng, Arc<MockTransport>) {
    let transport = Arc::new(transport);
    let rng = TrueRng::new(Credential::new(API_KEY), transport.clone());
    (rng, transport)
}

/// `{jsonrpc, result, id}` around `result`.
pub fn envelope(result: Value) -> Value {
    json!({"jsonrpc": "2.0", "result": result, "id": 1})
}

/// Plain generator result carrying `data`.
pub fn plain_result(data: Value) -> Value {
    envelope(json!({
        "random": {"data": data, "completionTime": "2011-10-10 13:19:12Z"},
        "bitsUsed": 16,
        "bitsLeft": 199984,
        "requestsLeft": 9999,
        "advisoryDelay": 0
    }))
}

/// Service error envelope.
pub fn error_envelope(code: i64, message: &str) -> Value {
    json!({"jsonrpc": "2.0", "error": {"code": code, "message": message, "data": null}, "id": 1})
}

pub fn usage_result(bits_left: i64, requests_left: i64) -> Value {
    envelope(json!({
        "status": "running",
        "creationTime": "2013-02-01 17:53:40Z",
        "bitsLeft": bits_left,
        "requestsLeft": requests_left,
        "totalBits": 1646421,
        "totalRequests": 65036
    }))
}

/// The signed `random` object for five integers.
///
/// Irregular spacing and an exponent-form number are deliberate: any
/// re-encoding would change these bytes.
pub const SIGNED_INTEGERS_RANDOM: &str = r#"{"method":"generateSignedIntegers","hashedApiKey":"oT3AdLMVZKajz0pgW/8Z+t5sGZkqQSOnAi1aB8Li0tXgWf8LolrgdQ1wn9sKx1ehxhUZmhwUIpAtM8QeRbn51Q==","n":5, "min":1,"max":10,"replacement":true,"base":10,"data":[1,5,3,9,2.0e0],"completionTime":"2013-09-30 14:58:03Z","serialNumber":69}"#;

pub const SIGNATURE: &str = "BuJTuXG1i2Cvn/rPM+XnxGAezmrWv2nDUYC8HdylmTPX0dCvfU1nzEhIvQpdPlMh+Nt1xmqhp4Rq7bDTsBwXhbwLSyn5rU6RA5fS/R1sBc5PrvfeXJqvQGojgqFHFXsgIjjfU+Q6Z5Hd3KCV6mjePvMzDg4wIGiRwuyJUX1GjAY=";

/// Signed result envelope wrapping `random` verbatim.
pub fn signed_result(random: &str, signature: &str) -> String {
    format!(
        r#"{{"jsonrpc":"2.0","result":{{"random":{},"signature":"{}","cost":0,"bitsUsed":16,"bitsLeft":199968,"requestsLeft":9998,"advisoryDelay":1000}},"id":1}}"#,
        random, signature
    )
}

/// Signed `random` object with string data.
pub fn signed_strings_random(data: &[&str]) -> String {
    format!(
        r#"{{"method":"generateSignedStrings","hashedApiKey":"HASH","n":{},"data":{},"completionTime":"2013-09-30 14:58:03Z","serialNumber":70}}"#,
        data.len(),
        serde_json::to_string(data).unwrap_or_default()
    )
}

pub fn verification_result(authentic: bool) -> Value {
    envelope(json!({"authenticity": authentic}))
}

/// Signed `random` object for decimal fractions; spacing is irregular on purpose.
pub const SIGNED_DECIMALS_RANDOM: &str = r#"{"method":"generateSignedDecimalFractions","hashedApiKey":"HASH","n":3,"decimalPlaces":2,"replacement":true,"data":[0.25, 0.5,7.5e-1],"completionTime":"2013-09-30 14:58:03Z","serialNumber":71}"#;

/// Signed `random` object for gaussians, including an exponent-form value.
pub const SIGNED_GAUSSIANS_RANDOM: &str = r#"{"method":"generateSignedGaussians","hashedApiKey":"HASH","n":2,"mean":0.0,"standardDeviation":1.0,"significantDigits":3,"data":[-1.5e0,  0.125],"completionTime":"2013-09-30 14:58:04Z","serialNumber":72}"#;

pub const SIGNED_UUIDS_RANDOM: &str = r#"{"method":"generateSignedUUIDs","hashedApiKey":"HASH","n":1,"data":["47849fd4-b790-4ce4-a1ac-2fa0d1ea5ef3"] ,"completionTime":"2013-09-30 14:58:05Z","serialNumber":73}"#;

/// Two 64-bit base64 blobs.
pub const SIGNED_BLOBS_RANDOM: &str = r#"{"method":"generateSignedBlobs","hashedApiKey":"HASH","n":2,"size":64,"format":"base64","data":["AAECAwQFBgc=","//////////8="],"completionTime":"2013-09-30 14:58:06Z","serialNumber":74}"#;
