//! API key handling.

use base64::Engine;
use sha2::{Digest, Sha512};
use std::fmt;

/// The caller's API key.
///
/// Immutable once created. `Debug` never prints the key, and it leaves the
/// process only inside request bodies.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self(api_key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Base64 SHA-512 of the key, as the service reports it in
    /// `hashedApiKey` of signed results.
    pub fn hashed(&self) -> String {
        let digest = Sha512::digest(self.0.as_bytes());
        base64::engine::general_purpose::STANDARD.encode(digest)
    }

    /// True if a signed result's `hashedApiKey` belongs to this key.
    pub fn matches_hashed(&self, hashed_api_key: &str) -> bool {
        self.hashed() == hashed_api_key
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let cred = Credential::new("00000000-0000-0000-0000-000000000000");
        let printed = format!("{:?}", cred);
        assert!(!printed.contains("0000"));
        assert_eq!(cred.expose(), "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn test_hashed_is_base64_sha512() {
        let cred = Credential::new("abc");
        let hashed = cred.hashed();
        // 64 digest bytes -> 88 base64 characters with padding
        assert_eq!(hashed.len(), 88);
        assert!(hashed.starts_with("3a81oZNherrMQXNJriBBMRLm"));
        assert!(cred.matches_hashed(&hashed));
        assert!(!Credential::new("abd").matches_hashed(&hashed));
    }
}
