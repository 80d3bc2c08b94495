//! Client Configuration
//!
//! Resolves the settings a client needs from three layers, later layers
//! winning:
//! 1. Built-in defaults
//! 2. Config file (`~/.config/truerng/config.toml` or an explicit path)
//! 3. Environment (`TRUERNG_API_KEY`, `TRUERNG_ENDPOINT`)

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use truerng_protocol::DEFAULT_ENDPOINT;

use crate::credential::Credential;

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "TRUERNG_API_KEY";

/// Environment variable overriding the endpoint.
pub const ENV_ENDPOINT: &str = "TRUERNG_ENDPOINT";

/// Client configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// JSON-RPC invoke URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API key; usually supplied through the environment instead
    #[serde(default)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

/// Errors that can occur when loading or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("No API key configured (set TRUERNG_API_KEY or api_key in the config file)")]
    MissingApiKey,
}

impl ClientConfig {
    /// Get the default config file path
    pub fn default_path() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config/truerng/config.toml"))
    }

    /// Resolve all layers. An explicit `path` must exist; the default
    /// file is optional.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::load(&default)?,
                _ => Self::default(),
            },
        };
        config.apply_env(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay environment values. `lookup` is `std::env::var` in production.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY).filter(|k| !k.is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|e| !e.is_empty()) {
            self.endpoint = endpoint;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "endpoint".to_string(),
                reason: format!("'{}' is not an http(s) URL", self.endpoint),
            });
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_seconds".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// The configured API key as a credential.
    pub fn credential(&self) -> Result<Credential, ConfigError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .map(Credential::new)
            .ok_or(ConfigError::MissingApiKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::parse("").unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(matches!(config.credential(), Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_file_values() {
        let config = ClientConfig::parse(
            r#"
            endpoint = "http://localhost:8080/invoke"
            api_key = "file-key"
            timeout_seconds = 5
        "#,
        )
        .unwrap();

        assert_eq!(config.endpoint, "http://localhost:8080/invoke");
        assert_eq!(config.credential().unwrap().expose(), "file-key");
        assert_eq!(config.timeout_seconds, 5);
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = ClientConfig::parse(r#"api_key = "file-key""#).unwrap();
        config.apply_env(|name| match name {
            ENV_API_KEY => Some("env-key".to_string()),
            _ => None,
        });
        assert_eq!(config.credential().unwrap().expose(), "env-key");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_empty_env_is_ignored() {
        let mut config = ClientConfig::parse(r#"api_key = "file-key""#).unwrap();
        config.apply_env(|_| Some(String::new()));
        assert_eq!(config.credential().unwrap().expose(), "file-key");
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            ClientConfig::parse(r#"endpoint = "ftp://nope""#),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            ClientConfig::parse("timeout_seconds = 0"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            ClientConfig::parse("timeout_seconds = \"soon\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = ClientConfig {
            api_key: Some("super-secret".to_string()),
            ..ClientConfig::default()
        };
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
