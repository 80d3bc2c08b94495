//! Configuration Loading Tests

use std::io::Write;

use tempfile::NamedTempFile;
use truerng::{ClientConfig, ConfigError, TrueRng};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
        endpoint = "http://127.0.0.1:8080/json-rpc/1/invoke"
        api_key = "file-key"
        timeout_seconds = 10
    "#,
    );

    let config = ClientConfig::load(file.path()).unwrap();
    let rng = TrueRng::from_config(&config).unwrap();

    assert_eq!(rng.endpoint(), "http://127.0.0.1:8080/json-rpc/1/invoke");
    assert_eq!(rng.credential().expose(), "file-key");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    assert!(matches!(ClientConfig::load(&path), Err(ConfigError::NotFound(_))));
}

#[test]
fn test_client_requires_api_key() {
    let file = write_config("timeout_seconds = 10\n");
    let config = ClientConfig::load(file.path()).unwrap();

    assert!(matches!(
        TrueRng::from_config(&config),
        Err(ConfigError::MissingApiKey)
    ));
}

#[test]
fn test_malformed_file() {
    let file = write_config("endpoint = [unclosed\n");
    assert!(matches!(ClientConfig::load(file.path()), Err(ConfigError::Parse(_))));
}
