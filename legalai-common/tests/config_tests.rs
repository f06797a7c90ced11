//! Unit tests for configuration loading and API key resolution
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate GEMINI_API_KEY are marked with #[serial].

use legalai_common::config::{
    is_valid_key, load_toml_config, resolve_api_key, GeminiConfig, LoggingConfig, TomlConfig,
    API_KEY_ENV, DEFAULT_LOG_LEVEL,
};
use serial_test::serial;
use std::env;
use std::io::Write;

fn toml_with_key(key: Option<&str>) -> TomlConfig {
    TomlConfig {
        bind_address: None,
        gemini: GeminiConfig {
            api_key: key.map(str::to_string),
            model: None,
            api_base_url: None,
        },
        logging: LoggingConfig::default(),
    }
}

// ============================================================================
// TOML loading
// ============================================================================

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_toml_config(&dir.path().join("absent.toml")).unwrap();

    assert!(config.bind_address.is_none());
    assert!(config.gemini.api_key.is_none());
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_full_file_is_parsed() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
bind_address = "0.0.0.0:8080"

[gemini]
api_key = "toml-key"
model = "gemini-test"
api_base_url = "http://localhost:9999/v1beta"

[logging]
level = "debug"
"#
    )
    .unwrap();

    let config = load_toml_config(file.path()).unwrap();
    assert_eq!(config.bind_address.as_deref(), Some("0.0.0.0:8080"));
    assert_eq!(config.gemini.api_key.as_deref(), Some("toml-key"));
    assert_eq!(config.gemini.model.as_deref(), Some("gemini-test"));
    assert_eq!(
        config.gemini.api_base_url.as_deref(),
        Some("http://localhost:9999/v1beta")
    );
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[gemini]\nmodel = \"gemini-other\"").unwrap();

    let config = load_toml_config(file.path()).unwrap();
    assert_eq!(config.gemini.model.as_deref(), Some("gemini-other"));
    assert!(config.gemini.api_key.is_none());
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_invalid_file_is_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "bind_address = [not toml").unwrap();

    let err = load_toml_config(file.path()).unwrap_err();
    assert!(matches!(err, legalai_common::Error::Config(_)));
}

// ============================================================================
// Key validation and resolution
// ============================================================================

#[test]
fn test_key_validation() {
    assert!(is_valid_key("abc"));
    assert!(!is_valid_key(""));
    assert!(!is_valid_key("   \t"));
}

#[test]
#[serial]
fn test_env_overrides_toml() {
    env::set_var(API_KEY_ENV, "env-key");
    let key = resolve_api_key(&toml_with_key(Some("toml-key")));
    env::remove_var(API_KEY_ENV);

    assert_eq!(key.as_deref(), Some("env-key"));
}

#[test]
#[serial]
fn test_toml_fallback_when_env_missing() {
    env::remove_var(API_KEY_ENV);
    let key = resolve_api_key(&toml_with_key(Some("toml-key")));

    assert_eq!(key.as_deref(), Some("toml-key"));
}

#[test]
#[serial]
fn test_whitespace_env_key_is_ignored() {
    env::set_var(API_KEY_ENV, "   ");
    let key = resolve_api_key(&toml_with_key(Some("toml-key")));
    env::remove_var(API_KEY_ENV);

    assert_eq!(key.as_deref(), Some("toml-key"));
}

#[test]
#[serial]
fn test_no_key_anywhere() {
    env::remove_var(API_KEY_ENV);
    assert!(resolve_api_key(&toml_with_key(None)).is_none());
    assert!(resolve_api_key(&toml_with_key(Some(""))).is_none());
}
