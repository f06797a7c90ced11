//! Configuration loading and API key resolution
//!
//! Settings are resolved in priority order:
//! 1. Command-line argument (binary only)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default
//!
//! A missing TOML file is not an error: the service starts with defaults and
//! logs a warning. A missing API key is not an error either; the routes
//! report it per request.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable holding the model service API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Model used for both analysis and chat unless overridden
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-05-20";

/// Base URL of the generative-language API (without trailing slash)
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Contents of `legalai.toml`
///
/// Every field is optional so a partial file only overrides what it names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Address the HTTP server binds to, e.g. "0.0.0.0:8080"
    #[serde(default)]
    pub bind_address: Option<String>,

    /// Model service settings
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub api_base_url: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Platform config file location: `<config_dir>/legalai/legalai.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("legalai").join("legalai.toml"))
}

/// Load a TOML config file, falling back to defaults if it does not exist
///
/// A file that exists but cannot be read or parsed is an error: silently
/// ignoring a typo would hide a misconfiguration.
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    if !path.exists() {
        warn!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(TomlConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: TomlConfig = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse TOML failed ({}): {}", path.display(), e)))?;

    info!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Validate API key (non-empty, non-whitespace)
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}

/// Resolve the model service API key
///
/// **Priority:** ENV → TOML. Returns `None` when neither source holds a
/// usable key; callers surface that as a configuration error per request.
pub fn resolve_api_key(toml_config: &TomlConfig) -> Option<String> {
    let env_key = std::env::var(API_KEY_ENV).ok().filter(|k| is_valid_key(k));
    let toml_key = toml_config
        .gemini
        .api_key
        .clone()
        .filter(|k| is_valid_key(k));

    if env_key.is_some() && toml_key.is_some() {
        warn!(
            "API key found in both environment ({}) and TOML config. Using environment.",
            API_KEY_ENV
        );
    }

    if let Some(key) = env_key {
        info!("API key loaded from environment variable");
        return Some(key);
    }

    if let Some(key) = toml_key {
        info!("API key loaded from TOML config");
        return Some(key);
    }

    warn!(
        "API key not configured; analysis and chat requests will fail until {} is set",
        API_KEY_ENV
    );
    None
}
