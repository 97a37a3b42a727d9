//! Configuration loading and constants.
//!
//! The listen address and the health payload are fixed at compile time. The
//! optional TOML file only tunes logging. `AppConfig` is the root
//! configuration struct.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Service Identity
// =============================================================================

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "muchtodo-api";

/// Path the health handler is registered at (exact match)
pub const HEALTH_PATH: &str = "/health";

/// Health response body, written verbatim
pub const HEALTH_BODY: &str = formatcp!(
    r#"{{"status":"healthy","service":"{}"}}"#,
    SERVICE_NAME
);

// =============================================================================
// Network Binding
// =============================================================================
// Not configurable by file, flag or environment.

/// Listen on all interfaces
pub const LISTEN_HOST: &str = "0.0.0.0";

/// Listen port
pub const LISTEN_PORT: u16 = 8080;

/// Full listen address
pub const LISTEN_ADDR: &str = formatcp!("{}:{}", LISTEN_HOST, LISTEN_PORT);

/// Printed to stdout right before the server starts accepting
pub const STARTUP_MESSAGE: &str = formatcp!("Server starting on :{}", LISTEN_PORT);

// =============================================================================
// Logging Defaults
// =============================================================================

/// Default log filter when neither --log-level, RUST_LOG nor the config file set one
pub const DEFAULT_LOG_FILTER: &str = "muchtodo_api=info,warn";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Tracing filter directive, e.g. "muchtodo_api=debug"
    pub filter: Option<String>,
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise fall back to defaults.
    pub fn load_optional<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
