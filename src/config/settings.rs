//! Configuration settings structures for quiz-zone
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "quiz-zone".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_base_path() -> String {
    "/api".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/quiz-zone.log".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_client_base_url() -> String {
    "http://127.0.0.1:3000/api".to_string()
}

fn default_poll_interval_ms() -> u64 {
    3000
}

fn default_client_request_timeout_ms() -> u64 {
    10_000
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    #[serde(default = "default_app_name")]
    pub name: String,

    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path prefix the API routes are mounted under. Empty mounts them at the root.
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Origins allowed to call the API from a browser. `*` allows any origin;
    /// an empty list disables CORS handling.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Base path without a trailing slash; `""` means the root.
    pub fn normalized_base_path(&self) -> &str {
        self.base_path.trim_end_matches('/')
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_path: default_base_path(),
            cors_origins: Vec::new(),
        }
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

/// File output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_log_path")]
    pub path: String,

    /// Whether to append to an existing file instead of truncating it
    #[serde(default = "default_true")]
    pub append: bool,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            append: default_true(),
            format: default_log_format(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub console: ConsoleSettings,

    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Converts the file representation into the runtime `LoggerConfig`.
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let format = self
            .file
            .format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::validation("logger.file.format", e.to_string()))?;

        let console = ConsoleConfig::new(self.console.enabled, self.console.colored);
        let file = FileConfig {
            enabled: self.file.enabled,
            path: PathBuf::from(self.file.path),
            append: self.file.append,
            format,
        };

        LoggerConfig::new(console, file, self.level)
            .map_err(|e| ConfigError::validation("logger", e.to_string()))
    }
}

// ============================================================================
// Polling Client Configuration
// ============================================================================

/// Settings for the `watch` command's quiz poller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root the server is mounted at, e.g. `http://127.0.0.1:3000/api`
    #[serde(default = "default_client_base_url")]
    pub base_url: String,

    /// Delay between list requests in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_client_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_client_base_url(),
            poll_interval_ms: default_poll_interval_ms(),
            request_timeout_ms: default_client_request_timeout_ms(),
        }
    }
}

// ============================================================================
// Root Settings
// ============================================================================

/// Root configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub application: ApplicationConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logger: LoggerSettings,

    #[serde(default)]
    pub client: ClientConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.address(), "127.0.0.1:3000");
        assert_eq!(settings.server.base_path, "/api");
        assert_eq!(settings.client.poll_interval_ms, 3000);
        assert_eq!(settings.logger.level, "info");
        assert!(!settings.logger.file.enabled);
    }

    #[test]
    fn test_deserialize_partial_settings_fills_defaults() {
        let settings: Settings = from_json(
            r#"{"server": {"port": 8080}, "client": {"poll_interval_ms": 500}}"#,
        );
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.client.poll_interval_ms, 500);
        assert_eq!(settings.client.base_url, "http://127.0.0.1:3000/api");
    }

    fn from_json(json: &str) -> Settings {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_normalized_base_path() {
        let mut server = ServerConfig::default();
        assert_eq!(server.normalized_base_path(), "/api");
        server.base_path = "/api/".to_string();
        assert_eq!(server.normalized_base_path(), "/api");
        server.base_path = "/".to_string();
        assert_eq!(server.normalized_base_path(), "");
    }

    #[test]
    fn test_into_logger_config() {
        let mut logger = LoggerSettings::default();
        logger.file.format = "compact".to_string();
        let config = logger.into_logger_config().unwrap();
        assert_eq!(config.file.format, LogFormat::Compact);
        assert_eq!(config.level, "info");
    }

    #[test]
    fn test_into_logger_config_rejects_unknown_format() {
        let mut logger = LoggerSettings::default();
        logger.file.format = "xml".to_string();
        let err = logger.into_logger_config().unwrap_err();
        assert!(
            matches!(
                err,
                ConfigError::ValidationError { field, .. } if field == "logger.file.format"
            )
        );
    }

    proptest! {
        #[test]
        fn prop_server_address_roundtrip(host in "[a-z]{1,10}", port in 1u16..=65535u16) {
            let server = ServerConfig { host: host.clone(), port, ..Default::default() };
            prop_assert_eq!(server.address(), format!("{}:{}", host, port));
        }
    }
}
