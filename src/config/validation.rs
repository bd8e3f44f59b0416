//! Configuration validation logic
//!
//! This module provides validation methods for all configuration structures
//! to ensure configuration values are within acceptable ranges and formats.

use crate::config::error::ConfigError;
use crate::config::settings::{ClientConfig, FileSettings, LoggerSettings, ServerConfig, Settings};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

/// Lower bound for the poll interval; anything faster hammers the API.
const MIN_POLL_INTERVAL_MS: u64 = 100;

impl ServerConfig {
    /// Validate server configuration
    ///
    /// # Validation Rules
    /// - Port must be between 1 and 65535
    /// - Base path must be empty or start with `/`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        if !self.base_path.is_empty() && !self.base_path.starts_with('/') {
            return Err(ConfigError::validation(
                "server.base_path",
                format!("Base path must start with '/', got '{}'.", self.base_path),
            ));
        }

        if self.cors_origins.iter().any(|origin| origin.trim().is_empty()) {
            return Err(ConfigError::validation(
                "server.cors_origins",
                "CORS origins cannot contain empty entries.",
            ));
        }

        Ok(())
    }
}

impl FileSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.file.format",
                format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// # Validation Rules
    /// - Log level must be one of: trace, debug, info, warn, error
    /// - At least one of console or file output must be enabled
    /// - If file logging is enabled, path must not be empty
    /// - Log format must be one of: full, compact, json
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.level",
                format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        self.file.validate()
    }
}

impl ClientConfig {
    /// Validate polling client configuration
    ///
    /// # Validation Rules
    /// - Base URL must use http or https
    /// - Poll interval must be at least 100 ms
    /// - Request timeout must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::validation(
                "client.base_url",
                format!(
                    "Base URL must start with http:// or https://, got '{}'.",
                    self.base_url
                ),
            ));
        }

        if self.poll_interval_ms < MIN_POLL_INTERVAL_MS {
            return Err(ConfigError::validation(
                "client.poll_interval_ms",
                format!("Poll interval must be at least {} ms.", MIN_POLL_INTERVAL_MS),
            ));
        }

        if self.request_timeout_ms == 0 {
            return Err(ConfigError::validation(
                "client.request_timeout_ms",
                "Request timeout must be greater than 0 ms.",
            ));
        }

        Ok(())
    }
}

impl Settings {
    /// Validates all sub-configurations and returns the first error found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.logger.validate()?;
        self.client.validate()?;
        Ok(())
    }
}
