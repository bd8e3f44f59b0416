//! CLI argument validation functions
//!
//! This module provides custom validation functions for CLI arguments
//! that go beyond what clap can validate automatically.

use std::fs;
use std::path::PathBuf;

/// Shortest accepted poll interval for `watch`
pub const MIN_INTERVAL_MS: u64 = 100;

/// Validate port number is within valid range (1-65535)
pub fn validate_port(port_str: &str) -> Result<u16, String> {
    let port: u16 = port_str.parse().map_err(|_| {
        format!(
            "Port must be a valid number between 1 and 65535, got: '{}'",
            port_str
        )
    })?;

    if port == 0 {
        return Err("Port must be between 1 and 65535. Port 0 is not allowed.".to_string());
    }

    Ok(port)
}

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!(
            "Cannot read configuration file '{}': {}",
            path_str, e
        )),
    }
}

/// Validate host address format (basic validation)
pub fn validate_host_address(host_str: &str) -> Result<String, String> {
    let host = host_str.trim();

    if host.is_empty() {
        return Err("Host address cannot be empty".to_string());
    }

    if host.contains(' ') {
        return Err("Host address cannot contain spaces".to_string());
    }

    if host == "localhost" || host == "0.0.0.0" {
        return Ok(host.to_string());
    }

    // All digits and dots must parse as IPv4
    if host.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return host
            .parse::<std::net::Ipv4Addr>()
            .map(|_| host.to_string())
            .map_err(|_| format!("Invalid IPv4 address format: '{}'", host_str));
    }

    if host.len() > 253 {
        return Err("Host address is too long (maximum 253 characters)".to_string());
    }

    Ok(host.to_string())
}

/// Validate the API base URL the watcher polls
pub fn validate_base_url(url_str: &str) -> Result<String, String> {
    let url = url_str.trim();

    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or_else(|| {
            format!(
                "Base URL must start with http:// or https://, got: '{}'",
                url_str
            )
        })?;

    if rest.is_empty() || rest.starts_with('/') {
        return Err(format!("Base URL has no host: '{}'", url_str));
    }

    Ok(url.to_string())
}

/// Validate the poll interval in milliseconds
pub fn validate_interval_ms(interval_str: &str) -> Result<u64, String> {
    let interval: u64 = interval_str.parse().map_err(|_| {
        format!(
            "Interval must be a whole number of milliseconds, got: '{}'",
            interval_str
        )
    })?;

    if interval < MIN_INTERVAL_MS {
        return Err(format!(
            "Interval must be at least {} ms, got: {}",
            MIN_INTERVAL_MS, interval
        ));
    }

    Ok(interval)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_validation_valid_ports() {
        for port_str in ["1", "80", "443", "3000", "8080", "65535"] {
            assert!(validate_port(port_str).is_ok(), "Port {} should be valid", port_str);
        }
    }

    #[test]
    fn test_port_validation_invalid_ports() {
        for port_str in ["0", "65536", "99999", "abc", "-1", ""] {
            assert!(validate_port(port_str).is_err(), "Port {} should be invalid", port_str);
        }
    }

    #[test]
    fn test_host_validation_valid_hosts() {
        let valid_hosts = [
            "localhost",
            "127.0.0.1",
            "0.0.0.0",
            "192.168.1.1",
            "example.com",
            "my-server.local",
        ];

        for host in valid_hosts {
            assert!(validate_host_address(host).is_ok(), "Host {} should be valid", host);
        }
    }

    #[test]
    fn test_host_validation_invalid_hosts() {
        let long = "x".repeat(300);
        let invalid_hosts = ["", "   ", "host with spaces", "999.999.999.999", "1.2.3", &long];

        for host in invalid_hosts {
            assert!(
                validate_host_address(host).is_err(),
                "Host '{}' should be invalid",
                host
            );
        }
    }

    #[test]
    fn test_base_url_validation() {
        assert!(validate_base_url("http://127.0.0.1:3000/api").is_ok());
        assert!(validate_base_url("https://quiz.example.com").is_ok());

        for url in ["", "127.0.0.1:3000", "ftp://host", "http://", "https:///api"] {
            assert!(validate_base_url(url).is_err(), "URL '{}' should be invalid", url);
        }
    }

    #[test]
    fn test_interval_validation() {
        assert_eq!(validate_interval_ms("100"), Ok(100));
        assert_eq!(validate_interval_ms("3000"), Ok(3000));
        assert!(validate_interval_ms("99").is_err());
        assert!(validate_interval_ms("soon").is_err());
    }

    #[test]
    fn test_config_file_path_validation() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        assert_eq!(validate_config_file_path(path).unwrap(), file.path());

        let dir = tempfile::tempdir().unwrap();
        assert!(validate_config_file_path(dir.path().to_str().unwrap()).is_err());
        assert!(validate_config_file_path("/definitely/not/here.toml").is_err());
    }
}
