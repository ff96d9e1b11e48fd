//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREBOARD_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREBOARD_PORT` - Listen port (default: 3000)
//! - `STOREBOARD_LATENCY_MS` - Simulated per-request repository latency in
//!   milliseconds (default: 500; set to 0 for instant responses)
//! - `STOREBOARD_STORE_FILE` - Path of the JSON file the store collection is
//!   persisted to; when unset, stores reset to seed data on restart

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storeboard application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Simulated repository latency per operation
    pub latency: Duration,
    /// Where the store collection is persisted, if anywhere
    pub store_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREBOARD_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOREBOARD_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("STOREBOARD_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOREBOARD_PORT".to_string(), e.to_string()))?;
        let latency = parse_latency(&get_env_or_default("STOREBOARD_LATENCY_MS", "500"))
            .map_err(|e| ConfigError::InvalidEnvVar("STOREBOARD_LATENCY_MS".to_string(), e))?;
        let store_file = get_optional_env("STOREBOARD_STORE_FILE").map(PathBuf::from);

        Ok(Self {
            host,
            port,
            latency,
            store_file,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Configuration for test suites: ephemeral port, zero latency, no
    /// persistence file.
    #[must_use]
    pub fn for_tests() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 0,
            latency: Duration::ZERO,
            store_file: None,
        }
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a millisecond count into a `Duration`.
fn parse_latency(value: &str) -> Result<Duration, String> {
    value
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_latency_valid() {
        assert_eq!(parse_latency("500").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_latency("0").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_parse_latency_invalid() {
        assert!(parse_latency("fast").is_err());
        assert!(parse_latency("-1").is_err());
    }

    #[test]
    fn test_for_tests_has_zero_latency() {
        let config = ServerConfig::for_tests();
        assert_eq!(config.latency, Duration::ZERO);
        assert_eq!(config.port, 0);
        assert!(config.store_file.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            latency: Duration::from_millis(500),
            store_file: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}
