//! Configuration management for Veneer-Oxide

use crate::{Error, Result};
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Wait bounds used by the control layer.
///
/// Read queries resolve with the short `read` bound so that a missing element
/// is reported quickly instead of hanging for the full action bound. Actions
/// resolve with the `action` bound, which represents real user intent and is
/// allowed to wait for the element to become actionable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// Bound for read-query resolution
    pub read: Duration,
    /// Bound for action resolution
    pub action: Duration,
    /// Polling interval while waiting for resolution
    pub poll: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            read: Duration::from_millis(1000),
            action: Duration::from_millis(30000),
            poll: Duration::from_millis(50),
        }
    }
}

impl Timeouts {
    /// Create timeouts with explicit read and action bounds
    pub fn new(read: Duration, action: Duration) -> Self {
        Self {
            read,
            action,
            ..Default::default()
        }
    }
}

/// Library configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Read-query resolution bound in milliseconds
    pub read_timeout_ms: u64,

    /// Action resolution bound in milliseconds
    pub action_timeout_ms: u64,

    /// Resolution polling interval in milliseconds
    pub poll_interval_ms: u64,

    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            read_timeout_ms: 1000,
            action_timeout_ms: 30000,
            poll_interval_ms: 50,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(read) = env::var("VENEER_READ_TIMEOUT_MS") {
            config.read_timeout_ms = read
                .parse()
                .map_err(|_| Error::configuration("Invalid VENEER_READ_TIMEOUT_MS"))?;
        }

        if let Ok(action) = env::var("VENEER_ACTION_TIMEOUT_MS") {
            config.action_timeout_ms = action
                .parse()
                .map_err(|_| Error::configuration("Invalid VENEER_ACTION_TIMEOUT_MS"))?;
        }

        if let Ok(poll) = env::var("VENEER_POLL_INTERVAL_MS") {
            config.poll_interval_ms = poll
                .parse()
                .map_err(|_| Error::configuration("Invalid VENEER_POLL_INTERVAL_MS"))?;
        }

        if let Ok(log_level) = env::var("VENEER_LOG_LEVEL") {
            config.log_level = log_level;
        }

        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::configuration(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::configuration(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Wait bounds derived from this configuration
    pub fn timeouts(&self) -> Timeouts {
        Timeouts {
            read: Duration::from_millis(self.read_timeout_ms),
            action: Duration::from_millis(self.action_timeout_ms),
            poll: Duration::from_millis(self.poll_interval_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.read_timeout_ms, 1000);
        assert_eq!(config.action_timeout_ms, 30000);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_timeouts_from_config() {
        let config = Config {
            read_timeout_ms: 250,
            action_timeout_ms: 2000,
            poll_interval_ms: 25,
            log_level: "debug".to_string(),
        };

        let timeouts = config.timeouts();
        assert_eq!(timeouts.read, Duration::from_millis(250));
        assert_eq!(timeouts.action, Duration::from_millis(2000));
        assert_eq!(timeouts.poll, Duration::from_millis(25));
    }

    #[test]
    fn test_parse_toml_config() {
        let toml_str = r#"
            read_timeout_ms = 500
            action_timeout_ms = 10000
            poll_interval_ms = 100
            log_level = "trace"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.read_timeout_ms, 500);
        assert_eq!(config.action_timeout_ms, 10000);
        assert_eq!(config.log_level, "trace");
    }

    #[test]
    fn test_read_bound_is_shorter_than_action_bound() {
        let timeouts = Timeouts::default();
        assert!(timeouts.read < timeouts.action);
    }
}
