//! Keep-alive heartbeat configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Keep-alive heartbeat configuration.
///
/// The heartbeat periodically pings the service's own public address so that
/// free-tier hosts do not idle it out. It is disabled unless a target URL is
/// configured.
#[derive(Debug, Clone, Deserialize)]
pub struct HeartbeatConfig {
    /// URL to ping; typically the service's own public address
    pub target_url: Option<String>,

    /// Seconds between pings
    #[serde(default = "default_interval")]
    pub interval_secs: u64,
}

impl HeartbeatConfig {
    /// Whether the heartbeat task should run
    pub fn is_enabled(&self) -> bool {
        self.target_url.is_some()
    }

    /// Get the ping interval as Duration
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    /// Validate heartbeat configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = &self.target_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidHeartbeatUrl);
            }
        }
        if self.interval_secs == 0 {
            return Err(ValidationError::InvalidHeartbeatInterval);
        }
        Ok(())
    }
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self {
            target_url: None,
            interval_secs: default_interval(),
        }
    }
}

fn default_interval() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_by_default() {
        let config = HeartbeatConfig::default();
        assert!(!config.is_enabled());
        assert_eq!(config.interval_secs, 300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_enabled_with_target() {
        let config = HeartbeatConfig {
            target_url: Some("https://feedback.example.com".to_string()),
            ..Default::default()
        };
        assert!(config.is_enabled());
        assert!(config.validate().is_ok());
        assert_eq!(config.interval(), Duration::from_secs(300));
    }

    #[test]
    fn test_validation_invalid_url() {
        let config = HeartbeatConfig {
            target_url: Some("ftp://feedback.example.com".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_interval() {
        let config = HeartbeatConfig {
            target_url: Some("https://feedback.example.com".to_string()),
            interval_secs: 0,
        };
        assert!(config.validate().is_err());
    }
}
