//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/codesweep/) and project (.codesweep/) level
//! configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{network, scan, trackers};
use crate::types::{Result, SweepError};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Scan pipeline settings
    pub scan: ScanConfig,

    /// HTTP settings
    pub network: NetworkConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            scan: ScanConfig::default(),
            network: NetworkConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `SweepError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if !(scan::MIN_WORKERS..=scan::MAX_WORKERS).contains(&self.scan.workers) {
            return Err(SweepError::config(format!(
                "scan workers must be between {} and {}, got {}",
                scan::MIN_WORKERS,
                scan::MAX_WORKERS,
                self.scan.workers
            )));
        }

        if self.network.timeout_secs == 0 {
            return Err(SweepError::config(
                "network timeout_secs must be greater than 0",
            ));
        }

        for tracker in &self.scan.trackers {
            validate_tracker_url(tracker)?;
        }

        Ok(())
    }
}

/// Check that a tracker URL parses and uses a plain web scheme.
pub fn validate_tracker_url(raw: &str) -> Result<()> {
    let parsed = url::Url::parse(raw)
        .map_err(|e| SweepError::invalid_url(raw, e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(SweepError::invalid_url(
            raw,
            format!("unsupported scheme '{}'", parsed.scheme()),
        ));
    }
    Ok(())
}

// =============================================================================
// Scan Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Concurrent fetch workers (2-20)
    pub workers: usize,

    /// Tracker pages to scan
    pub trackers: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            workers: scan::DEFAULT_WORKERS,
            trackers: trackers::DEFAULT_TRACKERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

// =============================================================================
// Network Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Client identification string sent with every request
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_secs: network::REQUEST_TIMEOUT_SECS,
            user_agent: network::USER_AGENT.to_string(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.scan.workers, 6);
        assert_eq!(config.network.timeout_secs, 12);
        assert!(!config.scan.trackers.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_workers_out_of_range_is_rejected() {
        let mut config = Config::default();
        config.scan.workers = 1;
        assert!(config.validate().is_err());
        config.scan.workers = 21;
        assert!(config.validate().is_err());
        config.scan.workers = 20;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut config = Config::default();
        config.network.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tracker_url_validation() {
        assert!(validate_tracker_url("https://example.com/codes").is_ok());
        assert!(validate_tracker_url("http://example.com").is_ok());
        assert!(validate_tracker_url("ftp://example.com").is_err());
        assert!(validate_tracker_url("not a url").is_err());
    }

    #[test]
    fn test_bad_tracker_in_config_is_rejected() {
        let mut config = Config::default();
        config.scan.trackers.push("file:///etc/passwd".to_string());
        assert!(config.validate().is_err());
    }
}
