//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! The scan pipeline itself has no fatal error path: fetch failures degrade to
//! empty content, unmatched input degrades to an empty record list, and a
//! malformed code degrades to a non-canonical string. [`SweepError`] covers
//! the surfaces around the pipeline: configuration, output, and client setup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SweepError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client construction. Request failures never surface here;
    /// the fetcher swallows them and yields empty content.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid tracker URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, SweepError>;

impl SweepError {
    /// Create a config error from a message
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid-URL error
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = SweepError::config("workers out of range");
        assert_eq!(err.to_string(), "Config error: workers out of range");
    }

    #[test]
    fn test_invalid_url_display() {
        let err = SweepError::invalid_url("ftp://example.com", "unsupported scheme");
        assert_eq!(
            err.to_string(),
            "Invalid tracker URL 'ftp://example.com': unsupported scheme"
        );
    }
}
