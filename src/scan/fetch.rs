//! Page Fetching
//!
//! Retrieves raw page content for a URL, tolerating network failure.
//! A broken source must never abort a scan: every failure mode degrades to
//! empty content, the caller only observes a source contributing no records.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::NetworkConfig;
use crate::constants::network::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::types::Result;

/// Fetch seam for the scanner. Implementations must be fail-soft: the return
/// value pairs the requested URL with its content, empty on any failure.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> (String, String);
}

/// HTTP fetcher with a bounded per-request timeout and a fixed client
/// signature. Read-only retrieval: no cookies, no authentication, no retries.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Build a fetcher from network configuration
    pub fn from_config(config: &NetworkConfig) -> Result<Self> {
        Self::new(Duration::from_secs(config.timeout_secs), &config.user_agent)
    }

    /// Fetcher with the built-in defaults (12 s timeout, fixed User-Agent)
    pub fn with_defaults() -> Result<Self> {
        Self::new(Duration::from_secs(REQUEST_TIMEOUT_SECS), USER_AGENT)
    }

    async fn try_fetch(&self, url: &str) -> reqwest::Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        response.text().await
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> (String, String) {
        match self.try_fetch(url).await {
            Ok(body) => {
                debug!(url, bytes = body.len(), "fetched page");
                (url.to_string(), body)
            }
            Err(e) => {
                warn!(url, error = %e, "fetch failed, continuing with empty content");
                (url.to_string(), String::new())
            }
        }
    }
}
