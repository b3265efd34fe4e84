//! Concurrent Scan Orchestration
//!
//! Dispatches one fetch per source URL on a bounded worker pool, runs
//! extraction as each fetch completes, and collects per-source results into
//! the scan mapping. The collector loop is the single mutator of the map.

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use tracing::{debug, info};

use crate::constants::scan::POLITENESS_DELAY_MS;
use crate::scan::extract::extract;
use crate::scan::fetch::PageFetcher;
use crate::types::ScanResult;

/// Orchestrates fetch + extract across a set of sources.
pub struct Scanner {
    fetcher: Arc<dyn PageFetcher>,
    concurrency: usize,
    politeness_delay: Duration,
}

impl Scanner {
    /// Create a scanner. `concurrency` bounds in-flight fetches and is
    /// clamped to at least 1.
    pub fn new(fetcher: Arc<dyn PageFetcher>, concurrency: usize) -> Self {
        Self {
            fetcher,
            concurrency: concurrency.max(1),
            politeness_delay: Duration::from_millis(POLITENESS_DELAY_MS),
        }
    }

    /// Override the pause taken after each recorded source. Tests set this
    /// to zero.
    pub fn with_politeness_delay(mut self, delay: Duration) -> Self {
        self.politeness_delay = delay;
        self
    }

    /// Scan every URL and return the source → records mapping.
    ///
    /// Sources are fully independent; completion order is whatever the
    /// network produces. Returns only after every submitted fetch and its
    /// extraction has been recorded; failed fetches contribute an entry with
    /// zero records rather than an error.
    ///
    /// The mapping is keyed by URL: passing the same URL twice collapses to
    /// one entry, and whichever fetch completes last wins. The tie-break
    /// order is deliberately left undefined.
    pub async fn scan(&self, urls: &[String]) -> ScanResult {
        info!(
            sources = urls.len(),
            concurrency = self.concurrency,
            "starting scan"
        );

        let mut results = ScanResult::new();
        let fetcher = Arc::clone(&self.fetcher);
        let mut completions = futures::stream::iter(urls.iter().cloned())
            .map(|url| {
                let fetcher = Arc::clone(&fetcher);
                async move { fetcher.fetch(&url).await }
            })
            .buffer_unordered(self.concurrency);

        while let Some((url, content)) = completions.next().await {
            let records = extract(&content);
            debug!(url = %url, records = records.len(), "source recorded");
            results.insert(url, records);

            if !self.politeness_delay.is_zero() {
                tokio::time::sleep(self.politeness_delay).await;
            }
        }

        info!(sources = results.len(), "scan complete");
        results
    }
}
