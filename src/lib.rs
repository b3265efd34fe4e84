//! CodeSweep - Redemption Code Discovery
//!
//! Scans public tracker pages for 25-character alphanumeric redemption codes,
//! infers a likely ACTIVE/EXPIRED/UNKNOWN status from nearby keywords,
//! deduplicates findings across sources, and reports them as copy-friendly
//! lists. A best-effort snapshot tool: codes are never verified against, or
//! submitted to, any redemption service.
//!
//! ## Pipeline
//!
//! fetch → extract → normalize → classify → aggregate
//!
//! ```ignore
//! use std::sync::Arc;
//! use codesweep::{HttpFetcher, Report, Scanner};
//!
//! let fetcher = Arc::new(HttpFetcher::with_defaults()?);
//! let scanner = Scanner::new(fetcher, 6);
//! let results = scanner.scan(&urls).await;
//! let report = Report::from_scan(&results);
//! println!("{}", report.code_list());
//! ```
//!
//! ## Modules
//!
//! - [`scan`]: the pipeline — fail-soft fetching, extraction, normalization,
//!   concurrent orchestration
//! - [`report`]: aggregation, deduplication, and export views
//! - [`config`]: layered configuration (defaults, files, environment)
//! - [`cli`]: command surface and console rendering

pub mod cli;
pub mod config;
pub mod constants;
pub mod report;
pub mod scan;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

pub use config::{Config, ConfigLoader, NetworkConfig, ScanConfig};
pub use report::{CodeRow, Report};
pub use scan::{HttpFetcher, PageFetcher, Scanner, extract, normalize};
pub use types::{CodeRecord, CodeStatus, Result, ScanResult, SweepError};
