//! Scan Command
//!
//! Runs the full pipeline against the configured tracker list and renders
//! or exports the aggregated report.

use std::path::PathBuf;
use std::sync::Arc;

use clap::ValueEnum;
use tracing::info;

use crate::cli::Output;
use crate::config::{ConfigLoader, validate_tracker_url};
use crate::constants::scan::{MAX_WORKERS, MIN_WORKERS};
use crate::report::Report;
use crate::scan::{HttpFetcher, Scanner};
use crate::types::{Result, ScanResult, SweepError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Debug)]
pub struct ScanOptions {
    /// Extra tracker URLs appended to the configured list
    pub urls: Vec<String>,
    /// Scan only the URLs given on the command line
    pub no_defaults: bool,
    /// Worker count override
    pub concurrency: Option<usize>,
    pub format: OutputFormat,
    /// Write the export here instead of stdout
    pub output: Option<PathBuf>,
}

pub async fn run(options: ScanOptions) -> Result<()> {
    let config = ConfigLoader::load()?;

    let mut trackers = if options.no_defaults {
        Vec::new()
    } else {
        config.scan.trackers.clone()
    };
    for url in &options.urls {
        validate_tracker_url(url)?;
        trackers.push(url.clone());
    }
    if trackers.is_empty() {
        return Err(SweepError::config(
            "no tracker URLs to scan (pass --url or configure scan.trackers)",
        ));
    }

    let workers = options.concurrency.unwrap_or(config.scan.workers);
    if !(MIN_WORKERS..=MAX_WORKERS).contains(&workers) {
        return Err(SweepError::config(format!(
            "concurrency must be between {} and {}, got {}",
            MIN_WORKERS, MAX_WORKERS, workers
        )));
    }

    info!(trackers = trackers.len(), workers, "scanning trackers");

    let fetcher = Arc::new(HttpFetcher::from_config(&config.network)?);
    let scanner = Scanner::new(fetcher, workers);
    let results = scanner.scan(&trackers).await;
    let report = Report::from_scan(&results);

    match options.format {
        OutputFormat::Text => render_text(&report, &results),
        OutputFormat::Json => emit(report.to_json()?, options.output.as_deref())?,
        OutputFormat::Csv => emit(report.to_csv(), options.output.as_deref())?,
    }

    Ok(())
}

fn render_text(report: &Report, results: &ScanResult) {
    let out = Output::new();

    out.header(&format!("Found codes ({})", report.len()));
    for row in report.rows() {
        println!("{:<31} {:<8} {}", row.code, row.status.to_string(), row.source);
    }

    out.section("Deduplicated list with status");
    let list = report.code_list();
    if list.is_empty() {
        println!("(none)");
    } else {
        println!("{}", list);
    }

    out.section("Tracker summary");
    for (url, count) in Report::source_summary(results) {
        out.bullet(&format!("{} — {} codes", url, count));
    }
}

fn emit(content: String, output: Option<&std::path::Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            Output::new().success(&format!("Wrote report to {}", path.display()));
        }
        None => println!("{}", content),
    }
    Ok(())
}
