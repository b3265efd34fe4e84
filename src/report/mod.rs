//! Result Aggregation and Export
//!
//! Flattens a scan mapping into `(source, code, status)` rows, removes exact
//! duplicates, and produces the presentation views: a full annotated list
//! sorted by code, a code-only deduplicated list, a copy-friendly text block,
//! and CSV/JSON exports.

use std::collections::HashSet;

use serde::Serialize;

use crate::types::{CodeStatus, Result, ScanResult};

/// One flattened row of the aggregated view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeRow {
    pub source: String,
    pub code: String,
    pub status: CodeStatus,
}

/// Aggregated view over a completed scan.
///
/// When the same code was seen with differing statuses at different sources,
/// which status survives deduplication is not specified; callers must not
/// rely on a particular winner.
#[derive(Debug, Clone)]
pub struct Report {
    rows: Vec<CodeRow>,
}

impl Report {
    /// Flatten a scan result, drop exact-triple duplicates, sort by code.
    pub fn from_scan(results: &ScanResult) -> Self {
        let mut seen = HashSet::new();
        let mut rows = Vec::new();

        for (source, records) in results {
            for record in records {
                let key = (source.clone(), record.code.clone(), record.status);
                if seen.insert(key) {
                    rows.push(CodeRow {
                        source: source.clone(),
                        code: record.code.clone(),
                        status: record.status,
                    });
                }
            }
        }

        rows.sort_by(|a, b| a.code.cmp(&b.code));
        Self { rows }
    }

    /// Full annotated rows, sorted by code.
    pub fn rows(&self) -> &[CodeRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// One row per distinct code, in code order. The surviving row is the
    /// first in the sorted full view.
    pub fn deduped(&self) -> Vec<&CodeRow> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .filter(|row| seen.insert(row.code.as_str()))
            .collect()
    }

    /// Copy-friendly block: `CODE (STATUS)` per distinct code, one per line.
    pub fn code_list(&self) -> String {
        self.deduped()
            .iter()
            .map(|row| format!("{} ({})", row.code, row.status))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// CSV export of the full view, header included.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("source,code,status\n");
        for row in &self.rows {
            out.push_str(&csv_field(&row.source));
            out.push(',');
            out.push_str(&csv_field(&row.code));
            out.push(',');
            out.push_str(&row.status.to_string());
            out.push('\n');
        }
        out
    }

    /// Pretty JSON export of the full view.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.rows)?)
    }

    /// Per-source record counts: `(url, count)` for every scanned source,
    /// including the ones that contributed nothing.
    pub fn source_summary(results: &ScanResult) -> Vec<(String, usize)> {
        let mut summary: Vec<(String, usize)> = results
            .iter()
            .map(|(url, records)| (url.clone(), records.len()))
            .collect();
        summary.sort();
        summary
    }
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
