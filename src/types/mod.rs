//! Core Data Model
//!
//! Records produced by the scan pipeline and the result mapping that ties
//! them back to the source pages they were found on.

pub mod error;

pub use error::{Result, SweepError};

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Likely validity of a discovered code, inferred from nearby keywords.
///
/// This is a best-effort heuristic, never a verified state: codes are not
/// checked against any redemption service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum CodeStatus {
    /// Surrounding text mentioned "active" or "valid"
    Active,
    /// Surrounding text mentioned "expired" (takes precedence over Active)
    Expired,
    /// No status keyword nearby
    #[default]
    Unknown,
}

impl fmt::Display for CodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Expired => write!(f, "EXPIRED"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// One discovered code with its inferred status.
///
/// `code` is usually the canonical dash-joined form (five groups of five), but
/// normalization is deliberately lenient: a malformed capture degrades to a
/// dense alphanumeric run of any length rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodeRecord {
    pub code: String,
    pub status: CodeStatus,
}

impl CodeRecord {
    pub fn new(code: impl Into<String>, status: CodeStatus) -> Self {
        Self {
            code: code.into(),
            status,
        }
    }
}

/// Scan output: source URL → records in detection order within that source.
///
/// Keyed by URL, so literal duplicate input URLs collapse to one entry
/// (last completed fetch wins).
pub type ScanResult = HashMap<String, Vec<CodeRecord>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(CodeStatus::Active.to_string(), "ACTIVE");
        assert_eq!(CodeStatus::Expired.to_string(), "EXPIRED");
        assert_eq!(CodeStatus::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn test_status_serde_uppercase() {
        let json = serde_json::to_string(&CodeStatus::Expired).unwrap();
        assert_eq!(json, "\"EXPIRED\"");
        let back: CodeStatus = serde_json::from_str("\"ACTIVE\"").unwrap();
        assert_eq!(back, CodeStatus::Active);
    }

    #[test]
    fn test_record_construction() {
        let record = CodeRecord::new("ABCDE-12345-FGHIJ-67890-KLMNO", CodeStatus::Unknown);
        assert_eq!(record.code, "ABCDE-12345-FGHIJ-67890-KLMNO");
        assert_eq!(record.status, CodeStatus::Unknown);
    }
}
