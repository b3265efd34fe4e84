//! Code Extraction and Status Classification
//!
//! Scans rendered page text for code-shaped substrings and infers a likely
//! status for each from nearby keywords. One record is emitted per pattern
//! match; duplicates within a source are kept, cross-source deduplication is
//! the report layer's concern.

use std::sync::OnceLock;

use regex::Regex;
use scraper::Html;
use tracing::trace;

use crate::constants::code::SNIPPET_WINDOW;
use crate::scan::normalize::normalize;
use crate::types::{CodeRecord, CodeStatus};

/// Code-shaped pattern: five loosely separated 5-character groups, or a
/// dense 25-character run. Case-insensitive, matched left to right.
fn code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)[A-Z0-9]{5}(?:[- ]?[A-Z0-9]{5}){4}|[A-Z0-9]{25}")
            .expect("code pattern compiles")
    })
}

/// Render markup to plain text, joining text nodes with single spaces.
fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let parts: Vec<&str> = document.root_element().text().collect();
    parts.join(" ")
}

/// Infer status from the snippet following the code.
///
/// "expired" takes precedence even when "active" or "valid" also appear in
/// the window.
fn classify(snippet: &str) -> CodeStatus {
    if snippet.contains("expired") {
        CodeStatus::Expired
    } else if snippet.contains("active") || snippet.contains("valid") {
        CodeStatus::Active
    } else {
        CodeStatus::Unknown
    }
}

/// Extract all code records from raw page content, in document order.
///
/// Empty content yields an empty list, never an error. The snippet used for
/// classification is the forward window of [`SNIPPET_WINDOW`] characters
/// starting at the first occurrence of the normalized code in the lowercased
/// text; when the normalized form is not literally present, the snippet is
/// empty and the record stays `UNKNOWN`.
pub fn extract(content: &str) -> Vec<CodeRecord> {
    if content.is_empty() {
        return Vec::new();
    }

    let text = html_to_text(content);
    let lower = text.to_lowercase();

    let mut records = Vec::new();
    for m in code_re().find_iter(&text) {
        let code = normalize(m.as_str());
        let key = code.to_lowercase();
        let snippet: String = match lower.find(&key) {
            Some(idx) => lower[idx..].chars().take(SNIPPET_WINDOW).collect(),
            None => String::new(),
        };
        let status = classify(&snippet);
        trace!(code = %code, status = %status, "matched code");
        records.push(CodeRecord { code, status });
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_yields_no_records() {
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_no_matches_yields_no_records() {
        assert!(extract("<p>nothing code-shaped here</p>").is_empty());
    }

    #[test]
    fn test_markup_is_stripped_before_matching() {
        let html = "<html><body><div>Code: <b>ABCDE-12345-FGHIJ-67890-KLMNO</b> is active</div></body></html>";
        let records = extract(html);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, "ABCDE-12345-FGHIJ-67890-KLMNO");
        assert_eq!(records[0].status, CodeStatus::Active);
    }

    #[test]
    fn test_expired_takes_precedence_over_valid() {
        let text = "CODE1-CODE2-CODE3-CODE4-CODE5 this code is expired but was previously valid";
        let records = extract(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, CodeStatus::Expired);
    }

    #[test]
    fn test_keyword_before_code_is_missed_by_forward_window() {
        // The window starts at the match position, so a keyword strictly
        // before the code does not influence its status.
        let text = "expired list follows later ..... CODE1-CODE2-CODE3-CODE4-CODE5 no keywords after";
        let records = extract(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, CodeStatus::Unknown);
    }

    #[test]
    fn test_unknown_without_keywords() {
        let records = extract("ABCDE-12345-FGHIJ-67890-KLMNO");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, CodeStatus::Unknown);
    }

    #[test]
    fn test_dense_run_is_matched_and_canonicalized() {
        let records = extract("grab abcde12345fghij67890klmno while it is still valid");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, "ABCDE-12345-FGHIJ-67890-KLMNO");
    }

    #[test]
    fn test_records_preserve_document_order() {
        // Enough filler that the first code's forward window cannot reach
        // the second entry's keyword.
        let filler = "filler text ".repeat(25);
        let html = format!(
            "<ul><li>AAAAA-BBBBB-CCCCC-DDDDD-EEEEE active</li><li>{}</li>\
             <li>FFFFF-GGGGG-HHHHH-IIIII-JJJJJ expired</li></ul>",
            filler
        );
        let records = extract(&html);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].code, "AAAAA-BBBBB-CCCCC-DDDDD-EEEEE");
        assert_eq!(records[0].status, CodeStatus::Active);
        assert_eq!(records[1].code, "FFFFF-GGGGG-HHHHH-IIIII-JJJJJ");
        assert_eq!(records[1].status, CodeStatus::Expired);
    }

    #[test]
    fn test_duplicate_matches_are_not_collapsed() {
        let text = "ABCDE-12345-FGHIJ-67890-KLMNO and again ABCDE-12345-FGHIJ-67890-KLMNO";
        let records = extract(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], records[1]);
    }
}
