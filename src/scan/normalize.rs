//! Code Normalization
//!
//! Canonicalizes raw matched text into the dash-joined five-group form.
//! Normalization never fails: input that cannot reach the canonical shape
//! degrades to its dense alphanumeric run, whatever its length.

use std::sync::OnceLock;

use regex::Regex;

use crate::constants::code::{CODE_LEN, GROUP_LEN};

/// Five 5-character groups, each optionally separated by one hyphen or space.
/// Applied to the uppercased but otherwise unmodified input.
fn loose_groups_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"([A-Z0-9]{5})[- ]?([A-Z0-9]{5})[- ]?([A-Z0-9]{5})[- ]?([A-Z0-9]{5})[- ]?([A-Z0-9]{5})",
        )
        .expect("loose group pattern compiles")
    })
}

/// Canonicalize a suspected code.
///
/// Uppercases the input and strips everything that is not an ASCII letter or
/// digit. A dense run of exactly 25 characters becomes five hyphen-joined
/// groups. Otherwise the uppercased original is re-scanned for five loosely
/// separated 5-character groups. If neither applies, the dense run is
/// returned as-is; callers must not assume canonical shape.
///
/// Idempotent for inputs that reach the canonical form.
pub fn normalize(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    let dense: String = upper
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();

    if dense.len() == CODE_LEN {
        // Dense run is pure ASCII, chunking on bytes is safe.
        let groups: Vec<&str> = dense
            .as_bytes()
            .chunks(GROUP_LEN)
            .filter_map(|chunk| std::str::from_utf8(chunk).ok())
            .collect();
        return groups.join("-");
    }

    if let Some(caps) = loose_groups_re().captures(&upper) {
        let groups: Vec<&str> = (1..=5).filter_map(|i| caps.get(i).map(|m| m.as_str())).collect();
        return groups.join("-");
    }

    dense
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_dense_run_is_grouped() {
        assert_eq!(
            normalize("abcde12345fghij67890klmno"),
            "ABCDE-12345-FGHIJ-67890-KLMNO"
        );
    }

    #[test]
    fn test_mixed_separators_reach_canonical_form() {
        assert_eq!(
            normalize("abcde-12345 fghij67890klmno"),
            "ABCDE-12345-FGHIJ-67890-KLMNO"
        );
    }

    #[test]
    fn test_already_canonical_is_unchanged() {
        let canonical = "ABCDE-12345-FGHIJ-67890-KLMNO";
        assert_eq!(normalize(canonical), canonical);
    }

    #[test]
    fn test_loose_groups_inside_longer_text() {
        // 27 dense characters, so the dense path does not apply; the loose
        // scan still finds five separated groups.
        assert_eq!(
            normalize("ZZ ABCDE-12345 FGHIJ-67890-KLMNO"),
            "ABCDE-12345-FGHIJ-67890-KLMNO"
        );
    }

    #[test]
    fn test_degraded_fallback_returns_dense_run() {
        assert_eq!(normalize("too short"), "TOOSHORT");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!??"), "");
    }

    #[test]
    fn test_punctuation_is_stripped() {
        assert_eq!(
            normalize("a.b.c.d.e.1.2.3.4.5.f.g.h.i.j.6.7.8.9.0.k.l.m.n.o"),
            "ABCDE-12345-FGHIJ-67890-KLMNO"
        );
    }

    proptest! {
        /// Any 25 alphanumeric characters with arbitrary junk separators
        /// reach the canonical shape.
        #[test]
        fn prop_canonical_shape(chars in proptest::collection::vec("[a-zA-Z0-9]", 25),
                                sep in "[ \\-_.,:;!?#/]{0,3}") {
            let raw: String = chars.join(&sep);
            let out = normalize(&raw);
            prop_assert_eq!(out.len(), 29);
            let groups: Vec<&str> = out.split('-').collect();
            prop_assert_eq!(groups.len(), 5);
            for g in groups {
                prop_assert_eq!(g.len(), 5);
                prop_assert!(g.chars().all(|c| c.is_ascii_alphanumeric()));
                prop_assert!(!g.chars().any(|c| c.is_ascii_lowercase()));
            }
        }

        /// Normalization is idempotent once the canonical form is reached.
        #[test]
        fn prop_idempotent(chars in proptest::collection::vec("[A-Z0-9]", 25)) {
            let raw: String = chars.concat();
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once.clone());
        }
    }
}
