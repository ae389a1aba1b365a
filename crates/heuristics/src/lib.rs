//! Key-matching heuristics.
//!
//! Research payloads arrive with inconsistent key names ("Revenue",
//! "Total Revenue", "latest_revenue") and unpredictable nesting. This crate
//! normalizes field names, matches them against synonym sets, locates
//! semantically-equivalent fields by deep search, and decides which field of
//! a record is its headline.

mod deep;
mod record;

pub use deep::{deep_find, find_at_level, first_string};
pub use record::{choose_main_text, flatten_pairs, flatten_record, score_main_field, subfield_order};

use itertools::Itertools;

/// Canonical form of a field name: whitespace runs collapsed, trimmed,
/// lowercased.
pub fn normalize(key: &str) -> String {
    key.split_whitespace().join(" ").to_lowercase()
}

/// True if the normalized key contains any of the synonyms as a substring.
pub fn key_matches(key: &str, synonyms: &[&str]) -> bool {
    let nk = normalize(key);
    synonyms.iter().any(|s| nk.contains(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize("  Fiscal   Year \tClose "), "fiscal year close");
        assert_eq!(normalize("Revenue"), "revenue");
    }

    #[test]
    fn key_matches_is_substring_based() {
        assert!(key_matches("Latest Annual Revenue", &["revenue"]));
        assert!(key_matches("SEC Source URL", &["url", "link"]));
        assert!(!key_matches("Margin", &["revenue", "sales"]));
    }
}
