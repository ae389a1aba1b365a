use crate::{key_matches, normalize};
use deckbrief_format::{is_url, scalar_text};
use itertools::Itertools;
use serde_json::{Map, Value};

const TITLE_HINTS: &[&str] = &["title", "name", "headline", "subject", "summary", "objective"];
const LEAD_HINTS: &[&str] = &["summary", "description", "details", "overview"];
const DATE_HINTS: &[&str] = &["date", "as of", "fiscal year", "fy"];
const SOURCE_HINTS: &[&str] = &["url", "link", "source", "reference"];

/// Scores how suitable a key/value pair is as the headline of a record.
///
/// Longer strings score higher (capped at 200 chars); pure URLs are capped at
/// 0.5 since they make poor titles; containers and numbers sit low. A
/// title-like key name adds a flat bonus.
pub fn score_main_field(key: &str, value: &Value) -> f64 {
    let base = match value {
        Value::String(s) if is_url(s) => 0.5,
        Value::String(s) => s.trim().chars().count().min(200) as f64 / 200.0,
        Value::Number(_) => 0.4,
        Value::Object(_) => 0.3,
        Value::Array(_) => 0.35,
        _ => 0.2,
    };
    if key_matches(key, TITLE_HINTS) {
        base + 0.3
    } else {
        base
    }
}

/// Chooses the record's main text: the highest-scoring field if it holds a
/// non-empty string, else the first usable non-URL string field, else a
/// flattened `"key: value; ..."` join of the whole record.
///
/// The returned key is the field the text was taken from, so callers can
/// exclude it when rendering the remaining subfields.
pub fn choose_main_text(map: &Map<String, Value>) -> (Option<&str>, String) {
    let mut best: Option<(&str, &Value, f64)> = None;
    for (k, v) in map {
        let score = score_main_field(k, v);
        // Strict comparison keeps the first of equally-scored fields.
        if best.is_none_or(|(_, _, s)| score > s) {
            best = Some((k, v, score));
        }
    }
    let Some((best_key, best_value, _)) = best else {
        return (None, String::new());
    };

    if let Value::String(s) = best_value {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            return (Some(best_key), trimmed.to_string());
        }
    }
    for (k, v) in map {
        if let Value::String(s) = v {
            let trimmed = s.trim();
            if !trimmed.is_empty() && !is_url(s) {
                return (Some(k.as_str()), trimmed.to_string());
            }
        }
    }
    (Some(best_key), flatten_record(map))
}

/// Orders a record's remaining subfields for display: leads first, dates
/// second, ordinary values third, sources and URLs last; alphabetical by
/// normalized key within each bucket.
pub fn subfield_order<'a>(map: &'a Map<String, Value>, skip: Option<&str>) -> Vec<&'a str> {
    let mut keys: Vec<&str> = map
        .keys()
        .map(String::as_str)
        .filter(|k| Some(*k) != skip)
        .collect();
    keys.sort_by_cached_key(|k| (key_priority(k, &map[*k]), normalize(k)));
    keys
}

fn key_priority(key: &str, value: &Value) -> u8 {
    if key_matches(key, LEAD_HINTS) {
        return 0;
    }
    if key_matches(key, DATE_HINTS) {
        return 1;
    }
    if value.as_str().is_some_and(is_url) || key_matches(key, SOURCE_HINTS) {
        return 3;
    }
    2
}

/// `"key: value; ..."` join over every field of a record.
pub fn flatten_pairs(map: &Map<String, Value>) -> String {
    map.iter()
        .map(|(k, v)| format!("{k}: {}", scalar_text(v)))
        .join("; ")
}

/// Like [`flatten_pairs`] but skips null and empty-string fields, for use as
/// a last-resort headline.
pub fn flatten_record(map: &Map<String, Value>) -> String {
    map.iter()
        .filter(|(_, v)| !matches!(v, Value::Null) && v.as_str() != Some(""))
        .map(|(k, v)| format!("{k}: {}", scalar_text(v)))
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn scoring_is_deterministic() {
        let v = json!("A headline of moderate length");
        let first = score_main_field("Title", &v);
        for _ in 0..10 {
            assert_eq!(score_main_field("Title", &v), first);
        }
    }

    #[test]
    fn titled_field_beats_untitled_id() {
        let record = obj(json!({
            "id": "abc",
            "Title": "Quarterly results beat analyst expectations"
        }));
        let (key, text) = choose_main_text(&record);
        assert_eq!(key, Some("Title"));
        assert_eq!(text, "Quarterly results beat analyst expectations");
    }

    #[test]
    fn url_score_is_capped() {
        let record = obj(json!({
            "Source": "https://example.com/a-very-long-url-that-would-otherwise-win-on-length-alone-seriously-quite-long-indeed",
            "Note": "A reasonably descriptive sentence about this record that keeps going until it passes one hundred characters"
        }));
        let (key, _) = choose_main_text(&record);
        assert_eq!(key, Some("Note"));
    }

    #[test]
    fn falls_back_to_flattened_record() {
        let record = obj(json!({ "Count": 12, "Active": true, "Gone": null }));
        let (_, text) = choose_main_text(&record);
        assert_eq!(text, "Count: 12; Active: true");
    }

    #[test]
    fn subfields_bucket_then_alphabetize() {
        let record = obj(json!({
            "Source": "https://example.com",
            "As Of": "2024-03-15",
            "Amount": 10,
            "Description": "details here",
            "Category": "news"
        }));
        let order = subfield_order(&record, None);
        assert_eq!(order, vec!["Description", "As Of", "Amount", "Category", "Source"]);
    }

    #[test]
    fn skip_key_is_excluded() {
        let record = obj(json!({ "Title": "t", "Body": "b" }));
        let order = subfield_order(&record, Some("Title"));
        assert_eq!(order, vec!["Body"]);
    }
}
