use crate::key_matches;
use serde_json::{Map, Value};

/// Finds the first value at the current mapping level whose key matches any
/// synonym. Insertion order decides ties.
pub fn find_at_level<'a>(map: &'a Map<String, Value>, synonyms: &[&str]) -> Option<&'a Value> {
    map.iter()
        .find(|(k, _)| key_matches(k, synonyms))
        .map(|(_, v)| v)
}

/// Recursive key search: a match at the current level wins over anything
/// deeper; otherwise nested mappings are searched depth-first, including
/// mappings found inside list items. First match wins.
pub fn deep_find<'a>(map: &'a Map<String, Value>, synonyms: &[&str]) -> Option<&'a Value> {
    if let Some(hit) = find_at_level(map, synonyms) {
        return Some(hit);
    }
    for value in map.values() {
        match value {
            Value::Object(inner) => {
                if let Some(hit) = deep_find(inner, synonyms) {
                    return Some(hit);
                }
            }
            Value::Array(items) => {
                for item in items {
                    if let Value::Object(inner) = item {
                        if let Some(hit) = deep_find(inner, synonyms) {
                            return Some(hit);
                        }
                    }
                }
            }
            _ => {}
        }
    }
    None
}

/// Returns the first string value at the current mapping level whose key
/// matches any synonym. Matching keys with non-string values are passed over.
pub fn first_string<'a>(map: &'a Map<String, Value>, synonyms: &[&str]) -> Option<&'a str> {
    map.iter().find_map(|(k, v)| {
        if key_matches(k, synonyms) {
            v.as_str()
        } else {
            None
        }
    })
}
