use serde_json::Value;

/// True iff `s` looks like an absolute web URL.
pub fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Collects every URL string found anywhere inside a payload node,
/// depth-first, in encounter order.
pub fn extract_urls(node: &Value, out: &mut Vec<String>) {
    match node {
        Value::String(s) if is_url(s) => out.push(s.clone()),
        Value::Object(map) => {
            for value in map.values() {
                extract_urls(value, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                extract_urls(item, out);
            }
        }
        _ => {}
    }
}

/// Picks a citation link from a list of candidates.
///
/// Each candidate is either a direct URL string or a nested structure to
/// deep-search for URLs. SEC filings win over everything else; otherwise the
/// first URL found in candidate order is used.
pub fn choose_link<'a>(candidates: impl IntoIterator<Item = Option<&'a Value>>) -> Option<String> {
    let mut urls = Vec::new();
    for candidate in candidates.into_iter().flatten() {
        match candidate {
            Value::String(s) if is_url(s) => urls.push(s.clone()),
            Value::Object(_) | Value::Array(_) => extract_urls(candidate, &mut urls),
            _ => {}
        }
    }
    if let Some(sec) = urls.iter().find(|u| u.contains("sec.gov")) {
        return Some(sec.clone());
    }
    urls.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prefers_sec_links() {
        let obj = json!({
            "Source": "https://example.com/report",
            "Filings": { "10-K": "https://sec.gov/Archives/x" }
        });
        let link = choose_link([Some(&obj)]);
        assert_eq!(link.as_deref(), Some("https://sec.gov/Archives/x"));
    }

    #[test]
    fn falls_back_to_first_url_in_order() {
        let a = json!("https://a.example/one");
        let b = json!("https://b.example/two");
        assert_eq!(
            choose_link([None, Some(&a), Some(&b)]).as_deref(),
            Some("https://a.example/one")
        );
        assert_eq!(choose_link([None, None]), None);
    }

    #[test]
    fn ignores_non_url_strings() {
        let v = json!("see the annual report");
        assert_eq!(choose_link([Some(&v)]), None);
    }
}
