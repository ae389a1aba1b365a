//! Hierarchical bullet renderer.
//!
//! Walks an arbitrarily shaped payload value (mapping / sequence / scalar at
//! any depth) and emits an ordered sequence of indented bullet lines. No key
//! names are assumed: each record's headline is chosen by scoring, its
//! remaining subfields are bucket-ordered, and URLs become hyperlinked runs.

use crate::error::RenderError;
use crate::theme;
use deckbrief_format::{extract_urls, is_url, parse_date, scalar_text};
use deckbrief_heuristics::{choose_main_text, key_matches, normalize, subfield_order};
use deckbrief_sink::{DocumentSink, RenderedLine, TextSegment};
use serde_json::{Map, Value};
use std::borrow::Cow;

const LIST_KEY_HINTS: &[&str] = &["list", "items", "entries", "highlights", "data", "points"];
const DATE_LABEL_HINTS: &[&str] = &["date", "as of", "fiscal year", "fy"];

/// Renders a whole payload as bullet sections into the container holding
/// `marker`. Top-level keys whose normalized names appear in `skip` (e.g. the
/// identity field handled by the substitution pass) are left out.
pub fn render_bullets<S: DocumentSink>(
    sink: &mut S,
    marker: &str,
    payload: &Map<String, Value>,
    skip: &[&str],
) -> Result<(), RenderError> {
    let (_page, container) = sink
        .find_container_with_marker(marker)
        .ok_or_else(|| RenderError::MarkerNotFound(marker.to_string()))?;
    sink.clear_container(container)?;

    let lines = section_lines(payload, skip);
    if lines.is_empty() {
        log::warn!("empty payload for marker {marker}; leaving the section blank");
    }
    for line in lines {
        sink.append_line(container, line)?;
    }
    Ok(())
}

/// Pure form of the renderer: payload in, ordered lines out.
pub fn section_lines(payload: &Map<String, Value>, skip: &[&str]) -> Vec<RenderedLine> {
    let mut out = Vec::new();
    for (name, value) in payload {
        let normalized = normalize(name);
        if skip.iter().any(|s| normalized == *s) {
            continue;
        }
        let (items, meta) = section_items(value);
        let suffix = section_suffix(meta);
        out.push(RenderedLine::heading(
            format!("{name}{suffix}:"),
            theme::HEADER_PT,
        ));

        for item in &items {
            match item.as_ref() {
                Value::Object(record) => {
                    let (main_key, text) = choose_main_text(record);
                    out.push(RenderedLine::text(text, 0, theme::BULLET_PT));
                    for key in subfield_order(record, main_key) {
                        render_node(&mut out, key, &record[key], 1);
                    }
                }
                Value::Array(inner) => {
                    for x in inner {
                        out.push(RenderedLine::text(scalar_text(x), 0, theme::BULLET_PT));
                    }
                }
                other => {
                    out.push(RenderedLine::text(scalar_text(other), 0, theme::BULLET_PT));
                }
            }
        }
    }
    out
}

/// Recursively emits one labelled value as bullets at `level`.
pub fn render_node(out: &mut Vec<RenderedLine>, label: &str, value: &Value, level: u8) {
    match value {
        Value::Null => {}
        Value::String(s) if s.is_empty() => {}
        Value::String(s) if is_url(s) => {
            out.push(RenderedLine::from_segments(
                vec![
                    TextSegment::plain(format!("{label}: ")),
                    TextSegment::linked(s.clone(), s.clone()),
                ],
                level,
                theme::SUB_BULLET_PT,
            ));
        }
        Value::Array(items) => render_list(out, label, items, level),
        Value::Object(record) => {
            let (main_key, text) = choose_main_text(record);
            out.push(RenderedLine::text(
                format!("{label}: {text}"),
                level,
                theme::SUB_BULLET_PT,
            ));
            for key in subfield_order(record, main_key) {
                render_node(out, key, &record[key], level + 1);
            }
        }
        scalar => {
            let text = match scalar {
                Value::String(s) if key_matches(label, DATE_LABEL_HINTS) => parse_date(s),
                other => scalar_text(other),
            };
            out.push(RenderedLine::text(
                format!("{label}: {text}"),
                level,
                theme::SUB_BULLET_PT,
            ));
        }
    }
}

fn render_list(out: &mut Vec<RenderedLine>, label: &str, items: &[Value], level: u8) {
    let all_scalars = items
        .iter()
        .all(|v| !matches!(v, Value::Object(_) | Value::Array(_)));
    if all_scalars {
        for item in items {
            out.push(RenderedLine::text(
                format!("{label}: {}", scalar_text(item)),
                level,
                theme::SUB_BULLET_PT,
            ));
        }
        return;
    }
    for item in items {
        match item {
            Value::Object(record) => {
                let (_, text) = choose_main_text(record);
                out.push(RenderedLine::text(
                    format!("{label}: {text}"),
                    level,
                    theme::SUB_BULLET_PT,
                ));
                let mut urls = Vec::new();
                extract_urls(item, &mut urls);
                for url in urls {
                    out.push(RenderedLine::from_segments(
                        vec![
                            TextSegment::plain("link: "),
                            TextSegment::linked(url.clone(), url),
                        ],
                        level + 1,
                        theme::LINK_PT,
                    ));
                }
            }
            other => {
                out.push(RenderedLine::text(
                    format!("{label}: {}", scalar_text(other)),
                    level,
                    theme::SUB_BULLET_PT,
                ));
            }
        }
    }
}

/// Extracts the item list of a section, however the section is shaped:
/// a mapping with a list under a list-like key (the mapping doubles as
/// metadata), a mapping with any list value, a bare list, a flat mapping
/// treated as a single record, or a scalar wrapped as a one-field record.
fn section_items(value: &Value) -> (Vec<Cow<'_, Value>>, Option<&Map<String, Value>>) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                if let Value::Array(items) = v {
                    if key_matches(k, LIST_KEY_HINTS) {
                        return (items.iter().map(Cow::Borrowed).collect(), Some(map));
                    }
                }
            }
            for v in map.values() {
                if let Value::Array(items) = v {
                    return (items.iter().map(Cow::Borrowed).collect(), Some(map));
                }
            }
            (vec![Cow::Borrowed(value)], Some(map))
        }
        Value::Array(items) => (items.iter().map(Cow::Borrowed).collect(), None),
        scalar => {
            let mut wrapper = Map::new();
            wrapper.insert("Value".to_string(), scalar.clone());
            (vec![Cow::Owned(Value::Object(wrapper))], None)
        }
    }
}

/// Builds the `" (FY June 30, 2024)"` style header suffix from section
/// metadata, if it carries a date-like string field.
fn section_suffix(meta: Option<&Map<String, Value>>) -> String {
    let Some(map) = meta else {
        return String::new();
    };
    for (k, v) in map {
        let Some(s) = v.as_str() else { continue };
        let nk = normalize(k);
        if !["fiscal year", "as of", "date"].iter().any(|w| nk.contains(w)) {
            continue;
        }
        let nice = parse_date(s);
        if nice.is_empty() {
            return String::new();
        }
        return if nk.contains("fiscal year") || nk == "fy" {
            format!(" (FY {nice})")
        } else {
            format!(" ({nice})")
        };
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    fn texts(lines: &[RenderedLine]) -> Vec<(u8, String)> {
        lines.iter().map(|l| (l.indent, l.plain_text())).collect()
    }

    #[test]
    fn sections_get_headers_and_item_bullets() {
        let payload = obj(json!({
            "Recent News": {
                "As Of": "2024-03-15",
                "News Items": [
                    { "Headline": "Acme ships a record number of widgets in Q1", "Source": "https://example.com/n1" },
                    { "Headline": "Acme opens plant" }
                ]
            }
        }));
        let lines = section_lines(&payload, &[]);
        let t = texts(&lines);
        assert_eq!(t[0], (0, "Recent News (March 15, 2024):".to_string()));
        assert_eq!(t[1], (0, "Acme ships a record number of widgets in Q1".to_string()));
        assert!(t.iter().any(|(_, s)| s == "Source: https://example.com/n1"));
        assert!(t.iter().any(|(_, s)| s == "Acme opens plant"));
    }

    #[test]
    fn fiscal_year_metadata_gets_fy_prefix() {
        let payload = obj(json!({
            "Financial Highlights": {
                "Fiscal Year": "2024",
                "Highlights": ["Record revenue"]
            }
        }));
        let lines = section_lines(&payload, &[]);
        assert_eq!(
            lines[0].plain_text(),
            "Financial Highlights (FY December 31, 2024):"
        );
    }

    #[test]
    fn scalar_sections_wrap_as_value_records() {
        let payload = obj(json!({ "Founded": 1998 }));
        let lines = section_lines(&payload, &[]);
        assert_eq!(lines[0].plain_text(), "Founded:");
        assert_eq!(lines[1].plain_text(), "Value: 1998");
    }

    #[test]
    fn skip_list_drops_identity_section() {
        let payload = obj(json!({ "Company  Name": "Acme", "Overview": "Big" }));
        let lines = section_lines(&payload, &["company name"]);
        assert!(lines.iter().all(|l| !l.plain_text().contains("Acme")));
        assert!(lines.iter().any(|l| l.plain_text() == "Overview:"));
    }

    #[test]
    fn urls_become_hyperlinked_runs() {
        let mut out = Vec::new();
        render_node(&mut out, "Source", &json!("https://sec.gov/x"), 1);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].segments[1].link.as_deref(), Some("https://sec.gov/x"));
    }

    #[test]
    fn null_and_empty_emit_nothing() {
        let mut out = Vec::new();
        render_node(&mut out, "A", &json!(null), 0);
        render_node(&mut out, "B", &json!(""), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn scalar_list_emits_one_line_per_item() {
        let mut out = Vec::new();
        render_node(&mut out, "Tag", &json!(["a", "b", 3]), 1);
        assert_eq!(
            texts(&out),
            vec![
                (1, "Tag: a".to_string()),
                (1, "Tag: b".to_string()),
                (1, "Tag: 3".to_string())
            ]
        );
    }

    #[test]
    fn mixed_list_emits_headlines_with_link_children() {
        let headline = "Launch event draws record crowds across three continents";
        let mut out = Vec::new();
        render_node(
            &mut out,
            "Story",
            &json!([{ "Title": headline, "URL": "https://example.com/l" }, "plain"]),
            0,
        );
        let t = texts(&out);
        assert_eq!(t[0], (0, format!("Story: {headline}")));
        assert_eq!(t[1], (1, "link: https://example.com/l".to_string()));
        assert_eq!(t[2], (0, "Story: plain".to_string()));
    }

    #[test]
    fn date_labelled_scalars_are_formatted() {
        let mut out = Vec::new();
        render_node(&mut out, "As Of", &json!("2024-06-30"), 1);
        assert_eq!(out[0].plain_text(), "As Of: June 30, 2024");
    }

    #[test]
    fn nested_records_indent_their_subfields() {
        let mut out = Vec::new();
        render_node(
            &mut out,
            "Segment",
            &json!({ "Name": "Cloud", "Growth": "12%" }),
            0,
        );
        let t = texts(&out);
        assert_eq!(t[0], (0, "Segment: Cloud".to_string()));
        assert_eq!(t[1], (1, "Growth: 12%".to_string()));
    }
}
