use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

const DISPLAY_FORMAT: &str = "%B %d, %Y";

/// Renders a date-ish string as `"March 15, 2024"`.
///
/// Accepted inputs, in order: full ISO 8601 (with or without time/offset),
/// `YYYY-MM` (taken as the first of the month), bare `YYYY` (taken as
/// December 31 of that year). Anything else is returned unchanged, so callers
/// can always substitute the result into a sentence.
pub fn parse_date(raw: &str) -> String {
    let t = raw.trim();
    if t.is_empty() {
        return String::new();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(t) {
        return dt.date_naive().format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(t, "%Y-%m-%dT%H:%M:%S") {
        return dt.date().format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(t, "%Y-%m-%d") {
        return d.format(DISPLAY_FORMAT).to_string();
    }
    if is_year_month(t) {
        if let Ok(d) = NaiveDate::parse_from_str(&format!("{t}-01"), "%Y-%m-%d") {
            return d.format(DISPLAY_FORMAT).to_string();
        }
    }
    if t.len() == 4 && t.chars().all(|c| c.is_ascii_digit()) {
        if let Some(d) = t
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 12, 31))
        {
            return d.format(DISPLAY_FORMAT).to_string();
        }
    }
    t.to_string()
}

/// [`parse_date`] over a payload node. Non-string nodes render as empty.
pub fn parse_date_value(value: &Value) -> String {
    value.as_str().map(parse_date).unwrap_or_default()
}

fn is_year_month(t: &str) -> bool {
    let bytes = t.as_bytes();
    bytes.len() == 7
        && bytes[4] == b'-'
        && t[..4].chars().all(|c| c.is_ascii_digit())
        && t[5..].chars().all(|c| c.is_ascii_digit())
}
