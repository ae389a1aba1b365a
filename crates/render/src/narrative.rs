//! Narrative metrics renderer.
//!
//! Deep-searches a loosely-structured metrics payload for revenue, gross
//! margins and headcount, and emits hand-crafted sentences with inline
//! citation links. Every pass is independent and optional: a metric the
//! payload does not carry is simply omitted, and missing sub-fields degrade
//! to placeholder phrases rather than failing.

use crate::error::RenderError;
use crate::theme;
use deckbrief_format::{
    choose_link, format_billions_usd, format_count, parse_date, parse_number, parse_number_str,
    parse_percent_str,
};
use deckbrief_heuristics::{deep_find, first_string, key_matches, normalize};
use deckbrief_sink::{DocumentSink, RenderedLine, TextSegment};
use serde_json::{Map, Value};

const REVENUE_KEYS: &[&str] = &[
    "revenue",
    "sales",
    "total revenue",
    "latest revenue",
    "annual revenue",
];
const INDUSTRY_MARGIN_KEYS: &[&str] = &[
    "industry average gross margin",
    "industry gross margin",
    "industry avg",
];
const COMPANY_MARGIN_KEYS: &[&str] = &["company gross margin", "gross margin"];
const EMPLOYEE_KEYS: &[&str] = &["employee count", "headcount", "employees"];

const FISCAL_KEYS: &[&str] = &["fiscal year close date", "fiscal year", "as of", "date"];
const AS_OF_KEYS: &[&str] = &["as of", "date", "fiscal year close date", "fiscal year"];

/// Renders the narrative section into the container holding `marker`.
pub fn render_narrative<S: DocumentSink>(
    sink: &mut S,
    marker: &str,
    payload: &Map<String, Value>,
    company_name: Option<&str>,
) -> Result<(), RenderError> {
    let (_page, container) = sink
        .find_container_with_marker(marker)
        .ok_or_else(|| RenderError::MarkerNotFound(marker.to_string()))?;
    sink.clear_container(container)?;

    let lines = narrative_lines(payload, company_name);
    if lines.is_empty() {
        log::warn!("no recognizable metrics in payload for marker {marker}");
    }
    for line in lines {
        sink.append_line(container, line)?;
    }
    Ok(())
}

/// Pure form of the renderer: payload in, sentence lines out.
pub fn narrative_lines(payload: &Map<String, Value>, company_name: Option<&str>) -> Vec<RenderedLine> {
    let company = resolve_company_name(payload, company_name);
    let mut out = Vec::new();
    revenue_pass(payload, &company, &mut out);
    let industry_margin = industry_margin_pass(payload, &mut out);
    company_margin_pass(payload, industry_margin, &mut out);
    employee_pass(payload, &mut out);
    out
}

/// Uses the explicit name when given, else probes common name-like keys,
/// else falls back to a generic subject.
fn resolve_company_name(payload: &Map<String, Value>, explicit: Option<&str>) -> String {
    if let Some(name) = explicit {
        let trimmed = name.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    for key in ["Company Name", "Name", "Company"] {
        if let Some(s) = payload.get(key).and_then(Value::as_str) {
            let trimmed = s.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }
    "The company".to_string()
}

fn revenue_pass(payload: &Map<String, Value>, company: &str, out: &mut Vec<RenderedLine>) {
    let Some(Value::Object(rev)) = deep_find(payload, REVENUE_KEYS) else {
        return;
    };

    // Known amount-like keys first, then the first large number anywhere.
    let mut amount = None;
    for want in ["amount", "value", "revenue", "sales"] {
        if let Some((_, v)) = rev.iter().find(|(k, _)| normalize(k) == want) {
            amount = parse_number(v);
            if amount.is_some() {
                break;
            }
        }
    }
    if amount.is_none() {
        amount = rev
            .values()
            .filter_map(parse_number)
            .find(|n| *n > 1_000_000.0);
    }
    let amount_txt = match amount {
        Some(n) => format_billions_usd(Some(n)),
        None => "an undisclosed amount".to_string(),
    };

    let fy_txt = fiscal_phrase(rev, FISCAL_KEYS, "the latest fiscal year");

    let link_main = choose_link([rev.get("Source"), rev.get("URL"), deep_find(payload, REVENUE_KEYS)]);
    let link_sec = choose_link([rev.get("SEC Source"), rev.get("SEC URL")]);

    out.push(sentence(
        format!(
            "{company} reported an annual revenue of {amount_txt} for the fiscal year ending {fy_txt} "
        ),
        link_main,
    ));
    if let Some(sec) = link_sec {
        out.push(RenderedLine::from_segments(
            vec![
                TextSegment::plain("Additional filing: "),
                TextSegment::linked(sec.clone(), sec),
            ],
            1,
            theme::SUB_BULLET_PT,
        ));
    }
}

/// Returns the industry average margin so the company pass can compare.
fn industry_margin_pass(payload: &Map<String, Value>, out: &mut Vec<RenderedLine>) -> Option<f64> {
    let Some(Value::Object(ind)) = deep_find(payload, INDUSTRY_MARGIN_KEYS) else {
        return None;
    };

    let industry = first_string(ind, &["industry"])
        .or_else(|| first_string(ind, &["sector"]))
        .unwrap_or("industry");
    let average = industry_average_margin(ind);
    let margin_txt = match average {
        Some(pct) => format!("{pct:.2}%"),
        None => "an unspecified value".to_string(),
    };
    let link = choose_link([ind.get("Source"), ind.get("URL"), deep_find(payload, INDUSTRY_MARGIN_KEYS)]);

    out.push(sentence(
        format!(
            "The industry average gross margin for the \"{industry}\" industry is approximately {margin_txt} "
        ),
        link,
    ));
    average
}

fn company_margin_pass(
    payload: &Map<String, Value>,
    industry_average: Option<f64>,
    out: &mut Vec<RenderedLine>,
) {
    let Some(Value::Object(comp)) = deep_find(payload, COMPANY_MARGIN_KEYS) else {
        return;
    };

    let margin = ["gross margin", "margin"]
        .iter()
        .find_map(|&key| first_string(comp, &[key]).and_then(parse_percent_str));
    let margin_txt = match margin {
        Some(pct) => format!("{pct:.2}%"),
        None => "an unspecified value".to_string(),
    };
    let fy_txt = fiscal_phrase(comp, FISCAL_KEYS, "the latest fiscal year");
    let link = choose_link([comp.get("Source"), comp.get("URL"), deep_find(payload, COMPANY_MARGIN_KEYS)]);

    let tail = match (industry_average, margin) {
        (Some(avg), Some(pct)) if (avg - pct).abs() < 1e-6 => ", matching the industry average",
        _ => "",
    };

    out.push(sentence(
        format!(
            "The company's gross margin for the fiscal year ending {fy_txt} was {margin_txt}{tail} "
        ),
        link,
    ));
}

fn employee_pass(payload: &Map<String, Value>, out: &mut Vec<RenderedLine>) {
    let Some(Value::Object(emp)) = deep_find(payload, EMPLOYEE_KEYS) else {
        return;
    };

    let headcount = emp.iter().find_map(|(k, v)| {
        if key_matches(k, &["headcount", "employees", "employee count", "count", "total"]) {
            Some(v)
        } else {
            None
        }
    });
    let headcount_txt = match headcount {
        Some(Value::Number(n)) => n
            .as_f64()
            .map(format_count)
            .unwrap_or_else(|| n.to_string()),
        Some(Value::String(s)) => parse_number_str(s)
            .map(format_count)
            .unwrap_or_else(|| s.clone()),
        Some(other) if !other.is_null() => other.to_string(),
        _ => "an unspecified number".to_string(),
    };

    let as_of_txt = fiscal_phrase(emp, AS_OF_KEYS, "the stated date");
    let link = choose_link([emp.get("Source"), emp.get("URL"), deep_find(payload, EMPLOYEE_KEYS)]);

    out.push(sentence(
        format!("The company had {headcount_txt} employees as of {as_of_txt} "),
        link,
    ));
}

/// First date-like string field tried in fixed key order, formatted for
/// display, else the fallback phrase.
fn fiscal_phrase(map: &Map<String, Value>, keys: &[&str], fallback: &str) -> String {
    keys.iter()
        .find_map(|&key| first_string(map, &[key]))
        .filter(|s| !s.trim().is_empty())
        .map(parse_date)
        .unwrap_or_else(|| fallback.to_string())
}

/// A sentence line with an optional trailing `"(link)."` citation.
fn sentence(text: String, link: Option<String>) -> RenderedLine {
    let mut segments = vec![TextSegment::plain(text)];
    match link {
        Some(url) => {
            segments.push(TextSegment::plain("("));
            segments.push(TextSegment::linked(url.clone(), url));
            segments.push(TextSegment::plain(")."));
        }
        None => segments.push(TextSegment::plain(".")),
    }
    RenderedLine::from_segments(segments, 0, theme::BULLET_PT)
}

fn industry_average_margin(ind: &Map<String, Value>) -> Option<f64> {
    ["average gross margin", "gross margin", "avg", "average"]
        .iter()
        .find_map(|&key| first_string(ind, &[key]).and_then(parse_percent_str))
}
