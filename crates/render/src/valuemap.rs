//! Value-map benefit-table transformer.
//!
//! Benefit tables arrive in an alternate shape: a raw array of row records,
//! or a mapping wrapping such an array under a `BenefitTable` key (or, as a
//! fallback, under any key). This module normalizes whatever arrives into
//! the canonical [`TableSpec`] consumed by the paginator. It never fails: an
//! unrecognizable payload yields an empty spec, which the paginator treats
//! as "nothing to render".

use crate::table::TableSpec;
use deckbrief_format::scalar_text;
use deckbrief_heuristics::flatten_pairs;
use itertools::Itertools;
use serde_json::{Map, Value};

/// Preferred column ordering; headers outside this list go last,
/// alphabetically.
const PREFERRED_HEADER_ORDER: &[&str] = &[
    "Challenge",
    "Description",
    "ScenarioRecordID",
    "KPI",
    "Workload",
    "BenefitFormula",
    "Inputs",
    "CalculatedBenefit",
    "CalculatedBenefitUSD",
    "BenefitCurrency",
    "Notes",
];

const BENEFIT_TABLE_KEY: &str = "BenefitTable";

/// Normalizes a value-map payload into the canonical table form.
pub fn benefit_table_spec(value: &Value, company_name: &str) -> TableSpec {
    let title = benefit_title(company_name);
    let Some(records) = extract_records(value) else {
        log::warn!("no valid benefit table found in value map payload");
        return TableSpec {
            title,
            headers: Vec::new(),
            rows: Vec::new(),
        };
    };

    let headers = match records.first() {
        Some(Value::Object(first)) => extract_headers(first),
        _ => {
            log::warn!("benefit table rows must be objects; skipping table");
            Vec::new()
        }
    };

    let rows = records
        .iter()
        .filter_map(|record| match record {
            Value::Object(map) => Some(project_row(map, &headers)),
            _ => {
                log::warn!("skipping non-object row in benefit table");
                None
            }
        })
        .collect();

    TableSpec { title, headers, rows }
}

/// Locates the row array: a direct array of records, the `BenefitTable` key,
/// or the first array-of-records value in the mapping.
fn extract_records(value: &Value) -> Option<&[Value]> {
    let is_record_array =
        |items: &[Value]| items.first().is_some_and(Value::is_object);
    match value {
        Value::Array(items) if is_record_array(items) => Some(items),
        Value::Object(map) => {
            if let Some(Value::Array(items)) = map.get(BENEFIT_TABLE_KEY) {
                if !items.is_empty() {
                    return Some(items);
                }
            }
            map.values().find_map(|v| match v {
                Value::Array(items) if is_record_array(items) => Some(items.as_slice()),
                _ => None,
            })
        }
        _ => None,
    }
}

/// Headers come from the first record's keys, minus fields too complex to
/// flatten (arrays of records), ordered by the preferred list first and
/// alphabetically after.
fn extract_headers(first: &Map<String, Value>) -> Vec<String> {
    let mut remaining: Vec<&str> = first
        .iter()
        .filter(|(_, v)| !is_complex(v))
        .map(|(k, _)| k.as_str())
        .collect();

    let mut ordered = Vec::with_capacity(remaining.len());
    for preferred in PREFERRED_HEADER_ORDER {
        if let Some(pos) = remaining.iter().position(|k| k == preferred) {
            ordered.push(remaining.remove(pos).to_string());
        }
    }
    remaining.sort_unstable();
    ordered.extend(remaining.into_iter().map(str::to_string));
    ordered
}

fn is_complex(value: &Value) -> bool {
    matches!(value, Value::Array(items) if items.first().is_some_and(Value::is_object))
}

/// Projects one record onto the selected headers, flattening every value to
/// a display string.
fn project_row(record: &Map<String, Value>, headers: &[String]) -> Map<String, Value> {
    headers
        .iter()
        .map(|h| {
            let flattened = record.get(h).map(flatten_value).unwrap_or_default();
            (h.clone(), Value::String(flattened))
        })
        .collect()
}

fn flatten_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Object(map) => flatten_pairs(map),
        Value::Array(items) => items.iter().map(scalar_text).join(", "),
        other => scalar_text(other),
    }
}

fn benefit_title(company_name: &str) -> String {
    let trimmed = company_name.trim();
    if trimmed.is_empty() {
        "Value Map Benefit Table".to_string()
    } else {
        format!("{trimmed} Value Map Benefit Table")
    }
}
