use serde_json::Value;

/// Best-effort numeric parse of a payload scalar.
///
/// Numbers pass through directly. Strings are accepted in the shapes research
/// agents tend to emit: a leading `$`, digit-group separators, and an optional
/// "billion"/"million" magnitude word. Anything unparseable is `None`.
pub fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number_str(s),
        _ => None,
    }
}

/// String-only variant of [`parse_number`].
pub fn parse_number_str(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    if let Some(scaled) = parse_magnitude(t) {
        return Some(scaled);
    }
    // Strip currency symbols and group separators, keep digits/dot/minus.
    let cleaned: String = t
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-'))
        .collect();
    cleaned.parse().ok()
}

/// Recognizes `"$2.5 billion"` / `"340 million"` style amounts.
fn parse_magnitude(t: &str) -> Option<f64> {
    let lower = t.to_ascii_lowercase();
    let (pos, mult) = if let Some(pos) = lower.find("billion") {
        (pos, 1e9)
    } else if let Some(pos) = lower.find("million") {
        (pos, 1e6)
    } else {
        return None;
    };

    let head = t[..pos].trim().trim_start_matches('$').trim();
    if head.is_empty()
        || !head
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ','))
    {
        return None;
    }
    let cleaned: String = head
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse::<f64>().ok().map(|n| n * mult)
}

/// Parses a percentage on the 0-100 scale.
///
/// Numbers are taken as already scaled. Strings may carry a trailing `%` and
/// a comma decimal separator.
pub fn parse_percent(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_percent_str(s),
        _ => None,
    }
}

/// String-only variant of [`parse_percent`].
pub fn parse_percent_str(s: &str) -> Option<f64> {
    let t = s.trim().trim_end_matches('%').trim().replace(',', ".");
    let body = t.strip_prefix('-').unwrap_or(&t);
    if body.is_empty()
        || body.chars().all(|c| c == '.')
        || !body.chars().all(|c| c.is_ascii_digit() || c == '.')
        || body.chars().filter(|c| *c == '.').count() > 1
    {
        return None;
    }
    t.parse().ok()
}

/// `"$97.69 billion USD"` for `97_690_000_000.0`; empty string for `None`.
pub fn format_billions_usd(n: Option<f64>) -> String {
    match n {
        Some(v) => format!("${:.2} billion USD", v / 1e9),
        None => String::new(),
    }
}

/// Thousands-grouped integer rendering, e.g. `164000.0` -> `"164,000"`.
pub fn format_count(n: f64) -> String {
    let whole = n.trunc() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if whole < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
