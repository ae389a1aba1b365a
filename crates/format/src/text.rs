use itertools::Itertools;
use serde_json::Value;

/// Plain-text rendering of a payload scalar.
///
/// Strings come through unquoted, numbers and booleans via their JSON form,
/// null as the empty string. Containers fall back to a compact readable form
/// so that a renderer handed an unexpected shape degrades to text instead of
/// failing.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(scalar_text).join(", "),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{k}: {}", scalar_text(v)))
            .join("; "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_render_plainly() {
        assert_eq!(scalar_text(&json!("hi")), "hi");
        assert_eq!(scalar_text(&json!(3.5)), "3.5");
        assert_eq!(scalar_text(&json!(true)), "true");
        assert_eq!(scalar_text(&json!(null)), "");
    }

    #[test]
    fn containers_degrade_to_readable_text() {
        assert_eq!(scalar_text(&json!([1, "a"])), "1, a");
        assert_eq!(scalar_text(&json!({"a": 1, "b": "x"})), "a: 1; b: x");
    }
}
