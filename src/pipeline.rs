use serde_json::{Map, Value};

use deckbrief_heuristics::first_string;
use deckbrief_render::{TableSpec, benefit_table_spec, render_bullets, render_narrative, render_table};
use deckbrief_sink::DocumentSink;

use crate::config::{
    COMPANY_NAME_TOKENS, HIGHLIGHTS_MARKER, IDENTITY_KEYS, INDUSTRY_MARKER, METRICS_MARKER,
    PROFILE_MARKER,
};
use crate::error::PipelineError;

/// The four research payloads a rendering run consumes, one per marker.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub profile: Map<String, Value>,
    pub metrics: Map<String, Value>,
    pub highlights: Map<String, Value>,
    /// Either an object (canonical `headers`/`rows` or a value map) or an
    /// array of records.
    pub industry: Value,
}

impl RenderRequest {
    /// Builds a request from a top-level JSON object keyed by payload name.
    pub fn from_json(body: &Value) -> Result<Self, PipelineError> {
        let Some(map) = body.as_object() else {
            return Err(PipelineError::Validation(
                "request body must be a JSON object".into(),
            ));
        };

        let mut missing = Vec::new();
        for key in [
            "CompanyProfile",
            "CompanyMetrics",
            "CompanyHighlights",
            "IndustryResearch",
        ] {
            if !map.contains_key(key) {
                missing.push(key);
            }
        }
        if !missing.is_empty() {
            return Err(PipelineError::Validation(format!(
                "missing payloads: {}",
                missing.join(", ")
            )));
        }

        let request = Self {
            profile: require_object(map, "CompanyProfile")?,
            metrics: require_object(map, "CompanyMetrics")?,
            highlights: require_object(map, "CompanyHighlights")?,
            industry: map["IndustryResearch"].clone(),
        };
        request.validate()?;
        Ok(request)
    }

    /// Shape checks that do not depend on the document: the industry payload
    /// may be an object or an array of records, and the profile must carry a
    /// resolvable company name. Checked before any rendering starts.
    pub fn validate(&self) -> Result<(), PipelineError> {
        match &self.industry {
            Value::Object(_) | Value::Array(_) => {}
            other => {
                return Err(PipelineError::Validation(format!(
                    "IndustryResearch must be an object or array, got {}",
                    type_name(other)
                )));
            }
        }
        self.company_name()?;
        Ok(())
    }

    /// Resolves the company name from the profile payload. The name anchors
    /// identity substitution, so a profile without one is rejected.
    pub fn company_name(&self) -> Result<&str, PipelineError> {
        first_string(&self.profile, IDENTITY_KEYS).ok_or_else(|| {
            PipelineError::Validation(format!(
                "CompanyProfile has no company name under any of: {}",
                IDENTITY_KEYS.join(", ")
            ))
        })
    }
}

fn require_object(map: &Map<String, Value>, key: &str) -> Result<Map<String, Value>, PipelineError> {
    match &map[key] {
        Value::Object(inner) => Ok(inner.clone()),
        other => Err(PipelineError::Validation(format!(
            "{key} must be a JSON object, got {}",
            type_name(other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn key_summary(map: &Map<String, Value>) -> String {
    map.keys().cloned().collect::<Vec<_>>().join(", ")
}

/// Renders a full deck into `sink`: identity tokens first, then one renderer
/// per marker. Fails fast on the first renderer error.
pub fn render_deck<S: DocumentSink>(
    sink: &mut S,
    request: &RenderRequest,
) -> Result<(), PipelineError> {
    request.validate()?;
    let name = request.company_name()?.to_string();

    log::info!(
        "rendering deck for '{name}': profile keys [{}], metrics keys [{}], highlights keys [{}]",
        key_summary(&request.profile),
        key_summary(&request.metrics),
        key_summary(&request.highlights),
    );

    for token in COMPANY_NAME_TOKENS {
        sink.replace_text_everywhere(token, &name);
    }

    // The name already fills the title tokens, so the profile bullets skip it.
    render_bullets(sink, PROFILE_MARKER, &request.profile, &["company name"])?;
    render_narrative(sink, METRICS_MARKER, &request.metrics, Some(&name))?;
    render_bullets(sink, HIGHLIGHTS_MARKER, &request.highlights, &[])?;

    let spec = TableSpec::from_canonical(&request.industry, &name)
        .unwrap_or_else(|| benefit_table_spec(&request.industry, &name));
    render_table(sink, INDUSTRY_MARKER, &spec)?;

    log::info!("deck rendered for '{name}'");
    Ok(())
}
