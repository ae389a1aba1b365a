//! Marker and identity-token constants shared by the pipeline and templates.

/// Marker bound to the company profile payload.
pub const PROFILE_MARKER: &str = "{{CompanyProfile}}";
/// Marker bound to the financial metrics payload.
pub const METRICS_MARKER: &str = "{{CompanyMetrics}}";
/// Marker bound to the highlights payload.
pub const HIGHLIGHTS_MARKER: &str = "{{CompanyHighlights}}";
/// Marker bound to the industry table payload.
pub const INDUSTRY_MARKER: &str = "{{IndustryResearch}}";

/// Identity tokens replaced with the resolved company name. Both spacings
/// occur in templates in the wild.
pub const COMPANY_NAME_TOKENS: &[&str] = &["{{CompanyName}}", "{{ CompanyName }}"];

/// Name-key synonyms probed, in order, for the company name. Matching is
/// over normalized (lowercased) key names, so the synonyms are lowercase.
pub const IDENTITY_KEYS: &[&str] = &["company name", "name", "company"];
