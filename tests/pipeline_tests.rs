mod common;

use common::{TestResult, init_logging, sample_request_body, template_deck};
use deckbrief::config::METRICS_MARKER;
use deckbrief::{DocumentSink, MemoryDeck, PipelineError, RenderError, RenderRequest, render_deck};
use serde_json::json;

#[test]
fn full_deck_renders_every_section() -> TestResult {
    init_logging();
    let request = RenderRequest::from_json(&sample_request_body())?;
    let mut tpl = template_deck();

    render_deck(&mut tpl.deck, &request)?;

    let title = tpl.deck.page_text(tpl.title_page);
    assert!(title.contains("Research briefing for Acme Corporation"));
    assert!(!title.contains("{{"));

    // Profile bullets carry the remaining fields but not the name itself.
    let profile = tpl.deck.lines(tpl.profile);
    let profile_text: Vec<_> = profile.iter().map(|l| l.plain_text()).collect();
    assert!(profile_text.iter().any(|t| t == "Founded:"));
    assert!(profile_text.iter().any(|t| t == "1999"));
    assert!(profile_text.iter().any(|t| t == "Widgets"));
    assert!(!profile_text.iter().any(|t| t.contains("Acme Corporation")));

    // Narrative sentences with the sec.gov citation inline.
    let metrics = tpl.deck.lines(tpl.metrics);
    let sentences: Vec<_> = metrics.iter().map(|l| l.plain_text()).collect();
    assert!(sentences.iter().any(|t| t.contains(
        "Acme Corporation reported an annual revenue of $97.69 billion USD for the fiscal year ending December 31, 2024"
    )));
    assert!(sentences.iter().any(|t| t.contains("https://www.sec.gov/filings/acme-10k")));
    assert!(sentences.iter().any(|t| t.contains("had 52,000 employees")));

    let highlights = tpl.deck.page_text(tpl.title_page);
    assert!(highlights.contains("Opened three new distribution centers"));

    // The industry records become one titled table on the second page.
    let industry_lines = tpl.deck.lines(tpl.industry);
    assert_eq!(
        industry_lines[0].plain_text(),
        "Acme Corporation Value Map Benefit Table"
    );
    let tables: Vec<_> = tpl.deck.tables_on(tpl.industry_page).collect();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].cells[0], vec!["Challenge", "Description", "Notes"]);
    assert_eq!(tables[0].cells[1][0], "Rising costs");
    Ok(())
}

#[test]
fn canonical_industry_payload_passes_through() -> TestResult {
    init_logging();
    let mut body = sample_request_body();
    body["IndustryResearch"] = json!({
        "title": "Sector Margins",
        "headers": ["Sector", "Margin"],
        "rows": [
            {"Sector": "Software", "Margin": "72%"},
            {"Sector": "Hardware", "Margin": "31%"},
        ],
    });
    let request = RenderRequest::from_json(&body)?;
    let mut tpl = template_deck();

    render_deck(&mut tpl.deck, &request)?;

    assert_eq!(tpl.deck.lines(tpl.industry)[0].plain_text(), "Sector Margins");
    let tables: Vec<_> = tpl.deck.tables_on(tpl.industry_page).collect();
    assert_eq!(tables[0].cells[0], vec!["Sector", "Margin"]);
    assert_eq!(tables[0].cells[2], vec!["Hardware", "31%"]);
    Ok(())
}

#[test]
fn missing_marker_is_a_render_error_not_validation() {
    init_logging();
    let request = RenderRequest::from_json(&sample_request_body()).unwrap();
    // A deck without any marker shapes at all.
    let mut deck = MemoryDeck::new();
    deck.add_page();

    let err = render_deck(&mut deck, &request).unwrap_err();
    match err {
        PipelineError::Render(RenderError::MarkerNotFound(marker)) => {
            assert_eq!(marker, deckbrief::config::PROFILE_MARKER);
        }
        other => panic!("expected a marker error, got {other:?}"),
    }
}

#[test]
fn empty_sections_are_skipped_softly() -> TestResult {
    init_logging();
    let mut body = sample_request_body();
    body["CompanyHighlights"] = json!({});
    body["CompanyMetrics"] = json!({"Commentary": {"Note": "n/a"}});
    let request = RenderRequest::from_json(&body)?;
    let mut tpl = template_deck();

    render_deck(&mut tpl.deck, &request)?;

    // Cleared marker, nothing appended. The run itself still succeeds.
    assert!(tpl.deck.lines(tpl.highlights).is_empty());
    assert!(!tpl.deck.page_text(tpl.title_page).contains("{{"));
    Ok(())
}

#[test]
fn empty_industry_table_renders_no_table() -> TestResult {
    init_logging();
    let mut body = sample_request_body();
    body["IndustryResearch"] = json!({"BenefitTable": []});
    let request = RenderRequest::from_json(&body)?;
    let mut tpl = template_deck();

    render_deck(&mut tpl.deck, &request)?;

    assert_eq!(tpl.deck.tables().len(), 0);
    assert_eq!(tpl.deck.page_count(), 2);
    Ok(())
}

#[test]
fn renderer_order_stops_at_first_missing_marker() {
    init_logging();
    let request = RenderRequest::from_json(&sample_request_body()).unwrap();
    let mut tpl = template_deck();
    // Drop the metrics shape after the template is built.
    tpl.deck.remove_container(tpl.metrics).unwrap();

    let err = render_deck(&mut tpl.deck, &request).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Render(RenderError::MarkerNotFound(ref m)) if m == METRICS_MARKER
    ));
    // The profile section had already been written before the failure.
    assert!(!tpl.deck.lines(tpl.profile).is_empty());
}
