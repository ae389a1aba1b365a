use deckbrief::config::{
    COMPANY_NAME_TOKENS, HIGHLIGHTS_MARKER, INDUSTRY_MARKER, METRICS_MARKER, PROFILE_MARKER,
};
use deckbrief::{ContainerId, MemoryDeck, PageId, Rect};
use serde_json::{Value, json};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Handles to the marker shapes of a freshly built template deck.
pub struct Template {
    pub deck: MemoryDeck,
    pub title_page: PageId,
    pub profile: ContainerId,
    pub metrics: ContainerId,
    pub highlights: ContainerId,
    pub industry_page: PageId,
    pub industry: ContainerId,
}

/// Builds a two-page template: page one carries the name token and the three
/// text markers, page two carries the industry table marker.
pub fn template_deck() -> Template {
    template_deck_with_industry_frame(Rect::new(40.0, 80.0, 640.0, 400.0))
}

/// Same template, but with a caller-chosen frame around the industry marker
/// so pagination tests can control how many rows fit per page.
pub fn template_deck_with_industry_frame(industry_frame: Rect) -> Template {
    let mut deck = MemoryDeck::new();

    let title_page = deck.add_page();
    deck.add_text_shape(
        title_page,
        Rect::new(40.0, 20.0, 640.0, 40.0),
        &format!("Research briefing for {}", COMPANY_NAME_TOKENS[0]),
    )
    .unwrap();
    let profile = deck
        .add_text_shape(title_page, Rect::new(40.0, 80.0, 300.0, 380.0), PROFILE_MARKER)
        .unwrap();
    let metrics = deck
        .add_text_shape(title_page, Rect::new(380.0, 80.0, 300.0, 180.0), METRICS_MARKER)
        .unwrap();
    let highlights = deck
        .add_text_shape(title_page, Rect::new(380.0, 280.0, 300.0, 180.0), HIGHLIGHTS_MARKER)
        .unwrap();

    let industry_page = deck.add_page();
    let industry = deck
        .add_text_shape(industry_page, industry_frame, INDUSTRY_MARKER)
        .unwrap();

    Template {
        deck,
        title_page,
        profile,
        metrics,
        highlights,
        industry_page,
        industry,
    }
}

/// A complete, well-formed request body for the happy path.
pub fn sample_request_body() -> Value {
    json!({
        "CompanyProfile": {
            "Company Name": "Acme Corporation",
            "Founded": "1999",
            "Headquarters": "Springfield",
            "Business Lines": ["Widgets", "Gadgets"],
        },
        "CompanyMetrics": {
            "Revenue": {
                "amount": "97.69 billion",
                "Fiscal Year": "2024",
                "Source": "https://www.sec.gov/filings/acme-10k",
            },
            "Employee Count": {"Headcount": 52000},
        },
        "CompanyHighlights": {
            "Highlights": [
                "Opened three new distribution centers",
                "Launched the Widget Pro line",
            ],
        },
        "IndustryResearch": [
            {"Challenge": "Rising costs", "Description": "Automation savings", "Notes": "Pilot"},
            {"Challenge": "Talent churn", "Description": "Retention tooling", "Notes": ""},
        ],
    })
}
