//! Pure value formatters.
//!
//! Research payloads carry numbers, percentages, dates and URLs in whatever
//! shape the upstream agents produced them ("$97,690,000,000", "2.5 billion",
//! "2024-03", "12,5%"). This crate turns those raw scalars into display
//! strings and parsed values. Everything here is a pure function with no
//! document or payload-structure knowledge.

mod date;
mod link;
mod number;
mod text;

pub use date::{parse_date, parse_date_value};
pub use link::{choose_link, extract_urls, is_url};
pub use number::{
    format_billions_usd, format_count, parse_number, parse_number_str, parse_percent,
    parse_percent_str,
};
pub use text::scalar_text;
