//! Payload-to-layout renderers.
//!
//! Each renderer binds one marker token in the document to one payload: the
//! hierarchical bullet renderer walks arbitrarily shaped JSON and emits an
//! indented bullet hierarchy; the narrative renderer extracts known metrics
//! and emits sentence templates with citation links; the tabular paginator
//! estimates row heights and splits table content across pages; the value-map
//! transformer normalizes the alternate benefit-table shape into the
//! canonical table form.
//!
//! Renderers emit [`deckbrief_sink::RenderedLine`]s and table cells through a
//! [`deckbrief_sink::DocumentSink`]; they never touch a slide file format
//! directly. A missing marker is a hard error; an empty payload degrades to a
//! blank section with a warning.

pub mod bullets;
mod error;
pub mod narrative;
pub mod table;
pub mod theme;
pub mod valuemap;

pub use bullets::{render_bullets, section_lines};
pub use error::RenderError;
pub use narrative::{narrative_lines, render_narrative};
pub use table::{TableSpec, estimate_row_height, partition_rows, render_table};
pub use valuemap::benefit_table_spec;
