//! deckbrief: renders loosely-structured JSON research payloads into a
//! slide-deck document.
//!
//! The pipeline takes a bundle of named payloads (company profile, metrics,
//! highlights, industry data), substitutes the company name into the
//! document's identity tokens, and drives one renderer per marker: bullet
//! hierarchies for the profile and highlights, narrative sentences for the
//! metrics, and a paginated table for the industry data. The document itself
//! is reached only through the [`deckbrief_sink::DocumentSink`] primitives,
//! so any slide backend can carry the output.

pub mod config;
mod error;
mod pipeline;

pub use error::PipelineError;
pub use pipeline::{RenderRequest, render_deck};

// Re-export the crates callers need to drive the pipeline.
pub use deckbrief_render::{RenderError, TableSpec};
pub use deckbrief_sink::{DocumentSink, MemoryDeck, RenderedLine, SinkError, TextSegment};
pub use deckbrief_types::{Color, ContainerId, PageId, Rect, TableId};
