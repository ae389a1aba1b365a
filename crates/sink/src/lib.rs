//! Document sink abstraction.
//!
//! Renderers never touch a concrete slide file format. They speak to a
//! [`DocumentSink`]: a small set of primitives over opaque page, container
//! and table handles ("find the container holding this marker", "append a
//! styled line", "create a table at this position"). Any slide backend that
//! implements the trait can carry the generated content; the bundled
//! [`MemoryDeck`] is an in-memory implementation used by the test suites.

mod error;
mod line;
mod memory;
mod traits;

pub use error::SinkError;
pub use line::{RenderedLine, TextSegment};
pub use memory::{MemoryDeck, MemoryShape, MemoryTable};
pub use traits::{Alignment, CellStyle, DocumentSink};
