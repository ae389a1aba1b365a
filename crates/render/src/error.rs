use deckbrief_sink::SinkError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    /// The document template carries no container for this section's marker.
    /// Distinct from payload validation: the input may be fine and the
    /// template still broken.
    #[error("marker '{0}' not found in document")]
    MarkerNotFound(String),

    #[error("document sink error: {0}")]
    Sink(#[from] SinkError),
}
