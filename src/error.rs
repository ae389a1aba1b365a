use deckbrief_render::RenderError;
use thiserror::Error;

/// Top-level error for a deck rendering run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The request payload failed shape validation before rendering started.
    #[error("invalid request: {0}")]
    Validation(String),

    /// A renderer failed against the document.
    #[error(transparent)]
    Render(#[from] RenderError),
}
