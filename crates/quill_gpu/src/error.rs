//! Render error types

use quill_paint::TessellationError;
use thiserror::Error;

use crate::pipeline::PipelineKind;

/// Failures while turning contents into draw commands.
///
/// Degenerate input (transparent colors, empty paths, zero-sized textures) is
/// never an error; it simply produces no command.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The pipeline library has no pipeline for the requested variant
    #[error("Pipeline unavailable: {0:?}")]
    PipelineUnavailable(PipelineKind),

    /// Geometry could not be triangulated
    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    /// The render pass refused the command
    #[error("Render pass rejected command: {0}")]
    CommandRejected(&'static str),
}

/// Result type for render operations
pub type Result<T> = std::result::Result<T, RenderError>;
