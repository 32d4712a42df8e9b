use obra_layout::LayoutError;
use obra_render_core::RenderError;
use obra_types::ValidationError;
use thiserror::Error;

/// A comprehensive error type for budget generation, from input parsing to PDF output.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Budget file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl PipelineError {
    /// The offending input field, for validation failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            PipelineError::Validation(err) | PipelineError::Layout(LayoutError::Validation(err)) => {
                Some(err.field.as_str())
            }
            _ => None,
        }
    }
}
