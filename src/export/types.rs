//! Error type for image export.

use thiserror::Error;

/// Errors that can occur while exporting the canvas.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Canvas surface is not initialized")]
    NoSurface,

    #[error("Invalid filename template: {0}")]
    InvalidTemplate(String),

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("Failed to save image: {0}")]
    SaveError(#[from] std::io::Error),
}
