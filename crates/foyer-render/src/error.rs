//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur while loading or manipulating resources.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Failed to read or decode an image file.
    #[error("failed to load image: {0}")]
    ImageLoad(#[from] image::ImageError),

    /// Invalid dimensions (zero width or height) were requested.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
