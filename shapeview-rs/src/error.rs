//! Error types for shapeview-rs.

use shapeview_canvas::CanvasError;
use thiserror::Error;

/// Result type alias using ShapeViewError.
pub type ShapeViewResult<T> = Result<T, ShapeViewError>;

/// Errors raised while configuring or rendering a shaped image view.
#[derive(Debug, Error)]
pub enum ShapeViewError {
    /// Error from the rendering surface.
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    /// Image data could not be decoded.
    #[error("Failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration document could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Pixel buffer length does not match the bitmap size.
    #[error("Invalid bitmap: {width}x{height} needs {expected} bytes, got {actual}")]
    InvalidBitmap {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// A content painter failed.
    #[error("Failed to draw content: {0}")]
    Drawable(String),
}
