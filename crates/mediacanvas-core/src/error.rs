//! Error types for MediaCanvas.

use thiserror::Error;

/// Main error type for MediaCanvas operations.
#[derive(Error, Debug)]
pub enum CanvasError {
    /// Upload of content that is neither an image nor a video.
    /// The display text is shown to the user as-is.
    #[error("Please upload an image or video file (got {content_type:?})")]
    UnsupportedMediaKind { content_type: String },

    #[error("Media not found: {0}")]
    NotFound(String),

    #[error("{field}: {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field}: cannot parse {input:?} as a number")]
    ParseFailure { field: String, input: String },

    #[error("Probe error: {0}")]
    Probe(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CanvasError {
    /// Whether this error should be reported to the user.
    ///
    /// Everything else is handled locally and only logged.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::UnsupportedMediaKind { .. })
    }
}

/// Result type alias for MediaCanvas operations.
pub type Result<T> = std::result::Result<T, CanvasError>;
