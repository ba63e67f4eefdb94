//! Error types for remapping operations.

use thiserror::Error;

/// Result type alias for remapping operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Remapping error types.
#[derive(Debug, Error)]
pub enum Error {
    /// Artifact is shorter than the mandatory 256-byte header.
    #[error("truncated artifact: {len} bytes is shorter than the 256-byte header")]
    TruncatedArtifact { len: usize },

    /// Header is not a permutation of all 256 byte values.
    #[error("corrupted header: {message}")]
    CorruptedHeader { message: String },

    /// Buffer too small for output.
    #[error("buffer too small: need {required} bytes, got {provided}")]
    BufferTooSmall { required: usize, provided: usize },

    /// I/O error from the file boundary.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Operation selector outside the menu range.
    #[error("invalid selection '{value}': press 0 for encoding, 1 for decoding")]
    InvalidSelection { value: String },
}

impl Error {
    /// Create a truncated artifact error.
    pub fn truncated(len: usize) -> Self {
        Error::TruncatedArtifact { len }
    }

    /// Create a corrupted header error.
    pub fn corrupted_header(message: impl Into<String>) -> Self {
        Error::CorruptedHeader {
            message: message.into(),
        }
    }

    /// Create a buffer too small error.
    pub fn buffer_too_small(required: usize, provided: usize) -> Self {
        Error::BufferTooSmall { required, provided }
    }

    /// Create an I/O error with a custom message.
    pub fn io(message: impl Into<String>) -> Self {
        Error::Io(std::io::Error::other(message.into()))
    }

    /// Create an invalid selection error.
    pub fn invalid_selection(value: impl Into<String>) -> Self {
        Error::InvalidSelection {
            value: value.into(),
        }
    }

    /// Check if the error describes malformed decode input rather than an
    /// environment failure.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Error::TruncatedArtifact { .. } | Error::CorruptedHeader { .. }
        )
    }

    /// Get error category for metrics.
    pub fn category(&self) -> &'static str {
        match self {
            Error::TruncatedArtifact { .. } => "truncated_artifact",
            Error::CorruptedHeader { .. } => "corrupted_header",
            Error::BufferTooSmall { .. } => "buffer_too_small",
            Error::Io(_) => "io_error",
            Error::InvalidSelection { .. } => "invalid_selection",
        }
    }
}
