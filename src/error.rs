//! Error handling for audio-buffer-utils
//!
//! Every fallible operation returns [`Result`]. Shape and argument problems
//! are reported as [`BufferError::InvalidArgument`] before any sample is
//! written, so a failed call never leaves a target half-modified.

use thiserror::Error;

/// Result type alias for buffer operations
pub type Result<T> = std::result::Result<T, BufferError>;

/// Main error type for buffer operations
#[derive(Error, Debug)]
pub enum BufferError {
    /// A buffer-shaped argument failed validation, or a scalar argument is
    /// out of its accepted domain
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A configuration document could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl BufferError {
    /// Shorthand for building an [`BufferError::InvalidArgument`]
    pub fn invalid(reason: impl Into<String>) -> Self {
        BufferError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            BufferError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            BufferError::Config(_) => "CONFIG_ERROR",
        }
    }
}
