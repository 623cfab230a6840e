//! Core error types for sleepsim-core.
//!
//! Every failure here is a caller or input error. Nothing is retried and
//! nothing is replaced by a default value; the reporting layer decides how to
//! present it.

use thiserror::Error;

/// Core error type for sleepsim-core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Statistics requested on a zero-length input
    #[error("Empty input: cannot compute statistics for {what}")]
    EmptyInput { what: String },

    /// Generator or series parameter outside its valid domain
    #[error("Invalid value for '{name}': {message}")]
    InvalidParameter { name: String, message: String },

    /// Night identifier outside the collection
    #[error("Night {night_id} not found (valid range: 1-{available})")]
    NotFound { night_id: u32, available: usize },
}

impl CoreError {
    pub(crate) fn empty(what: impl Into<String>) -> Self {
        CoreError::EmptyInput { what: what.into() }
    }

    pub(crate) fn invalid(name: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
