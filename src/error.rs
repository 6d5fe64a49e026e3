//! Error types for the oceans toolkit.
//!
//! Every public operation validates its inputs up front and reports the
//! first problem it finds through one of these variants.

use thiserror::Error;

/// The main error type for oceans operations.
#[derive(Error, Debug)]
pub enum OceansError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Shape mismatch, out-of-range coordinate, non-positive resolution or
    /// a transect too short for the requested operation
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A numerical method was asked for something it does not support
    #[error("Numeric domain error: {message}")]
    NumericDomain { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Data not found errors
    #[error("Data not found: {message}")]
    DataNotFound { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl OceansError {
    /// Shorthand for [`OceansError::InvalidInput`]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        OceansError::InvalidInput {
            message: message.into(),
        }
    }

    /// Shorthand for [`OceansError::NumericDomain`]
    pub fn numeric_domain(message: impl Into<String>) -> Self {
        OceansError::NumericDomain {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results with OceansError
pub type Result<T> = std::result::Result<T, OceansError>;
