//! Error type definitions for curve operations

use thiserror::Error as ThisError;

/// Primary error type for curve operations
///
/// Arithmetic on well-formed inputs never fails; the variants below cover the
/// entropy source and the handful of parsing/validation helpers.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// The random source could not supply the requested bytes
    #[error("Random generation error: {context}: {message}")]
    RandomGenerationError {
        context: &'static str,
        message: String,
    },
}

/// Result type for curve operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Whether this error originated from the random source
    pub fn is_random_source(&self) -> bool {
        matches!(self, Self::RandomGenerationError { .. })
    }
}
