//! Errors raised while building core values.

use thiserror::Error;

/// An identifier could not be built from external input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input was not a base-10 integer.
    #[error("{kind}: not a number: {input:?}")]
    NotANumber { kind: &'static str, input: String },

    /// Storage never assigns ids below 1.
    #[error("{kind}: must be positive, got {value}")]
    NotPositive { kind: &'static str, value: i64 },
}
