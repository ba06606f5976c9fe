//! Calculation error types.
//!
//! Every fallible engine operation reports one of three failure kinds.
//! The message carried by each variant is what a front-end shows verbatim.

use thiserror::Error;

/// Result type used throughout the engine.
pub type Result<T> = std::result::Result<T, CalcError>;

/// Errors raised by arithmetic, stack and history operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The operation is undefined for the given operands.
    #[error("{0}")]
    Domain(String),

    /// A value lies outside the representable range.
    #[error("{0}")]
    Range(String),

    /// A stack or history container has no element to operate on.
    #[error("{0}")]
    OutOfRange(String),
}

/// Discriminant of a [`CalcError`], handy for matching without the message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Domain,
    Range,
    OutOfRange,
}

impl CalcError {
    pub fn domain(message: impl Into<String>) -> Self {
        Self::Domain(message.into())
    }

    pub fn range(message: impl Into<String>) -> Self {
        Self::Range(message.into())
    }

    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::OutOfRange(message.into())
    }

    /// Which of the three failure kinds this is.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) => ErrorKind::Domain,
            Self::Range(_) => ErrorKind::Range,
            Self::OutOfRange(_) => ErrorKind::OutOfRange,
        }
    }

    /// The bare message, without any kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Domain(message) | Self::Range(message) | Self::OutOfRange(message) => message,
        }
    }
}
