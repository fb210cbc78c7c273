//! Error types for the pricekit-core library.

use thiserror::Error;

/// Errors raised while normalizing a price value.
///
/// All variants are terminal: the parser never returns a partially-parsed
/// amount and never retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input is neither null, a number, nor text.
    #[error("unsupported price input: {0}")]
    UnsupportedType(String),

    /// Text is empty or whitespace-only after trimming.
    #[error("price text is empty")]
    Empty,

    /// More than one currency marker, or markers in conflicting positions.
    #[error("conflicting currency markers in {0:?}")]
    AmbiguousCurrency(String),

    /// Remaining text is not a valid, unambiguous numeric literal.
    #[error("not a valid amount: {0:?}")]
    InvalidNumber(String),
}

/// Result type for the pricekit library.
pub type Result<T> = std::result::Result<T, ParseError>;
