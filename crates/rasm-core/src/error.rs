//! Error types for Rasm

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Main error type for a conversion run
///
/// Expected conditions never surface here: unmapped characters pass through
/// unchanged, empty shaped runs yield empty output, and a missing bracket
/// pair degrades to the original character with a logged diagnostic. What
/// remains are tokenizer failures and tokenizer-contract violations.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Tokenization failed: {0}")]
    Tokenize(#[from] TokenizeError),

    #[error("Token out of bounds: start {start} + len {len} exceeds source length {source_len}")]
    TokenOutOfBounds {
        start: usize,
        len: usize,
        source_len: usize,
    },
}

/// Tokenizer backend errors
#[derive(Debug, Error)]
pub enum TokenizeError {
    #[error("Invalid text input")]
    InvalidText,

    #[error("Backend error: {0}")]
    Backend(String),
}
