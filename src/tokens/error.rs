//! Token pipeline error types.

use thiserror::Error;

/// Errors that can occur while loading or writing design tokens.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Reading or writing a token file failed.
    #[error("IO error: {0}")]
    IoError(String),

    /// A token document is not valid JSON.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A token document's root is not a JSON object.
    #[error("Token document must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Result type for token operations.
pub type TokenResult<T> = Result<T, TokenError>;
