//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent malformed product-area input.
/// These are independent of where the input came from.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid data-depth on source element {index}: {value:?}")]
    InvalidDepth { index: usize, value: Option<String> },

    #[error("invalid selector {selector}: {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("invalid product area tree: {message}")]
    InvalidTree { message: String },
}
