//! Error types for object identifier parsing.

use thiserror::Error;

/// Errors that can occur when parsing an object identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObjectIdError {
    /// The input string is empty.
    #[error("object id cannot be empty")]
    Empty,

    /// The input is not exactly 24 characters long.
    #[error("object id must be 24 hex characters, got {len}")]
    InvalidLength { len: usize },

    /// The input contains non-hexadecimal characters.
    #[error("invalid object id hex: {0}")]
    InvalidHex(String),
}

impl ObjectIdError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, ObjectIdError::Empty)
    }
}
