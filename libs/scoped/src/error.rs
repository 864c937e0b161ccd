//! Error types for scoped identifier construction and parsing.

use sid_objectid::ObjectIdError;
use thiserror::Error;

/// Errors that can occur when constructing or parsing a scoped identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScopedIdError {
    /// The scope is missing or empty.
    #[error("scope must be a non-empty string")]
    InvalidScope,

    /// The id is missing or empty.
    #[error("id must be an object id")]
    InvalidId,

    /// The id (or an object-id-shaped version) failed object id parsing.
    #[error("invalid object id: {0}")]
    ObjectId(#[from] ObjectIdError),

    /// The input does not have the `scope/id[/version]` shape.
    #[error("invalid scoped id string: '{input}'")]
    InvalidFormat { input: String },
}

impl ScopedIdError {
    /// Returns true if this error concerns the scope field.
    pub fn is_scope_error(&self) -> bool {
        matches!(self, ScopedIdError::InvalidScope)
    }

    /// Returns true if this error concerns the id field.
    pub fn is_id_error(&self) -> bool {
        matches!(self, ScopedIdError::InvalidId | ScopedIdError::ObjectId(_))
    }

    /// Returns true if the input was structurally malformed.
    pub fn is_format_error(&self) -> bool {
        matches!(self, ScopedIdError::InvalidFormat { .. })
    }
}
