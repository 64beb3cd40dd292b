use thiserror::Error;

use crate::FieldTag;

/// Errors from field tree handling.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The same tag appeared more than once within one mapping level.
    #[error("duplicate field tag {tag} within one mapping level")]
    DuplicateField {
        /// The offending tag.
        tag: FieldTag,
    },
    /// A textual path segment did not parse as an unsigned integer.
    #[error("invalid path segment {0:?}")]
    InvalidPathSegment(String),
}
