//! Field tree model for message commitments.
//!
//! A parsed financial message arrives as a [`FieldMap`]: integer-tagged
//! fields whose values are either exact scalar bytes or repeating groups of
//! nested mappings. [`FieldMap::canonicalize`] turns it into the canonical
//! form the commitment pipeline consumes, where tag iteration order is
//! pinned to ascending numeric order and duplicate tags within one mapping
//! level are rejected.

#![warn(missing_docs)]

mod canonical;
mod error;
mod field;
mod path;

pub use canonical::{CanonicalEntry, CanonicalValue};
pub use error::FieldError;
pub use field::{FieldMap, FieldTag, FieldValue};
pub use path::FieldPath;
