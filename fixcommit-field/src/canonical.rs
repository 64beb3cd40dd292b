//! Canonical form of a parsed field tree.
//!
//! Canonicalization pins down everything the commitment depends on: within
//! one mapping level tags iterate in strictly ascending numeric order, group
//! entry order is preserved exactly as parsed, and a tag appearing twice at
//! one level is rejected outright. Parse order of fields never leaks into
//! the canonical form.

use std::collections::BTreeMap;

use crate::{FieldError, FieldMap, FieldTag, FieldValue};

/// A canonical mapping level.
///
/// `BTreeMap` iteration is ascending by key, which is exactly the order the
/// canonical encoding emits.
pub type CanonicalEntry = BTreeMap<FieldTag, CanonicalValue>;

/// Canonical counterpart of [`FieldValue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalValue {
    /// Exact value bytes, carried through unmodified.
    Scalar(Vec<u8>),
    /// Group entries in their original order. An empty group stays present
    /// as an empty sequence; it is not the same thing as an absent field.
    Group(Vec<CanonicalEntry>),
}

impl FieldMap {
    /// Normalize this mapping level, and everything below it, into canonical
    /// form.
    ///
    /// No field is dropped or invented and group entries are never
    /// reordered. A tag appearing twice within one level fails with
    /// [`FieldError::DuplicateField`]: an ambiguous tree must never produce
    /// a commitment.
    pub fn canonicalize(&self) -> Result<CanonicalEntry, FieldError> {
        let mut entry = CanonicalEntry::new();
        for (tag, value) in self.fields() {
            let canonical = match value {
                FieldValue::Scalar(bytes) => CanonicalValue::Scalar(bytes.clone()),
                FieldValue::Group(entries) => CanonicalValue::Group(
                    entries
                        .iter()
                        .map(FieldMap::canonicalize)
                        .collect::<Result<Vec<CanonicalEntry>, FieldError>>()?,
                ),
            };
            if entry.insert(*tag, canonical).is_some() {
                return Err(FieldError::DuplicateField { tag: *tag });
            }
        }
        Ok(entry)
    }
}
