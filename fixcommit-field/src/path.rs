//! Qualified scalar field locations.

use std::{fmt, str::FromStr};

use crate::FieldError;

/// Location of one scalar field inside a message tree.
///
/// Elements alternate field tags and zero-based group entry indices:
/// `454.1.456` is field 456 of entry 1 of group 454, `15` a top-level
/// field. The derived ordering is element-wise; the *canonical* leaf order
/// is byte-lexicographic over the encoded path, not over this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldPath(Vec<u64>);

impl FieldPath {
    /// The empty path (the message root).
    pub fn new() -> Self {
        FieldPath(Vec::new())
    }

    /// The path elements in order.
    pub fn elements(&self) -> &[u64] {
        &self.0
    }

    /// Number of path elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this is the empty path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A new path with `element` appended.
    pub fn child(&self, element: u64) -> FieldPath {
        let mut elements = self.0.clone();
        elements.push(element);
        FieldPath(elements)
    }
}

impl From<Vec<u64>> for FieldPath {
    fn from(elements: Vec<u64>) -> Self {
        FieldPath(elements)
    }
}

impl From<&[u64]> for FieldPath {
    fn from(elements: &[u64]) -> Self {
        FieldPath(elements.to_vec())
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for element in &self.0 {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", element)?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for FieldPath {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(FieldPath::new());
        }
        s.split('.')
            .map(|segment| {
                segment
                    .parse::<u64>()
                    .map_err(|_| FieldError::InvalidPathSegment(segment.to_string()))
            })
            .collect::<Result<Vec<u64>, FieldError>>()
            .map(FieldPath)
    }
}
