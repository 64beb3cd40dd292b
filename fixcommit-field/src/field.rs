//! Parsed field tree as handed over by the message parser.

/// Numeric tag identifying a field within one mapping level.
///
/// Tags are unique per level, not across the whole tree: the same tag may
/// reappear inside every entry of a repeating group.
pub type FieldTag = u64;

/// A single parsed field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Exact value bytes as they appeared in the message.
    ///
    /// No numeric reinterpretation happens anywhere downstream; `150.00`
    /// and `150.0` are different values and commit to different hashes.
    Scalar(Vec<u8>),
    /// A repeating group: an ordered sequence of entries, each a mapping
    /// level of its own.
    Group(Vec<FieldMap>),
}

impl FieldValue {
    /// Build a scalar from anything byte-like.
    pub fn scalar(bytes: impl AsRef<[u8]>) -> Self {
        FieldValue::Scalar(bytes.as_ref().to_vec())
    }

    /// Build a group from its entries.
    pub fn group(entries: impl Into<Vec<FieldMap>>) -> Self {
        FieldValue::Group(entries.into())
    }
}

/// One mapping level of a parsed message: `(tag, value)` pairs in parse
/// order.
///
/// Duplicate tags are representable here on purpose. The parser hands the
/// message over exactly as it read it, and [`canonicalize`] is where a
/// repeated tag within one level is rejected.
///
/// [`canonicalize`]: FieldMap::canonicalize
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap(Vec<(FieldTag, FieldValue)>);

impl FieldMap {
    /// An empty mapping level.
    pub fn new() -> Self {
        FieldMap(Vec::new())
    }

    /// Append a field in parse order.
    pub fn push(&mut self, tag: FieldTag, value: FieldValue) {
        self.0.push((tag, value));
    }

    /// The `(tag, value)` pairs in parse order.
    pub fn fields(&self) -> &[(FieldTag, FieldValue)] {
        &self.0
    }

    /// Number of fields at this level, duplicates included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this level carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<(FieldTag, FieldValue)>> for FieldMap {
    fn from(fields: Vec<(FieldTag, FieldValue)>) -> Self {
        FieldMap(fields)
    }
}

impl FromIterator<(FieldTag, FieldValue)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (FieldTag, FieldValue)>>(iter: I) -> Self {
        FieldMap(iter.into_iter().collect())
    }
}
