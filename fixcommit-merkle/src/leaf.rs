//! Commitment leaves: one per present scalar field.

use fixcommit_canonical::encode_path;
use fixcommit_field::{CanonicalEntry, CanonicalValue, FieldPath};

/// One committed `(path, value)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    /// Fully qualified location of the scalar, group entry indices included.
    pub path: FieldPath,
    /// Canonical encoding of `path`. Byte-lexicographic order over this is
    /// the canonical leaf order of the commitment tree.
    pub path_encoded: Vec<u8>,
    /// Exact value bytes, unmodified.
    pub value: Vec<u8>,
}

/// Enumerate every present scalar field of a canonical tree as a leaf.
///
/// Recurses into nested groups without a depth limit; a group contributes
/// its tag and the zero-based entry index to every path beneath it. An
/// empty group contributes nothing. Traversal order is irrelevant
/// downstream — [`compute_root`](crate::compute_root) re-sorts — and
/// duplicate paths cannot occur for trees produced by the canonical
/// builder, so nothing is deduplicated here.
pub fn enumerate_leaves(entry: &CanonicalEntry) -> Vec<Leaf> {
    let mut leaves = Vec::new();
    collect_entry(entry, &FieldPath::new(), &mut leaves);
    leaves
}

fn collect_entry(entry: &CanonicalEntry, prefix: &FieldPath, leaves: &mut Vec<Leaf>) {
    for (tag, value) in entry {
        let path = prefix.child(*tag);
        match value {
            CanonicalValue::Scalar(bytes) => leaves.push(Leaf {
                path_encoded: encode_path(&path),
                value: bytes.clone(),
                path,
            }),
            CanonicalValue::Group(entries) => {
                for (index, group_entry) in entries.iter().enumerate() {
                    collect_entry(group_entry, &path.child(index as u64), leaves);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use fixcommit_field::{FieldMap, FieldValue};

    use super::*;

    fn scenario_message() -> FieldMap {
        vec![
            (15, FieldValue::scalar("USD")),
            (
                454,
                FieldValue::group(vec![
                    FieldMap::from(vec![
                        (455, FieldValue::scalar("91282CEZ7")),
                        (456, FieldValue::scalar("1")),
                    ]),
                    FieldMap::from(vec![
                        (455, FieldValue::scalar("US91282CEZ76")),
                        (456, FieldValue::scalar("4")),
                    ]),
                ]),
            ),
        ]
        .into()
    }

    #[test]
    fn test_scenario_yields_five_fully_qualified_paths() {
        let canonical = scenario_message().canonicalize().unwrap();
        let leaves = enumerate_leaves(&canonical);
        let paths: Vec<Vec<u64>> = leaves
            .iter()
            .map(|leaf| leaf.path.elements().to_vec())
            .collect();
        assert_eq!(
            paths,
            vec![
                vec![15],
                vec![454, 0, 455],
                vec![454, 0, 456],
                vec![454, 1, 455],
                vec![454, 1, 456],
            ]
        );
    }

    #[test]
    fn test_leaf_values_are_exact_bytes() {
        let canonical = scenario_message().canonicalize().unwrap();
        let leaves = enumerate_leaves(&canonical);
        assert_eq!(leaves[0].value, b"USD".to_vec());
        assert_eq!(leaves[3].value, b"US91282CEZ76".to_vec());
    }

    #[test]
    fn test_empty_group_contributes_no_leaves() {
        let message: FieldMap = vec![
            (15, FieldValue::scalar("USD")),
            (454, FieldValue::group(Vec::new())),
        ]
        .into();
        let canonical = message.canonicalize().unwrap();
        let leaves = enumerate_leaves(&canonical);
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].path.elements(), &[15]);
    }

    #[test]
    fn test_nested_groups_qualify_every_level() {
        let message: FieldMap = vec![(
            555,
            FieldValue::group(vec![FieldMap::from(vec![(
                604,
                FieldValue::group(vec![
                    FieldMap::from(vec![(605, FieldValue::scalar("a"))]),
                    FieldMap::from(vec![(605, FieldValue::scalar("b"))]),
                ]),
            )])]),
        )]
        .into();
        let canonical = message.canonicalize().unwrap();
        let leaves = enumerate_leaves(&canonical);
        let paths: Vec<Vec<u64>> = leaves
            .iter()
            .map(|leaf| leaf.path.elements().to_vec())
            .collect();
        assert_eq!(
            paths,
            vec![vec![555, 0, 604, 0, 605], vec![555, 0, 604, 1, 605]]
        );
    }

    #[test]
    fn test_empty_tree_yields_no_leaves() {
        let canonical = FieldMap::new().canonicalize().unwrap();
        assert!(enumerate_leaves(&canonical).is_empty());
    }

    #[test]
    fn test_path_encoded_matches_encode_path() {
        let canonical = scenario_message().canonicalize().unwrap();
        for leaf in enumerate_leaves(&canonical) {
            assert_eq!(leaf.path_encoded, encode_path(&leaf.path));
        }
    }
}
