//! Root computation with odd-node promotion.

use crate::{
    hash::{empty_root, leaf_hash, node_hash},
    CommitmentHash, Leaf,
};

/// Compute the commitment root over a leaf set.
///
/// The root is a pure function of the leaf multiset: leaves are first
/// sorted byte-lexicographically by `path_encoded`, so the caller's
/// enumeration order cannot influence the result. Levels pair adjacent
/// nodes left-to-right with `sha256(left || right)`; an unpaired trailing
/// node is promoted to the next level unchanged. The empty set commits to
/// `sha256("")`.
pub fn compute_root(leaves: &[Leaf]) -> CommitmentHash {
    let mut level = sorted_leaf_hashes(leaves);
    if level.is_empty() {
        return empty_root();
    }
    while level.len() > 1 {
        level = next_level(&level);
    }
    level[0]
}

/// Leaf hashes in canonical order.
pub(crate) fn sorted_leaf_hashes(leaves: &[Leaf]) -> Vec<CommitmentHash> {
    let mut order: Vec<&Leaf> = leaves.iter().collect();
    order.sort_by(|a, b| a.path_encoded.cmp(&b.path_encoded));
    order
        .iter()
        .map(|leaf| leaf_hash(&leaf.path_encoded, &leaf.value))
        .collect()
}

/// One pairing pass: adjacent pairs combine, an odd trailing node advances
/// unchanged.
pub(crate) fn next_level(level: &[CommitmentHash]) -> Vec<CommitmentHash> {
    level
        .chunks(2)
        .map(|pair| {
            if pair.len() == 2 {
                node_hash(&pair[0], &pair[1])
            } else {
                pair[0]
            }
        })
        .collect()
}
