//! Standalone proof verification.
//!
//! This is the byte-level contract an external verifier (typically a smart
//! contract) reimplements: recompute the leaf hash, fold the sibling hashes
//! in order, compare against the root. `path_encoded` is treated as opaque
//! bytes and never decoded; no schema knowledge, no parsing.

use crate::hash::{leaf_hash, node_hash, CommitmentHash};

/// Check that `(path_encoded, value)` is committed under `root`.
///
/// `directions[i] == true` means the running node was the right-hand child
/// at level `i`, so `siblings[i]` hashes in from the left:
/// `node = sha256(sibling || node)`; `false` hashes it in from the right.
/// Mismatched sibling/direction list lengths never verify.
pub fn verify_proof(
    root: &CommitmentHash,
    path_encoded: &[u8],
    value: &[u8],
    siblings: &[CommitmentHash],
    directions: &[bool],
) -> bool {
    if siblings.len() != directions.len() {
        return false;
    }
    let mut node = leaf_hash(path_encoded, value);
    for (sibling, is_right_child) in siblings.iter().zip(directions) {
        node = if *is_right_child {
            node_hash(sibling, &node)
        } else {
            node_hash(&node, sibling)
        };
    }
    node == *root
}
