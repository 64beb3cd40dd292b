//! SHA-256 hashing for commitment leaves and internal nodes.
//!
//! SHA-256 rather than a faster tree hash because the root must be
//! recomputable by on-chain verifiers that only have a native SHA-256
//! primitive.

use sha2::{Digest, Sha256};

/// Width of every hash in the commitment tree.
pub const HASH_LENGTH: usize = 32;

/// A node hash in the commitment tree.
pub type CommitmentHash = [u8; HASH_LENGTH];

/// Hash of one leaf: `sha256(path_encoded || value_bytes)`.
pub(crate) fn leaf_hash(path_encoded: &[u8], value: &[u8]) -> CommitmentHash {
    let mut hasher = Sha256::new();
    hasher.update(path_encoded);
    hasher.update(value);
    hasher.finalize().into()
}

/// Hash of an internal node: `sha256(left || right)`.
pub(crate) fn node_hash(left: &CommitmentHash, right: &CommitmentHash) -> CommitmentHash {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

/// Root of the empty leaf set: `sha256("")`.
pub fn empty_root() -> CommitmentHash {
    Sha256::digest(b"").into()
}
