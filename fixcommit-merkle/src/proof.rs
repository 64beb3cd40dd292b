//! Inclusion proof generation.

use bincode::{Decode, Encode};
use fixcommit_field::FieldPath;

use crate::{
    hash::CommitmentHash,
    tree::{next_level, sorted_leaf_hashes},
    verify::verify_proof,
    CommitmentError, Leaf,
};

/// Inclusion proof for one committed field.
///
/// Self-describing: it carries the leaf's encoded path and value bytes
/// along with the sibling hashes and direction flags, so a verifier needs
/// nothing beyond the root. `directions[i] == true` means the running node
/// was the right-hand child at level `i`, i.e. `siblings[i]` hashes in from
/// the left. Levels where the node was promoted contribute no entry at all.
#[derive(Debug, Clone, Encode, Decode, PartialEq, Eq)]
pub struct InclusionProof {
    /// Canonical encoding of the proved leaf's path. Opaque bytes to the
    /// verifier; it never decodes the structure.
    pub path_encoded: Vec<u8>,
    /// Exact value bytes of the proved field.
    pub value: Vec<u8>,
    /// Sibling hashes, leaf level first.
    pub siblings: Vec<CommitmentHash>,
    /// Parallel direction flags; `true` = sibling is on the left.
    pub directions: Vec<bool>,
}

impl InclusionProof {
    /// Generate a proof that the leaf at `target` is committed under the
    /// root of `leaves`.
    ///
    /// The target must equal a leaf's full path exactly — prefixes do not
    /// match. Fails with [`CommitmentError::EmptyLeafSet`] when there is
    /// nothing to prove against and [`CommitmentError::PathNotFound`] when
    /// no leaf carries the path.
    pub fn generate(leaves: &[Leaf], target: &FieldPath) -> Result<Self, CommitmentError> {
        if leaves.is_empty() {
            return Err(CommitmentError::EmptyLeafSet);
        }

        // Re-derive the exact sorted order compute_root uses.
        let mut order: Vec<&Leaf> = leaves.iter().collect();
        order.sort_by(|a, b| a.path_encoded.cmp(&b.path_encoded));

        let mut index = order
            .iter()
            .position(|leaf| &leaf.path == target)
            .ok_or_else(|| CommitmentError::PathNotFound(target.clone()))?;
        let target_leaf = order[index];

        let mut level = sorted_leaf_hashes(leaves);
        let mut siblings = Vec::new();
        let mut directions = Vec::new();
        while level.len() > 1 {
            if index % 2 == 1 {
                // Current node is the right-hand child; sibling is left.
                siblings.push(level[index - 1]);
                directions.push(true);
            } else if index + 1 < level.len() {
                siblings.push(level[index + 1]);
                directions.push(false);
            }
            // Unpaired trailing node: promoted, nothing to record.
            level = next_level(&level);
            index /= 2;
        }

        Ok(InclusionProof {
            path_encoded: target_leaf.path_encoded.clone(),
            value: target_leaf.value.clone(),
            siblings,
            directions,
        })
    }

    /// Verify this proof against `root`.
    ///
    /// Convenience wrapper over [`verify_proof`](crate::verify_proof),
    /// which is the byte-level contract external verifiers implement.
    pub fn verify(&self, root: &CommitmentHash) -> bool {
        verify_proof(
            root,
            &self.path_encoded,
            &self.value,
            &self.siblings,
            &self.directions,
        )
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, CommitmentError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| CommitmentError::InvalidProof(format!("encode error: {}", e)))
    }

    /// Decode from bytes using bincode.
    ///
    /// Rejects proofs whose sibling and direction lists disagree in length;
    /// such a proof can never verify and is malformed by construction.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self, CommitmentError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<{ 16 * 1024 * 1024 }>(); // 16MB limit
        let (proof, _): (Self, _) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| CommitmentError::InvalidProof(format!("decode error: {}", e)))?;
        if proof.siblings.len() != proof.directions.len() {
            return Err(CommitmentError::InvalidProof(format!(
                "sibling count {} does not match direction count {}",
                proof.siblings.len(),
                proof.directions.len()
            )));
        }
        Ok(proof)
    }
}
