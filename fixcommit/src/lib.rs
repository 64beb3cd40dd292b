//! Field-level Merkle commitments over parsed financial messages.
//!
//! Given a parsed field tree, [`MessageCommitment::commit`] runs the whole
//! pipeline — canonicalize, encode the canonical tree, enumerate one leaf
//! per scalar field, compute the Merkle root — and holds everything a
//! persistence layer anchors: the canonical bytes, the leaf set and the
//! 256-bit root. [`MessageCommitment::prove`] then produces per-field
//! inclusion proofs that an independent, schema-blind verifier checks
//! against the root alone.
//!
//! ```
//! use fixcommit::{FieldMap, FieldPath, FieldValue, MessageCommitment, verify_proof};
//!
//! let mut message = FieldMap::new();
//! message.push(15, FieldValue::scalar("USD"));
//! message.push(22, FieldValue::scalar("4"));
//!
//! let commitment = MessageCommitment::commit(&message)?;
//! let proof = commitment.prove(&FieldPath::from(vec![15]))?;
//! assert!(verify_proof(
//!     commitment.root(),
//!     &proof.path_encoded,
//!     &proof.value,
//!     &proof.siblings,
//!     &proof.directions,
//! ));
//! # Ok::<(), fixcommit::Error>(())
//! ```

#![warn(missing_docs)]

use thiserror::Error;

pub use fixcommit_canonical::{encode_entry, encode_path, encode_value, EncodingError};
pub use fixcommit_field::{
    CanonicalEntry, CanonicalValue, FieldError, FieldMap, FieldPath, FieldTag, FieldValue,
};
pub use fixcommit_merkle::{
    compute_root, empty_root, enumerate_leaves, verify_proof, CommitmentError, CommitmentHash,
    InclusionProof, Leaf, HASH_LENGTH,
};

/// Any error the commitment pipeline can surface.
///
/// All errors are terminal for the single computation: nothing is retried,
/// nothing partially succeeds, and a root is never returned alongside an
/// error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Structural error in the input field tree.
    #[error(transparent)]
    Field(#[from] FieldError),
    /// The canonical encoding could not represent a value.
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    /// Proof generation or decoding failed.
    #[error(transparent)]
    Commitment(#[from] CommitmentError),
}

/// A computed commitment over one parsed message.
///
/// Derived, immutable and scoped to this one message; build a new one per
/// computation. Independent commitments share nothing and may run in
/// parallel freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCommitment {
    root: CommitmentHash,
    canonical_bytes: Vec<u8>,
    leaves: Vec<Leaf>,
}

impl MessageCommitment {
    /// Commit to every field of a parsed message.
    ///
    /// Fails on a duplicate tag within one mapping level and on scalar
    /// bytes the canonical encoding cannot carry; a malformed tree must
    /// never silently produce "a" root.
    pub fn commit(message: &FieldMap) -> Result<Self, Error> {
        let canonical = message.canonicalize()?;
        let canonical_bytes = encode_entry(&canonical)?;
        let leaves = enumerate_leaves(&canonical);
        let root = compute_root(&leaves);
        Ok(MessageCommitment {
            root,
            canonical_bytes,
            leaves,
        })
    }

    /// The 256-bit commitment root.
    pub fn root(&self) -> &CommitmentHash {
        &self.root
    }

    /// The root as lowercase hex.
    pub fn root_hex(&self) -> String {
        hex::encode(self.root)
    }

    /// Canonical encoding of the whole message tree — what an anchoring
    /// layer stores next to the root.
    pub fn canonical_bytes(&self) -> &[u8] {
        &self.canonical_bytes
    }

    /// The committed leaves, one per present scalar field, in enumeration
    /// order.
    pub fn leaves(&self) -> &[Leaf] {
        &self.leaves
    }

    /// Generate an inclusion proof for the scalar at `path`.
    pub fn prove(&self, path: &FieldPath) -> Result<InclusionProof, Error> {
        Ok(InclusionProof::generate(&self.leaves, path)?)
    }
}
