//! Merkle commitment engine over canonical field trees.
//!
//! One commitment leaf per present scalar field, hashed as
//! `sha256(path_encoded || value_bytes)`, sorted byte-lexicographically by
//! encoded path, then collapsed bottom-up with `sha256(left || right)` and
//! odd-node promotion: an unpaired trailing node advances to the next level
//! unchanged, never padded or hashed with itself.
//!
//! Inclusion proofs carry explicit sibling direction flags so a byte-only
//! verifier — typically a smart contract that can do nothing beyond "hash
//! these bytes" and "compare these bytes" — can fold them without any
//! schema knowledge. [`verify_proof`] is the reference for that contract.

#![warn(missing_docs)]

mod error;
pub(crate) mod hash;
mod leaf;
mod proof;
mod tree;
mod verify;

pub use error::CommitmentError;
pub use hash::{empty_root, CommitmentHash, HASH_LENGTH};
pub use leaf::{enumerate_leaves, Leaf};
pub use proof::InclusionProof;
pub use tree::compute_root;
pub use verify::verify_proof;
