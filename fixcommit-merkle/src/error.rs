use fixcommit_field::FieldPath;
use thiserror::Error;

/// Errors from Merkle commitment operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommitmentError {
    /// No committed leaf carries the requested path.
    #[error("path {0} is not present in the committed leaf set")]
    PathNotFound(FieldPath),
    /// A proof was requested against an empty leaf set.
    #[error("cannot generate a proof over an empty leaf set")]
    EmptyLeafSet,
    /// Proof bytes failed to decode or are structurally inconsistent.
    #[error("invalid proof: {0}")]
    InvalidProof(String),
}
