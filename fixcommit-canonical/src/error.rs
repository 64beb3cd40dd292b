use std::str::Utf8Error;

use thiserror::Error;

/// Errors from canonical encoding.
///
/// Keys are unsigned integers at the type level, so the
/// negative-or-non-integer-key failure of looser implementations cannot
/// occur here; the only value-dependent failure is non-UTF-8 scalar bytes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// Scalar bytes were not valid UTF-8 and cannot be carried in a
    /// canonical text string.
    #[error("scalar value is not valid UTF-8: {0}")]
    InvalidText(#[from] Utf8Error),
}
