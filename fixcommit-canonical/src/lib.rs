//! Canonical deterministic encoding of field trees and paths.
//!
//! The byte output here is a cross-implementation contract: an independent
//! verifier in another language must reproduce it exactly, so two logically
//! equal inputs have exactly one valid encoding. The format is the CBOR
//! (RFC 8949) core deterministic subset:
//!
//! - definite-length items only, no semantic tags;
//! - integer arguments in shortest form (immediate below 24, then the
//!   smallest of the 1/2/4/8-byte big-endian widths);
//! - mapping levels as maps with unsigned-integer keys emitted in strictly
//!   ascending order;
//! - scalar values as UTF-8 text strings carrying their exact bytes;
//! - groups as arrays of per-entry maps, paths as arrays of unsigned
//!   integers, both in given order.
//!
//! All encoders are stateless free functions; there is nothing to construct
//! or share.

#![warn(missing_docs)]

mod encode;
mod error;
mod writer;

pub use encode::{encode_entry, encode_path, encode_value};
pub use error::EncodingError;
