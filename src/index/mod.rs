//! Rolling-hash index over every substring of a reference.
//!
//! The index maps the hash of each reference substring, read from either
//! strand, to the location of that substring in forward coordinates. It is
//! built once per reference and only read afterwards.
//!
//! ## Size
//!
//! A reference of length `n` has `n(n+1)/2` substrings per strand, so both
//! time and memory grow quadratically. The index is meant for short
//! references; see [`AlignConfig`](crate::alignment::engine::AlignConfig)
//! for the length guard the engine applies.
//!
//! ## Collisions
//!
//! Hashes are reduced modulo [`HASH_MODULUS`](rolling::HASH_MODULUS). Two
//! different substrings may share a hash; the first one inserted keeps the
//! slot and the other is never reported.
//!
//! ## Example
//!
//! ```rust
//! use seqcover::index::build_index;
//! use seqcover::Strand;
//!
//! let index = build_index(b"ATCG").unwrap();
//! let hit = index.lookup(b"CGAT").unwrap().unwrap();
//! assert_eq!((hit.start, hit.end), (0, 3));
//! assert_eq!(hit.strand, Strand::ReverseComplement);
//! ```

pub mod hash_index;
pub mod rolling;
pub mod store;

use crate::core::error::AlignError;
use hash_index::HashIndex;

/// Build the hash index for a reference.
///
/// # Errors
///
/// Returns `AlignError::EmptyInput` for an empty reference and
/// `AlignError::InvalidSymbol` if it contains a base outside `ATCG`.
pub fn build_index(reference: &[u8]) -> Result<HashIndex, AlignError> {
    HashIndex::build(reference)
}
