//! Covering a query with the fewest exact-match segments.
//!
//! This module provides the alignment functionality on top of the index:
//!
//! - [`planner`]: Dynamic program choosing, for each query position, the best next match
//! - [`reconstruct`]: Turns the planner's choices into an ordered list of segments
//! - [`engine`]: [`Aligner`](engine::Aligner), the reference-owning entry point with length guards
//!
//! ## Algorithm
//!
//! 1. **Index**: every reference substring on both strands is hashed (see [`crate::index`])
//! 2. **Plan**: query positions are visited from the end; each extends a rolling hash
//!    and keeps the hit that needs the fewest segments to reach the end of the query
//! 3. **Reconstruct**: decisions are followed from position 0 until the query is covered
//!
//! ## Tie-breaking
//!
//! Among hits of equal cost at one position, a forward-strand hit always wins
//! over a reverse-complement hit, and the longest forward hit wins among
//! forward hits. The same inputs always give the same segments.
//!
//! ## Example
//!
//! ```rust
//! use seqcover::{align, build_index, Strand};
//!
//! let index = build_index(b"ATCG").unwrap();
//! let segments = align(b"AT", &index).unwrap();
//!
//! assert_eq!(segments.len(), 1);
//! assert_eq!(segments[0].ref_location.strand, Strand::Forward);
//! assert_eq!((segments[0].query_start, segments[0].query_end), (0, 1));
//! ```

pub mod engine;
pub mod planner;
pub mod reconstruct;

use crate::core::error::AlignError;
use crate::core::types::MatchSegment;
use crate::index::hash_index::HashIndex;

/// Cover `query` with the fewest segments found in `index`.
///
/// # Errors
///
/// Returns `AlignError::EmptyInput` for an empty query,
/// `AlignError::InvalidSymbol` for a base outside `ATCG`, or
/// `AlignError::AlignmentBreak` when part of the query cannot be matched.
pub fn align(query: &[u8], index: &HashIndex) -> Result<Vec<MatchSegment>, AlignError> {
    let plan = planner::plan(query, index)?;
    reconstruct::reconstruct(&plan)
}
