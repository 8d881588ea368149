//! # seqcover
//!
//! A library for covering a short DNA query with the fewest exact-match
//! segments taken from a reference.
//!
//! When a read is assembled from pieces of a known sequence (a rearranged
//! construct, an inverted repeat, a chimeric product) it is useful to know
//! which pieces it is made of. `seqcover` splits the query into as few pieces
//! as possible such that each piece occurs verbatim in the reference, read
//! either forward or as its reverse complement.
//!
//! ## Features
//!
//! - **Both strands**: reverse-complement matches are found and reported in forward coordinates
//! - **Minimal segmentation**: dynamic programming over all indexed substrings
//! - **Deterministic ties**: forward-strand matches win over reverse-complement ones
//! - **Reusable index**: build once, save with bincode, align many queries
//!
//! ## Example
//!
//! ```rust
//! use seqcover::{align, build_index, Strand};
//!
//! let index = build_index(b"ATCGATCG").unwrap();
//! let segments = align(b"CGAT", &index).unwrap();
//!
//! assert_eq!(segments.len(), 1);
//! assert_eq!(segments[0].ref_location.strand, Strand::Forward);
//! assert_eq!((segments[0].ref_location.start, segments[0].ref_location.end), (2, 5));
//! ```
//!
//! The [`Aligner`] keeps the reference next to its index, applies length
//! limits and reports the matched bases:
//!
//! ```rust
//! use seqcover::{Aligner, AlignError, SequenceKind};
//!
//! let aligner = Aligner::new(b"ATCG".to_vec()).unwrap();
//! let report = aligner.align(b"CGAT").unwrap();
//! assert_eq!(report.segments[0].matched_sequence, "ATCG");
//!
//! assert_eq!(aligner.align(b""), Err(AlignError::EmptyInput(SequenceKind::Query)));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Strand, locations, segments, the DNA codec and the error type
//! - [`index`]: Rolling hash, the substring index and its on-disk format
//! - [`alignment`]: Planner, reconstruction and the [`Aligner`] entry point
//! - [`parsing`]: Reading sequences from stdin lines and FASTA/plain files
//! - [`utils`]: Input validation
//! - [`cli`]: Command-line interface implementation

pub mod alignment;
pub mod cli;
pub mod core;
pub mod index;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use alignment::align;
pub use alignment::engine::{AlignConfig, Aligner, AlignmentReport, ReportedSegment};
pub use core::error::AlignError;
pub use core::types::*;
pub use index::build_index;
pub use index::hash_index::HashIndex;
