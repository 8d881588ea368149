//! Core data types for query/reference segment alignment.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Strand`]: Forward or reverse-complement orientation of a match
//! - [`ReferenceLocation`]: An inclusive reference range tagged with its strand
//! - [`MatchSegment`]: One piece of a covering path, in query and reference coordinates
//! - [`AlignError`]: Failures raised by the codec, index and planner
//! - [`sequence`]: The DNA symbol codec (`encode`, `complement`, `reverse_complement`)
//!
//! ## Coordinates
//!
//! All ranges are zero-based and inclusive at both ends. Reverse-complement
//! matches are reported in forward reference coordinates:
//!
//! | Strand             | Reference `ATCG`, query `CGAT` |
//! |--------------------|--------------------------------|
//! | Forward            | no single segment              |
//! | Reverse complement | `[0-3]`                        |
//!
//! [`Strand`]: types::Strand
//! [`ReferenceLocation`]: types::ReferenceLocation
//! [`MatchSegment`]: types::MatchSegment
//! [`AlignError`]: error::AlignError

pub mod error;
pub mod sequence;
pub mod types;
