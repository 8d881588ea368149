//! Reading reference and query sequences.
//!
//! This module provides the input side of the tool:
//!
//! - **Interactive input**: the reference on the first line of stdin, the query on the second
//! - **Sequence files**: FASTA (optionally gzip/bgzip compressed) or plain text
//!
//! All readers trim surrounding whitespace and convert to uppercase. They do
//! not check the alphabet; see [`crate::utils::validation`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use seqcover::parsing::fasta::read_sequence_file;
//! use seqcover::SequenceKind;
//! use std::path::Path;
//!
//! let reference = read_sequence_file(Path::new("chrM.fa"), SequenceKind::Reference).unwrap();
//! println!("{} bp", reference.sequence.len());
//! ```

pub mod fasta;
pub mod sequence;

pub use sequence::ParseError;
