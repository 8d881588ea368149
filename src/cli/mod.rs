//! Command-line interface for seqcover.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **align**: Cover a query with the fewest exact-match segments from a reference
//! - **index**: Build the reference index, print its statistics, optionally save it
//!
//! ## Usage
//!
//! ```text
//! # Align inline sequences
//! seqcover align --reference ATCGGATTACA --query GATTACACGAT
//!
//! # Interactive: reference on the first line, query on the second
//! printf 'ATCGGATTACA\nGATTACACGAT\n' | seqcover align
//!
//! # Reference from FASTA, JSON output for scripting
//! seqcover align --reference-file chrM.fa --query GATTACA --format json
//!
//! # Build once, align many times
//! seqcover index --reference-file chrM.fa --output chrM.idx
//! seqcover align --index chrM.idx --query-file read.fa
//! ```

use clap::{Parser, Subcommand};

pub mod align;
pub mod index;
pub mod input;

#[derive(Parser)]
#[command(name = "seqcover")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Cover a DNA query with the fewest exact-match segments from a reference")]
#[command(
    long_about = "seqcover aligns a short query against a reference by splitting the query into the fewest pieces that each occur exactly in the reference, on either strand.\n\nFor every piece it reports:\n- The reference range, in forward coordinates\n- The query range\n- Whether the piece matched the forward or the reverse-complement strand"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Align a query against a reference
    Align(align::AlignArgs),

    /// Build and inspect a reference index
    Index(index::IndexArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
