use std::path::PathBuf;

use clap::Args;

use crate::alignment::engine::{Aligner, AlignmentReport};
use crate::cli::input::{read_interactive, resolve_sequence, LimitArgs};
use crate::cli::OutputFormat;
use crate::core::types::SequenceKind;
use crate::index::store::IndexFile;

#[derive(Args)]
pub struct AlignArgs {
    /// Reference sequence (A/T/C/G). Read from stdin if no reference source is given
    #[arg(short, long, conflicts_with_all = ["reference_file", "index"])]
    pub reference: Option<String>,

    /// Read the reference from a FASTA or plain text file
    #[arg(long, value_name = "PATH", conflicts_with = "index")]
    pub reference_file: Option<PathBuf>,

    /// Use an index file written by `seqcover index --output`
    #[arg(long, value_name = "PATH")]
    pub index: Option<PathBuf>,

    /// Query sequence (A/T/C/G). Read from stdin if no query source is given
    #[arg(short, long, conflicts_with = "query_file")]
    pub query: Option<String>,

    /// Read the query from a FASTA or plain text file
    #[arg(long, value_name = "PATH")]
    pub query_file: Option<PathBuf>,

    #[command(flatten)]
    pub limits: LimitArgs,
}

impl AlignArgs {
    /// No source given for either sequence; both come from stdin
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.reference.is_none()
            && self.reference_file.is_none()
            && self.index.is_none()
            && self.query.is_none()
            && self.query_file.is_none()
    }
}

/// Execute align subcommand
///
/// # Errors
///
/// Returns an error if an input cannot be read or is not DNA, or if the
/// query cannot be covered by the reference.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AlignArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut stdin = stdin.lock();
    let config = args.limits.config();

    let (aligner, query) = if args.is_interactive() {
        let (reference, query) = read_interactive(&mut stdin)?;
        (Aligner::with_config(reference, config)?, query)
    } else {
        let aligner = if let Some(path) = &args.index {
            let file = IndexFile::load(path)?;
            if verbose {
                eprintln!(
                    "Loaded index for {} bp reference ({} distinct hashes, MD5 {})",
                    file.reference.len(),
                    file.index.len(),
                    file.md5
                );
            }
            Aligner::from_index(file.reference, file.index, config)?
        } else {
            let reference = resolve_sequence(
                args.reference.as_deref(),
                args.reference_file.as_deref(),
                SequenceKind::Reference,
                &mut stdin,
                verbose,
            )?;
            Aligner::with_config(reference, config)?
        };

        let query = resolve_sequence(
            args.query.as_deref(),
            args.query_file.as_deref(),
            SequenceKind::Query,
            &mut stdin,
            verbose,
        )?;
        (aligner, query)
    };

    let report = aligner.align(&query)?;

    match format {
        OutputFormat::Text => print_text_report(&report),
        OutputFormat::Json => print_json_report(&report)?,
        OutputFormat::Tsv => print_tsv_report(&report),
    }

    Ok(())
}

fn print_text_report(report: &AlignmentReport) {
    println!("======== Alignment Results ========");
    println!("Reference length: {} bp", report.reference_length);
    println!("Query length: {} bp", report.query_length);
    println!("Matched segments: {}", report.segment_count());

    for (i, reported) in report.segments.iter().enumerate() {
        let seg = &reported.segment;
        println!("\nSegment {}:", i + 1);
        println!(
            "  Ref position: [{}-{}]",
            seg.ref_location.start, seg.ref_location.end
        );
        println!("  Query position: [{}-{}]", seg.query_start, seg.query_end);
        println!("  Strand: {}", seg.ref_location.strand);
        println!("  Matched sequence: {}", reported.matched_sequence);
        println!("  Length: {} bp", reported.length);
    }

    println!("\n{}", "=".repeat(35));
}

fn print_json_report(report: &AlignmentReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn print_tsv_report(report: &AlignmentReport) {
    println!("segment\tref_start\tref_end\tquery_start\tquery_end\tstrand\tlength\tmatched_sequence");
    for (i, reported) in report.segments.iter().enumerate() {
        let seg = &reported.segment;
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            i + 1,
            seg.ref_location.start,
            seg.ref_location.end,
            seg.query_start,
            seg.query_end,
            seg.ref_location.strand.symbol(),
            reported.length,
            reported.matched_sequence,
        );
    }
}
