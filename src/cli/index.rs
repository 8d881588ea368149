use std::path::PathBuf;

use clap::Args;

use crate::alignment::engine::check_length;
use crate::cli::input::{resolve_sequence, LimitArgs};
use crate::cli::OutputFormat;
use crate::core::types::SequenceKind;
use crate::index::hash_index::{HashIndex, IndexStats};
use crate::index::store::{sequence_md5, IndexFile};

#[derive(Args)]
pub struct IndexArgs {
    /// Reference sequence (A/T/C/G). Read from stdin if no reference source is given
    #[arg(short, long, conflicts_with = "reference_file")]
    pub reference: Option<String>,

    /// Read the reference from a FASTA or plain text file
    #[arg(long, value_name = "PATH")]
    pub reference_file: Option<PathBuf>,

    /// Write the index to this file for later use with `seqcover align --index`
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub limits: LimitArgs,
}

/// Execute index subcommand
///
/// # Errors
///
/// Returns an error if the reference cannot be read, is not DNA, exceeds the
/// length limit, or the index file cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: IndexArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut stdin = stdin.lock();

    let reference = resolve_sequence(
        args.reference.as_deref(),
        args.reference_file.as_deref(),
        SequenceKind::Reference,
        &mut stdin,
        verbose,
    )?;

    check_length(
        SequenceKind::Reference,
        reference.len(),
        args.limits.max_reference_length,
    )?;

    let index = HashIndex::build(&reference)?;
    let stats = index.stats();
    let md5 = sequence_md5(&reference);

    if let Some(path) = &args.output {
        IndexFile::new(reference, index).save(path)?;
        if verbose {
            eprintln!("Wrote index to {}", path.display());
        }
    }

    match format {
        OutputFormat::Text => print_text_stats(&stats, &md5),
        OutputFormat::Json => print_json_stats(&stats, &md5)?,
        OutputFormat::Tsv => print_tsv_stats(&stats, &md5),
    }

    Ok(())
}

fn print_text_stats(stats: &IndexStats, md5: &str) {
    println!("Reference Index");
    println!("{}", "=".repeat(60));
    println!("  Reference length: {} bp", stats.reference_len);
    println!("  Reference MD5: {md5}");
    println!("  Distinct hashes: {}", stats.distinct_hashes);
    println!("  Forward entries: {}", stats.forward_entries);
    println!("  Reverse complement entries: {}", stats.reverse_entries);
}

fn print_json_stats(stats: &IndexStats, md5: &str) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "reference_length": stats.reference_len,
        "md5": md5,
        "distinct_hashes": stats.distinct_hashes,
        "forward_entries": stats.forward_entries,
        "reverse_entries": stats.reverse_entries,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_stats(stats: &IndexStats, md5: &str) {
    println!("reference_length\tmd5\tdistinct_hashes\tforward_entries\treverse_entries");
    println!(
        "{}\t{}\t{}\t{}\t{}",
        stats.reference_len,
        md5,
        stats.distinct_hashes,
        stats.forward_entries,
        stats.reverse_entries,
    );
}
