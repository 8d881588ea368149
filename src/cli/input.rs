use std::io::{BufRead, IsTerminal, Write};
use std::path::Path;

use clap::Args;

use crate::alignment::engine::{AlignConfig, DEFAULT_MAX_QUERY_LENGTH, DEFAULT_MAX_REFERENCE_LENGTH};
use crate::core::types::SequenceKind;
use crate::parsing::fasta::read_sequence_file;
use crate::parsing::sequence::{normalize, read_sequence_line, read_two_lines};
use crate::utils::validation::validate_dna;

/// Length limits shared by the subcommands
#[derive(Args, Debug, Clone)]
pub struct LimitArgs {
    /// Longest reference to index (memory grows with its square)
    #[arg(long, default_value_t = DEFAULT_MAX_REFERENCE_LENGTH)]
    pub max_reference_length: usize,

    /// Longest query to align
    #[arg(long, default_value_t = DEFAULT_MAX_QUERY_LENGTH)]
    pub max_query_length: usize,
}

impl LimitArgs {
    #[must_use]
    pub fn config(&self) -> AlignConfig {
        AlignConfig {
            max_reference_length: self.max_reference_length,
            max_query_length: self.max_query_length,
        }
    }
}

/// Resolve one input sequence from an inline value, a file, or the next
/// line of `stdin`, then check its alphabet.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read or the sequence is
/// empty or not DNA.
pub fn resolve_sequence<R: BufRead>(
    inline: Option<&str>,
    file: Option<&Path>,
    kind: SequenceKind,
    stdin: &mut R,
    verbose: bool,
) -> anyhow::Result<Vec<u8>> {
    let sequence = if let Some(value) = inline {
        normalize(value.as_bytes(), kind)
    } else if let Some(path) = file {
        let record = read_sequence_file(path, kind)?;
        if verbose {
            eprintln!(
                "Read {} bp {} from {}",
                record.sequence.len(),
                match kind {
                    SequenceKind::Reference => "reference",
                    SequenceKind::Query => "query",
                },
                path.display()
            );
        }
        record.sequence
    } else {
        prompt(kind);
        read_sequence_line(stdin, kind)?
    };

    validate_dna(&sequence, kind)?;
    Ok(sequence)
}

/// Read the reference from the first line of `stdin` and the query from the
/// second, then check both alphabets.
///
/// # Errors
///
/// Returns an error if either line is missing, empty, or not DNA.
pub fn read_interactive<R: BufRead>(stdin: &mut R) -> anyhow::Result<(Vec<u8>, Vec<u8>)> {
    if std::io::stdin().is_terminal() {
        eprintln!("Enter the reference sequence (long) on the first line and the query sequence (short) on the second, A/T/C/G only:");
    }

    let (reference, query) = read_two_lines(stdin)?;
    validate_dna(&reference, SequenceKind::Reference)?;
    validate_dna(&query, SequenceKind::Query)?;
    Ok((reference, query))
}

/// Ask for a sequence when a person is typing on stdin
fn prompt(kind: SequenceKind) {
    if !std::io::stdin().is_terminal() {
        return;
    }
    let what = match kind {
        SequenceKind::Reference => "reference sequence (long)",
        SequenceKind::Query => "query sequence (short)",
    };
    eprint!("Enter {what}, A/T/C/G only: ");
    let _ = std::io::stderr().flush();
}
