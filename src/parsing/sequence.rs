use std::io::BufRead;

use thiserror::Error;
use tracing::debug;

use crate::core::types::SequenceKind;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read input: {0} is missing")]
    MissingInput(SequenceKind),

    #[error("Invalid sequence file format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),
}

/// Trim surrounding whitespace and convert to uppercase.
///
/// Interior whitespace is kept, so it is later reported as an invalid
/// character rather than silently dropped.
#[must_use]
pub fn normalize(raw: &[u8], kind: SequenceKind) -> Vec<u8> {
    let trimmed = raw.trim_ascii();
    if trimmed.iter().any(u8::is_ascii_lowercase) {
        debug!("{kind} contains lowercase bases, converting to uppercase");
    }
    trimmed.to_ascii_uppercase()
}

/// Read the reference from the first line and the query from the second.
///
/// Blank lines are not skipped: an empty line yields an empty sequence,
/// which the caller rejects as empty input.
///
/// # Errors
///
/// Returns `ParseError::MissingInput` if the input ends before a line could
/// be read, or `ParseError::Io` on read failure.
pub fn read_two_lines<R: BufRead>(mut reader: R) -> Result<(Vec<u8>, Vec<u8>), ParseError> {
    let reference = read_sequence_line(&mut reader, SequenceKind::Reference)?;
    let query = read_sequence_line(&mut reader, SequenceKind::Query)?;
    Ok((reference, query))
}

/// Read and normalize one line.
///
/// # Errors
///
/// Returns `ParseError::MissingInput` at end of input, or `ParseError::Io`
/// on read failure.
pub fn read_sequence_line<R: BufRead>(
    reader: &mut R,
    kind: SequenceKind,
) -> Result<Vec<u8>, ParseError> {
    let mut line = Vec::new();
    if reader.read_until(b'\n', &mut line)? == 0 {
        return Err(ParseError::MissingInput(kind));
    }
    Ok(normalize(&line, kind))
}
