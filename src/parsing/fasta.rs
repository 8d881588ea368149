//! Reading a reference or query sequence from a file.
//!
//! FASTA files are parsed with noodles and may be gzip/bgzip compressed.
//! Any other file is read as plain text and its first non-empty line is
//! taken as the sequence.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)
//!
//! A file whose first non-blank character is `>` is parsed as FASTA whatever
//! its name.

use std::ffi::OsStr;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use tracing::{debug, warn};

use crate::core::types::SequenceKind;
use crate::parsing::sequence::{normalize, ParseError};

/// A sequence read from a file, normalized to uppercase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// FASTA record name, if the file was FASTA
    pub name: Option<String>,
    pub sequence: Vec<u8>,
}

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read one sequence from `path`.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles`
/// if FASTA parsing fails, or `ParseError::InvalidFormat` if the file holds
/// no sequence.
pub fn read_sequence_file(path: &Path, kind: SequenceKind) -> Result<SequenceRecord, ParseError> {
    let file = std::fs::File::open(path)?;
    let mut content = Vec::new();
    if is_gzipped(path) {
        MultiGzDecoder::new(file).read_to_end(&mut content)?;
    } else {
        BufReader::new(file).read_to_end(&mut content)?;
    }

    let body_start = content
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(content.len());
    let looks_like_fasta = content.get(body_start) == Some(&b'>');

    let record = if looks_like_fasta || is_fasta_file(path) {
        parse_fasta(&content[body_start..], kind)?
    } else {
        parse_plain(&content[..], kind)?
    };

    debug!(
        path = %path.display(),
        name = ?record.name,
        length = record.sequence.len(),
        "Read {kind}"
    );

    Ok(record)
}

/// Take the first record of a FASTA stream
fn parse_fasta<R: BufRead>(reader: R, kind: SequenceKind) -> Result<SequenceRecord, ParseError> {
    let mut fasta_reader = fasta::io::Reader::new(reader);
    let mut records = fasta_reader.records();

    let first = records
        .next()
        .ok_or_else(|| ParseError::InvalidFormat("no FASTA records found".to_string()))?
        .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

    let extra = records.count();
    if extra > 0 {
        warn!("{kind} file has {extra} additional record(s); only the first is used");
    }

    let name = String::from_utf8_lossy(first.name()).to_string();
    Ok(SequenceRecord {
        name: Some(name),
        sequence: normalize(first.sequence().as_ref(), kind),
    })
}

/// Take the first non-empty line of a plain text stream
fn parse_plain<R: BufRead>(reader: R, kind: SequenceKind) -> Result<SequenceRecord, ParseError> {
    for line in reader.split(b'\n') {
        let line = line?;
        let sequence = normalize(&line, kind);
        if !sequence.is_empty() {
            return Ok(SequenceRecord {
                name: None,
                sequence,
            });
        }
    }

    Err(ParseError::InvalidFormat("file contains no sequence".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(suffix: &str, content: &[u8]) -> NamedTempFile {
        let mut temp = NamedTempFile::with_suffix(suffix).unwrap();
        temp.write_all(content).unwrap();
        temp.flush().unwrap();
        temp
    }

    #[test]
    fn test_is_fasta_file() {
        assert!(is_fasta_file(Path::new("test.fa")));
        assert!(is_fasta_file(Path::new("test.fasta")));
        assert!(is_fasta_file(Path::new("test.fna")));
        assert!(is_fasta_file(Path::new("test.fa.gz")));
        assert!(is_fasta_file(Path::new("test.fna.bgz")));
        assert!(is_fasta_file(Path::new("/path/to/Reference.FA")));

        assert!(!is_fasta_file(Path::new("test.txt")));
        assert!(!is_fasta_file(Path::new("test.fai")));
    }

    #[test]
    fn test_read_fasta_multiline() {
        let temp = write_temp(".fa", b">chr1 description\nACGTACGT\nacgt\n");
        let record = read_sequence_file(temp.path(), SequenceKind::Reference).unwrap();
        assert_eq!(record.name.as_deref(), Some("chr1"));
        assert_eq!(record.sequence, b"ACGTACGTACGT");
    }

    #[test]
    fn test_read_fasta_uses_first_record() {
        let temp = write_temp(".fasta", b">a\nGATTACA\n>b\nCCCC\n");
        let record = read_sequence_file(temp.path(), SequenceKind::Reference).unwrap();
        assert_eq!(record.name.as_deref(), Some("a"));
        assert_eq!(record.sequence, b"GATTACA");
    }

    #[test]
    fn test_fasta_detected_by_content() {
        let temp = write_temp(".txt", b"\n>q\nTTAG\n");
        let record = read_sequence_file(temp.path(), SequenceKind::Query).unwrap();
        assert_eq!(record.name.as_deref(), Some("q"));
        assert_eq!(record.sequence, b"TTAG");
    }

    #[test]
    fn test_read_plain_text() {
        let temp = write_temp(".txt", b"\n   \n  ccgg \nAAAA\n");
        let record = read_sequence_file(temp.path(), SequenceKind::Query).unwrap();
        assert_eq!(record.name, None);
        assert_eq!(record.sequence, b"CCGG");
    }

    #[test]
    fn test_read_gzipped_fasta() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">chr1\nATCG\n").unwrap();
        let compressed = encoder.finish().unwrap();

        let temp = write_temp(".fa.gz", &compressed);
        let record = read_sequence_file(temp.path(), SequenceKind::Reference).unwrap();
        assert_eq!(record.sequence, b"ATCG");
    }

    #[test]
    fn test_read_empty_file() {
        let temp = write_temp(".fa", b"");
        assert!(read_sequence_file(temp.path(), SequenceKind::Reference).is_err());

        let temp = write_temp(".txt", b"\n\n");
        assert!(matches!(
            read_sequence_file(temp.path(), SequenceKind::Query),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
