//! End-to-end tests of the `seqcover` binary
//!
//! Each test runs the compiled binary the way a user would and checks the
//! exit status and the report written to stdout or the error on stderr.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn seqcover() -> Command {
    Command::cargo_bin("seqcover").unwrap()
}

#[test]
fn test_help_lists_subcommands() {
    seqcover()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("align"))
        .stdout(predicate::str::contains("index"));
}

#[test]
fn test_align_forward_prefix() {
    seqcover()
        .args(["align", "--reference", "ATCG", "--query", "AT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Matched segments: 1"))
        .stdout(predicate::str::contains("Ref position: [0-1]"))
        .stdout(predicate::str::contains("Query position: [0-1]"))
        .stdout(predicate::str::contains("Strand: Forward"))
        .stdout(predicate::str::contains("Length: 2 bp"));
}

#[test]
fn test_align_reverse_complement_whole_query() {
    seqcover()
        .args(["align", "-r", "ATCG", "-q", "CGAT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Matched segments: 1"))
        .stdout(predicate::str::contains("Ref position: [0-3]"))
        .stdout(predicate::str::contains("Strand: Reverse complement"))
        .stdout(predicate::str::contains("Matched sequence: ATCG"));
}

#[test]
fn test_align_reads_two_lines_from_stdin() {
    seqcover()
        .arg("align")
        .write_stdin("  aaaa\nTTTT  \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reference length: 4 bp"))
        .stdout(predicate::str::contains("Query position: [0-3]"))
        .stdout(predicate::str::contains("Strand: Reverse complement"));
}

#[test]
fn test_alignment_break_exits_with_error() {
    seqcover()
        .args(["align", "-r", "AAAA", "-q", "AACA"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Alignment break: No match found at position 2",
        ));
}

#[test]
fn test_invalid_character_exits_with_error() {
    seqcover()
        .args(["align", "-r", "ATCG", "-q", "ACNT"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Query sequence contains invalid character: 'N' at position 2",
        ));
}

#[test]
fn test_empty_query_exits_with_error() {
    seqcover()
        .arg("align")
        .write_stdin("ATCG\n\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Query sequence cannot be empty"));
}

#[test]
fn test_missing_query_line_exits_with_error() {
    seqcover()
        .arg("align")
        .write_stdin("ATCG\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Query sequence is missing"));
}

#[test]
fn test_reference_length_limit() {
    seqcover()
        .args([
            "align",
            "-r",
            "ATCGATCG",
            "-q",
            "AT",
            "--max-reference-length",
            "4",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Reference sequence is too long: 8 bases exceeds maximum of 4",
        ));
}

#[test]
fn test_index_applies_reference_length_limit() {
    seqcover()
        .args(["index", "-r", "ATCGATCG", "--max-reference-length", "4"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Reference sequence is too long: 8 bases exceeds maximum of 4",
        ));
}

#[test]
fn test_interactive_mode_rejects_bad_reference_line() {
    seqcover()
        .arg("align")
        .write_stdin("ATXG\nAT\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Reference sequence contains invalid character: 'X' at position 2",
        ));
}

#[test]
fn test_json_output() {
    let output = seqcover()
        .args(["align", "-r", "ATCG", "-q", "CGAT", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["reference_length"], 4);
    assert_eq!(report["query_length"], 4);
    let segments = report["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0]["ref_location"]["start"], 0);
    assert_eq!(segments[0]["ref_location"]["end"], 3);
    assert_eq!(segments[0]["ref_location"]["strand"], "reverse_complement");
    assert_eq!(segments[0]["length"], 4);
}

#[test]
fn test_tsv_output() {
    seqcover()
        .args(["align", "-r", "ATCG", "-q", "AT", "-f", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "segment\tref_start\tref_end\tquery_start\tquery_end\tstrand\tlength\tmatched_sequence\n",
        ))
        .stdout(predicate::str::contains("1\t0\t1\t0\t1\t+\t2\tAT\n"));
}

#[test]
fn test_align_with_fasta_files() {
    let dir = TempDir::new().unwrap();
    let reference = dir.path().join("ref.fa");
    let query = dir.path().join("query.txt");
    fs::write(&reference, ">construct\nGATT\nACA\n").unwrap();
    fs::write(&query, "taca\n").unwrap();

    seqcover()
        .args(["align", "--reference-file"])
        .arg(&reference)
        .arg("--query-file")
        .arg(&query)
        .assert()
        .success()
        .stdout(predicate::str::contains("Reference length: 7 bp"))
        .stdout(predicate::str::contains("Ref position: [3-6]"));
}

#[test]
fn test_reference_sources_conflict() {
    seqcover()
        .args(["align", "-r", "ATCG", "--reference-file", "ref.fa", "-q", "AT"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_index_then_align() {
    let dir = TempDir::new().unwrap();
    let index_path = dir.path().join("atcg.idx");

    seqcover()
        .args(["index", "-r", "ATCG", "--output"])
        .arg(&index_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Reference length: 4 bp"));
    assert!(index_path.exists());

    seqcover()
        .args(["align", "--index"])
        .arg(&index_path)
        .args(["-q", "CGAT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ref position: [0-3]"))
        .stdout(predicate::str::contains("Strand: Reverse complement"));
}

#[test]
fn test_index_json_stats() {
    let output = seqcover()
        .args(["index", "-r", "AAAA", "-f", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stats: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(stats["reference_length"], 4);
    assert_eq!(stats["distinct_hashes"], 8);
    assert_eq!(stats["md5"], "098890dde069e9abad63f19a0d9e1f32");
}

#[test]
fn test_corrupt_index_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let index_path = dir.path().join("broken.idx");
    fs::write(&index_path, b"not an index").unwrap();

    seqcover()
        .args(["align", "--index"])
        .arg(&index_path)
        .args(["-q", "AT"])
        .assert()
        .failure()
        .code(1);
}
