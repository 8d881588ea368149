//! Centralized validation of user-supplied sequences.

use crate::core::types::SequenceKind;

/// Validation error types
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{kind} cannot be empty")]
    Empty { kind: SequenceKind },

    #[error(
        "{kind} contains invalid character: '{character}' at position {position}. Only A/T/C/G allowed{}",
        lowercase_hint(.character)
    )]
    InvalidCharacter {
        kind: SequenceKind,
        character: char,
        position: usize,
    },
}

fn lowercase_hint(character: &char) -> &'static str {
    if character.is_ascii_lowercase() {
        " (detected lowercase, auto-converted to uppercase)"
    } else {
        ""
    }
}

/// Check whether a byte is one of the four uppercase DNA bases.
///
/// # Examples
///
/// ```
/// use seqcover::utils::validation::is_dna_base;
///
/// assert!(is_dna_base(b'G'));
/// assert!(!is_dna_base(b'g'));
/// assert!(!is_dna_base(b'N'));
/// ```
#[must_use]
pub fn is_dna_base(base: u8) -> bool {
    matches!(base, b'A' | b'T' | b'C' | b'G')
}

/// Check that a sequence is non-empty and uses only `A`, `T`, `C`, `G`.
///
/// Runs before the alignment core so the user sees which input, which
/// character and where, rather than the bare codec error.
///
/// # Errors
///
/// Returns `ValidationError::Empty` for an empty sequence or
/// `ValidationError::InvalidCharacter` for the first byte outside the alphabet.
pub fn validate_dna(sequence: &[u8], kind: SequenceKind) -> Result<(), ValidationError> {
    if sequence.is_empty() {
        return Err(ValidationError::Empty { kind });
    }

    match sequence.iter().position(|&b| !is_dna_base(b)) {
        Some(position) => Err(ValidationError::InvalidCharacter {
            kind,
            character: char::from(sequence[position]),
            position,
        }),
        None => Ok(()),
    }
}
