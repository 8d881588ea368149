use thiserror::Error;

use crate::core::types::SequenceKind;

/// Errors raised by the alignment core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    #[error("Invalid DNA character: '{0}'")]
    InvalidSymbol(char),

    #[error("{0} cannot be empty")]
    EmptyInput(SequenceKind),

    #[error("Alignment break: No match found at position {position}")]
    AlignmentBreak { position: usize },

    #[error("Index does not match reference: index built from {index_len} bases, reference has {reference_len}")]
    IndexMismatch {
        reference_len: usize,
        index_len: usize,
    },

    #[error("{kind} is too long: {length} bases exceeds maximum of {max}")]
    TooLong {
        kind: SequenceKind,
        length: usize,
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AlignError::InvalidSymbol('N').to_string(),
            "Invalid DNA character: 'N'"
        );
        assert_eq!(
            AlignError::EmptyInput(SequenceKind::Query).to_string(),
            "Query sequence cannot be empty"
        );
        assert_eq!(
            AlignError::AlignmentBreak { position: 7 }.to_string(),
            "Alignment break: No match found at position 7"
        );
        assert_eq!(
            AlignError::IndexMismatch {
                reference_len: 2,
                index_len: 8
            }
            .to_string(),
            "Index does not match reference: index built from 8 bases, reference has 2"
        );
    }
}
