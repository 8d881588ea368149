//! DNA symbol codec.
//!
//! Symbols are ASCII bytes from the alphabet `A`, `T`, `C`, `G` (uppercase
//! only). Anything else is rejected with [`AlignError::InvalidSymbol`].

use crate::core::error::AlignError;

/// Map a base to its hashing digit: `A`=1, `T`=2, `C`=3, `G`=4.
///
/// Digits start at 1 so that leading bases still contribute to the hash.
///
/// # Errors
///
/// Returns `AlignError::InvalidSymbol` for any byte outside the alphabet.
#[inline]
pub fn encode(base: u8) -> Result<u64, AlignError> {
    match base {
        b'A' => Ok(1),
        b'T' => Ok(2),
        b'C' => Ok(3),
        b'G' => Ok(4),
        other => Err(AlignError::InvalidSymbol(char::from(other))),
    }
}

/// Watson-Crick complement of a single base.
///
/// # Errors
///
/// Returns `AlignError::InvalidSymbol` for any byte outside the alphabet.
#[inline]
pub fn complement(base: u8) -> Result<u8, AlignError> {
    match base {
        b'A' => Ok(b'T'),
        b'T' => Ok(b'A'),
        b'C' => Ok(b'G'),
        b'G' => Ok(b'C'),
        other => Err(AlignError::InvalidSymbol(char::from(other))),
    }
}

/// Reverse complement of a sequence, stopping at the first invalid base.
///
/// # Examples
///
/// ```
/// use seqcover::core::sequence::reverse_complement;
///
/// assert_eq!(reverse_complement(b"ATCG").unwrap(), b"CGAT");
/// assert!(reverse_complement(b"ATNG").is_err());
/// ```
///
/// # Errors
///
/// Returns `AlignError::InvalidSymbol` naming the first offending byte,
/// scanning from the end of the sequence.
pub fn reverse_complement(sequence: &[u8]) -> Result<Vec<u8>, AlignError> {
    sequence.iter().rev().map(|&base| complement(base)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode(b'A'), Ok(1));
        assert_eq!(encode(b'T'), Ok(2));
        assert_eq!(encode(b'C'), Ok(3));
        assert_eq!(encode(b'G'), Ok(4));
        assert_eq!(encode(b'N'), Err(AlignError::InvalidSymbol('N')));
        // Lowercase is normalized before the core sees it
        assert_eq!(encode(b'a'), Err(AlignError::InvalidSymbol('a')));
    }

    #[test]
    fn test_complement() {
        assert_eq!(complement(b'A'), Ok(b'T'));
        assert_eq!(complement(b'T'), Ok(b'A'));
        assert_eq!(complement(b'C'), Ok(b'G'));
        assert_eq!(complement(b'G'), Ok(b'C'));
        assert_eq!(complement(b'U'), Err(AlignError::InvalidSymbol('U')));
    }

    #[test]
    fn test_reverse_complement() {
        assert_eq!(reverse_complement(b"ATCG").unwrap(), b"CGAT".to_vec());
        assert_eq!(reverse_complement(b"AAAA").unwrap(), b"TTTT".to_vec());
        assert_eq!(reverse_complement(b"").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_reverse_complement_is_an_involution() {
        for seq in [
            &b"A"[..],
            b"GATTACA",
            b"ACGTACGTTTGCA",
            b"CCCCGGGGAAAATTTT",
        ] {
            let twice = reverse_complement(&reverse_complement(seq).unwrap()).unwrap();
            assert_eq!(twice, seq);
        }
    }

    #[test]
    fn test_reverse_complement_rejects_first_offender_from_the_end() {
        assert_eq!(
            reverse_complement(b"AXTY"),
            Err(AlignError::InvalidSymbol('Y'))
        );
    }
}
