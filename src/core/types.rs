use serde::{Deserialize, Serialize};

/// Which strand of the reference a match was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strand {
    /// The reference as given
    Forward,
    /// The reference reversed, with every base complemented
    ReverseComplement,
}

impl Strand {
    #[must_use]
    pub fn is_forward(self) -> bool {
        self == Self::Forward
    }

    /// Single-character symbol used in tabular output
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Forward => '+',
            Self::ReverseComplement => '-',
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "Forward"),
            Self::ReverseComplement => write!(f, "Reverse complement"),
        }
    }
}

/// Which of the two input sequences a value or error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceKind {
    Reference,
    Query,
}

impl std::fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reference => write!(f, "Reference sequence"),
            Self::Query => write!(f, "Query sequence"),
        }
    }
}

/// A range of the reference, in forward-strand coordinates.
///
/// Both ends are inclusive. A reverse-complement match is still reported in
/// forward coordinates; `strand` records the orientation it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReferenceLocation {
    pub start: usize,
    pub end: usize,
    pub strand: Strand,
}

impl ReferenceLocation {
    #[must_use]
    pub fn new(start: usize, end: usize, strand: Strand) -> Self {
        debug_assert!(start <= end, "reference range must not be reversed");
        Self { start, end, strand }
    }

    /// Number of reference bases covered
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // A location covers at least one base
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }
}

/// One exact-match segment of a covering path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSegment {
    /// Where in the reference this piece of the query matched
    pub ref_location: ReferenceLocation,

    /// First query position covered (inclusive)
    pub query_start: usize,

    /// Last query position covered (inclusive)
    pub query_end: usize,
}

impl MatchSegment {
    /// Number of query bases covered
    #[must_use]
    pub fn query_len(&self) -> usize {
        self.query_end - self.query_start + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strand_display() {
        assert_eq!(Strand::Forward.to_string(), "Forward");
        assert_eq!(Strand::ReverseComplement.to_string(), "Reverse complement");
        assert_eq!(Strand::Forward.symbol(), '+');
        assert_eq!(Strand::ReverseComplement.symbol(), '-');
    }

    #[test]
    fn test_strand_serializes_snake_case() {
        let json = serde_json::to_string(&Strand::ReverseComplement).unwrap();
        assert_eq!(json, "\"reverse_complement\"");
    }

    #[test]
    fn test_location_len() {
        assert_eq!(ReferenceLocation::new(0, 0, Strand::Forward).len(), 1);
        assert_eq!(ReferenceLocation::new(2, 5, Strand::ReverseComplement).len(), 4);
    }
}
