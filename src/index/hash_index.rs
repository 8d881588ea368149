use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::AlignError;
use crate::core::sequence::reverse_complement;
use crate::core::types::{ReferenceLocation, SequenceKind, Strand};
use crate::index::rolling::{hash_sequence, RollingHash};

/// Rolling hash of every reference substring, on both strands, mapped to
/// where that substring lies in the reference.
///
/// Each hash value keeps the first location inserted for it. The build
/// visits substrings by ascending start, then ascending end, forward strand
/// before reverse complement, so that order decides which location survives
/// when two substrings hash alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashIndex {
    entries: HashMap<u64, ReferenceLocation>,
    reference_len: usize,
}

/// Summary counts for a built index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub reference_len: usize,
    pub distinct_hashes: usize,
    pub forward_entries: usize,
    pub reverse_entries: usize,
}

impl HashIndex {
    /// Index every substring of `reference` on both strands.
    ///
    /// # Errors
    ///
    /// Returns `AlignError::EmptyInput` for an empty reference and
    /// `AlignError::InvalidSymbol` if it contains a base outside `ATCG`.
    pub fn build(reference: &[u8]) -> Result<Self, AlignError> {
        if reference.is_empty() {
            return Err(AlignError::EmptyInput(SequenceKind::Reference));
        }

        let mut index = Self {
            entries: HashMap::new(),
            reference_len: reference.len(),
        };

        let forward = index.index_strand(reference, Strand::Forward)?;
        let reverse = reverse_complement(reference)?;
        let reverse = index.index_strand(&reverse, Strand::ReverseComplement)?;

        debug!(
            reference_len = reference.len(),
            distinct_hashes = index.len(),
            forward,
            reverse,
            "Built reference hash index"
        );

        Ok(index)
    }

    /// Insert all substrings of one orientation; returns how many were new
    fn index_strand(&mut self, seq: &[u8], strand: Strand) -> Result<usize, AlignError> {
        let n = seq.len();
        let mut inserted = 0;
        let mut hasher = RollingHash::new();

        for start in 0..n {
            hasher.reset();
            for end in start..n {
                let hash = hasher.push(seq[end])?;
                let location = match strand {
                    Strand::Forward => ReferenceLocation::new(start, end, strand),
                    // Map back onto forward coordinates
                    Strand::ReverseComplement => {
                        ReferenceLocation::new(n - end - 1, n - start - 1, strand)
                    }
                };
                if self.insert_if_absent(hash, location) {
                    inserted += 1;
                }
            }
        }

        Ok(inserted)
    }

    /// Record `location` under `hash` unless the hash is already taken.
    ///
    /// Returns true if the location was stored.
    pub fn insert_if_absent(&mut self, hash: u64, location: ReferenceLocation) -> bool {
        match self.entries.entry(hash) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(location);
                true
            }
        }
    }

    #[must_use]
    pub fn get(&self, hash: u64) -> Option<&ReferenceLocation> {
        self.entries.get(&hash)
    }

    /// Hash `sequence` and look it up.
    ///
    /// # Errors
    ///
    /// Returns `AlignError::InvalidSymbol` if `sequence` contains a base
    /// outside `ATCG`.
    pub fn lookup(&self, sequence: &[u8]) -> Result<Option<&ReferenceLocation>, AlignError> {
        Ok(self.get(hash_sequence(sequence)?))
    }

    /// Length of the reference this index was built from
    #[must_use]
    pub fn reference_len(&self) -> usize {
        self.reference_len
    }

    /// Number of distinct hash values
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if every stored location lies inside the reference
    #[must_use]
    pub fn locations_in_bounds(&self) -> bool {
        self.entries
            .values()
            .all(|loc| loc.start <= loc.end && loc.end < self.reference_len)
    }

    #[must_use]
    pub fn stats(&self) -> IndexStats {
        let forward_entries = self
            .entries
            .values()
            .filter(|loc| loc.strand.is_forward())
            .count();

        IndexStats {
            reference_len: self.reference_len,
            distinct_hashes: self.entries.len(),
            forward_entries,
            reverse_entries: self.entries.len() - forward_entries,
        }
    }
}
