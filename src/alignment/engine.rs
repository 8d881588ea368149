use serde::Serialize;
use tracing::{debug, info};

use crate::alignment::planner::plan;
use crate::alignment::reconstruct::reconstruct;
use crate::core::error::AlignError;
use crate::core::types::{MatchSegment, SequenceKind};
use crate::index::hash_index::HashIndex;

/// Default maximum reference length.
///
/// The index holds every substring of the reference on both strands, so
/// memory grows with the square of this value.
pub const DEFAULT_MAX_REFERENCE_LENGTH: usize = 5_000;

/// Default maximum query length
pub const DEFAULT_MAX_QUERY_LENGTH: usize = 10_000;

/// Configuration for the alignment engine
#[derive(Debug, Clone)]
pub struct AlignConfig {
    /// Longest reference accepted for indexing
    pub max_reference_length: usize,
    /// Longest query accepted for planning
    pub max_query_length: usize,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            max_reference_length: DEFAULT_MAX_REFERENCE_LENGTH,
            max_query_length: DEFAULT_MAX_QUERY_LENGTH,
        }
    }
}

pub(crate) fn check_length(kind: SequenceKind, length: usize, max: usize) -> Result<(), AlignError> {
    if length == 0 {
        return Err(AlignError::EmptyInput(kind));
    }
    if length > max {
        return Err(AlignError::TooLong { kind, length, max });
    }
    Ok(())
}

/// A segment together with the reference bases it covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportedSegment {
    #[serde(flatten)]
    pub segment: MatchSegment,

    /// Reference bases in forward orientation
    pub matched_sequence: String,

    /// Number of bases matched
    pub length: usize,
}

/// Result of aligning one query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignmentReport {
    pub reference_length: usize,
    pub query_length: usize,
    pub segments: Vec<ReportedSegment>,
}

impl AlignmentReport {
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// The bare segments, without the matched text
    #[must_use]
    pub fn match_segments(&self) -> Vec<MatchSegment> {
        self.segments.iter().map(|s| s.segment).collect()
    }
}

/// Aligns queries against one indexed reference
pub struct Aligner {
    reference: Vec<u8>,
    index: HashIndex,
    config: AlignConfig,
}

impl Aligner {
    /// Index `reference` with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`Aligner::with_config`].
    pub fn new(reference: Vec<u8>) -> Result<Self, AlignError> {
        Self::with_config(reference, AlignConfig::default())
    }

    /// Index `reference` with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns `AlignError::EmptyInput` for an empty reference,
    /// `AlignError::TooLong` if it exceeds `max_reference_length`, or
    /// `AlignError::InvalidSymbol` if it contains a base outside `ATCG`.
    pub fn with_config(reference: Vec<u8>, config: AlignConfig) -> Result<Self, AlignError> {
        check_length(
            SequenceKind::Reference,
            reference.len(),
            config.max_reference_length,
        )?;

        let index = HashIndex::build(&reference)?;
        info!(
            "Indexed {} bp reference ({} distinct hashes)",
            reference.len(),
            index.len()
        );

        Ok(Self {
            reference,
            index,
            config,
        })
    }

    /// Wrap an index that was built earlier, e.g. one loaded from disk.
    ///
    /// The length limit is not applied to a prebuilt index.
    ///
    /// # Errors
    ///
    /// Returns `AlignError::EmptyInput` for an empty reference or
    /// `AlignError::IndexMismatch` if the index was built from a reference
    /// of a different length.
    pub fn from_index(
        reference: Vec<u8>,
        index: HashIndex,
        config: AlignConfig,
    ) -> Result<Self, AlignError> {
        if reference.is_empty() {
            return Err(AlignError::EmptyInput(SequenceKind::Reference));
        }
        if reference.len() != index.reference_len() {
            return Err(AlignError::IndexMismatch {
                reference_len: reference.len(),
                index_len: index.reference_len(),
            });
        }

        Ok(Self {
            reference,
            index,
            config,
        })
    }

    /// Cover `query` with the fewest indexed segments.
    ///
    /// # Errors
    ///
    /// Returns `AlignError::EmptyInput` for an empty query,
    /// `AlignError::TooLong` if it exceeds `max_query_length`,
    /// `AlignError::InvalidSymbol` for a base outside `ATCG`,
    /// `AlignError::AlignmentBreak` when part of the query cannot be matched,
    /// or `AlignError::IndexMismatch` if the index holds a location outside
    /// the reference.
    pub fn align(&self, query: &[u8]) -> Result<AlignmentReport, AlignError> {
        check_length(SequenceKind::Query, query.len(), self.config.max_query_length)?;

        let plan = plan(query, &self.index)?;
        let segments = reconstruct(&plan)?;
        debug!(segments = segments.len(), "Reconstructed covering path");

        let segments = segments
            .into_iter()
            .map(|segment| -> Result<ReportedSegment, AlignError> {
                let loc = segment.ref_location;
                let matched = self.reference.get(loc.start..=loc.end).ok_or(
                    AlignError::IndexMismatch {
                        reference_len: self.reference.len(),
                        index_len: self.index.reference_len(),
                    },
                )?;
                Ok(ReportedSegment {
                    segment,
                    matched_sequence: String::from_utf8_lossy(matched).into_owned(),
                    length: loc.len(),
                })
            })
            .collect::<Result<Vec<_>, AlignError>>()?;

        Ok(AlignmentReport {
            reference_length: self.reference.len(),
            query_length: query.len(),
            segments,
        })
    }
}
