use tracing::debug;

use crate::core::error::AlignError;
use crate::core::sequence::encode;
use crate::core::types::{MatchSegment, ReferenceLocation, SequenceKind};
use crate::index::hash_index::HashIndex;
use crate::index::rolling::RollingHash;

/// The match chosen to start at one query position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanDecision {
    /// Reference location of the matched substring
    pub matched_location: ReferenceLocation,

    /// Query position the next segment starts at
    pub resume_at: usize,

    /// First query position covered (inclusive)
    pub query_start: usize,

    /// Last query position covered (inclusive)
    pub query_end: usize,
}

impl PlanDecision {
    #[must_use]
    pub fn segment(&self) -> MatchSegment {
        MatchSegment {
            ref_location: self.matched_location,
            query_start: self.query_start,
            query_end: self.query_end,
        }
    }
}

/// Per-position results of the covering dynamic program.
///
/// `costs[i]` is the fewest segments that cover the query suffix starting at
/// `i`, or `None` if no chain of indexed matches reaches the end from there.
/// `costs[query_len]` is always `Some(0)`.
#[derive(Debug, Clone)]
pub struct Plan {
    costs: Vec<Option<usize>>,
    decisions: Vec<Option<PlanDecision>>,
    anchored: Vec<bool>,
}

impl Plan {
    #[must_use]
    pub fn query_len(&self) -> usize {
        self.decisions.len()
    }

    /// Fewest segments covering the suffix from `position`
    #[must_use]
    pub fn cost(&self, position: usize) -> Option<usize> {
        self.costs.get(position).copied().flatten()
    }

    #[must_use]
    pub fn decision(&self, position: usize) -> Option<&PlanDecision> {
        self.decisions.get(position).and_then(Option::as_ref)
    }

    /// Fewest segments covering the whole query
    #[must_use]
    pub fn min_segments(&self) -> Option<usize> {
        self.cost(0)
    }

    /// First position at or after `position` where no indexed match starts
    #[must_use]
    pub fn first_unanchored_from(&self, position: usize) -> Option<usize> {
        (position..self.anchored.len()).find(|&i| !self.anchored[i])
    }
}

/// Run the covering dynamic program for `query` against `index`.
///
/// Start positions are visited from the end of the query backwards. From each
/// start the query substring is extended one base at a time and looked up in
/// the index. A hit whose remainder is coverable is taken when it needs fewer
/// segments than the current choice, or the same number and lies on the
/// forward strand. Since ends are visited in ascending order, the longest
/// forward hit wins among equal-cost forward hits, and any forward hit beats
/// a reverse-complement hit of equal cost.
///
/// # Errors
///
/// Returns `AlignError::EmptyInput` for an empty query and
/// `AlignError::InvalidSymbol` for the first base outside `ATCG`.
pub fn plan(query: &[u8], index: &HashIndex) -> Result<Plan, AlignError> {
    if query.is_empty() {
        return Err(AlignError::EmptyInput(SequenceKind::Query));
    }
    for &base in query {
        encode(base)?;
    }

    let n = query.len();
    let mut costs: Vec<Option<usize>> = vec![None; n + 1];
    costs[n] = Some(0);
    let mut decisions: Vec<Option<PlanDecision>> = vec![None; n];
    let mut anchored = vec![false; n];
    let mut hasher = RollingHash::new();

    for start in (0..n).rev() {
        hasher.reset();
        for end in start..n {
            let hash = hasher.push(query[end])?;
            let Some(&location) = index.get(hash) else {
                continue;
            };
            anchored[start] = true;

            let Some(rest) = costs[end + 1] else {
                continue;
            };
            let candidate = rest + 1;
            let take = match costs[start] {
                None => true,
                Some(current) => {
                    candidate < current || (candidate == current && location.strand.is_forward())
                }
            };

            if take {
                costs[start] = Some(candidate);
                decisions[start] = Some(PlanDecision {
                    matched_location: location,
                    resume_at: end + 1,
                    query_start: start,
                    query_end: end,
                });
            }
        }
    }

    debug!(
        query_len = n,
        min_segments = ?costs[0],
        "Planned query covering"
    );

    Ok(Plan {
        costs,
        decisions,
        anchored,
    })
}
