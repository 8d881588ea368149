use crate::alignment::planner::Plan;
use crate::core::error::AlignError;
use crate::core::types::MatchSegment;

/// Walk the plan from query position 0 and collect the chosen segments.
///
/// Segments come out in ascending query order, each starting right after the
/// previous one ends, and together they cover the whole query.
///
/// # Errors
///
/// Returns `AlignError::AlignmentBreak` when the walk reaches a position with
/// no decision. The reported position is the first query base at or after
/// that point from which no indexed match starts.
pub fn reconstruct(plan: &Plan) -> Result<Vec<MatchSegment>, AlignError> {
    let query_len = plan.query_len();
    let mut segments = Vec::with_capacity(plan.min_segments().unwrap_or(0));
    let mut position = 0;

    while position < query_len {
        let Some(decision) = plan.decision(position) else {
            let position = plan.first_unanchored_from(position).unwrap_or(position);
            return Err(AlignError::AlignmentBreak { position });
        };
        segments.push(decision.segment());
        position = decision.resume_at;
    }

    Ok(segments)
}
