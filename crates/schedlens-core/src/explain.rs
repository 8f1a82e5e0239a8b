//! Pairwise overlap enumeration with exact intersection bounds.
//!
//! Where [`crate::conflict`] answers *whether* a day has conflicts, this
//! module answers *which* pairs conflict and by how much, in the order a
//! conflict-breakdown view renders them.

use std::collections::HashSet;

use crate::schedule::Schedule;

/// One specific overlapping pair together with its exact intersecting
/// minute range.
///
/// `first`/`second` borrow from the input list and preserve traversal order:
/// `first` held the lower input index, which is not necessarily the earlier
/// start time. The interval `[overlap_start, overlap_end)` is always
/// non-empty -- that is the condition for the pair being included at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapExplanation<'a> {
    pub first: &'a Schedule,
    pub second: &'a Schedule,
    pub overlap_start: u32,
    pub overlap_end: u32,
}

impl OverlapExplanation<'_> {
    /// Length of the overlapping interval in minutes.
    pub fn overlap_minutes(&self) -> u32 {
        self.overlap_end - self.overlap_start
    }
}

/// Enumerate every overlapping pair in the list with its intersection bounds.
///
/// For each index pair `i < j`, the intersection is
/// `[max(starts), min(ends))`; the pair is included iff that interval is
/// non-empty (strict `<` -- touching endpoints produce nothing). Pairs are
/// emitted in nested traversal order: all partners of the first schedule in
/// ascending index order, then all later partners of the second, and so on.
/// That ordering is part of the contract -- it fixes the on-screen sequence
/// of conflict cards.
///
/// Intended for a single day's schedules; the `date` fields are not checked.
pub fn explain_overlaps(schedules: &[Schedule]) -> Vec<OverlapExplanation<'_>> {
    let mut results = Vec::new();

    for (i, a) in schedules.iter().enumerate() {
        for b in &schedules[i + 1..] {
            let overlap_start = a.start_minute.max(b.start_minute);
            let overlap_end = a.end_minute.min(b.end_minute);

            if overlap_start < overlap_end {
                results.push(OverlapExplanation {
                    first: a,
                    second: b,
                    overlap_start,
                    overlap_end,
                });
            }
        }
    }

    results
}

/// Collect every schedule implicated in at least one explanation.
///
/// Flattens `first`/`second` across all explanations into a deduplicated
/// set. Membership drives the "conflicted" highlight in a timeline rendering,
/// distinguishing clean schedules from ones that need attention.
pub fn problem_schedules<'a>(
    explanations: &[OverlapExplanation<'a>],
) -> HashSet<&'a Schedule> {
    explanations
        .iter()
        .flat_map(|e| [e.first, e.second])
        .collect()
}
