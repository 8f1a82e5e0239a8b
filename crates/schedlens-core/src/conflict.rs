//! Per-day overlap detection and conflicted-date aggregation.
//!
//! Performs all-pairs comparison within a schedule list to find time overlaps.
//! Adjacent schedules (where one ends exactly when another starts) are NOT
//! conflicts. O(n²) in the per-day schedule count, which stays small in
//! practice; recomputation from scratch is the only update mechanism.

use std::collections::{HashMap, HashSet};

use crate::schedule::Schedule;

/// Report whether any pair of schedules in the list overlaps in time.
///
/// Intended for a single day's schedules, though nothing checks the `date`
/// fields -- callers filter first. Zero or one schedules never overlap.
/// The result is symmetric in the input order.
pub fn has_overlap(schedules: &[Schedule]) -> bool {
    for (i, a) in schedules.iter().enumerate() {
        for b in &schedules[i + 1..] {
            if a.overlaps(b) {
                return true;
            }
        }
    }
    false
}

/// Compute the set of dates on which at least one pair of schedules overlaps.
///
/// Schedules are grouped by exact string equality of `date` -- no parsing or
/// normalization -- and [`has_overlap`] is applied per group. Schedules on
/// different dates are never compared against each other, even with identical
/// minute ranges. The returned set borrows its date strings from the input.
pub fn overlap_dates(schedules: &[Schedule]) -> HashSet<&str> {
    let mut by_date: HashMap<&str, Vec<&Schedule>> = HashMap::new();
    for schedule in schedules {
        by_date
            .entry(schedule.date.as_str())
            .or_default()
            .push(schedule);
    }

    by_date
        .into_iter()
        .filter(|(_, day)| day_has_overlap(day))
        .map(|(date, _)| date)
        .collect()
}

/// All-pairs overlap test over a borrowed day group.
fn day_has_overlap(day: &[&Schedule]) -> bool {
    for (i, a) in day.iter().enumerate() {
        for b in &day[i + 1..] {
            if a.overlaps(b) {
                return true;
            }
        }
    }
    false
}
