//! The `Schedule` value type -- an immutable, minute-granularity event record.
//!
//! Dates are raw `YYYY-MM-DD` strings compared by exact string equality; the
//! engine never parses them. Minutes count from local midnight and are allowed
//! to run past 1439 for events that spill over a day boundary.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single time-bounded event on one calendar date.
///
/// `start_minute`/`end_minute` are minutes since local midnight, forming the
/// half-open interval `[start_minute, end_minute)`. Well-formed records have
/// `start_minute < end_minute`, but the engine does not validate this --
/// a degenerate or reversed interval simply never produces an explanation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Schedule {
    /// Opaque stable identifier. Unique per event, not necessarily per owner.
    pub id: String,
    /// Display title. May be empty, though sources are expected to fill it.
    pub title: String,
    /// Calendar date in canonical `YYYY-MM-DD` form. Grouping key.
    pub date: String,
    /// Start of the event, minutes since local midnight.
    pub start_minute: u32,
    /// End of the event (exclusive). May exceed 1439 for past-midnight ends.
    pub end_minute: u32,
}

impl Schedule {
    /// Half-open interval overlap test against another schedule.
    ///
    /// `[s1, e1)` and `[s2, e2)` overlap iff `s1 < e2 && e1 > s2`. Touching
    /// endpoints (`e1 == s2`) do not overlap. The test ignores `date` --
    /// callers compare schedules within one day.
    pub fn overlaps(&self, other: &Schedule) -> bool {
        self.start_minute < other.end_minute && self.end_minute > other.start_minute
    }

    /// Length of the event in minutes. Saturates to 0 for reversed intervals.
    pub fn duration_minutes(&self) -> u32 {
        self.end_minute.saturating_sub(self.start_minute)
    }
}

/// Deserialize a JSON array of schedules.
///
/// This is the loading boundary for hosts that keep their schedule collection
/// in a file or request body rather than in memory.
///
/// # Errors
/// Returns [`crate::SchedError::InvalidJson`] if the input is not a valid JSON
/// array of schedule objects.
pub fn schedules_from_json(json: &str) -> Result<Vec<Schedule>> {
    Ok(serde_json::from_str(json)?)
}
