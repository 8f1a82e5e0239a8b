//! # schedlens-core
//!
//! Pure schedule overlap detection and explanation engine for calendar UIs.
//!
//! Given a collection of minute-granularity [`Schedule`] records, the engine
//! answers three questions a calendar front-end asks on every redraw:
//!
//! 1. Which dates have at least one pair of overlapping schedules?
//!    ([`overlap_dates`] drives per-day conflict indicators.)
//! 2. Does this one day's schedule list contain any overlap? ([`has_overlap`])
//! 3. Exactly which pairs overlap, and by how much? ([`explain_overlaps`]
//!    feeds a detailed conflict breakdown.)
//!
//! Every operation is a pure function of its input: no caching, no interior
//! state, safe to re-derive on each host state change. Schedules use half-open
//! minute intervals `[start, end)`, so back-to-back events never conflict.
//!
//! ## Modules
//!
//! - [`schedule`] — the `Schedule` value type and JSON loading
//! - [`conflict`] — per-day overlap detection and conflicted-date aggregation
//! - [`explain`] — pairwise overlap enumeration with exact intersection bounds
//! - [`format`] — minute-of-day → `"HH:MM"` display formatting
//! - [`error`] — error types

pub mod conflict;
pub mod error;
pub mod explain;
pub mod format;
pub mod schedule;

pub use conflict::{has_overlap, overlap_dates};
pub use error::SchedError;
pub use explain::{explain_overlaps, problem_schedules, OverlapExplanation};
pub use format::format_minute;
pub use schedule::{schedules_from_json, Schedule};
