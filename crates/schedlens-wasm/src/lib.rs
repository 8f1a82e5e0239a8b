//! WASM bindings for schedlens-core.
//!
//! Exposes overlap detection, conflicted-date aggregation, and overlap
//! explanation to JavaScript via `wasm-bindgen`. Schedule collections cross
//! the boundary as JSON strings; results come back as JSON with display-ready
//! `HH:MM` strings alongside the raw minute values, so a web calendar can
//! render conflict cards without reimplementing the formatter.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p schedlens-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/schedlens_wasm.wasm
//! ```

use schedlens_core::{OverlapExplanation, Schedule};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ScheduleDto<'a> {
    id: &'a str,
    title: &'a str,
    date: &'a str,
    start_minute: u32,
    end_minute: u32,
    start_display: String,
    end_display: String,
}

impl<'a> From<&'a Schedule> for ScheduleDto<'a> {
    fn from(s: &'a Schedule) -> Self {
        Self {
            id: &s.id,
            title: &s.title,
            date: &s.date,
            start_minute: s.start_minute,
            end_minute: s.end_minute,
            start_display: schedlens_core::format_minute(s.start_minute),
            end_display: schedlens_core::format_minute(s.end_minute),
        }
    }
}

#[derive(Serialize)]
struct ExplanationDto<'a> {
    first: ScheduleDto<'a>,
    second: ScheduleDto<'a>,
    overlap_start: u32,
    overlap_end: u32,
    overlap_minutes: u32,
    overlap_display: String,
}

impl<'a> From<&OverlapExplanation<'a>> for ExplanationDto<'a> {
    fn from(e: &OverlapExplanation<'a>) -> Self {
        Self {
            first: e.first.into(),
            second: e.second.into(),
            overlap_start: e.overlap_start,
            overlap_end: e.overlap_end,
            overlap_minutes: e.overlap_minutes(),
            overlap_display: format!(
                "{} ~ {}",
                schedlens_core::format_minute(e.overlap_start),
                schedlens_core::format_minute(e.overlap_end)
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_schedules(json: &str) -> Result<Vec<Schedule>, JsValue> {
    schedlens_core::schedules_from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

// ---------------------------------------------------------------------------
// Exported functions
// ---------------------------------------------------------------------------

/// Report whether any pair of schedules in the JSON array overlaps in time.
///
/// Intended for a single day's schedules, pre-filtered by the caller.
#[wasm_bindgen]
pub fn has_overlap(schedules_json: &str) -> Result<bool, JsValue> {
    let schedules = parse_schedules(schedules_json)?;
    Ok(schedlens_core::has_overlap(&schedules))
}

/// Compute the conflicted dates for a full schedule collection.
///
/// Returns a JSON array of date strings, sorted for stable rendering.
#[wasm_bindgen]
pub fn overlap_dates(schedules_json: &str) -> Result<String, JsValue> {
    let schedules = parse_schedules(schedules_json)?;
    let mut dates: Vec<&str> = schedlens_core::overlap_dates(&schedules)
        .into_iter()
        .collect();
    dates.sort_unstable();
    to_json(&dates)
}

/// Enumerate every overlapping pair in a single day's schedules.
///
/// Returns a JSON array of explanation objects, each carrying both schedules,
/// the exact intersection bounds, and display-ready `HH:MM` strings. Order
/// follows the input indices and determines the on-screen card sequence.
#[wasm_bindgen]
pub fn explain_overlaps(schedules_json: &str) -> Result<String, JsValue> {
    let schedules = parse_schedules(schedules_json)?;
    let explanations = schedlens_core::explain_overlaps(&schedules);
    let dtos: Vec<ExplanationDto> = explanations.iter().map(Into::into).collect();
    to_json(&dtos)
}

/// Format a minute-of-day count as zero-padded `"HH:MM"`.
///
/// Hours are not wrapped at the day boundary (1377 → `"22:57"`).
#[wasm_bindgen]
pub fn format_minute(minute: u32) -> String {
    schedlens_core::format_minute(minute)
}
