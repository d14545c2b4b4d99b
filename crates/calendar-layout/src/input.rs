//! Decode caller-supplied JSON and datetime strings into engine types.
//!
//! Shared by the wasm and CLI front-ends so both accept the same formats.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::error::{LayoutError, Result};
use crate::event::Event;

/// Input format for events crossing a JSON boundary.
#[derive(Debug, Deserialize)]
struct EventInput {
    id: String,
    start: String,
    end: String,
    #[serde(default)]
    owner_id: String,
    #[serde(default)]
    metadata: serde_json::Value,
}

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parse a wall-clock datetime.
///
/// Accepts naive ISO 8601 (`2026-03-02T09:30:00`, `2026-03-02T09:30`) and
/// RFC 3339 with an offset, in which case the offset is dropped and the local
/// wall-clock reading is kept.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    let trimmed = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| LayoutError::InvalidDateTime {
            input: s.to_string(),
            reason: "expected YYYY-MM-DDTHH:MM[:SS] or RFC 3339".to_string(),
        })
}

/// Parse a calendar date (`YYYY-MM-DD`).
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| LayoutError::InvalidDate {
        input: s.to_string(),
        reason: e.to_string(),
    })
}

/// Convert a JSON array of `{id, start, end, owner_id?, metadata?}` objects
/// into events.
pub fn parse_events_json(json: &str) -> Result<Vec<Event>> {
    let inputs: Vec<EventInput> = serde_json::from_str(json)?;

    inputs
        .into_iter()
        .map(|input| {
            let start = parse_datetime(&input.start)?;
            let end = parse_datetime(&input.end)?;
            Ok(Event::new(input.id, start, end)
                .with_owner(input.owner_id)
                .with_metadata(input.metadata))
        })
        .collect()
}
