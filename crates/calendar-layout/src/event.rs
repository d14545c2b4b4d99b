//! The event model shared by every layout stage.
//!
//! Instants are timezone-naive wall-clock timestamps local to the viewer.
//! No timezone conversion happens anywhere in this crate.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A half-open time range `[start, end)`.
///
/// Intervals with `start >= end` are representable so that corrupt upstream
/// data can flow through the pipeline; see [`TimeInterval::is_well_formed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeInterval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// `true` when the interval has positive duration.
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    /// Two intervals overlap iff `a.start < b.end && b.start < a.end`.
    ///
    /// Adjacent intervals (one ends exactly when the other starts) do not
    /// overlap. A malformed interval never overlaps anything.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.is_well_formed()
            && other.is_well_formed()
            && self.start < other.end
            && other.start < self.end
    }

    /// Half-open containment: `start <= instant < end`.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Length of the interval, zero for malformed intervals.
    pub fn duration(&self) -> Duration {
        if self.is_well_formed() {
            self.end - self.start
        } else {
            Duration::zero()
        }
    }

    /// `true` when start and end fall on different calendar dates.
    pub fn spans_multiple_days(&self) -> bool {
        self.start.date() != self.end.date()
    }

    /// `true` when either endpoint falls on `day`.
    pub fn touches_day(&self, day: NaiveDate) -> bool {
        self.start.date() == day || self.end.date() == day
    }
}

/// A calendar event as supplied by the data-fetch layer.
///
/// The engine only ever reads `id` and `interval`; `owner_id` and `metadata`
/// are carried through untouched for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    #[serde(flatten)]
    pub interval: TimeInterval,
    #[serde(default)]
    pub owner_id: String,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl Event {
    pub fn new(id: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            interval: TimeInterval::new(start, end),
            owner_id: String::new(),
            metadata: serde_json::Value::Null,
        }
    }

    pub fn with_owner(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = owner_id.into();
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn start(&self) -> NaiveDateTime {
        self.interval.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.interval.end
    }

    pub fn overlaps(&self, other: &Event) -> bool {
        self.interval.overlaps(&other.interval)
    }
}
