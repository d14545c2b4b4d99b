//! Compute the hour span a time grid has to show.
//!
//! The grid starts from a configured default span and grows outward to fit
//! events that start earlier or end later. It never shrinks below the default.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Highest hour a grid boundary can take.
pub const LAST_HOUR: u32 = 23;

/// A caller-configured `{from, to}` hour pair.
///
/// Values are signed so that out-of-range configuration can be clamped
/// instead of rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourSpan {
    pub from: i32,
    pub to: i32,
}

impl HourSpan {
    pub fn new(from: i32, to: i32) -> Self {
        Self { from, to }
    }
}

impl Default for HourSpan {
    fn default() -> Self {
        Self { from: 7, to: 22 }
    }
}

/// The hour window actually rendered, from `first_hour:00` to `last_hour:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisibleRange {
    pub first_hour: u32,
    pub last_hour: u32,
}

impl VisibleRange {
    /// Build a range, clamping both ends to `0..=23` and ordering them.
    pub fn new(first_hour: u32, last_hour: u32) -> Self {
        let a = first_hour.min(LAST_HOUR);
        let b = last_hour.min(LAST_HOUR);
        Self {
            first_hour: a.min(b),
            last_hour: a.max(b),
        }
    }

    /// Grid row hours, one per rendered hour slot.
    pub fn hours(&self) -> impl Iterator<Item = u32> {
        self.first_hour..self.last_hour
    }

    pub fn span_minutes(&self) -> i64 {
        i64::from(self.last_hour - self.first_hour) * 60
    }
}

impl From<HourSpan> for VisibleRange {
    fn from(span: HourSpan) -> Self {
        let clamp = |h: i32| h.clamp(0, LAST_HOUR as i32) as u32;
        VisibleRange::new(clamp(span.from), clamp(span.to))
    }
}

/// Compute the visible hour range for a set of events.
///
/// Starts from `configured` (clamped to `0..=23`, inverted spans are
/// reordered) and extends:
///
/// - `first_hour` down to the earliest event start hour (floored);
/// - `last_hour` up to the latest event end hour, rounded up unless the end
///   falls exactly on an hour boundary. An event ending on a later day than it
///   starts extends to the end of the grid.
///
/// Malformed events only contribute their start instant. With no events the
/// configured default is returned unchanged.
pub fn compute_visible_range<'a, I>(configured: HourSpan, events: I) -> VisibleRange
where
    I: IntoIterator<Item = &'a Event>,
{
    let default = VisibleRange::from(configured);
    let mut first = default.first_hour;
    let mut last = default.last_hour;

    for event in events {
        let interval = &event.interval;
        first = first.min(interval.start.hour());

        let end_hour = if !interval.is_well_formed() {
            interval.start.hour()
        } else if interval.spans_multiple_days() {
            LAST_HOUR + 1
        } else {
            ceil_hour(interval.end)
        };
        last = last.max(end_hour);
    }

    VisibleRange::new(first, last)
}

/// Hour of `instant`, rounded up when it is past the top of the hour.
fn ceil_hour(instant: NaiveDateTime) -> u32 {
    let past_hour = instant.minute() > 0 || instant.second() > 0 || instant.nanosecond() > 0;
    instant.hour() + u32::from(past_hour)
}
