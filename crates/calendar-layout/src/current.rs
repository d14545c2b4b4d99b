//! "Happening now" selection and the current-time marker.
//!
//! `now` is always passed in explicitly; nothing here reads the wall clock.

use chrono::{NaiveDate, NaiveDateTime};

use crate::event::Event;
use crate::geometry::{percent_of_window, window_bounds};
use crate::visible::VisibleRange;

/// Events whose interval contains `now` (`start <= now < end`), in input order.
pub fn current_events(events: &[Event], now: NaiveDateTime) -> Vec<&Event> {
    events
        .iter()
        .filter(|e| e.interval.contains(now))
        .collect()
}

/// Vertical position of the "now" line in the column for `day`.
///
/// Returns `None` when `now` is on another day or outside the visible window.
pub fn timeline_position(now: NaiveDateTime, day: NaiveDate, range: VisibleRange) -> Option<f64> {
    if now.date() != day {
        return None;
    }
    let (window_start, window_end) = window_bounds(day, range);
    if now < window_start || now > window_end || window_start == window_end {
        return None;
    }
    Some(percent_of_window(now, window_start, window_end))
}
