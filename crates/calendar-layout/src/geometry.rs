//! Map an event onto percentage coordinates inside a day column.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::visible::VisibleRange;

/// Position of an event block, every field a percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
    pub top_percent: f64,
    pub height_percent: f64,
    pub left_percent: f64,
    pub width_percent: f64,
}

impl Geometry {
    /// Drop the column reservation: the block spans the whole day column.
    pub fn full_width(self) -> Self {
        Self {
            left_percent: 0.0,
            width_percent: 100.0,
            ..self
        }
    }

    pub fn bottom_percent(&self) -> f64 {
        self.top_percent + self.height_percent
    }
}

/// Start and end of the rendered window on `day`.
pub(crate) fn window_bounds(day: NaiveDate, range: VisibleRange) -> (NaiveDateTime, NaiveDateTime) {
    let at = |hour: u32| day.and_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN));
    (at(range.first_hour), at(range.last_hour))
}

/// Linear position of `instant` inside `[window_start, window_end]`, clamped
/// to `[0, 100]`. A zero-length window maps everything to 0.
pub(crate) fn percent_of_window(
    instant: NaiveDateTime,
    window_start: NaiveDateTime,
    window_end: NaiveDateTime,
) -> f64 {
    let span = (window_end - window_start).num_seconds();
    if span <= 0 {
        return 0.0;
    }
    let clamped = instant.clamp(window_start, window_end);
    (clamped - window_start).num_seconds() as f64 / span as f64 * 100.0
}

/// Compute the block geometry for `event` rendered on `day`.
///
/// Vertically the event's start and end are clamped into the visible window
/// and mapped linearly onto `[0, 100]`. Events entirely outside the window,
/// malformed events and empty windows collapse to a zero-height anchor.
///
/// Horizontally the block takes column `group_index` of `group_count` equal
/// columns. Callers that find no actual cross-group overlap for the event
/// should widen it with [`Geometry::full_width`].
pub fn compute_event_style(
    event: &Event,
    day: NaiveDate,
    group_index: usize,
    group_count: usize,
    range: VisibleRange,
) -> Geometry {
    let (window_start, window_end) = window_bounds(day, range);

    let top_percent = percent_of_window(event.start(), window_start, window_end);
    let bottom_percent = percent_of_window(event.end(), window_start, window_end);
    let height_percent = (bottom_percent - top_percent).max(0.0);

    let columns = group_count.max(1);
    let column = group_index.min(columns - 1);
    let width_percent = 100.0 / columns as f64;

    Geometry {
        top_percent,
        height_percent,
        left_percent: column as f64 * width_percent,
        width_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    #[test]
    fn zero_length_window_maps_to_zero() {
        let (start, end) = window_bounds(day(), VisibleRange::new(9, 9));
        assert_eq!(percent_of_window(start, start, end), 0.0);
        assert_eq!(percent_of_window(start + chrono::Duration::hours(3), start, end), 0.0);
    }

    #[test]
    fn zero_group_count_is_one_column() {
        let event = Event::new(
            "a",
            day().and_hms_opt(9, 0, 0).unwrap(),
            day().and_hms_opt(10, 0, 0).unwrap(),
        );
        let g = compute_event_style(&event, day(), 0, 0, VisibleRange::new(8, 12));
        assert_eq!(g.width_percent, 100.0);
        assert_eq!(g.left_percent, 0.0);
    }
}
