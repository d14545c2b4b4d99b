//! Day and week composition of the layout pipeline.
//!
//! Day and week views share one pipeline: filter the events that belong to a
//! day column, group them into columns, then map each onto geometry, relaxing
//! column reservations that turn out to be unnecessary.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use log::debug;
use serde::Serialize;

use crate::event::Event;
use crate::geometry::{compute_event_style, Geometry};
use crate::grouping::group_events;
use crate::visible::{compute_visible_range, HourSpan, VisibleRange};

/// A positioned event ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventLayout<'a> {
    pub event: &'a Event,
    pub group_index: usize,
    pub group_count: usize,
    /// Whether the event shares time with an event in another column.
    pub overlaps_other_group: bool,
    pub geometry: Geometry,
}

/// One day column of a week layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayLayout<'a> {
    pub date: NaiveDate,
    pub events: Vec<EventLayout<'a>>,
}

/// A full week of day columns sharing one visible range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekLayout<'a> {
    pub visible_range: VisibleRange,
    pub days: Vec<DayLayout<'a>>,
}

/// `true` when the event starts and ends on different calendar dates.
pub fn is_multi_day(event: &Event) -> bool {
    event.interval.spans_multiple_days()
}

/// Split events into `(single_day, multi_day)`, preserving input order.
///
/// Only single-day events belong in the time grid; multi-day events are
/// rendered in a separate all-day row.
pub fn partition_by_span(events: &[Event]) -> (Vec<&Event>, Vec<&Event>) {
    events.iter().partition(|e| !is_multi_day(e))
}

/// Events that start or end on `day`, in input order.
pub fn events_on_day<'a, I>(events: I, day: NaiveDate) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .filter(|e| e.interval.touches_day(day))
        .collect()
}

/// The seven dates of the week containing `anchor`, starting on `week_start`.
pub fn week_days(anchor: NaiveDate, week_start: Weekday) -> [NaiveDate; 7] {
    let offset = (7 + anchor.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    let first = anchor - Duration::days(i64::from(offset));
    std::array::from_fn(|i| first + Duration::days(i as i64))
}

/// Lay out one day column.
///
/// Every event gets the column reserved for it by [`group_events`]; events
/// that turn out not to overlap anything in another column are widened to the
/// full day width. Column widths use the day's total group count.
///
/// Output is ordered by group, then by placement within the group.
pub fn layout_day<'a, I>(events: I, day: NaiveDate, range: VisibleRange) -> Vec<EventLayout<'a>>
where
    I: IntoIterator<Item = &'a Event>,
{
    let groups = group_events(events);
    let group_count = groups.len();

    let mut laid_out = Vec::with_capacity(groups.event_count());
    for (group_index, group) in groups.iter().enumerate() {
        for &event in group {
            let overlaps_other_group = groups.overlaps_other_group(group_index, event);
            let geometry = compute_event_style(event, day, group_index, group_count, range);
            let geometry = if overlaps_other_group {
                geometry
            } else {
                geometry.full_width()
            };
            laid_out.push(EventLayout {
                event,
                group_index,
                group_count,
                overlaps_other_group,
                geometry,
            });
        }
    }

    debug!(
        "laid out {} events in {} columns for {}",
        laid_out.len(),
        group_count,
        day
    );
    laid_out
}

/// Lay out the week containing `anchor`.
///
/// Multi-day events are left out of the grid. The visible range is computed
/// once from the week's remaining events so that all seven columns line up.
pub fn layout_week<'a>(
    events: &'a [Event],
    anchor: NaiveDate,
    week_start: Weekday,
    configured: HourSpan,
) -> WeekLayout<'a> {
    let dates = week_days(anchor, week_start);
    let (single_day, _) = partition_by_span(events);
    let in_week: Vec<&Event> = single_day
        .into_iter()
        .filter(|e| dates.iter().any(|d| e.interval.touches_day(*d)))
        .collect();
    let visible_range = compute_visible_range(configured, in_week.iter().copied());

    let days = dates
        .into_iter()
        .map(|date| DayLayout {
            date,
            events: layout_day(events_on_day(in_week.iter().copied(), date), date, visible_range),
        })
        .collect();

    WeekLayout {
        visible_range,
        days,
    }
}
