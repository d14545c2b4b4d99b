//! Tests for the visible hour range of the time grid.

use calendar_layout::{compute_visible_range, Event, HourSpan, VisibleRange};
use chrono::{NaiveDate, NaiveDateTime};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn at(day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, day)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

fn event(id: &str, start: (u32, u32), end: (u32, u32)) -> Event {
    Event::new(id, at(2, start.0, start.1), at(2, end.0, end.1))
}

const OFFICE: HourSpan = HourSpan { from: 9, to: 18 };

// ── Tests ───────────────────────────────────────────────────────────────────

#[test]
fn no_events_returns_default() {
    let events: Vec<Event> = Vec::new();
    assert_eq!(
        compute_visible_range(OFFICE, &events),
        VisibleRange::new(9, 18)
    );
}

#[test]
fn early_event_extends_first_hour() {
    let events = vec![event("a", (7, 0), (8, 0))];
    assert_eq!(
        compute_visible_range(OFFICE, &events),
        VisibleRange::new(7, 18)
    );
}

#[test]
fn early_start_is_floored() {
    let events = vec![event("a", (7, 45), (8, 15))];
    assert_eq!(compute_visible_range(OFFICE, &events).first_hour, 7);
}

#[test]
fn late_end_is_rounded_up() {
    let events = vec![event("a", (18, 0), (19, 30))];
    assert_eq!(
        compute_visible_range(OFFICE, &events),
        VisibleRange::new(9, 20)
    );
}

#[test]
fn end_on_hour_boundary_does_not_extend() {
    let events = vec![event("a", (17, 0), (18, 0))];
    assert_eq!(
        compute_visible_range(OFFICE, &events),
        VisibleRange::new(9, 18)
    );
}

#[test]
fn events_inside_default_never_shrink_it() {
    let events = vec![event("a", (12, 0), (13, 0))];
    assert_eq!(
        compute_visible_range(OFFICE, &events),
        VisibleRange::new(9, 18)
    );
}

#[test]
fn late_night_end_is_clamped_to_23() {
    let events = vec![event("a", (22, 0), (23, 30))];
    assert_eq!(compute_visible_range(OFFICE, &events).last_hour, 23);
}

#[test]
fn event_running_past_midnight_extends_to_end_of_grid() {
    let events = vec![Event::new("a", at(2, 20, 0), at(3, 1, 0))];
    assert_eq!(
        compute_visible_range(OFFICE, &events),
        VisibleRange::new(9, 23)
    );
}

#[test]
fn inverted_event_only_counts_its_start() {
    // 06:00 -> 05:00: start extends the range down, the bogus end is ignored.
    let events = vec![event("bad", (6, 0), (5, 0))];
    assert_eq!(
        compute_visible_range(OFFICE, &events),
        VisibleRange::new(6, 18)
    );
}

#[test]
fn out_of_range_config_is_clamped() {
    let events: Vec<Event> = Vec::new();
    assert_eq!(
        compute_visible_range(HourSpan::new(-3, 40), &events),
        VisibleRange::new(0, 23)
    );
}

#[test]
fn hours_lists_grid_rows() {
    let rows: Vec<u32> = VisibleRange::new(9, 12).hours().collect();
    assert_eq!(rows, vec![9, 10, 11]);
}
