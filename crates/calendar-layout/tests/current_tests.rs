//! Tests for "happening now" selection and the current-time marker.

use calendar_layout::{current_events, timeline_position, Event, VisibleRange};
use chrono::{NaiveDate, NaiveDateTime};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

fn at(hour: u32, min: u32) -> NaiveDateTime {
    day().and_hms_opt(hour, min, 0).unwrap()
}

fn event(id: &str, start: (u32, u32), end: (u32, u32)) -> Event {
    Event::new(id, at(start.0, start.1), at(end.0, end.1))
}

#[test]
fn only_the_running_event_is_current() {
    let events = vec![event("a", (9, 30), (10, 30)), event("b", (11, 0), (12, 0))];

    let current = current_events(&events, at(10, 0));

    assert_eq!(current.len(), 1);
    assert_eq!(current[0].id, "a");
}

#[test]
fn start_is_inclusive_end_is_exclusive() {
    let events = vec![event("a", (9, 0), (10, 0)), event("b", (10, 0), (11, 0))];

    let current = current_events(&events, at(10, 0));

    let ids: Vec<&str> = current.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["b"]);
}

#[test]
fn input_order_is_preserved() {
    let events = vec![
        event("late-start", (9, 45), (11, 0)),
        event("early-start", (8, 0), (12, 0)),
    ];

    let current = current_events(&events, at(10, 0));

    let ids: Vec<&str> = current.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["late-start", "early-start"]);
}

#[test]
fn malformed_events_are_never_current() {
    let events = vec![event("bad", (11, 0), (9, 0))];
    assert!(current_events(&events, at(10, 0)).is_empty());
}

#[test]
fn empty_input_has_no_current_events() {
    assert!(current_events(&[], at(10, 0)).is_empty());
}

#[test]
fn timeline_inside_window() {
    let pos = timeline_position(at(13, 0), day(), VisibleRange::new(9, 17));
    assert_eq!(pos, Some(50.0));
}

#[test]
fn timeline_hidden_outside_window_or_day() {
    let range = VisibleRange::new(9, 17);
    assert_eq!(timeline_position(at(8, 59), day(), range), None);
    assert_eq!(timeline_position(at(17, 1), day(), range), None);

    let tomorrow = day().succ_opt().unwrap();
    assert_eq!(timeline_position(at(13, 0), tomorrow, range), None);
}
