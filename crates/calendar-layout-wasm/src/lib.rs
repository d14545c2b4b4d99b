//! WASM bindings for calendar-layout.
//!
//! Exposes column grouping, visible-range computation, day/week layout and
//! the "happening now" selector to JavaScript via `wasm-bindgen`. Events and
//! configuration cross the boundary as JSON strings; results come back as
//! JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p calendar-layout-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/calendar-layout-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/calendar_layout_wasm.wasm
//! ```

use calendar_layout::day::{events_on_day, partition_by_span};
use calendar_layout::input::{parse_date, parse_datetime, parse_events_json};
use calendar_layout::{EventLayout, HourSpan, LayoutConfig, VisibleRange};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct VisibleRangeDto {
    first_hour: u32,
    last_hour: u32,
    hours: Vec<u32>,
}

impl From<VisibleRange> for VisibleRangeDto {
    fn from(range: VisibleRange) -> Self {
        Self {
            first_hour: range.first_hour,
            last_hour: range.last_hour,
            hours: range.hours().collect(),
        }
    }
}

#[derive(Serialize)]
struct EventBlockDto {
    id: String,
    group_index: usize,
    group_count: usize,
    overlaps_other_group: bool,
    top_percent: f64,
    height_percent: f64,
    left_percent: f64,
    width_percent: f64,
}

impl From<&EventLayout<'_>> for EventBlockDto {
    fn from(layout: &EventLayout<'_>) -> Self {
        Self {
            id: layout.event.id.clone(),
            group_index: layout.group_index,
            group_count: layout.group_count,
            overlaps_other_group: layout.overlaps_other_group,
            top_percent: layout.geometry.top_percent,
            height_percent: layout.geometry.height_percent,
            left_percent: layout.geometry.left_percent,
            width_percent: layout.geometry.width_percent,
        }
    }
}

#[derive(Serialize)]
struct DayDto {
    date: String,
    events: Vec<EventBlockDto>,
}

#[derive(Serialize)]
struct DayLayoutDto {
    visible_range: VisibleRangeDto,
    events: Vec<EventBlockDto>,
}

#[derive(Serialize)]
struct WeekLayoutDto {
    visible_range: VisibleRangeDto,
    days: Vec<DayDto>,
}

// ---------------------------------------------------------------------------
// Boundary-independent implementations (return plain `String` errors so they
// can be exercised off-wasm)
// ---------------------------------------------------------------------------

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn parse_config(json: &str) -> Result<LayoutConfig, String> {
    if json.trim().is_empty() {
        return Ok(LayoutConfig::default());
    }
    serde_json::from_str(json).map_err(|e| format!("Invalid config JSON: {}", e))
}

fn group_events_impl(events_json: &str) -> Result<String, String> {
    let events = parse_events_json(events_json).map_err(|e| e.to_string())?;
    let groups = calendar_layout::group_events(&events);

    let ids: Vec<Vec<&str>> = groups
        .iter()
        .map(|group| group.iter().map(|&e| e.id.as_str()).collect())
        .collect();
    to_json(&ids)
}

fn compute_visible_range_impl(from: i32, to: i32, events_json: &str) -> Result<String, String> {
    let events = parse_events_json(events_json).map_err(|e| e.to_string())?;
    let (single_day, _) = partition_by_span(&events);
    let range =
        calendar_layout::compute_visible_range(HourSpan::new(from, to), single_day.iter().copied());
    to_json(&VisibleRangeDto::from(range))
}

fn layout_day_impl(events_json: &str, day: &str, from: i32, to: i32) -> Result<String, String> {
    let events = parse_events_json(events_json).map_err(|e| e.to_string())?;
    let day = parse_date(day).map_err(|e| e.to_string())?;

    let (single_day, _) = partition_by_span(&events);
    let on_day = events_on_day(single_day, day);
    let range = calendar_layout::compute_visible_range(HourSpan::new(from, to), on_day.iter().copied());
    let layout = calendar_layout::layout_day(on_day, day, range);

    to_json(&DayLayoutDto {
        visible_range: range.into(),
        events: layout.iter().map(EventBlockDto::from).collect(),
    })
}

fn layout_week_impl(events_json: &str, anchor: &str, config_json: &str) -> Result<String, String> {
    let events = parse_events_json(events_json).map_err(|e| e.to_string())?;
    let anchor = parse_date(anchor).map_err(|e| e.to_string())?;
    let config = parse_config(config_json)?;

    let week = calendar_layout::layout_week(&events, anchor, config.week_start, config.visible_hours);

    to_json(&WeekLayoutDto {
        visible_range: week.visible_range.into(),
        days: week
            .days
            .iter()
            .map(|d| DayDto {
                date: d.date.format("%Y-%m-%d").to_string(),
                events: d.events.iter().map(EventBlockDto::from).collect(),
            })
            .collect(),
    })
}

fn current_events_impl(events_json: &str, now: &str) -> Result<String, String> {
    let events = parse_events_json(events_json).map_err(|e| e.to_string())?;
    let now = parse_datetime(now).map_err(|e| e.to_string())?;

    let ids: Vec<&str> = calendar_layout::current_events(&events, now)
        .into_iter()
        .map(|e| e.id.as_str())
        .collect();
    to_json(&ids)
}

fn is_working_hour_impl(date: &str, hour: u32, config_json: &str) -> Result<bool, String> {
    let date = parse_date(date).map_err(|e| e.to_string())?;
    let config = parse_config(config_json)?;
    Ok(config.weekly_working_hours().is_working_hour(date, hour))
}

fn timeline_position_impl(now: &str, day: &str, first_hour: u32, last_hour: u32) -> Result<Option<f64>, String> {
    let now = parse_datetime(now).map_err(|e| e.to_string())?;
    let day = parse_date(day).map_err(|e| e.to_string())?;
    Ok(calendar_layout::timeline_position(
        now,
        day,
        VisibleRange::new(first_hour, last_hour),
    ))
}

fn js_err(message: String) -> JsValue {
    JsValue::from_str(&message)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Partition events into non-overlapping columns.
///
/// `events_json` is a JSON array of `{id, start, end, owner_id?, metadata?}`
/// objects. Returns a JSON array of columns, each an array of event ids.
#[wasm_bindgen(js_name = "groupEvents")]
pub fn group_events(events_json: &str) -> Result<String, JsValue> {
    group_events_impl(events_json).map_err(js_err)
}

/// Compute the visible hour range of the grid from its single-day events.
///
/// Returns `{first_hour, last_hour, hours}` as JSON.
#[wasm_bindgen(js_name = "computeVisibleRange")]
pub fn compute_visible_range(from: i32, to: i32, events_json: &str) -> Result<String, JsValue> {
    compute_visible_range_impl(from, to, events_json).map_err(js_err)
}

/// Lay out the single-day events that start or end on `day` (`YYYY-MM-DD`).
/// Multi-day events stay off the grid.
///
/// The visible range starts from `from`..`to` and grows to fit the day's
/// events. Returns `{visible_range, events}` where each event carries its
/// column and percentage geometry.
#[wasm_bindgen(js_name = "layoutDay")]
pub fn layout_day(events_json: &str, day: &str, from: i32, to: i32) -> Result<String, JsValue> {
    layout_day_impl(events_json, day, from, to).map_err(js_err)
}

/// Lay out the week containing `anchor` (`YYYY-MM-DD`).
///
/// `config_json` is a layout config object (`visible_hours`, `week_start`,
/// `working_hours`, `working_week`); an empty string or `{}` selects the
/// defaults.
#[wasm_bindgen(js_name = "layoutWeek")]
pub fn layout_week(events_json: &str, anchor: &str, config_json: &str) -> Result<String, JsValue> {
    layout_week_impl(events_json, anchor, config_json).map_err(js_err)
}

/// Ids of the events running at `now`, in input order.
#[wasm_bindgen(js_name = "currentEvents")]
pub fn current_events(events_json: &str, now: &str) -> Result<String, JsValue> {
    current_events_impl(events_json, now).map_err(js_err)
}

/// Whether `hour` on `date` falls inside the configured working hours.
///
/// A `working_week` table in `config_json` takes precedence over the uniform
/// `working_hours`.
#[wasm_bindgen(js_name = "isWorkingHour")]
pub fn is_working_hour(date: &str, hour: u32, config_json: &str) -> Result<bool, JsValue> {
    is_working_hour_impl(date, hour, config_json).map_err(js_err)
}

/// Vertical percentage of the current-time line, or `undefined` when `now`
/// is not visible in the column for `day`.
#[wasm_bindgen(js_name = "timelinePosition")]
pub fn timeline_position(
    now: &str,
    day: &str,
    first_hour: u32,
    last_hour: u32,
) -> Result<Option<f64>, JsValue> {
    timeline_position_impl(now, day, first_hour, last_hour).map_err(js_err)
}
