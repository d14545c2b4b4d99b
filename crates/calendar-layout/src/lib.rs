//! # calendar-layout
//!
//! Deterministic layout engine for day and week calendar time grids.
//!
//! Given the events of a day (or week) the engine decides which events must
//! share the column width, how tall the grid has to be, where each event block
//! sits, which events are happening right now and which cells fall inside
//! working hours. Every function is pure and takes "now" as an explicit
//! argument wherever it needs one.
//!
//! ## Modules
//!
//! - [`event`] -- Time intervals and events
//! - [`visible`] -- Visible hour range of the grid
//! - [`working`] -- Working-hour classification for cell shading
//! - [`grouping`] -- Column assignment for overlapping events
//! - [`geometry`] -- Percentage geometry of event blocks
//! - [`current`] -- "Happening now" selection and the current-time marker
//! - [`day`] -- Day and week composition of the pipeline
//! - [`config`] -- Grid configuration
//! - [`input`] -- JSON and datetime decoding
//! - [`error`] -- Error types

pub mod config;
pub mod current;
pub mod day;
pub mod error;
pub mod event;
pub mod geometry;
pub mod grouping;
pub mod input;
pub mod visible;
pub mod working;

pub use config::LayoutConfig;
pub use current::{current_events, timeline_position};
pub use day::{layout_day, layout_week, DayLayout, EventLayout, WeekLayout};
pub use error::LayoutError;
pub use event::{Event, TimeInterval};
pub use geometry::{compute_event_style, Geometry};
pub use grouping::{group_events, Group, GroupSet};
pub use visible::{compute_visible_range, HourSpan, VisibleRange};
pub use working::{is_working_hour, WeeklyWorkingHours, WorkingHoursConfig};
