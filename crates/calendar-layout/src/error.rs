//! Error types for calendar-layout input decoding.
//!
//! The layout functions themselves are total; these errors only arise when
//! turning caller-supplied text (JSON events, datetimes, weekday names) into
//! engine types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid datetime '{input}': {reason}")]
    InvalidDateTime { input: String, reason: String },

    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("Invalid events JSON: {0}")]
    InvalidEvents(#[from] serde_json::Error),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
