//! Caller-facing configuration for a calendar grid.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::visible::HourSpan;
use crate::working::{deserialize_weekday, WeeklyWorkingHours, WorkingHoursConfig};

/// Everything a renderer needs besides the events themselves.
///
/// Missing fields fall back to a 07:00-22:00 grid, Monday to Friday working
/// hours over the same span, and Sunday-first weeks. A `working_week` table,
/// when present, replaces `working_hours` for cell shading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub visible_hours: HourSpan,
    pub working_hours: WorkingHoursConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_week: Option<WeeklyWorkingHours>,
    #[serde(deserialize_with = "deserialize_weekday")]
    pub week_start: Weekday,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            visible_hours: HourSpan::default(),
            working_hours: WorkingHoursConfig::default(),
            working_week: None,
            week_start: Weekday::Sun,
        }
    }
}

impl LayoutConfig {
    /// The per-weekday table used for shading.
    pub fn weekly_working_hours(&self) -> WeeklyWorkingHours {
        self.working_week
            .unwrap_or_else(|| WeeklyWorkingHours::from(&self.working_hours))
    }
}
