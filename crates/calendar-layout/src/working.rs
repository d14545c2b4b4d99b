//! Working-hour classification for grid cell shading.
//!
//! Purely presentational: nothing here feeds into grouping or geometry.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{LayoutError, Result};

/// A set of weekdays, iterated Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeekdaySet([bool; 7]);

impl WeekdaySet {
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.0[weekday.num_days_from_monday() as usize]
    }

    pub fn insert(&mut self, weekday: Weekday) {
        self.0[weekday.num_days_from_monday() as usize] = true;
    }

    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|&day| day)
    }

    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        let mut weekday = Weekday::Mon;
        (0..7).filter_map(move |i| {
            let current = weekday;
            weekday = weekday.succ();
            self.0[i].then_some(current)
        })
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = WeekdaySet::default();
        for weekday in iter {
            set.insert(weekday);
        }
        set
    }
}

impl Serialize for WeekdaySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for WeekdaySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|name| parse_weekday(name).map_err(D::Error::custom))
            .collect()
    }
}

/// A uniform working window applied to a set of weekdays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHoursConfig {
    pub start_hour: u32,
    pub end_hour: u32,
    pub days_of_week: WeekdaySet,
}

impl Default for WorkingHoursConfig {
    fn default() -> Self {
        Self {
            start_hour: 7,
            end_hour: 22,
            days_of_week: [
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ]
            .into_iter()
            .collect(),
        }
    }
}

/// Returns `true` iff `date` falls on one of `config.days_of_week` and
/// `config.start_hour <= hour < config.end_hour`.
pub fn is_working_hour(date: NaiveDate, hour: u32, config: &WorkingHoursConfig) -> bool {
    config.days_of_week.contains(date.weekday())
        && config.start_hour <= hour
        && hour < config.end_hour
}

/// A working window for one weekday. `from == to` means a day off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DayWindow {
    pub from: u32,
    pub to: u32,
}

impl DayWindow {
    pub const OFF: DayWindow = DayWindow { from: 0, to: 0 };

    pub fn contains(&self, hour: u32) -> bool {
        self.from <= hour && hour < self.to
    }
}

/// Per-weekday working windows, indexed Sunday-first.
///
/// This is the table shape organisations usually configure: each weekday may
/// carry its own hours. In config files it is keyed by day (`mon` .. `sun`);
/// a missing day is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WeekTable", into = "WeekTable")]
pub struct WeeklyWorkingHours {
    days: [DayWindow; 7],
}

impl WeeklyWorkingHours {
    pub fn new(days: [DayWindow; 7]) -> Self {
        Self { days }
    }

    pub fn window(&self, weekday: Weekday) -> DayWindow {
        self.days[weekday.num_days_from_sunday() as usize]
    }

    pub fn set_window(&mut self, weekday: Weekday, window: DayWindow) {
        self.days[weekday.num_days_from_sunday() as usize] = window;
    }

    pub fn is_working_hour(&self, date: NaiveDate, hour: u32) -> bool {
        self.window(date.weekday()).contains(hour)
    }
}

impl Default for WeeklyWorkingHours {
    fn default() -> Self {
        WeeklyWorkingHours::from(&WorkingHoursConfig::default())
    }
}

impl From<&WorkingHoursConfig> for WeeklyWorkingHours {
    fn from(config: &WorkingHoursConfig) -> Self {
        let mut table = WeeklyWorkingHours::new([DayWindow::OFF; 7]);
        for weekday in config.days_of_week.iter() {
            table.set_window(
                weekday,
                DayWindow {
                    from: config.start_hour,
                    to: config.end_hour,
                },
            );
        }
        table
    }
}

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
struct WeekTable {
    mon: DayWindow,
    tue: DayWindow,
    wed: DayWindow,
    thu: DayWindow,
    fri: DayWindow,
    sat: DayWindow,
    sun: DayWindow,
}

impl From<WeekTable> for WeeklyWorkingHours {
    fn from(t: WeekTable) -> Self {
        WeeklyWorkingHours::new([t.sun, t.mon, t.tue, t.wed, t.thu, t.fri, t.sat])
    }
}

impl From<WeeklyWorkingHours> for WeekTable {
    fn from(table: WeeklyWorkingHours) -> Self {
        WeekTable {
            mon: table.window(Weekday::Mon),
            tue: table.window(Weekday::Tue),
            wed: table.window(Weekday::Wed),
            thu: table.window(Weekday::Thu),
            fri: table.window(Weekday::Fri),
            sat: table.window(Weekday::Sat),
            sun: table.window(Weekday::Sun),
        }
    }
}

/// Parse a weekday name such as `"Mon"`, `"monday"` or `"MO"`.
pub fn parse_weekday(s: &str) -> Result<Weekday> {
    let trimmed = s.trim();
    if trimmed.len() == 2 {
        // Two-letter RFC 5545 BYDAY codes.
        return match trimmed.to_ascii_uppercase().as_str() {
            "MO" => Ok(Weekday::Mon),
            "TU" => Ok(Weekday::Tue),
            "WE" => Ok(Weekday::Wed),
            "TH" => Ok(Weekday::Thu),
            "FR" => Ok(Weekday::Fri),
            "SA" => Ok(Weekday::Sat),
            "SU" => Ok(Weekday::Sun),
            _ => Err(LayoutError::InvalidWeekday(s.to_string())),
        };
    }
    trimmed
        .parse::<Weekday>()
        .map_err(|_| LayoutError::InvalidWeekday(s.to_string()))
}

/// Serde adapter accepting every spelling [`parse_weekday`] does.
pub fn deserialize_weekday<'de, D>(deserializer: D) -> std::result::Result<Weekday, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    parse_weekday(&name).map_err(D::Error::custom)
}
