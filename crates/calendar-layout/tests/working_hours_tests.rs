//! Tests for working-hour classification.

use calendar_layout::working::{parse_weekday, DayWindow, WeekdaySet};
use calendar_layout::{is_working_hour, WeeklyWorkingHours, WorkingHoursConfig};
use chrono::{NaiveDate, Weekday};

// 2026-03-02 is a Monday.
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

fn saturday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()
}

fn office() -> WorkingHoursConfig {
    WorkingHoursConfig {
        start_hour: 9,
        end_hour: 18,
        days_of_week: [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri]
            .into_iter()
            .collect(),
    }
}

// ── Uniform config ──────────────────────────────────────────────────────────

#[test]
fn hour_inside_window_on_working_day() {
    assert!(is_working_hour(monday(), 9, &office()));
    assert!(is_working_hour(monday(), 17, &office()));
}

#[test]
fn end_hour_is_exclusive() {
    assert!(!is_working_hour(monday(), 18, &office()));
    assert!(!is_working_hour(monday(), 8, &office()));
}

#[test]
fn weekend_is_never_working() {
    assert!(!is_working_hour(saturday(), 10, &office()));
}

#[test]
fn empty_day_set_is_never_working() {
    let config = WorkingHoursConfig {
        days_of_week: Default::default(),
        ..office()
    };
    assert!(!is_working_hour(monday(), 10, &config));
}

// ── Weekly table ────────────────────────────────────────────────────────────

#[test]
fn default_table_is_weekdays_seven_to_ten_pm() {
    let table = WeeklyWorkingHours::default();
    assert!(table.is_working_hour(monday(), 7));
    assert!(table.is_working_hour(monday(), 21));
    assert!(!table.is_working_hour(monday(), 22));
    assert!(!table.is_working_hour(saturday(), 12));
    assert_eq!(table.window(Weekday::Sun), DayWindow::OFF);
}

#[test]
fn table_allows_per_day_windows() {
    let mut table = WeeklyWorkingHours::from(&office());
    table.set_window(Weekday::Sat, DayWindow { from: 10, to: 14 });

    assert!(table.is_working_hour(saturday(), 10));
    assert!(!table.is_working_hour(saturday(), 14));
    assert!(table.is_working_hour(monday(), 9));
}

#[test]
fn table_agrees_with_uniform_config() {
    let config = office();
    let table = WeeklyWorkingHours::from(&config);
    for offset in 0..7 {
        let date = monday() + chrono::Duration::days(offset);
        for hour in 0..24 {
            assert_eq!(
                table.is_working_hour(date, hour),
                is_working_hour(date, hour, &config),
                "{date} {hour}:00"
            );
        }
    }
}

#[test]
fn table_reads_day_keyed_json() {
    let table: WeeklyWorkingHours =
        serde_json::from_str(r#"{"fri":{"from":9,"to":15},"sat":{"from":9,"to":13}}"#).unwrap();

    assert_eq!(table.window(Weekday::Fri), DayWindow { from: 9, to: 15 });
    assert_eq!(table.window(Weekday::Sat), DayWindow { from: 9, to: 13 });
    assert_eq!(table.window(Weekday::Mon), DayWindow::OFF);
    assert!(table.is_working_hour(saturday(), 9));
    assert!(!table.is_working_hour(monday(), 9));
}

// ── Weekday set ─────────────────────────────────────────────────────────────

#[test]
fn weekday_set_iterates_monday_first() {
    let set: WeekdaySet = [Weekday::Sun, Weekday::Wed, Weekday::Mon, Weekday::Wed]
        .into_iter()
        .collect();
    let days: Vec<Weekday> = set.iter().collect();
    assert_eq!(days, vec![Weekday::Mon, Weekday::Wed, Weekday::Sun]);
    assert_eq!(serde_json::to_string(&set).unwrap(), r#"["Mon","Wed","Sun"]"#);
}

#[test]
fn weekday_set_reads_codes_and_names() {
    let set: WeekdaySet = serde_json::from_str(r#"["MO","tuesday","Fri"]"#).unwrap();
    assert!(set.contains(Weekday::Mon));
    assert!(set.contains(Weekday::Tue));
    assert!(set.contains(Weekday::Fri));
    assert!(!set.contains(Weekday::Wed));

    assert!(serde_json::from_str::<WeekdaySet>(r#"["Mon","XX"]"#).is_err());
    assert!(WeekdaySet::default().is_empty());
}

// ── Weekday parsing ─────────────────────────────────────────────────────────

#[test]
fn weekday_names_parse() {
    assert_eq!(parse_weekday("Mon").unwrap(), Weekday::Mon);
    assert_eq!(parse_weekday("friday").unwrap(), Weekday::Fri);
    assert_eq!(parse_weekday("SU").unwrap(), Weekday::Sun);
    assert!(parse_weekday("funday").is_err());
    assert!(parse_weekday("XX").is_err());
}
