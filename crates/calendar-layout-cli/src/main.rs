//! `calendar-layout` CLI -- inspect day/week time-grid layouts of an event file.
//!
//! ## Usage
//!
//! ```sh
//! # Lay out one day (events JSON on stdin, layout JSON on stdout)
//! cat events.json | calendar-layout layout --date 2026-03-02
//!
//! # Lay out the whole week containing a date, from file to file
//! calendar-layout layout --date 2026-03-04 --week -i events.json -o week.json
//!
//! # Visible hour range for a set of events, overriding the default span
//! calendar-layout range --from 9 --to 18 -i events.json
//!
//! # Events happening at a given instant
//! calendar-layout now --at 2026-03-02T10:00:00 -i events.json
//!
//! # Working-hour shading for a date, with a TOML config
//! calendar-layout --config grid.toml working --date 2026-03-02
//! ```
//!
//! Events are a JSON array of `{id, start, end, owner_id?, metadata?}` objects.
//! Logging goes to stderr through `env_logger`; `-v` raises the level and
//! `RUST_LOG` overrides it.

use anyhow::{Context, Result};
use calendar_layout::day::{events_on_day, partition_by_span};
use calendar_layout::input::{parse_date, parse_datetime, parse_events_json};
use calendar_layout::{
    compute_visible_range, current_events, layout_day, layout_week, Event, EventLayout,
    HourSpan, LayoutConfig, VisibleRange,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use log::{debug, info};
use serde::Serialize;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "calendar-layout",
    version,
    about = "Calendar time-grid layout inspector"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML file with visible hours, working hours and week start
    #[arg(long, global = true)]
    config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute columns and block geometry for a day or a week
    Layout {
        /// Day to lay out (YYYY-MM-DD); with --week, any day of the week
        #[arg(long)]
        date: String,
        /// Lay out the whole week containing --date
        #[arg(long)]
        week: bool,
        #[command(flatten)]
        hours: HourOverrides,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show the visible hour range the grid needs for the events
    Range {
        #[command(flatten)]
        hours: HourOverrides,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// List the events happening at an instant
    Now {
        /// Instant to test (YYYY-MM-DDTHH:MM[:SS])
        #[arg(long)]
        at: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print working-hour shading for each grid row of a date
    Working {
        /// Date to classify (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
}

/// Overrides for the configured visible hour span.
#[derive(clap::Args)]
struct HourOverrides {
    /// First hour of the default visible span
    #[arg(long, allow_hyphen_values = true)]
    from: Option<i32>,
    /// Last hour of the default visible span
    #[arg(long, allow_hyphen_values = true)]
    to: Option<i32>,
}

impl HourOverrides {
    fn apply(&self, span: HourSpan) -> HourSpan {
        HourSpan {
            from: self.from.unwrap_or(span.from),
            to: self.to.unwrap_or(span.to),
        }
    }
}

/// One laid-out day column.
#[derive(Serialize)]
struct DayReport<'a> {
    date: String,
    visible_range: VisibleRange,
    /// Multi-day events covering the date, rendered outside the grid.
    all_day: Vec<&'a str>,
    events: Vec<EventLayout<'a>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    debug!("using config {:?}", config);

    match cli.command {
        Commands::Layout {
            date,
            week,
            hours,
            input,
            output,
        } => {
            let events = read_events(input.as_deref())?;
            let date = parse_date(&date).context("Invalid --date")?;
            let configured = hours.apply(config.visible_hours);

            let json = if week {
                let layout = layout_week(&events, date, config.week_start, configured);
                info!(
                    "laid out week of {} ({} events)",
                    date,
                    layout.days.iter().map(|d| d.events.len()).sum::<usize>()
                );
                serde_json::to_string_pretty(&layout)?
            } else {
                let report = day_report(&events, date, configured);
                info!("laid out {} ({} events)", date, report.events.len());
                serde_json::to_string_pretty(&report)?
            };

            write_output(output.as_deref(), &json)?;
        }
        Commands::Range { hours, input } => {
            let events = read_events(input.as_deref())?;
            let (single_day, _) = partition_by_span(&events);
            let range =
                compute_visible_range(hours.apply(config.visible_hours), single_day.iter().copied());
            println!("{}", serde_json::to_string(&range)?);
        }
        Commands::Now { at, input } => {
            let events = read_events(input.as_deref())?;
            let now = parse_datetime(&at).context("Invalid --at")?;
            let current = current_events(&events, now);
            info!("{} of {} events running at {}", current.len(), events.len(), now);
            println!("{}", serde_json::to_string_pretty(&current)?);
        }
        Commands::Working { date } => {
            let date = parse_date(&date).context("Invalid --date")?;
            let table = config.weekly_working_hours();
            let range = VisibleRange::from(config.visible_hours);
            for hour in range.hours() {
                let state = if table.is_working_hour(date, hour) {
                    "working"
                } else {
                    "off"
                };
                println!("{:02}:00 {}", hour, state);
            }
        }
    }

    Ok(())
}

/// Lay out a single day the way the day view does: only single-day events
/// that start or end on the date go into the grid.
fn day_report(events: &[Event], date: NaiveDate, configured: HourSpan) -> DayReport<'_> {
    let (single_day, multi_day) = partition_by_span(events);
    let on_day = events_on_day(single_day, date);
    let visible_range = compute_visible_range(configured, on_day.iter().copied());

    let all_day = multi_day
        .into_iter()
        .filter(|e| e.start().date() <= date && date <= e.end().date())
        .map(|e| e.id.as_str())
        .collect();

    DayReport {
        date: date.format("%Y-%m-%d").to_string(),
        visible_range,
        all_day,
        events: layout_day(on_day, date, visible_range),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Load the layout config from a TOML file, or fall back to the defaults.
fn load_config(path: Option<&str>) -> Result<LayoutConfig> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path))?;
            toml::from_str(&raw).with_context(|| format!("Invalid config: {}", path))
        }
        None => Ok(LayoutConfig::default()),
    }
}

fn read_events(path: Option<&str>) -> Result<Vec<Event>> {
    let json = read_input(path)?;
    parse_events_json(&json).context("Failed to parse events")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
