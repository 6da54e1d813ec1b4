use chrono::{NaiveDateTime, Weekday};
use tracing::warn;

// ── Timestamp parsing ─────────────────────────────────────────────────────────

/// Candidate formats for the timestamps found in the published trip logs.
///
/// The exports are naive local times; the common form is
/// `2017-01-01 00:07:57`, with fractional seconds and US-style dates seen in
/// older files.
const FMTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parse a trip-log timestamp string against [`FMTS`].
///
/// Returns `None` for empty strings or unrecognised formats.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    for fmt in FMTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt);
        }
    }

    warn!("could not parse timestamp \"{}\"", s);
    None
}

// ── Display names ─────────────────────────────────────────────────────────────

/// English month names indexed by calendar number minus one.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name of a calendar month (1-12). A loaded dataset may contain months
/// outside the filterable January-June range, so all twelve are covered.
///
/// Returns `None` for numbers outside 1-12.
pub fn month_name(month: u32) -> Option<&'static str> {
    if (1..=12).contains(&month) {
        Some(MONTH_NAMES[(month - 1) as usize])
    } else {
        None
    }
}

/// Full English day name. `chrono`'s `Display` abbreviates to three letters,
/// which is not how the reports read.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Render an hour-of-day bucket (0-23) as a clock label, e.g. `17:00`.
pub fn hour_label(hour: u32) -> String {
    format!("{:02}:00", hour)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
