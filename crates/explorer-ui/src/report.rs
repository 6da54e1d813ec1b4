//! Renders a query report as the sectioned plain-text summary.

use std::io::{self, Write};

use explorer_core::formatting::{format_count, format_duration, format_number, percentage};
use explorer_core::models::City;
use explorer_core::time_utils::{hour_label, month_name, weekday_name};
use explorer_data::query::QueryReport;
use explorer_data::user_stats::RiderProfile;

/// Section separator, forty dashes wide.
const RULE: &str = "----------------------------------------";

/// Write the full statistics report for one query.
pub fn render_report<W: Write>(out: &mut W, city: City, report: &QueryReport) -> io::Result<()> {
    render_travel_times(out, report)?;
    render_stations(out, report)?;
    render_durations(out, report)?;
    render_users(out, city, report)?;

    let meta = &report.metadata;
    writeln!(
        out,
        "Matched {} of {} records; loaded in {:.2}s, statistics in {:.2}s.",
        format_count(meta.records_matched as u64),
        format_count(meta.records_loaded as u64),
        meta.load_time_seconds,
        meta.stats_time_seconds,
    )?;
    writeln!(out, "{}", RULE)
}

// ── Sections ──────────────────────────────────────────────────────────────────

fn render_travel_times<W: Write>(out: &mut W, report: &QueryReport) -> io::Result<()> {
    let travel = &report.travel;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Most frequent times of travel\n")?;

    let (month, month_count) = travel.top_month;
    writeln!(
        out,
        "The most common month is {} ({} trips).",
        month_name(month).unwrap_or("unknown"),
        format_count(month_count),
    )?;
    let (weekday, day_count) = travel.top_weekday;
    writeln!(
        out,
        "The most common day is {} ({} trips).",
        weekday_name(weekday),
        format_count(day_count),
    )?;
    let (hour, hour_count) = travel.top_hour;
    writeln!(
        out,
        "The most common start hour is {} ({} trips).\n",
        hour_label(hour),
        format_count(hour_count),
    )
}

fn render_stations<W: Write>(out: &mut W, report: &QueryReport) -> io::Result<()> {
    let stations = &report.stations;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Most popular stations and trip\n")?;

    writeln!(
        out,
        "The most common start station is {} ({} trips).",
        stations.top_start.0,
        format_count(stations.top_start.1),
    )?;
    writeln!(
        out,
        "The most common end station is {} ({} trips).",
        stations.top_end.0,
        format_count(stations.top_end.1),
    )?;
    let (pair, pair_count) = &stations.top_pair;
    writeln!(
        out,
        "The most common trip is from {} to {} ({} trips).\n",
        pair.start,
        pair.end,
        format_count(*pair_count),
    )
}

fn render_durations<W: Write>(out: &mut W, report: &QueryReport) -> io::Result<()> {
    let durations = &report.durations;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Trip durations\n")?;

    writeln!(
        out,
        "Total travel time: {} seconds ({}) over {} trips.",
        format_number(durations.total_seconds, 0),
        format_duration(durations.total_seconds),
        format_count(durations.trip_count as u64),
    )?;
    writeln!(
        out,
        "Mean travel time: {} seconds ({}).\n",
        format_number(durations.mean_seconds, 1),
        format_duration(durations.mean_seconds),
    )
}

fn render_users<W: Write>(out: &mut W, city: City, report: &QueryReport) -> io::Result<()> {
    let users = &report.users;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Rider breakdown\n")?;

    let typed_total: u64 = users.user_types.iter().map(|(_, count)| count).sum();
    for (user_type, count) in &users.user_types {
        writeln!(
            out,
            "{}: {} trips ({:.1}%)",
            user_type,
            format_count(*count),
            percentage(*count as f64, typed_total as f64),
        )?;
    }

    match &users.profile {
        RiderProfile::Unavailable => {
            writeln!(
                out,
                "\nGender and birth-year data is not published for {}.\n",
                city
            )?;
        }
        RiderProfile::Available {
            genders,
            birth_years,
        } => {
            writeln!(out)?;
            for (gender, count) in genders {
                writeln!(out, "{}: {} trips", gender, format_count(*count))?;
            }
            match birth_years {
                Some(by) => {
                    writeln!(
                        out,
                        "The oldest rider was born in {}, the youngest in {}.",
                        by.earliest, by.most_recent
                    )?;
                    writeln!(
                        out,
                        "The most common birth year is {} ({} trips).\n",
                        by.most_common.0,
                        format_count(by.most_common.1),
                    )?;
                }
                None => writeln!(out, "No birth-year data in the selected records.\n")?,
            }
        }
    }

    writeln!(out, "{}", RULE)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
