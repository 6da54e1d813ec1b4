//! CSV ingestion for the Bikeshare Explorer.
//!
//! Reads one city's trip log into typed [`TripRecord`]s, deriving the
//! month/day-of-week/hour buckets from the start timestamp at load time.

use std::fs::File;
use std::io::BufReader;

use explorer_core::config::DataConfig;
use explorer_core::error::{ExplorerError, Result};
use explorer_core::models::{City, Dataset, TripRecord};
use explorer_core::time_utils;
use serde::Deserialize;
use tracing::debug;

// ── Raw row ───────────────────────────────────────────────────────────────────

/// One row as published, before timestamp parsing and bucket derivation.
///
/// Field names map onto the CSV headers; the unnamed leading index column in
/// the published exports is simply ignored. `Gender` and `Birth Year` are
/// absent as columns in Washington's file and blank per-record elsewhere —
/// both arrive here as `None`.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type")]
    user_type: Option<String>,
    #[serde(rename = "Gender")]
    gender: Option<String>,
    /// Float-formatted in the exports ("1992.0").
    #[serde(rename = "Birth Year")]
    birth_year: Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the full trip log for `city` as described by `config`.
///
/// Records are returned in file order. The dataset's rider-profile flag
/// comes from the configuration table, not from sniffing the file: a city
/// without the gender/birth-year columns is structurally different from one
/// with blanks in them.
///
/// Fails with the data-source family of errors when the file is missing or
/// malformed: an unparsable row or timestamp aborts the whole load rather
/// than silently dropping records.
pub fn load_city_data(config: &DataConfig, city: City) -> Result<Dataset> {
    let source = config.source(city);

    let file = File::open(&source.path).map_err(|e| ExplorerError::DataSource {
        path: source.path.clone(),
        source: e,
    })?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let mut records: Vec<TripRecord> = Vec::new();
    for row in reader.deserialize::<RawTrip>() {
        let raw = row?;
        records.push(into_record(raw)?);
    }

    debug!(
        "loaded {} trips for {} from {}",
        records.len(),
        city,
        source.path.display()
    );

    Ok(Dataset::new(city, source.carries_rider_profile, records))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Convert a raw row into a [`TripRecord`], parsing both timestamps.
fn into_record(raw: RawTrip) -> Result<TripRecord> {
    let start = time_utils::parse_timestamp(&raw.start_time)
        .ok_or_else(|| ExplorerError::TimestampParse(raw.start_time.clone()))?;
    let end = time_utils::parse_timestamp(&raw.end_time)
        .ok_or_else(|| ExplorerError::TimestampParse(raw.end_time.clone()))?;

    // The csv layer already maps empty fields to `None`; whitespace-only
    // values occasionally appear in the exports and get the same treatment.
    let user_type = raw.user_type.filter(|s| !s.trim().is_empty());
    let gender = raw.gender.filter(|s| !s.trim().is_empty());
    let birth_year = raw.birth_year.map(|y| y as i32);

    Ok(TripRecord::new(
        start,
        end,
        raw.start_station,
        raw.end_station,
        raw.trip_duration,
        user_type,
        gender,
        birth_year,
    ))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
