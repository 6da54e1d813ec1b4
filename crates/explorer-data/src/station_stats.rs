//! Most popular stations and station-to-station trip.

use explorer_core::error::{ExplorerError, Result};
use explorer_core::models::Dataset;

use crate::freq::most_frequent;

/// A start/end station combination.
///
/// A genuine composite key: two distinct pairs can never collide the way
/// separator-joined station names could if a name contained the separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StationPair {
    pub start: String,
    pub end: String,
}

/// The busiest start station, end station and station pair, with counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub top_start: (String, u64),
    pub top_end: (String, u64),
    pub top_pair: (StationPair, u64),
}

/// Compute the station modes over the filtered records.
///
/// Empty input is [`ExplorerError::EmptyDataset`]; ties break to the first
/// record encountered, as everywhere else.
pub fn most_popular_stations(dataset: &Dataset) -> Result<StationStats> {
    let top_start = most_frequent(dataset.records.iter().map(|r| r.start_station.clone()))
        .ok_or(ExplorerError::EmptyDataset)?;
    let top_end = most_frequent(dataset.records.iter().map(|r| r.end_station.clone()))
        .ok_or(ExplorerError::EmptyDataset)?;
    let top_pair = most_frequent(dataset.records.iter().map(|r| StationPair {
        start: r.start_station.clone(),
        end: r.end_station.clone(),
    }))
    .ok_or(ExplorerError::EmptyDataset)?;

    Ok(StationStats {
        top_start,
        top_end,
        top_pair,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
