//! Most frequent times of travel.

use chrono::Weekday;
use explorer_core::error::{ExplorerError, Result};
use explorer_core::models::Dataset;

use crate::freq::most_frequent;

/// The busiest month, day of week and hour of day, each with its trip count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelTimeStats {
    /// Calendar month (1-12) and its occurrence count.
    pub top_month: (u32, u64),
    pub top_weekday: (Weekday, u64),
    /// Hour of day (0-23) and its occurrence count.
    pub top_hour: (u32, u64),
}

/// Compute the mode of each time bucket over the filtered records.
///
/// No mode is defined over zero records, so an empty dataset is
/// [`ExplorerError::EmptyDataset`].
pub fn most_frequent_travel_times(dataset: &Dataset) -> Result<TravelTimeStats> {
    let top_month = most_frequent(dataset.records.iter().map(|r| r.month))
        .ok_or(ExplorerError::EmptyDataset)?;
    let top_weekday = most_frequent(dataset.records.iter().map(|r| r.weekday))
        .ok_or(ExplorerError::EmptyDataset)?;
    let top_hour = most_frequent(dataset.records.iter().map(|r| r.hour))
        .ok_or(ExplorerError::EmptyDataset)?;

    Ok(TravelTimeStats {
        top_month,
        top_weekday,
        top_hour,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
