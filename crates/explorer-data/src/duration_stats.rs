//! Total and mean trip duration.

use explorer_core::error::{ExplorerError, Result};
use explorer_core::models::Dataset;

/// Duration aggregates over the filtered records, in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub total_seconds: f64,
    pub mean_seconds: f64,
    pub trip_count: usize,
}

/// Sum and mean of the trip-duration field.
///
/// Empty input is [`ExplorerError::EmptyDataset`] rather than a degenerate
/// zero-sum result, keeping this analyzer consistent with the mode-based
/// ones and keeping the mean's division well-defined.
pub fn trip_durations(dataset: &Dataset) -> Result<DurationStats> {
    if dataset.is_empty() {
        return Err(ExplorerError::EmptyDataset);
    }

    let total_seconds: f64 = dataset.records.iter().map(|r| r.duration_seconds).sum();
    let trip_count = dataset.len();

    Ok(DurationStats {
        total_seconds,
        mean_seconds: total_seconds / trip_count as f64,
        trip_count,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
