//! Query pipeline for the Bikeshare Explorer.
//!
//! Composes load → filter → the four analyzers and returns a report ready
//! for rendering, plus the filtered dataset for raw-record browsing.

use explorer_core::config::DataConfig;
use explorer_core::error::Result;
use explorer_core::models::{Dataset, FilterSpec};
use tracing::debug;

use crate::duration_stats::{trip_durations, DurationStats};
use crate::filter::apply_filters;
use crate::loader::load_city_data;
use crate::station_stats::{most_popular_stations, StationStats};
use crate::travel_stats::{most_frequent_travel_times, TravelTimeStats};
use crate::user_stats::{user_breakdown, UserStats};

// ── Public types ──────────────────────────────────────────────────────────────

/// Pipeline bookkeeping reported alongside the statistics.
#[derive(Debug, Clone)]
pub struct QueryMetadata {
    /// Record count before filtering.
    pub records_loaded: usize,
    /// Record count after filtering.
    pub records_matched: usize,
    /// Wall-clock seconds spent reading and parsing the CSV.
    pub load_time_seconds: f64,
    /// Wall-clock seconds spent filtering and computing statistics.
    pub stats_time_seconds: f64,
}

/// The complete output of [`run_query`].
#[derive(Debug, Clone)]
pub struct QueryReport {
    pub travel: TravelTimeStats,
    pub stations: StationStats,
    pub durations: DurationStats,
    pub users: UserStats,
    pub metadata: QueryMetadata,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run one full query cycle.
///
/// 1. Load the city's trip log fresh (no caching across sessions).
/// 2. Narrow it by the spec's month/day axes.
/// 3. Run the four analyzers over the narrowed set.
///
/// Returns the narrowed dataset (for pagination) together with the report.
/// A filter combination matching nothing surfaces as
/// [`ExplorerError::EmptyDataset`](explorer_core::error::ExplorerError::EmptyDataset)
/// from the first analyzer.
pub fn run_query(config: &DataConfig, spec: &FilterSpec) -> Result<(Dataset, QueryReport)> {
    let load_start = std::time::Instant::now();
    let full = load_city_data(config, spec.city)?;
    let load_time = load_start.elapsed().as_secs_f64();

    let stats_start = std::time::Instant::now();
    let narrowed = apply_filters(&full, spec);
    debug!(
        "query for {}: {} of {} records match",
        spec.city,
        narrowed.len(),
        full.len()
    );

    let travel = most_frequent_travel_times(&narrowed)?;
    let stations = most_popular_stations(&narrowed)?;
    let durations = trip_durations(&narrowed)?;
    let users = user_breakdown(&narrowed)?;
    let stats_time = stats_start.elapsed().as_secs_f64();

    let metadata = QueryMetadata {
        records_loaded: full.len(),
        records_matched: narrowed.len(),
        load_time_seconds: load_time,
        stats_time_seconds: stats_time,
    };

    Ok((
        narrowed,
        QueryReport {
            travel,
            stations,
            durations,
            users,
            metadata,
        },
    ))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use explorer_core::error::ExplorerError;
    use explorer_core::models::{City, DayFilter, Month, MonthFilter};
    use explorer_core::config::DataConfig;
    use std::io::Write;
    use tempfile::TempDir;

    const PROFILE_HEADER: &str =
        ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year";

    fn write_chicago(dir: &TempDir, rows: &[&str]) -> DataConfig {
        let path = dir.path().join("chicago.csv");
        let mut file = std::fs::File::create(path).unwrap();
        writeln!(file, "{}", PROFILE_HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        DataConfig::new(dir.path())
    }

    #[test]
    fn test_run_query_unfiltered() {
        let dir = TempDir::new().unwrap();
        let config = write_chicago(
            &dir,
            &[
                // 2017-06-23 was a Friday, 2017-06-24 a Saturday.
                "0,2017-06-23 08:00:00,2017-06-23 08:10:00,600,A,B,Subscriber,Male,1985.0",
                "1,2017-06-24 09:00:00,2017-06-24 09:20:00,1200,A,C,Customer,Female,1992.0",
                "2,2017-06-24 09:30:00,2017-06-24 09:40:00,600,A,C,Subscriber,Male,1985.0",
            ],
        );

        let spec = FilterSpec::unfiltered(City::Chicago);
        let (dataset, report) = run_query(&config, &spec).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(report.metadata.records_loaded, 3);
        assert_eq!(report.metadata.records_matched, 3);
        assert_eq!(report.travel.top_month, (6, 3));
        assert_eq!(report.travel.top_weekday, (Weekday::Sat, 2));
        assert_eq!(report.travel.top_hour, (9, 2));
        assert_eq!(report.stations.top_start, ("A".to_string(), 3));
        assert_eq!(report.stations.top_pair.1, 2);
        assert!((report.durations.total_seconds - 2400.0).abs() < f64::EPSILON);
        assert_eq!(report.users.user_types[0], ("Subscriber".to_string(), 2));
    }

    #[test]
    fn test_run_query_filter_narrows_before_stats() {
        let dir = TempDir::new().unwrap();
        let config = write_chicago(
            &dir,
            &[
                "0,2017-03-06 08:00:00,2017-03-06 08:10:00,600,A,B,Subscriber,Male,1985.0",
                "1,2017-04-04 09:00:00,2017-04-04 09:20:00,1200,C,D,Customer,Female,1992.0",
            ],
        );

        let spec = FilterSpec {
            city: City::Chicago,
            month: MonthFilter::Only(Month::March),
            day: DayFilter::All,
        };
        let (dataset, report) = run_query(&config, &spec).unwrap();

        assert_eq!(report.metadata.records_loaded, 2);
        assert_eq!(report.metadata.records_matched, 1);
        assert_eq!(dataset.len(), 1);
        assert_eq!(report.stations.top_start, ("A".to_string(), 1));
        assert!((report.durations.total_seconds - 600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_run_query_empty_match_is_empty_dataset_error() {
        let dir = TempDir::new().unwrap();
        let config = write_chicago(
            &dir,
            &["0,2017-03-06 08:00:00,2017-03-06 08:10:00,600,A,B,Subscriber,Male,1985.0"],
        );

        let spec = FilterSpec {
            city: City::Chicago,
            month: MonthFilter::Only(Month::June),
            day: DayFilter::All,
        };
        let err = run_query(&config, &spec).unwrap_err();
        assert!(matches!(err, ExplorerError::EmptyDataset));
    }

    #[test]
    fn test_run_query_missing_file_is_data_source_error() {
        let dir = TempDir::new().unwrap();
        let config = DataConfig::new(dir.path());
        let spec = FilterSpec::unfiltered(City::NewYorkCity);
        let err = run_query(&config, &spec).unwrap_err();
        assert!(matches!(err, ExplorerError::DataSource { .. }));
    }

    #[test]
    fn test_run_query_metadata_timings_populated() {
        let dir = TempDir::new().unwrap();
        let config = write_chicago(
            &dir,
            &["0,2017-03-06 08:00:00,2017-03-06 08:10:00,600,A,B,Subscriber,Male,1985.0"],
        );

        let spec = FilterSpec::unfiltered(City::Chicago);
        let (_, report) = run_query(&config, &spec).unwrap();
        assert!(report.metadata.load_time_seconds >= 0.0);
        assert!(report.metadata.stats_time_seconds >= 0.0);
    }
}
