use clap::Parser;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::models::City;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Interactive exploration of US bikeshare trip data
#[derive(Parser, Debug, Clone)]
#[command(
    name = "bikeshare-explorer",
    about = "Interactive exploration of US bikeshare trip data",
    version
)]
pub struct Settings {
    /// Directory containing the per-city CSV files
    #[arg(long, env = "BIKESHARE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Rows shown per page when browsing raw records
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..=100))]
    pub page_size: u32,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

// ── DataConfig ─────────────────────────────────────────────────────────────────

/// Where one city's trip log lives and which columns it carries.
#[derive(Debug, Clone)]
pub struct CitySource {
    pub path: PathBuf,
    /// Whether the file carries the gender/birth-year columns. Washington's
    /// published dataset omits them entirely.
    pub carries_rider_profile: bool,
}

/// Immutable table mapping each supported city to its data source.
///
/// Built once from the resolved data directory and passed into the loader,
/// so nothing downstream hard-codes file names.
#[derive(Debug, Clone)]
pub struct DataConfig {
    sources: HashMap<City, CitySource>,
}

/// Default file name and rider-profile availability per city.
const DEFAULT_SOURCES: [(City, &str, bool); 3] = [
    (City::Chicago, "chicago.csv", true),
    (City::NewYorkCity, "new_york_city.csv", true),
    (City::Washington, "washington.csv", false),
];

impl DataConfig {
    /// Build the standard table rooted at `data_dir`.
    pub fn new(data_dir: &Path) -> Self {
        let sources = DEFAULT_SOURCES
            .iter()
            .map(|(city, file, profile)| {
                (
                    *city,
                    CitySource {
                        path: data_dir.join(file),
                        carries_rider_profile: *profile,
                    },
                )
            })
            .collect();
        Self { sources }
    }

    /// Look up the source for `city`. The table is total over [`City`], so
    /// this never fails.
    pub fn source(&self, city: City) -> &CitySource {
        &self.sources[&city]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
