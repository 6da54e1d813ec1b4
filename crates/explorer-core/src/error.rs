use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the Bikeshare Explorer.
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// A city name is not one of the supported cities.
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    /// A month name is not "all" or one of the filterable months.
    #[error("Unknown month: {0}")]
    UnknownMonth(String),

    /// A day name is not "all" or a day of the week.
    #[error("Unknown day: {0}")]
    UnknownDay(String),

    /// A city's backing file could not be opened or read from disk.
    #[error("Failed to read trip data {path}: {source}")]
    DataSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV row could not be parsed or is missing a required column.
    #[error("Failed to parse trip data: {0}")]
    Csv(#[from] csv::Error),

    /// A timestamp string did not match any recognised format.
    #[error("Invalid timestamp format: {0}")]
    TimestampParse(String),

    /// An aggregate was requested over zero records.
    #[error("No trips match the selected filters")]
    EmptyDataset,

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ExplorerError {
    /// Returns `true` for input-validation failures that the prompt loop
    /// recovers from by re-prompting.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ExplorerError::UnknownCity(_)
                | ExplorerError::UnknownMonth(_)
                | ExplorerError::UnknownDay(_)
        )
    }
}

/// Convenience alias used throughout the explorer crates.
pub type Result<T> = std::result::Result<T, ExplorerError>;
