use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` accepts the Python-style level names offered by the CLI and
/// maps them onto tracing directives, falling back to `warn` if the string
/// is not recognised. Logs go to stderr so they never interleave with the
/// interactive prompts on stdout; passing `log_file` redirects them to a
/// file instead.
pub fn setup_logging(log_level: &str, log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let upper = log_level.to_uppercase();
    let normalised = match upper.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" | "CRITICAL" => "error",
        other => other,
    };

    let filter = EnvFilter::try_new(normalised).unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::new(file));
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
        None => {
            let layer = fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    }

    Ok(())
}

// ── Data-directory discovery ───────────────────────────────────────────────────

/// Resolve the directory holding the per-city CSV files.
///
/// Order: an explicit `--data-dir` (or `BIKESHARE_DATA_DIR`, which clap
/// folds into the same setting), then a `data/` directory under the working
/// directory, then the working directory itself.
pub fn resolve_data_dir(explicit: Option<&Path>) -> PathBuf {
    resolve_data_dir_in(explicit, Path::new("."))
}

/// Resolve against an explicit base directory (used for testing).
pub fn resolve_data_dir_in(explicit: Option<&Path>, base_dir: &Path) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    let candidate = base_dir.join("data");
    if candidate.is_dir() {
        return candidate;
    }
    base_dir.to_path_buf()
}

// ── Tests ──────────────────────────────────────────────────────────────────────
