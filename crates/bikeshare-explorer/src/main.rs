mod bootstrap;

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Parser;
use explorer_core::config::{DataConfig, Settings};
use explorer_core::error::ExplorerError;
use explorer_core::models::Dataset;
use explorer_data::query::run_query;
use explorer_ui::pager::{render_page, RecordPager};
use explorer_ui::prompts::Prompter;
use explorer_ui::report::render_report;

fn main() -> Result<()> {
    let settings = Settings::parse();
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Bikeshare Explorer v{} starting", env!("CARGO_PKG_VERSION"));

    let data_dir = bootstrap::resolve_data_dir(settings.data_dir.as_deref());
    tracing::info!("Trip data directory: {}", data_dir.display());
    let config = DataConfig::new(&data_dir);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    writeln!(
        prompter.writer(),
        "Hello! Let's explore some US bikeshare data!"
    )?;

    loop {
        // End of input mid-prompt means the session is over.
        let Some(spec) = prompter.read_filter_spec()? else {
            break;
        };

        match run_query(&config, &spec) {
            Ok((dataset, report)) => {
                render_report(prompter.writer(), spec.city, &report)?;
                browse_records(&mut prompter, &dataset, settings.page_size as usize)?;
            }
            // A filter combination matching nothing is an answer, not a crash.
            Err(ExplorerError::EmptyDataset) => {
                writeln!(prompter.writer(), "\n{}\n", ExplorerError::EmptyDataset)?;
            }
            // Data-source problems end this query cycle; retrying the same
            // file would not help, so fall through to the restart prompt.
            Err(err) => {
                tracing::error!("query failed: {err}");
                writeln!(prompter.writer(), "\nCould not complete the query: {err}\n")?;
            }
        }

        if !prompter.confirm("\nWould you like to restart? Enter yes or no.")? {
            break;
        }
    }

    Ok(())
}

/// Offer the filtered records in pages, continuing only on an explicit yes.
fn browse_records<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    dataset: &Dataset,
    page_size: usize,
) -> std::io::Result<()> {
    let mut pager = RecordPager::new(&dataset.records, page_size);

    let opening = format!(
        "\nWould you like to view {} rows of individual trip data? Enter yes or no.",
        page_size
    );
    if !prompter.confirm(&opening)? {
        return Ok(());
    }

    while let Some(page) = pager.next_page() {
        render_page(prompter.writer(), page)?;

        if pager.is_exhausted() {
            writeln!(prompter.writer(), "Reached the end of all data.")?;
            break;
        }
        if !prompter.confirm("Do you wish to continue? Enter yes to continue.")? {
            break;
        }
    }

    Ok(())
}
