//! Validated interactive prompts.
//!
//! The prompt sequence walks city → month → day, re-asking on invalid input;
//! validation failures never escape this module. Generic over the input and
//! output streams so the loops can be tested against in-memory buffers.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use explorer_core::error::ExplorerError;
use explorer_core::models::{City, DayFilter, FilterSpec, MonthFilter};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Access the output stream, for rendering between prompts.
    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    /// Run the full city → month → day sequence.
    ///
    /// `None` means the input stream ended; the caller should exit cleanly.
    pub fn read_filter_spec(&mut self) -> io::Result<Option<FilterSpec>> {
        let Some(city) = self.read_city()? else {
            return Ok(None);
        };
        let Some(month) = self.read_month_filter()? else {
            return Ok(None);
        };
        let Some(day) = self.read_day_filter()? else {
            return Ok(None);
        };
        Ok(Some(FilterSpec { city, month, day }))
    }

    /// Prompt for a city until one of the supported names is entered.
    pub fn read_city(&mut self) -> io::Result<Option<City>> {
        let cities = City::ALL.map(|c| c.to_string()).join(", ");
        let prompt = format!(
            "Please enter the city you want to explore from the following cities: {}",
            cities
        );
        let Some(city) = self.read_parsed::<City>(&prompt)? else {
            return Ok(None);
        };
        writeln!(self.output, "Exploring city {}\n", city)?;
        Ok(Some(city))
    }

    /// Prompt for the month axis until `all` or a month name is entered.
    pub fn read_month_filter(&mut self) -> io::Result<Option<MonthFilter>> {
        let prompt = "Please enter the month you want to filter (all, january, february, ..., june).\n\
                      Enter all for no filter, or a month to filter to that month";
        let Some(filter) = self.read_parsed::<MonthFilter>(prompt)? else {
            return Ok(None);
        };
        match filter {
            MonthFilter::All => writeln!(self.output, "No filter will be applied for month\n")?,
            MonthFilter::Only(month) => {
                writeln!(self.output, "The filter will be applied for month {}\n", month)?
            }
        }
        Ok(Some(filter))
    }

    /// Prompt for the day axis until `all` or a day name is entered.
    pub fn read_day_filter(&mut self) -> io::Result<Option<DayFilter>> {
        let prompt = "Please enter the day of the week you want to filter (all, monday, tuesday, ..., sunday).\n\
                      Enter all for no filter, or a day to filter to that day";
        let Some(filter) = self.read_parsed::<DayFilter>(prompt)? else {
            return Ok(None);
        };
        match filter {
            DayFilter::All => writeln!(self.output, "No filter will be applied for day\n")?,
            DayFilter::Only(day) => writeln!(
                self.output,
                "The filter will be applied for day {}\n",
                explorer_core::time_utils::weekday_name(day)
            )?,
        }
        Ok(Some(filter))
    }

    /// Ask a yes/no question. Only a case-insensitive `yes` proceeds;
    /// anything else, including end of input, declines.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let Some(line) = self.ask(prompt)? else {
            return Ok(false);
        };
        Ok(line.trim().eq_ignore_ascii_case("yes"))
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    /// Re-prompt until the line parses, echoing the rejected input.
    fn read_parsed<T>(&mut self, prompt: &str) -> io::Result<Option<T>>
    where
        T: FromStr<Err = ExplorerError>,
    {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            match line.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Please check input: {}\n", line.trim())?,
            }
        }
    }

    /// Print a prompt and read one line. `None` on end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
