//! Raw-record browsing in fixed-size pages.

use std::io::{self, Write};

use explorer_core::formatting::format_duration;
use explorer_core::models::TripRecord;
use unicode_width::UnicodeWidthStr;

/// Rows shown per page unless overridden by settings.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Column headers for the raw-record table.
const HEADERS: [&str; 6] = [
    "Start Time",
    "End Time",
    "Duration",
    "Start Station",
    "End Station",
    "User Type",
];

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ── RecordPager ───────────────────────────────────────────────────────────────

/// Walks a record slice in page-size steps.
pub struct RecordPager<'a> {
    records: &'a [TripRecord],
    page_size: usize,
    offset: usize,
}

impl<'a> RecordPager<'a> {
    pub fn new(records: &'a [TripRecord], page_size: usize) -> Self {
        Self {
            records,
            page_size: page_size.max(1),
            offset: 0,
        }
    }

    /// The next page, or `None` once all records have been served.
    pub fn next_page(&mut self) -> Option<&'a [TripRecord]> {
        if self.is_exhausted() {
            return None;
        }
        let end = (self.offset + self.page_size).min(self.records.len());
        let page = &self.records[self.offset..end];
        self.offset = end;
        Some(page)
    }

    pub fn is_exhausted(&self) -> bool {
        self.offset >= self.records.len()
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Write one page as an aligned table with a header row.
///
/// Column widths are measured per page with `unicode-width`, so station
/// names outside ASCII still line up.
pub fn render_page<W: Write>(out: &mut W, page: &[TripRecord]) -> io::Result<()> {
    let rows: Vec<[String; 6]> = page.iter().map(row_cells).collect();

    let mut widths: [usize; 6] = HEADERS.map(UnicodeWidthStr::width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    writeln!(out, "{}", render_row(&HEADERS.map(String::from), &widths))?;
    for row in &rows {
        writeln!(out, "{}", render_row(row, &widths))?;
    }
    Ok(())
}

fn row_cells(record: &TripRecord) -> [String; 6] {
    [
        record.start_time.format(TIME_FORMAT).to_string(),
        record.end_time.format(TIME_FORMAT).to_string(),
        format_duration(record.duration_seconds),
        record.start_station.clone(),
        record.end_station.clone(),
        record.user_type.clone().unwrap_or_else(|| "-".to_string()),
    ]
}

fn render_row(cells: &[String; 6], widths: &[usize; 6]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| pad(cell, *width))
        .collect();
    padded.join("  ").trim_end().to_string()
}

/// Left-align to `width` display columns.
fn pad(s: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(s);
    let mut out = String::from(s);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(current)));
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
