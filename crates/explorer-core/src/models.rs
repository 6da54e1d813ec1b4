use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExplorerError;

// ── City ──────────────────────────────────────────────────────────────────────

/// One of the supported cities with a published trip log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum City {
    Chicago,
    #[serde(rename = "new york city")]
    NewYorkCity,
    Washington,
}

impl City {
    /// Every supported city, in prompt-menu order.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        };
        f.write_str(name)
    }
}

impl FromStr for City {
    type Err = ExplorerError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chicago" => Ok(City::Chicago),
            "new york city" => Ok(City::NewYorkCity),
            "washington" => Ok(City::Washington),
            _ => Err(ExplorerError::UnknownCity(s.trim().to_string())),
        }
    }
}

// ── Month ─────────────────────────────────────────────────────────────────────

/// The filterable months. The published datasets cover the first half of the
/// year, so only January through June can be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// Calendar month number, 1-based (January = 1).
    pub fn number(self) -> u32 {
        match self {
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
        };
        f.write_str(name)
    }
}

impl FromStr for Month {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "january" => Ok(Month::January),
            "february" => Ok(Month::February),
            "march" => Ok(Month::March),
            "april" => Ok(Month::April),
            "may" => Ok(Month::May),
            "june" => Ok(Month::June),
            _ => Err(ExplorerError::UnknownMonth(s.trim().to_string())),
        }
    }
}

// ── Filter axes ───────────────────────────────────────────────────────────────

/// The month axis of a [`FilterSpec`]. `All` applies no restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    /// Whether a record with the given calendar month (1-12) passes.
    pub fn matches(self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => m.number() == month,
        }
    }
}

impl FromStr for MonthFilter {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(MonthFilter::All);
        }
        s.parse::<Month>().map(MonthFilter::Only)
    }
}

/// The day-of-week axis of a [`FilterSpec`]. `All` applies no restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    /// Whether a record that started on the given weekday passes.
    pub fn matches(self, weekday: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => d == weekday,
        }
    }
}

impl FromStr for DayFilter {
    type Err = ExplorerError;

    /// Accepts `all` or a full English day name, case-insensitive. Exactly
    /// the seven full names are valid, so a typo is reported back with the
    /// user's raw input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let day = match s.trim().to_lowercase().as_str() {
            "all" => return Ok(DayFilter::All),
            "monday" => Weekday::Mon,
            "tuesday" => Weekday::Tue,
            "wednesday" => Weekday::Wed,
            "thursday" => Weekday::Thu,
            "friday" => Weekday::Fri,
            "saturday" => Weekday::Sat,
            "sunday" => Weekday::Sun,
            _ => return Err(ExplorerError::UnknownDay(s.trim().to_string())),
        };
        Ok(DayFilter::Only(day))
    }
}

// ── FilterSpec ────────────────────────────────────────────────────────────────

/// A validated query: which city to load and how to narrow it.
///
/// Built once per interactive session from user input. Inputs are accepted
/// case-insensitively and normalised into the typed axes here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSpec {
    /// A spec with both axes open, i.e. the identity filter for `city`.
    pub fn unfiltered(city: City) -> Self {
        Self {
            city,
            month: MonthFilter::All,
            day: DayFilter::All,
        }
    }
}

// ── TripRecord ────────────────────────────────────────────────────────────────

/// One ride entry from a city's trip log.
///
/// The `month`/`weekday`/`hour` buckets are derived from the start timestamp
/// exactly once, at construction, so downstream filtering and aggregation
/// never re-parse timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    /// Trip length in seconds, as published in the source data.
    pub duration_seconds: f64,
    /// Subscriber/Customer classification; absent in some rows.
    pub user_type: Option<String>,
    /// Only present in cities that publish rider profiles.
    pub gender: Option<String>,
    /// Only present in cities that publish rider profiles.
    pub birth_year: Option<i32>,
    /// Calendar month of the start timestamp, 1-12.
    pub month: u32,
    /// Day of week of the start timestamp.
    pub weekday: Weekday,
    /// Hour of day of the start timestamp, 0-23.
    pub hour: u32,
}

impl TripRecord {
    /// Build a record, deriving the time buckets from `start_time`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        start_station: String,
        end_station: String,
        duration_seconds: f64,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        Self {
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
            start_time,
            end_time,
            start_station,
            end_station,
            duration_seconds,
            user_type,
            gender,
            birth_year,
        }
    }
}

// ── Dataset ───────────────────────────────────────────────────────────────────

/// An ordered collection of trip records for one city.
///
/// `carries_rider_profile` records whether this city's source file carries
/// the gender/birth-year columns at all. It is decided once, from the data
/// configuration, when the dataset is loaded; a city without those columns
/// is structurally different from one with missing values in them.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub city: City,
    pub carries_rider_profile: bool,
    pub records: Vec<TripRecord>,
}

impl Dataset {
    pub fn new(city: City, carries_rider_profile: bool, records: Vec<TripRecord>) -> Self {
        Self {
            city,
            carries_rider_profile,
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
