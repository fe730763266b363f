use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use std::fmt;
use std::str::FromStr;

use crate::calendar::{self, FILTER_MONTHS};
use crate::error::BikeshareError;

// ── City ──────────────────────────────────────────────────────────────────────

/// One of the three cities with published trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lowercase key the user types to select the city.
    pub fn key(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Name of the CSV file holding this city's trips.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for City {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|c| c.key() == wanted)
            .ok_or_else(|| BikeshareError::InvalidCity(s.to_string()))
    }
}

// ── Filters ───────────────────────────────────────────────────────────────────

/// Month restriction applied by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    /// 1-based month number, always within [`FILTER_MONTHS`].
    Month(u32),
}

impl MonthFilter {
    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(m) => *m == month,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Month(m) => match FILTER_MONTHS.get((*m as usize).wrapping_sub(1)) {
                Some(name) => f.write_str(name),
                None => write!(f, "{}", m),
            },
        }
    }
}

impl FromStr for MonthFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted == "all" {
            return Ok(MonthFilter::All);
        }
        calendar::filter_month_number(&wanted)
            .map(MonthFilter::Month)
            .ok_or_else(|| BikeshareError::InvalidMonth(s.to_string()))
    }
}

/// Weekday restriction applied by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl DayFilter {
    pub fn matches(&self, day: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Day(d) => *d == day,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Day(d) => f.write_str(&calendar::weekday_name(*d).to_lowercase()),
        }
    }
}

impl FromStr for DayFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("all") {
            return Ok(DayFilter::All);
        }
        calendar::parse_weekday(wanted)
            .map(DayFilter::Day)
            .ok_or_else(|| BikeshareError::InvalidDay(s.to_string()))
    }
}

/// The three answers collected at the start of every session iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filters {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

// ── Trip records ──────────────────────────────────────────────────────────────

/// A single bike trip read from a city CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Local wall-clock time the trip started.
    pub start_time: NaiveDateTime,
    /// Raw end-time text, when the file has that column.
    pub end_time: Option<String>,
    /// Trip length in seconds.
    pub trip_duration: f64,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    /// Derived from `start_time`, 1–12.
    pub month: u32,
    /// Derived from `start_time`.
    pub weekday: Weekday,
    /// Derived from `start_time`, 0–23.
    pub hour: u32,
}

impl TripRecord {
    /// Build a record from its raw fields, deriving month, weekday and hour.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_time: NaiveDateTime,
        end_time: Option<String>,
        trip_duration: f64,
        start_station: Option<String>,
        end_station: Option<String>,
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
            trip_duration,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
        }
    }

    /// `"<start> to <end>"`, or `None` when either station is missing.
    pub fn trip(&self) -> Option<String> {
        match (&self.start_station, &self.end_station) {
            (Some(start), Some(end)) => Some(format!("{} to {}", start, end)),
            _ => None,
        }
    }
}

/// The trips of one city after filtering, re-indexed from 0.
#[derive(Debug, Clone)]
pub struct TripTable {
    pub city: City,
    pub has_end_time: bool,
    pub has_gender: bool,
    pub has_birth_year: bool,
    pub rows: Vec<TripRecord>,
}

impl TripTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
