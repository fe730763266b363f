//! City CSV loading and filtering.
//!
//! Reads a city's trip file with the polars CSV reader, converts each row
//! into a [`TripRecord`] (deriving month, weekday and hour from the start
//! time) and narrows the result with the month/weekday filters.

use std::path::Path;

use bikeshare_core::calendar::parse_timestamp;
use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_core::models::{City, DayFilter, MonthFilter, TripRecord, TripTable};
use polars::prelude::*;
use tracing::debug;

// ── Column names ──────────────────────────────────────────────────────────────

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

// ── Public API ────────────────────────────────────────────────────────────────

/// Load `city` from `data_dir` and keep only the rows matching both filters.
pub fn load_data(
    data_dir: &Path,
    city: City,
    month: MonthFilter,
    day: DayFilter,
) -> Result<TripTable> {
    let path = data_dir.join(city.file_name());
    let table = read_trip_table(&path, city)?;
    let total = table.len();
    let filtered = apply_filters(table, month, day);
    debug!(
        "Loaded {} of {} rows for {} (month={}, day={})",
        filtered.len(),
        total,
        city,
        month,
        day
    );
    Ok(filtered)
}

/// Read every trip in the CSV at `path`.
///
/// `Start Time`, `Trip Duration`, `Start Station`, `End Station` and
/// `User Type` must be present; `End Time`, `Gender` and `Birth Year` are
/// picked up when the file has them.
pub fn read_trip_table(path: &Path, city: City) -> Result<TripTable> {
    if !path.is_file() {
        return Err(BikeshareError::DataFileNotFound(path.to_path_buf()));
    }

    // Infer dtypes from every row; a column may turn from integers to
    // decimals or text long after the first rows.
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    let start_times = string_values(required_column(&df, path, START_TIME)?)?;
    let durations = float_values(required_column(&df, path, TRIP_DURATION)?)?;
    let start_stations = string_values(required_column(&df, path, START_STATION)?)?;
    let end_stations = string_values(required_column(&df, path, END_STATION)?)?;
    let user_types = string_values(required_column(&df, path, USER_TYPE)?)?;

    let end_times = optional_strings(&df, END_TIME)?;
    let genders = optional_strings(&df, GENDER)?;
    let birth_years = match df.column(BIRTH_YEAR) {
        Ok(column) => Some(float_values(column)?),
        Err(_) => None,
    };

    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let raw_start = start_times[idx].as_deref().unwrap_or_default();
        let start_time = parse_timestamp(raw_start)
            .ok_or_else(|| BikeshareError::TimestampParse(raw_start.to_string()))?;

        let trip_duration = durations[idx]
            .filter(|d| d.is_finite())
            .ok_or_else(|| BikeshareError::InvalidValue {
                column: TRIP_DURATION.to_string(),
                row: idx,
            })?;

        rows.push(TripRecord::new(
            start_time,
            cell(&end_times, idx),
            trip_duration,
            start_stations[idx].clone(),
            end_stations[idx].clone(),
            user_types[idx].clone(),
            cell(&genders, idx),
            birth_years
                .as_ref()
                .and_then(|years| years[idx])
                .filter(|y| y.is_finite())
                .map(|y| y as i32),
        ));
    }

    debug!("Read {} rows from {}", rows.len(), path.display());

    Ok(TripTable {
        city,
        has_end_time: end_times.is_some(),
        has_gender: genders.is_some(),
        has_birth_year: birth_years.is_some(),
        rows,
    })
}

/// Keep only the rows whose derived month and weekday match the filters.
///
/// The surviving rows keep their relative order and are indexed from 0.
pub fn apply_filters(mut table: TripTable, month: MonthFilter, day: DayFilter) -> TripTable {
    table
        .rows
        .retain(|row| month.matches(row.month) && day.matches(row.weekday));
    table
}

// ── Private ───────────────────────────────────────────────────────────────────

fn required_column<'a>(df: &'a DataFrame, path: &Path, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| BikeshareError::MissingColumn {
        path: path.to_path_buf(),
        column: name.to_string(),
    })
}

/// Column values as owned strings; empty cells become `None`.
fn string_values(column: &Column) -> Result<Vec<Option<String>>> {
    let cast = column.cast(&DataType::String)?;
    let values = cast.str()?;
    Ok(values
        .into_iter()
        .map(|v| v.filter(|s| !s.is_empty()).map(str::to_string))
        .collect())
}

fn float_values(column: &Column) -> Result<Vec<Option<f64>>> {
    let cast = column.cast(&DataType::Float64)?;
    let values = cast.f64()?;
    Ok(values.into_iter().collect())
}

fn optional_strings(df: &DataFrame, name: &str) -> Result<Option<Vec<Option<String>>>> {
    match df.column(name) {
        Ok(column) => Ok(Some(string_values(column)?)),
        Err(_) => Ok(None),
    }
}

fn cell(values: &Option<Vec<Option<String>>>, idx: usize) -> Option<String> {
    values.as_ref().and_then(|v| v[idx].clone())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
