use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the bikeshare explorer.
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// The CSV file for the selected city does not exist.
    #[error("Data file not found: {0}")]
    DataFileNotFound(PathBuf),

    /// Polars could not read or cast the CSV contents.
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] polars::prelude::PolarsError),

    /// A column every city file must carry is absent.
    #[error("Missing column '{column}' in {path}")]
    MissingColumn { path: PathBuf, column: String },

    /// A start-time cell did not match any recognised format.
    #[error("Invalid timestamp format: {0}")]
    TimestampParse(String),

    /// A required cell is empty or not numeric.
    #[error("Invalid value in column '{column}' at row {row}")]
    InvalidValue { column: String, row: usize },

    /// Input is not one of the supported city keys.
    #[error("Invalid city: {0}")]
    InvalidCity(String),

    /// Input is neither "all" nor one of the filterable month names.
    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    /// Input is neither "all" nor a weekday name.
    #[error("Invalid weekday: {0}")]
    InvalidDay(String),

    /// The interactive input stream ended while a prompt was waiting.
    #[error("Input stream closed")]
    InputClosed,

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the bikeshare crates.
pub type Result<T> = std::result::Result<T, BikeshareError>;
