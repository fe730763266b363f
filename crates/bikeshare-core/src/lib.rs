//! Shared building blocks for the bikeshare explorer.
//!
//! Holds the error type, the calendar lookup tables used by both the prompt
//! validator and the loader, the trip domain model, formatting helpers, and
//! the command-line settings.

pub mod calendar;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{BikeshareError, Result};
