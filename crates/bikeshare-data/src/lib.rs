//! Data layer for the bikeshare explorer.
//!
//! Reads a city's trip CSV into a [`TripTable`](bikeshare_core::models::TripTable),
//! applies the month/weekday filters, and computes the four statistics
//! reports over the filtered rows.

pub mod aggregator;
pub mod loader;
pub mod reports;

pub use bikeshare_core as core;
