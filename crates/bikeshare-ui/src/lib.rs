//! Terminal interaction layer for the bikeshare explorer.
//!
//! Provides the validating prompter, the plain-text report printer and the
//! paginated raw-data viewer. Everything is generic over [`std::io::BufRead`]
//! and [`std::io::Write`] so a session can be scripted.

pub mod prompt;
pub mod report_view;
pub mod table_view;

pub use bikeshare_core as core;
