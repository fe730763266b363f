//! Runtime orchestration for the bikeshare explorer.
//!
//! Drives the interactive session: prompts, loading, reports, the raw-data
//! viewer and the restart question.

pub mod session;

pub use bikeshare_core as core;
pub use bikeshare_data as data;
pub use bikeshare_ui as ui;
