use clap::Parser;
use std::path::{Path, PathBuf};

use crate::models::City;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Explore US bikeshare trip data interactively
#[derive(Parser, Debug, Clone)]
#[command(
    name = "bikeshare",
    about = "Explore US bikeshare trip data interactively",
    version
)]
pub struct Settings {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(long, env = "BIKESHARE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path (logs go to stderr when unset)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Do not print how long each report took
    #[arg(long)]
    pub no_timing: bool,
}

impl Settings {
    /// Parse the process arguments and resolve derived values.
    pub fn load() -> Self {
        Self::resolve(Settings::parse())
    }

    /// Same as [`Settings::load`] but accepts an explicit argument list,
    /// enabling unit-testing without spawning subprocesses.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::resolve(Settings::parse_from(args))
    }

    /// Apply the `--debug` flag.
    fn resolve(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    /// Whether reports should print their elapsed time.
    pub fn show_timing(&self) -> bool {
        !self.no_timing
    }
}

// ── Data directory discovery ───────────────────────────────────────────────────

/// Candidate directories searched for the city files, in priority order:
/// 1. `base/`
/// 2. `base/data/`
/// 3. `home/.bikeshare/data/` (when a home directory is known)
pub fn data_dir_candidates(base: &Path, home: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = vec![base.to_path_buf(), base.join("data")];
    if let Some(home) = home {
        candidates.push(home.join(".bikeshare").join("data"));
    }
    candidates
}

/// Return the first candidate that holds the Chicago file, or `base` itself
/// when none does.
pub fn discover_data_dir(base: &Path, home: Option<&Path>) -> PathBuf {
    data_dir_candidates(base, home)
        .into_iter()
        .find(|dir| dir.join(City::Chicago.file_name()).is_file())
        .unwrap_or_else(|| base.to_path_buf())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
