//! The interactive session loop.
//!
//! One iteration collects the filters, loads the city's trips, prints the
//! four reports in a fixed order, offers the raw-data viewer and asks whether
//! to restart. Load errors end the session and propagate to the caller;
//! closing the input ends it quietly.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_data::loader::load_data;
use bikeshare_ui::prompt::{is_exact_yes, Prompter};
use bikeshare_ui::report_view::{
    print_duration_report, print_station_report, print_time_report, print_user_report,
};
use bikeshare_ui::table_view::run_viewer;
use tracing::{debug, info};

pub const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

/// How a single iteration ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Restart,
    Quit,
}

// ── Session ───────────────────────────────────────────────────────────────────

/// Interactive explorer bound to a data directory and an input/output pair.
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    data_dir: PathBuf,
    show_timing: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            data_dir: data_dir.into(),
            show_timing: true,
        }
    }

    /// Toggle the elapsed-time line after each report.
    pub fn with_timing(mut self, show_timing: bool) -> Self {
        self.show_timing = show_timing;
        self
    }

    /// Run iterations until the user declines to restart or the input ends.
    ///
    /// Returns the number of completed iterations.
    pub fn run(&mut self) -> Result<usize> {
        let mut iterations = 0;
        loop {
            match self.run_once() {
                Ok(Outcome::Restart) => iterations += 1,
                Ok(Outcome::Quit) => return Ok(iterations + 1),
                Err(BikeshareError::InputClosed) => {
                    info!("Input closed; ending session");
                    return Ok(iterations);
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Run one full iteration of the pipeline.
    pub fn run_once(&mut self) -> Result<Outcome> {
        let filters = self.prompter.get_filters()?;
        info!(
            "Exploring {} (month={}, day={})",
            filters.city, filters.month, filters.day
        );

        let table = load_data(&self.data_dir, filters.city, filters.month, filters.day)?;
        debug!("{} {} trips after filtering", table.len(), table.city);

        let out = self.prompter.output();
        print_time_report(out, &table, self.show_timing)?;
        print_station_report(out, &table, self.show_timing)?;
        print_duration_report(out, &table, self.show_timing)?;
        print_user_report(out, &table, self.show_timing)?;

        run_viewer(&mut self.prompter, &table)?;

        let answer = self.prompter.ask(RESTART_PROMPT)?;
        if is_exact_yes(&answer) {
            Ok(Outcome::Restart)
        } else {
            Ok(Outcome::Quit)
        }
    }

    pub fn into_parts(self) -> (R, W) {
        self.prompter.into_parts()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
