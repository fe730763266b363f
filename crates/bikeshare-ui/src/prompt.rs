use std::io::{BufRead, Write};
use std::str::FromStr;

use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_core::formatting::separator;
use bikeshare_core::models::{City, DayFilter, Filters, MonthFilter};
use tracing::debug;

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
pub const CITY_PROMPT: &str =
    "Please enter a city ('chicago', 'new york city' or 'washington'): ";
pub const MONTH_PROMPT: &str = "Please enter a month ('january', 'february', 'march', 'april', 'may', 'june') or enter 'all': ";
pub const DAY_PROMPT: &str = "Please enter a weekday ('monday', 'tuesday', 'wednesday', 'thursday', 'friday', 'saturday', 'sunday') or 'all': ";
pub const INVALID_INPUT: &str = "Invalid input! Please try again.";

/// `true` for `yes` or `y`, ignoring case.
pub fn is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
}

/// `true` only for `yes`, ignoring case.
pub fn is_exact_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

// ── Prompter ──────────────────────────────────────────────────────────────────

/// Line-oriented question/answer channel over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The writer prompts go to; reports and pages share it.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print `prompt` and read one line, without the line terminator.
    ///
    /// Returns [`BikeshareError::InputClosed`] when the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BikeshareError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask `prompt` until the answer parses as `T`, printing
    /// [`INVALID_INPUT`] after every rejected answer.
    pub fn ask_until<T: FromStr>(&mut self, prompt: &str) -> Result<T> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    debug!("Rejected answer {:?}", answer);
                    writeln!(self.output, "{}", INVALID_INPUT)?;
                }
            }
        }
    }

    pub fn ask_city(&mut self) -> Result<City> {
        self.ask_until(CITY_PROMPT)
    }

    pub fn ask_month(&mut self) -> Result<MonthFilter> {
        self.ask_until(MONTH_PROMPT)
    }

    pub fn ask_day(&mut self) -> Result<DayFilter> {
        self.ask_until(DAY_PROMPT)
    }

    /// Greet the user, collect city, month and weekday, and echo a summary.
    pub fn get_filters(&mut self) -> Result<Filters> {
        writeln!(self.output, "{}", GREETING)?;
        let city = self.ask_city()?;
        let month = self.ask_month()?;
        let day = self.ask_day()?;

        writeln!(
            self.output,
            "\nInput Successful!\nCity: {}\nMonth: {}\nWeekday: {}",
            city, month, day
        )?;
        writeln!(self.output, "{}", separator())?;

        Ok(Filters { city, month, day })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
