use chrono::{Month, NaiveDateTime, Weekday};
use tracing::warn;

// ── Lookup tables ─────────────────────────────────────────────────────────────

/// Months the data sets cover, in calendar order. A month's number is its
/// 1-based position in this table.
pub const FILTER_MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

/// Weekdays in display order, Monday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// 1-based month number of a lowercase filter month name, e.g. `"march"` → 3.
pub fn filter_month_number(name: &str) -> Option<u32> {
    FILTER_MONTHS
        .iter()
        .position(|m| *m == name)
        .map(|idx| idx as u32 + 1)
}

/// Full English name of month `number` (1–12), e.g. `1` → `"January"`.
pub fn month_name(number: u32) -> Option<&'static str> {
    u8::try_from(number)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .map(|m| m.name())
}

/// Title-cased weekday name, e.g. [`Weekday::Sat`] → `"Saturday"`.
pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAY_NAMES[day.num_days_from_monday() as usize]
}

/// Resolve a weekday from its name, ignoring case.
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    WEEKDAYS
        .iter()
        .copied()
        .find(|d| weekday_name(*d).eq_ignore_ascii_case(name))
}

// ── Timestamp parsing ─────────────────────────────────────────────────────────

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a trip start time. Timestamps in the city files carry no zone and
/// are kept as local wall-clock time.
///
/// Returns `None` for empty strings or unrecognised formats.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ts);
        }
    }

    warn!("could not parse timestamp \"{}\"", s);
    None
}

// ── Tests ─────────────────────────────────────────────────────────────────────
