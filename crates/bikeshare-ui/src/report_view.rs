//! Plain-text rendering of the four statistics reports.
//!
//! Each `print_*_report` function writes the section heading, computes the
//! report over the table, prints the results and closes the section with the
//! optional elapsed-time line and a dashed rule.

use std::fmt::Display;
use std::io::Write;
use std::time::Instant;

use bikeshare_core::calendar::month_name;
use bikeshare_core::error::Result;
use bikeshare_core::formatting::{format_decimal, format_elapsed, separator};
use bikeshare_core::models::TripTable;
use bikeshare_data::reports::{
    duration_stats, station_stats, time_stats, user_stats, DurationStats, StationStats,
    TimeStats, UserStats,
};

/// Printed in place of a statistic that is undefined for an empty table.
pub const NOT_AVAILABLE: &str = "n/a";

fn or_na<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

// ── Section frame ─────────────────────────────────────────────────────────────

fn section<W, F>(out: &mut W, title: &str, show_timing: bool, body: F) -> Result<()>
where
    W: Write,
    F: FnOnce(&mut W) -> Result<()>,
{
    writeln!(out, "\n{}\n", title)?;
    let started = Instant::now();

    body(&mut *out)?;

    if show_timing {
        writeln!(out, "\nThis took {} seconds.", format_elapsed(started.elapsed()))?;
    }
    writeln!(out, "{}", separator())?;
    Ok(())
}

// ── Time of travel ────────────────────────────────────────────────────────────

pub fn write_time_stats<W: Write>(out: &mut W, stats: &TimeStats) -> Result<()> {
    writeln!(
        out,
        "Most Common Month: {}",
        or_na(stats.most_common_month.and_then(month_name))
    )?;
    writeln!(out, "Most Common Day of Week: {}", or_na(stats.most_common_day))?;
    writeln!(out, "Most Common Hour: {}", or_na(stats.most_common_hour))?;
    Ok(())
}

pub fn print_time_report<W: Write>(out: &mut W, table: &TripTable, show_timing: bool) -> Result<()> {
    section(
        out,
        "Calculating The Most Frequent Times of Travel...",
        show_timing,
        |out| write_time_stats(out, &time_stats(table)),
    )
}

// ── Stations ──────────────────────────────────────────────────────────────────

pub fn write_station_stats<W: Write>(out: &mut W, stats: &StationStats) -> Result<()> {
    writeln!(
        out,
        "Most Common Start Station: {}",
        or_na(stats.most_common_start.as_deref())
    )?;
    writeln!(
        out,
        "Most Common End Station: {}",
        or_na(stats.most_common_end.as_deref())
    )?;
    writeln!(
        out,
        "Most Frequent Trip: {}",
        or_na(stats.most_common_trip.as_deref())
    )?;
    Ok(())
}

pub fn print_station_report<W: Write>(
    out: &mut W,
    table: &TripTable,
    show_timing: bool,
) -> Result<()> {
    section(
        out,
        "Calculating The Most Popular Stations and Trip...",
        show_timing,
        |out| write_station_stats(out, &station_stats(table)),
    )
}

// ── Trip duration ─────────────────────────────────────────────────────────────

pub fn write_duration_stats<W: Write>(out: &mut W, stats: &DurationStats) -> Result<()> {
    writeln!(
        out,
        "Total Travel Time: {} minutes ({} hours)",
        format_decimal(stats.total_minutes(), 2),
        format_decimal(stats.total_hours(), 2)
    )?;
    writeln!(
        out,
        "Average Travel Time: {} minutes",
        or_na(stats.mean_minutes().map(|m| format_decimal(m, 2)))
    )?;
    Ok(())
}

pub fn print_duration_report<W: Write>(
    out: &mut W,
    table: &TripTable,
    show_timing: bool,
) -> Result<()> {
    section(out, "Calculating Trip Duration...", show_timing, |out| {
        write_duration_stats(out, &duration_stats(table))
    })
}

// ── Users ─────────────────────────────────────────────────────────────────────

fn write_counts<W: Write>(out: &mut W, counts: &[(String, usize)]) -> Result<()> {
    for (value, count) in counts {
        writeln!(out, "{} = {}", value, count)?;
    }
    Ok(())
}

pub fn write_user_stats<W: Write>(out: &mut W, stats: &UserStats) -> Result<()> {
    writeln!(out, "Trip Count By User Type:")?;
    write_counts(out, &stats.user_types)?;

    if let Some(genders) = &stats.genders {
        writeln!(out)?;
        writeln!(out, "Trip Count By Gender:")?;
        write_counts(out, genders)?;
        writeln!(out)?;
    }

    if let Some(years) = &stats.birth_years {
        writeln!(out, "Earliest Year of Birth: {}", or_na(years.earliest))?;
        writeln!(out, "Most Recent Year of Birth: {}", or_na(years.most_recent))?;
        writeln!(out, "Most Common Year of Birth: {}", or_na(years.most_common))?;
    }
    Ok(())
}

pub fn print_user_report<W: Write>(out: &mut W, table: &TripTable, show_timing: bool) -> Result<()> {
    section(out, "Calculating User Stats...", show_timing, |out| {
        write_user_stats(out, &user_stats(table))
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
