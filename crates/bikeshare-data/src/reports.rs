//! Descriptive statistics over a filtered [`TripTable`].
//!
//! Each report is computed independently and returns a plain struct; the UI
//! layer decides how to print it. Values that are undefined for an empty
//! table are `None`.

use bikeshare_core::calendar::weekday_name;
use bikeshare_core::models::TripTable;

use crate::aggregator::{mode, value_counts};

// ── Time of travel ────────────────────────────────────────────────────────────

/// Most frequent month, weekday and start hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    /// 1-based month number.
    pub most_common_month: Option<u32>,
    /// Title-cased weekday name.
    pub most_common_day: Option<&'static str>,
    pub most_common_hour: Option<u32>,
}

pub fn time_stats(table: &TripTable) -> TimeStats {
    TimeStats {
        most_common_month: mode(table.rows.iter().map(|r| r.month)),
        // Compared by name so ties resolve alphabetically.
        most_common_day: mode(table.rows.iter().map(|r| weekday_name(r.weekday))),
        most_common_hour: mode(table.rows.iter().map(|r| r.hour)),
    }
}

// ── Stations ──────────────────────────────────────────────────────────────────

/// Most popular start station, end station and start/end combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub most_common_start: Option<String>,
    pub most_common_end: Option<String>,
    /// `"<start> to <end>"`.
    pub most_common_trip: Option<String>,
}

pub fn station_stats(table: &TripTable) -> StationStats {
    StationStats {
        most_common_start: mode(table.rows.iter().filter_map(|r| r.start_station.as_deref()))
            .map(str::to_string),
        most_common_end: mode(table.rows.iter().filter_map(|r| r.end_station.as_deref()))
            .map(str::to_string),
        most_common_trip: mode(table.rows.iter().filter_map(|r| r.trip())),
    }
}

// ── Trip duration ─────────────────────────────────────────────────────────────

/// Total and mean trip duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total_seconds: f64,
    pub trip_count: usize,
}

impl DurationStats {
    pub fn total_minutes(&self) -> f64 {
        self.total_seconds / 60.0
    }

    pub fn total_hours(&self) -> f64 {
        self.total_seconds / 3600.0
    }

    /// Mean trip length in minutes; `None` when there are no trips.
    pub fn mean_minutes(&self) -> Option<f64> {
        if self.trip_count == 0 {
            None
        } else {
            Some(self.total_minutes() / self.trip_count as f64)
        }
    }
}

pub fn duration_stats(table: &TripTable) -> DurationStats {
    DurationStats {
        // Seeded with +0.0 so an empty table totals 0.00 rather than -0.00.
        total_seconds: table.rows.iter().fold(0.0, |acc, r| acc + r.trip_duration),
        trip_count: table.len(),
    }
}

// ── Users ─────────────────────────────────────────────────────────────────────

/// Earliest, most recent and most common year of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: Option<i32>,
    pub most_recent: Option<i32>,
    pub most_common: Option<i32>,
}

/// Trip counts per user type, plus demographics where the city records them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Most frequent first.
    pub user_types: Vec<(String, usize)>,
    /// `None` when the city file has no gender column.
    pub genders: Option<Vec<(String, usize)>>,
    /// `None` when the city file has no birth-year column.
    pub birth_years: Option<BirthYearStats>,
}

pub fn user_stats(table: &TripTable) -> UserStats {
    let owned = |counts: Vec<(&str, usize)>| -> Vec<(String, usize)> {
        counts
            .into_iter()
            .map(|(value, count)| (value.to_string(), count))
            .collect()
    };

    let user_types = owned(value_counts(
        table.rows.iter().filter_map(|r| r.user_type.as_deref()),
    ));

    let genders = table.has_gender.then(|| {
        owned(value_counts(
            table.rows.iter().filter_map(|r| r.gender.as_deref()),
        ))
    });

    let birth_years = table.has_birth_year.then(|| {
        let years = || table.rows.iter().filter_map(|r| r.birth_year);
        BirthYearStats {
            earliest: years().min(),
            most_recent: years().max(),
            most_common: mode(years()),
        }
    });

    UserStats {
        user_types,
        genders,
        birth_years,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::calendar::parse_timestamp;
    use bikeshare_core::models::{City, TripRecord};

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn trip(start: &str, secs: f64, from: &str, to: &str, user: &str) -> TripRecord {
        TripRecord::new(
            parse_timestamp(start).unwrap(),
            None,
            secs,
            Some(from.to_string()),
            Some(to.to_string()),
            Some(user.to_string()),
            None,
            None,
        )
    }

    fn table(rows: Vec<TripRecord>) -> TripTable {
        TripTable {
            city: City::Washington,
            has_end_time: false,
            has_gender: false,
            has_birth_year: false,
            rows,
        }
    }

    fn sample() -> TripTable {
        table(vec![
            trip("2017-01-01 09:00:00", 600.0, "A", "B", "Subscriber"),
            trip("2017-01-08 09:30:00", 1200.0, "A", "C", "Subscriber"),
            trip("2017-02-02 17:00:00", 300.0, "B", "C", "Customer"),
            trip("2017-01-03 17:15:00", 900.0, "A", "B", "Subscriber"),
        ])
    }

    // ── time_stats ────────────────────────────────────────────────────────────

    #[test]
    fn test_time_stats() {
        let stats = time_stats(&sample());
        assert_eq!(stats.most_common_month, Some(1));
        // Two Sundays (Jan 1, Jan 8), one Thursday, one Tuesday.
        assert_eq!(stats.most_common_day, Some("Sunday"));
        // 9h and 17h tie; the smaller hour wins.
        assert_eq!(stats.most_common_hour, Some(9));
    }

    #[test]
    fn test_time_stats_empty() {
        let stats = time_stats(&table(Vec::new()));
        assert_eq!(stats.most_common_month, None);
        assert_eq!(stats.most_common_day, None);
        assert_eq!(stats.most_common_hour, None);
    }

    // ── station_stats ─────────────────────────────────────────────────────────

    #[test]
    fn test_station_stats() {
        let stats = station_stats(&sample());
        assert_eq!(stats.most_common_start.as_deref(), Some("A"));
        // B and C tie at two each.
        assert_eq!(stats.most_common_end.as_deref(), Some("B"));
        assert_eq!(stats.most_common_trip.as_deref(), Some("A to B"));
    }

    #[test]
    fn test_station_stats_skips_missing_stations() {
        let mut rows = vec![trip("2017-01-01 09:00:00", 60.0, "A", "B", "Subscriber")];
        let mut partial = trip("2017-01-01 09:00:00", 60.0, "Z", "Z", "Subscriber");
        partial.start_station = None;
        rows.push(partial.clone());
        rows.push(partial);

        let stats = station_stats(&table(rows));
        assert_eq!(stats.most_common_start.as_deref(), Some("A"));
        assert_eq!(stats.most_common_end.as_deref(), Some("Z"));
        assert_eq!(stats.most_common_trip.as_deref(), Some("A to B"));
    }

    // ── duration_stats ────────────────────────────────────────────────────────

    #[test]
    fn test_duration_stats() {
        let stats = duration_stats(&sample());
        assert_eq!(stats.total_seconds, 3000.0);
        assert_eq!(stats.total_minutes(), 50.0);
        assert!((stats.total_hours() - 50.0 / 60.0).abs() < 1e-12);
        assert_eq!(stats.mean_minutes(), Some(12.5));
    }

    #[test]
    fn test_duration_stats_empty() {
        let stats = duration_stats(&table(Vec::new()));
        assert_eq!(stats.total_minutes(), 0.0);
        assert!(!stats.total_seconds.is_sign_negative());
        assert_eq!(format!("{:.2}", stats.total_hours()), "0.00");
        assert_eq!(stats.mean_minutes(), None);
    }

    // ── user_stats ────────────────────────────────────────────────────────────

    #[test]
    fn test_user_stats_counts_sum_to_rows() {
        let t = sample();
        let stats = user_stats(&t);
        assert_eq!(
            stats.user_types,
            vec![("Subscriber".to_string(), 3), ("Customer".to_string(), 1)]
        );
        let total: usize = stats.user_types.iter().map(|(_, c)| c).sum();
        assert_eq!(total, t.len());
    }

    #[test]
    fn test_user_stats_without_demographic_columns() {
        let stats = user_stats(&sample());
        assert!(stats.genders.is_none());
        assert!(stats.birth_years.is_none());
    }

    #[test]
    fn test_user_stats_with_demographics() {
        let mut t = sample();
        t.has_gender = true;
        t.has_birth_year = true;
        let demographics = [
            (Some("Male"), Some(1980)),
            (Some("Female"), Some(1992)),
            (None, None),
            (Some("Male"), Some(1992)),
        ];
        for (row, (gender, year)) in t.rows.iter_mut().zip(demographics) {
            row.gender = gender.map(str::to_string);
            row.birth_year = year;
        }

        let stats = user_stats(&t);
        assert_eq!(
            stats.genders,
            Some(vec![("Male".to_string(), 2), ("Female".to_string(), 1)])
        );
        assert_eq!(
            stats.birth_years,
            Some(BirthYearStats {
                earliest: Some(1980),
                most_recent: Some(1992),
                most_common: Some(1992),
            })
        );
    }
}
