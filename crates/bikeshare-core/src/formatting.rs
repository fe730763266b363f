use std::time::Duration;

/// Width of the dashed rule printed between report sections.
pub const SEPARATOR_WIDTH: usize = 40;

/// The dashed rule printed after every section.
pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Format a floating-point value with a fixed number of decimal places and no
/// grouping.
///
/// # Examples
///
/// ```
/// use bikeshare_core::formatting::format_decimal;
///
/// assert_eq!(format_decimal(1234.567, 2), "1234.57");
/// assert_eq!(format_decimal(0.0, 2), "0.00");
/// assert_eq!(format_decimal(12.4, 0), "12");
/// ```
pub fn format_decimal(value: f64, decimals: usize) -> String {
    format!("{:.prec$}", value, prec = decimals)
}

/// Render a numeric cell the way a data frame would: integral values lose
/// their fractional part, everything else keeps full precision.
///
/// # Examples
///
/// ```
/// use bikeshare_core::formatting::format_cell_number;
///
/// assert_eq!(format_cell_number(1039.0), "1039");
/// assert_eq!(format_cell_number(1039.25), "1039.25");
/// assert_eq!(format_cell_number(f64::NAN), "nan");
/// ```
pub fn format_cell_number(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Elapsed seconds as printed after each report, e.g. `0.001234`.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{}", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_is_forty_dashes() {
        let sep = separator();
        assert_eq!(sep.len(), 40);
        assert!(sep.chars().all(|c| c == '-'));
    }

    #[test]
    fn test_format_decimal_rounds() {
        assert_eq!(format_decimal(2.345, 1), "2.3");
        assert_eq!(format_decimal(100.0 / 3.0, 2), "33.33");
        assert_eq!(format_decimal(-1.005, 2), "-1.00");
    }

    #[test]
    fn test_format_cell_number_negative() {
        assert_eq!(format_cell_number(-3.0), "-3");
        assert_eq!(format_cell_number(0.5), "0.5");
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_millis(1500)), "1.5");
        assert_eq!(format_elapsed(Duration::ZERO), "0");
    }
}
