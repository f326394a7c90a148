//! Text formatting shared by the columns.

/// Zero-padded width of each hour/minute/second group.
pub const TIME_FIELD_WIDTH: usize = 2;
/// Minimum width of the integer part plus decimal point in a rate.
pub const RATE_INT_WIDTH: usize = 3;
/// Decimal digits shown in a rate.
pub const RATE_PRECISION: usize = 2;

/// Formats seconds as `HHh:MMm` when at least an hour, `MMm:SSs` otherwise.
///
/// Fractional seconds are truncated. Negative and NaN input clamp to zero.
pub fn format_seconds(seconds: f64) -> String {
    let total = seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    let w = TIME_FIELD_WIDTH;
    if hours > 0 {
        format!("{hours:0w$}h:{minutes:0w$}m")
    } else {
        format!("{minutes:0w$}m:{secs:0w$}s")
    }
}

pub fn format_rate(speed: f64, unit: &str) -> String {
    let width = RATE_INT_WIDTH + RATE_PRECISION;
    let precision = RATE_PRECISION;
    format!("{speed:>width$.precision$}{unit}/s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_under_an_hour() {
        assert_eq!(format_seconds(0.0), "00m:00s");
        assert_eq!(format_seconds(5.0), "00m:05s");
        assert_eq!(format_seconds(65.0), "01m:05s");
        assert_eq!(format_seconds(3599.0), "59m:59s");
    }

    #[test]
    fn hour_boundary_switches_layout() {
        assert_eq!(format_seconds(3600.0), "01h:00m");
        assert_eq!(format_seconds(3600.0 * 2.0 + 60.0 * 7.0 + 59.0), "02h:07m");
        assert_eq!(format_seconds(3600.0 * 100.0), "100h:00m");
    }

    #[test]
    fn fractional_seconds_are_truncated() {
        assert_eq!(format_seconds(59.99), "00m:59s");
        assert_eq!(format_seconds(3599.9), "59m:59s");
    }

    #[test]
    fn garbage_seconds_do_not_panic() {
        assert_eq!(format_seconds(-12.0), "00m:00s");
        assert_eq!(format_seconds(f64::NAN), "00m:00s");
        let _ = format_seconds(f64::INFINITY);
    }

    #[test]
    fn rate_is_space_padded_with_two_decimals() {
        assert_eq!(format_rate(4.2, "items"), " 4.20items/s");
        assert_eq!(format_rate(0.0, "B"), " 0.00B/s");
        assert_eq!(format_rate(12.5, "files"), "12.50files/s");
        assert_eq!(format_rate(1234.5, "items"), "1234.50items/s");
    }
}
