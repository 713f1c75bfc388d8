//! Calendar date to day-number conversions
//!
//! The epoch resolver works with the short-form day number
//!
//! ```text
//! 367·Y − ⌊7·(Y + ⌊(M + 9)/12⌋)/4⌋ + ⌊275·M/9⌋ + D
//! ```
//!
//! where the `⌊(M + 9)/12⌋` term carries January and February into the
//! leap-year bookkeeping of the previous year. The form has no Gregorian
//! century rule, so it agrees with the true Julian day number only for
//! 1900-03-01 through 2100-02-28. All floors round toward negative infinity.

use crate::constants::J2000_DAY_NUMBER;

/// Short-form day number of a calendar date (see module docs)
pub fn day_number(year: i32, month: u32, day: u32) -> i64 {
    let y = year as i64;
    let m = month as i64;

    367 * y - (7 * (y + (m + 9).div_euclid(12))).div_euclid(4) + (275 * m).div_euclid(9)
        + day as i64
}

/// Days elapsed since J2000.0 (2000-01-01 12:00 UTC) for a UTC calendar instant
///
/// `second` may carry a fractional part; the result is signed and keeps
/// sub-second resolution.
pub fn days_since_j2000(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> f64 {
    let hours = hour as f64 + minute as f64 / 60.0 + second / 3_600.0;
    day_number(year, month, day) as f64 - J2000_DAY_NUMBER + hours / 24.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::J2000;
    use chrono::{Datelike, Duration, NaiveDate};

    // Full Gregorian Julian day number, used as the reference
    fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
        let year = year as i64;
        let month = month as i64;
        let janfeb = month < 3;

        (1461 * (year + 4800 - if janfeb { 1 } else { 0 })).div_euclid(4)
            + (367 * (month - 2 + if janfeb { 12 } else { 0 })).div_euclid(12)
            - (3 * (year + 4900 - if janfeb { 1 } else { 0 }).div_euclid(100)).div_euclid(4)
            - 32075
            + day as i64
    }

    #[test]
    fn test_j2000_is_zero() {
        assert_eq!(days_since_j2000(2000, 1, 1, 12, 0, 0.0), 0.0);
        assert_eq!(days_since_j2000(2000, 1, 1, 0, 0, 0.0), -0.5);
    }

    #[test]
    fn test_january_february_carry() {
        // 2000 is a leap year: Feb 29 and Mar 1 must be one day apart
        let feb29 = days_since_j2000(2000, 2, 29, 0, 0, 0.0);
        let mar1 = days_since_j2000(2000, 3, 1, 0, 0, 0.0);
        assert_eq!(mar1 - feb29, 1.0);
        assert_eq!(mar1, 59.5);

        let dec31 = days_since_j2000(1999, 12, 31, 0, 0, 0.0);
        let jan1 = days_since_j2000(2000, 1, 1, 0, 0, 0.0);
        assert_eq!(jan1 - dec31, 1.0);
    }

    #[test]
    fn test_fractional_day() {
        let t = days_since_j2000(2024, 1, 1, 6, 30, 45.5);
        let expected = 8765.5 + (6.0 + 30.0 / 60.0 + 45.5 / 3600.0) / 24.0;
        assert!((t - expected).abs() < 1e-9);
    }

    #[test]
    fn test_negative_offsets() {
        assert_eq!(days_since_j2000(1999, 12, 31, 12, 0, 0.0), -1.0);
        assert_eq!(days_since_j2000(1950, 1, 1, 0, 0, 0.0), 2_433_282.5 - J2000);
    }

    #[test]
    fn test_julian_day_conversion() {
        // Test J2000 epoch
        assert_eq!(julian_day_number(2000, 1, 1), 2451545);

        // Test a few other dates
        assert_eq!(julian_day_number(2020, 1, 1), 2458850);
        assert_eq!(julian_day_number(1969, 7, 20), 2440423);
        assert_eq!(julian_day_number(1900, 1, 1), 2415021);
    }

    #[test]
    fn test_short_form_matches_julian_day_within_range() {
        let mut date = NaiveDate::from_ymd_opt(1900, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2100, 2, 28).unwrap();
        while date <= end {
            let (y, m, d) = (date.year(), date.month(), date.day());
            let short = days_since_j2000(y, m, d, 12, 0, 0.0);
            let jdn = julian_day_number(y, m, d) as f64 - J2000;
            assert_eq!(short, jdn, "mismatch on {}", date);
            date += Duration::days(17);
        }
    }

    #[test]
    fn test_short_form_drifts_past_2100() {
        // No century rule: 2100 is treated as a leap year
        let short = days_since_j2000(2100, 3, 1, 12, 0, 0.0);
        let jdn = julian_day_number(2100, 3, 1) as f64 - J2000;
        assert_eq!(short - jdn, 1.0);
    }
}
