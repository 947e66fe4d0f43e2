//! Proleptic Gregorian day-number arithmetic.
//!
//! These closed-form conversions are the only place raw calendrical math
//! lives; every calendar system either calls them directly or shifts the year
//! before and after the call. The formulas use truncating integer division
//! and stay exact for every year from 4713 BC upwards, because the shifted
//! computational year is never negative in that range.
//!
//! The `has_year_zero` flag selects the year numbering of the *calling*
//! calendar: when it is `false`, year -1 is 1 BC and is mapped onto the
//! astronomical year 0 before any math happens.

use crate::consts::{
    CENTURY_CYCLE, COMPUTATIONAL_EPOCH_JDN, COMPUTATIONAL_YEAR_SHIFT, DAYS_IN_COMMON_YEAR,
    DAYS_IN_GREGORIAN_CYCLE, DAYS_IN_JULIAN_CYCLE, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MONTHS_IN_YEAR,
};

/// Maps a year onto astronomical numbering (1 BC = 0, 2 BC = -1).
#[inline]
pub const fn astronomical_year(year: i32, has_year_zero: bool) -> i32 {
    if !has_year_zero && year < 1 { year + 1 } else { year }
}

/// Inverse of [`astronomical_year`].
#[inline]
pub const fn calendar_year(astronomical: i32, has_year_zero: bool) -> i32 {
    if !has_year_zero && astronomical < 1 { astronomical - 1 } else { astronomical }
}

pub const fn is_leap_year(year: i32, has_year_zero: bool) -> bool {
    let y = astronomical_year(year, has_year_zero);
    (y % LEAP_YEAR_CYCLE == 0 && y % CENTURY_CYCLE != 0) || (y % GREGORIAN_CYCLE == 0)
}

/// Length of `month` in a common or leap year, or 0 for a month number that
/// does not exist
pub const fn month_length(month: u8, leap: bool) -> u8 {
    if month == 0 || month > MONTHS_IN_YEAR {
        return 0;
    }
    if month == FEBRUARY && leap { FEBRUARY_DAYS_LEAP } else { DAYS_IN_MONTH[month as usize] }
}

pub const fn year_length(leap: bool) -> u16 {
    if leap { DAYS_IN_LEAP_YEAR } else { DAYS_IN_COMMON_YEAR }
}

/// Converts a proleptic Gregorian date to its Julian Day Number.
///
/// The inputs are not range checked; callers validate first.
pub const fn date_to_jdn(year: i32, month: u8, day: u8, has_year_zero: bool) -> i64 {
    let year = astronomical_year(year, has_year_zero) as i64;
    let month = month as i64;

    // Move January and February to the end of the previous computational year
    let a = (14 - month) / 12;
    let y = year + COMPUTATIONAL_YEAR_SHIFT - a;
    let m = month + 12 * a - 3;

    day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - COMPUTATIONAL_EPOCH_JDN
}

/// Converts a Julian Day Number to a proleptic Gregorian `(year, month, day)`.
///
/// Exact inverse of [`date_to_jdn`] for every JDN from 38 (4713-01-01 BC)
/// onwards.
pub const fn jdn_to_date(jdn: i64, has_year_zero: bool) -> (i32, u8, u8) {
    let a = jdn + COMPUTATIONAL_EPOCH_JDN - 1;
    let b = (4 * a + 3) / DAYS_IN_GREGORIAN_CYCLE;
    let c = a - (DAYS_IN_GREGORIAN_CYCLE * b) / 4;
    let d = (4 * c + 3) / DAYS_IN_JULIAN_CYCLE;
    let e = c - (DAYS_IN_JULIAN_CYCLE * d) / 4;
    let m = (5 * e + 2) / 153;

    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - COMPUTATIONAL_YEAR_SHIFT + m / 10;

    (calendar_year(year as i32, has_year_zero), month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAX_YEAR, MIN_GREGORIAN_YEAR};

    #[test]
    fn test_known_julian_days() {
        assert_eq!(date_to_jdn(2000, 1, 1, false), 2_451_545);
        assert_eq!(jdn_to_date(2_451_545, false), (2000, 1, 1));
        assert_eq!(date_to_jdn(1970, 1, 1, false), 2_440_588);
        assert_eq!(date_to_jdn(1, 1, 1, false), 1_721_426);
        assert_eq!(date_to_jdn(1912, 1, 1, false), 2_419_403);
        // 4713-01-01 BC is the first supported day
        assert_eq!(date_to_jdn(MIN_GREGORIAN_YEAR, 1, 1, false), 38);
        // JDN 0 is 4714-11-24 BC
        assert_eq!(jdn_to_date(0, false), (-4714, 11, 24));
        assert_eq!(jdn_to_date(0, true), (-4713, 11, 24));
    }

    #[test]
    fn test_year_zero_shift() {
        // 1 BC is the day before 1 AD without a year zero
        assert_eq!(date_to_jdn(-1, 12, 31, false) + 1, date_to_jdn(1, 1, 1, false));
        assert_eq!(jdn_to_date(1_721_425, false), (-1, 12, 31));
        // With a year zero the same day is year 0
        assert_eq!(jdn_to_date(1_721_425, true), (0, 12, 31));
        assert_eq!(date_to_jdn(0, 12, 31, true), date_to_jdn(-1, 12, 31, false));
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2004,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: -1,
                is_leap: true,
                description: "1 BC is astronomical year 0",
            },
            TestCase {
                year: -5,
                is_leap: true,
                description: "5 BC is astronomical year -4",
            },
            TestCase {
                year: -4,
                is_leap: false,
                description: "4 BC is astronomical year -3",
            },
            TestCase {
                year: -101,
                is_leap: false,
                description: "101 BC is astronomical year -100",
            },
            TestCase {
                year: -401,
                is_leap: true,
                description: "401 BC is astronomical year -400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year, false),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap { "leap year" } else { "not leap year" }
            );
        }

        // With a year zero no shift happens
        assert!(is_leap_year(0, true));
        assert!(is_leap_year(-4, true));
    }

    #[test]
    fn test_month_length() {
        assert_eq!(month_length(2, is_leap_year(2023, false)), 28);
        assert_eq!(month_length(2, is_leap_year(2024, false)), 29);
        assert_eq!(month_length(2, is_leap_year(1900, false)), 28);
        assert_eq!(month_length(2, is_leap_year(2000, false)), 29);
        assert_eq!(month_length(4, true), 30);
        assert_eq!(month_length(12, false), 31);
    }

    #[test]
    fn test_month_length_of_missing_month() {
        assert_eq!(month_length(0, false), 0);
        assert_eq!(month_length(13, false), 0);
        assert_eq!(month_length(u8::MAX, true), 0);
    }

    #[test]
    fn test_month_sums_match_year_length() {
        for year in [2023, 2024, 1900, 2000, -1, -5, -4] {
            let leap = is_leap_year(year, false);
            let sum: u16 = (1..=MONTHS_IN_YEAR).map(|m| u16::from(month_length(m, leap))).sum();
            assert_eq!(sum, year_length(leap), "year {year}");
        }
    }

    #[test]
    fn test_year_length_matches_julian_days() {
        for year in [-4713, -1, 1, 1582, 1900, 2000, 2023, 9998] {
            let next = if year == -1 { 1 } else { year + 1 };
            let length = date_to_jdn(next, 1, 1, false) - date_to_jdn(year, 1, 1, false);
            assert_eq!(length, i64::from(year_length(is_leap_year(year, false))), "year {year}");
        }
    }

    #[test]
    fn test_round_trip_whole_range() {
        let first = date_to_jdn(MIN_GREGORIAN_YEAR, 1, 1, false);
        let last = date_to_jdn(MAX_YEAR, 12, 31, false);
        let mut expected = (MIN_GREGORIAN_YEAR, 1, 1);

        for jdn in first..=last {
            let ymd = jdn_to_date(jdn, false);
            assert_eq!(ymd, expected, "jdn {jdn}");
            assert_eq!(date_to_jdn(ymd.0, ymd.1, ymd.2, false), jdn);

            // Step the expected civil date forward by one day
            let (y, m, d) = expected;
            expected = if d < month_length(m, is_leap_year(y, false)) {
                (y, m, d + 1)
            } else if m < MONTHS_IN_YEAR {
                (y, m + 1, 1)
            } else if y == -1 {
                (1, 1, 1)
            } else {
                (y + 1, 1, 1)
            };
        }
    }
}
