use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::consts::DAYS_IN_WEEK;
use crate::prelude::*;

/// A Julian Day Number: an absolute count of days, calendar-agnostic.
///
/// Day 0 is 24 November 4714 BC in the proleptic Gregorian calendar. One unit
/// is one civil day, and the value increases monotonically with the date, so
/// ordering JDNs orders dates in every calendar system.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
#[display(fmt = "{}", _0)]
pub struct JulianDay(i64);

impl JulianDay {
    /// Creates a Julian day from its raw day count
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw day count
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// ISO day of week, 1 (Monday) through 7 (Sunday).
    ///
    /// Every supported calendar agrees on the weekday of a given JDN.
    pub const fn day_of_week(self) -> u8 {
        // JDN 0 was a Monday
        (self.0.rem_euclid(DAYS_IN_WEEK as i64) + 1) as u8
    }

    /// Number of days from `self` to `other`, negative if `other` is earlier
    pub const fn days_to(self, other: Self) -> i64 {
        other.0 - self.0
    }

    /// Adds days, returning `None` on overflow
    pub const fn checked_add_days(self, days: i64) -> Option<Self> {
        match self.0.checked_add(days) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl Add<i64> for JulianDay {
    type Output = Self;

    fn add(self, rhs: i64) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl Sub<i64> for JulianDay {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl Sub for JulianDay {
    type Output = i64;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_of_week() {
        // 2000-01-01 was a Saturday
        assert_eq!(JulianDay::new(2_451_545).day_of_week(), 6);
        // 1970-01-01 was a Thursday
        assert_eq!(JulianDay::new(2_440_588).day_of_week(), 4);
        assert_eq!(JulianDay::new(0).day_of_week(), 1);
    }

    #[test]
    fn test_arithmetic() {
        let jd = JulianDay::new(2_451_545);
        assert_eq!(jd + 31, JulianDay::new(2_451_576));
        assert_eq!(jd - 1, JulianDay::new(2_451_544));
        assert_eq!(JulianDay::new(2_451_576) - jd, 31);
        assert_eq!(jd.days_to(JulianDay::new(2_451_540)), -5);
        assert_eq!(JulianDay::new(i64::MAX).checked_add_days(1), None);
    }

    #[test]
    fn test_ordering() {
        assert!(JulianDay::new(10) < JulianDay::new(11));
    }

    #[test]
    fn test_serde_is_plain_integer() {
        let jd = JulianDay::new(2_451_545);
        let json = serde_json::to_string(&jd).unwrap();
        assert_eq!(json, "2451545");
        let parsed: JulianDay = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, jd);
    }

    #[test]
    fn test_display_and_conversions() {
        let jd: JulianDay = 38_i64.into();
        assert_eq!(jd.to_string(), "38");
        let raw: i64 = jd.into();
        assert_eq!(raw, 38);
    }
}
