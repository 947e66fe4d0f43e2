use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::DATE_SEPARATOR;
use crate::CalendarError;

/// A `(year, month, day)` view of a day in some calendar system.
///
/// The triple carries no calendar of its own: whether it is valid, and which
/// Julian day it names, depends on the [`CalendarSystem`](crate::CalendarSystem)
/// it is interpreted in. `year` may be negative, and may be zero in calendars
/// that have a year zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    year:  i32,
    month: u8,
    day:   u8,
}

impl CivilDate {
    /// Creates a date triple without calendar validation
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Returns the components as a tuple
    pub const fn to_tuple(self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, CalendarError> {
        s.parse::<u8>()
            .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse an unsigned year with better error messages
    fn parse_year(s: &str) -> Result<i32, CalendarError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CalendarError::InvalidFormat(s.to_owned()));
        }
        s.parse::<i32>()
            .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}-{:02}", self.year.unsigned_abs(), self.month, self.day)
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

/// Parses ISO style `YYYY-MM-DD`, with an optional leading `-` on the year.
///
/// Only the shape is checked here; month and day ranges are validated by the
/// calendar system that interprets the date.
impl FromStr for CivilDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::InvalidFormat("Empty date string".to_owned()));
        }

        let (negative, unsigned) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let parts: Vec<&str> = unsigned.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(CalendarError::InvalidFormat(format!(
                "Expected 2 {} separators, found {}: {}",
                DATE_SEPARATOR,
                parts.len() - 1,
                trimmed
            )));
        }

        let year = Self::parse_year(parts[0])?;
        let month = Self::parse_u8(parts[1])?;
        let day = Self::parse_u8(parts[2])?;

        Ok(Self::new(if negative { -year } else { year }, month, day))
    }
}

impl From<(i32, u8, u8)> for CivilDate {
    fn from((year, month, day): (i32, u8, u8)) -> Self {
        Self::new(year, month, day)
    }
}

impl From<CivilDate> for (i32, u8, u8) {
    fn from(date: CivilDate) -> Self {
        date.to_tuple()
    }
}

impl Serialize for CivilDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CivilDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Short or long rendering of names and numbers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StringFormat {
    #[default]
    Short,
    Long,
}

/// How weeks of a year are numbered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekNumberSystem {
    /// ISO 8601: weeks start Monday, week 1 holds the first Thursday
    #[default]
    Iso,
    /// Week 1 starts on the first week-start day of the year
    FirstFullWeek,
    /// Week 1 is the possibly partial week holding day 1 of the year
    FirstPartialWeek,
    /// Week 1 is days 1-7 of the year, week 2 is days 8-14, and so on
    Simple,
}

/// Difference between two dates in calendar units.
///
/// The magnitudes are always non-negative; `direction` is `-1` when the
/// second date is earlier than the first, `1` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateDifference {
    pub years:     i32,
    pub months:    i32,
    pub days:      i32,
    pub direction: i8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        let date = "1991-08-15".parse::<CivilDate>().unwrap();
        assert_eq!(date, CivilDate::new(1991, 8, 15));
        assert_eq!(date.year(), 1991);
        assert_eq!(date.month(), 8);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_parse_negative_year() {
        let date = "-0005-01-01".parse::<CivilDate>().unwrap();
        assert_eq!(date, CivilDate::new(-5, 1, 1));

        let date = "-4713-1-1".parse::<CivilDate>().unwrap();
        assert_eq!(date.to_tuple(), (-4713, 1, 1));
    }

    #[test]
    fn test_parse_with_whitespace() {
        let date = " 2543 - 01 - 01 ".parse::<CivilDate>().unwrap();
        assert_eq!(date, CivilDate::new(2543, 1, 1));
    }

    #[test]
    fn test_bad_tokens() {
        assert!(matches!("199A-01-01".parse::<CivilDate>(), Err(CalendarError::InvalidFormat(_))));
        assert!(matches!("1991-XX-01".parse::<CivilDate>(), Err(CalendarError::InvalidFormat(_))));
        assert!(matches!("1991-08-XX".parse::<CivilDate>(), Err(CalendarError::InvalidFormat(_))));
        assert!(matches!("+1991-08-01".parse::<CivilDate>(), Err(CalendarError::InvalidFormat(_))));
        assert!(matches!("".parse::<CivilDate>(), Err(CalendarError::InvalidFormat(_))));
    }

    #[test]
    fn test_wrong_separator_count() {
        let err = "1991-08".parse::<CivilDate>().unwrap_err();
        assert!(err.to_string().contains("Expected 2 - separators, found 1"));

        let err = "2000-01-15-23".parse::<CivilDate>().unwrap_err();
        assert!(err.to_string().contains("found 3"));
    }

    #[test]
    fn test_display() {
        assert_eq!(CivilDate::new(1991, 8, 15).to_string(), "1991-08-15");
        assert_eq!(CivilDate::new(89, 1, 1).to_string(), "0089-01-01");
        assert_eq!(CivilDate::new(-5, 1, 1).to_string(), "-0005-01-01");
        assert_eq!(CivilDate::new(0, 12, 31).to_string(), "0000-12-31");
    }

    #[test]
    fn test_display_parses_back() {
        for date in [CivilDate::new(-4713, 1, 1), CivilDate::new(0, 6, 30), CivilDate::new(9999, 12, 31)] {
            assert_eq!(date.to_string().parse::<CivilDate>().unwrap(), date);
        }
    }

    #[test]
    fn test_ordering() {
        assert!(CivilDate::new(-1, 12, 31) < CivilDate::new(1, 1, 1));
        assert!(CivilDate::new(2021, 1, 31) < CivilDate::new(2021, 2, 1));
    }

    #[test]
    fn test_tuple_conversions() {
        let date: CivilDate = (2000, 2, 29).into();
        let tuple: (i32, u8, u8) = date.into();
        assert_eq!(tuple, (2000, 2, 29));
    }

    #[test]
    fn test_serde_string_format() {
        let date = CivilDate::new(-5, 1, 1);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""-0005-01-01""#);
        let parsed: CivilDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);

        let result: Result<CivilDate, _> = serde_json::from_str(r#""2024-13""#);
        assert!(result.is_err());
    }
}
