use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CalendarError, JulianDay, RANGE_SEPARATOR, prelude::*};

/// An inclusive span of Julian days.
/// The start day must be less than or equal to the end day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: JulianDay,
    end:   JulianDay,
}

impl DateRange {
    /// Creates a new range with validation.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidRange` if start > end.
    pub fn new(start: JulianDay, end: JulianDay) -> Result<Self, CalendarError> {
        if start > end {
            return Err(CalendarError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range from bounds the caller already knows are ordered
    pub(crate) fn from_ordered(start: JulianDay, end: JulianDay) -> Self {
        debug_assert!(start <= end, "unordered range {start}/{end}");
        Self { start, end }
    }

    /// Returns the first day of the range
    pub const fn start(&self) -> JulianDay {
        self.start
    }

    /// Returns the last day of the range (inclusive)
    pub const fn end(&self) -> JulianDay {
        self.end
    }

    /// Number of days covered, counting both ends
    pub fn len_days(&self) -> i64 {
        self.end - self.start + 1
    }

    /// Checks if the range contains a given day
    pub fn contains(&self, day: JulianDay) -> bool {
        self.start <= day && day <= self.end
    }

    /// Checks if this range shares at least one day with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this range is completely contained within another range
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Checks if `next` begins on the day right after this range ends
    pub fn is_followed_by(&self, next: &Self) -> bool {
        self.end.checked_add_days(1) == Some(next.start)
    }
}

impl FromStr for DateRange {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(CalendarError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    CalendarError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;

                let start = parse_julian_day(start_str.trim())?;
                let end = parse_julian_day(end_str.trim())?;

                Self::new(start, end)
            },
            _ => Err(CalendarError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

fn parse_julian_day(s: &str) -> Result<JulianDay, CalendarError> {
    s.parse::<i64>()
        .map(JulianDay::new)
        .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
}

impl PartialOrd for DateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start days first, then end days
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::range;

    #[test]
    fn test_new_range_cases() {
        struct TestCase {
            start:          i64,
            end:            i64,
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                start:          100,
                end:            200,
                should_succeed: true,
                description:    "valid range (start < end)",
            },
            TestCase {
                start:          200,
                end:            100,
                should_succeed: false,
                description:    "invalid range (start > end)",
            },
            TestCase {
                start:          150,
                end:            150,
                should_succeed: true,
                description:    "single day (start == end)",
            },
        ];

        for case in &cases {
            let result = DateRange::new(JulianDay::new(case.start), JulianDay::new(case.end));

            if case.should_succeed {
                assert!(result.is_ok(), "Expected success for: {}", case.description);
            } else {
                assert!(result.is_err(), "Expected failure for: {}", case.description);
            }
        }
    }

    #[test]
    fn test_contains_is_inclusive() {
        let r = range(100, 200);

        assert!(r.contains(JulianDay::new(100)));
        assert!(r.contains(JulianDay::new(200)));
        assert!(r.contains(JulianDay::new(150)));
        assert!(!r.contains(JulianDay::new(99)));
        assert!(!r.contains(JulianDay::new(201)));
        assert_eq!(r.len_days(), 101);
    }

    #[test]
    fn test_overlaps() {
        let r1 = range(100, 200);

        assert!(r1.overlaps(&range(150, 250)));
        assert!(range(150, 250).overlaps(&r1));
        // Sharing only the boundary day still overlaps
        assert!(r1.overlaps(&range(200, 300)));
        assert!(!r1.overlaps(&range(201, 300)));
    }

    #[test]
    fn test_is_within() {
        let outer = range(100, 200);
        let inner = range(120, 180);

        assert!(inner.is_within(&outer));
        assert!(!outer.is_within(&inner));
        assert!(outer.is_within(&outer));
    }

    #[test]
    fn test_is_followed_by() {
        let r = range(100, 200);

        assert!(r.is_followed_by(&range(201, 300)));
        assert!(!r.is_followed_by(&range(202, 300)), "gap of one day");
        assert!(!r.is_followed_by(&range(200, 300)), "overlap of one day");
    }

    #[test]
    fn test_display_and_parse() {
        let r = range(2_451_545, 2_451_910);
        assert_eq!(r.to_string(), "2451545/2451910");

        let parsed = "2451545/2451910".parse::<DateRange>().unwrap();
        assert_eq!(parsed, r);

        assert!("2451910/2451545".parse::<DateRange>().is_err());
        assert!("2451545".parse::<DateRange>().is_err());
        assert!("1/2/3".parse::<DateRange>().is_err());
        assert!("a/b".parse::<DateRange>().is_err());
    }

    #[test]
    fn test_too_many_range_separators() {
        let err = "1/2/3".parse::<DateRange>().unwrap_err();
        assert!(err.to_string().contains("Too many '/' separators"));
        assert!(err.to_string().contains("expected 1, found 2"));
    }

    #[test]
    fn test_ordering() {
        assert!(range(100, 200) < range(150, 160));
        assert!(range(100, 200) < range(100, 300));
    }

    #[test]
    fn test_serde_string_format() {
        let r = range(38, 5_373_484);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#""38/5373484""#);
        let parsed: DateRange = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, r);
    }
}
