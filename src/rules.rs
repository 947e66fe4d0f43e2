//! The per-calendar policy: leap years, month lengths, valid years and the
//! two conversion primitives.
//!
//! Derived calendars never re-implement the Gregorian math. They either wrap
//! it with a year offset ([`YearShifted`]) or delegate to it unchanged.

use std::fmt;

use crate::calendar::CalendarKind;
use crate::consts::{DAYS_IN_WEEK, MAX_YEAR, MIN_DAY, MONTHS_IN_YEAR, SUNDAY};
use crate::range::DateRange;
use crate::{CivilDate, JulianDay, gregorian};

/// Capability set of a calendar system.
///
/// Implementors supply the leap-year predicate, the year bounds and the two
/// conversion primitives. Month and year lengths are derived from
/// [`is_leap_year`](Self::is_leap_year), so a year shift applied there
/// propagates to every day count without being repeated.
///
/// The primitives do not range check their inputs; [`CalendarSystem`](crate::CalendarSystem)
/// validates before delegating.
pub trait CalendarRules: fmt::Debug + Send + Sync {
    fn kind(&self) -> CalendarKind;

    /// Whether year 0 is a real year, or the calendar skips from -1 to 1
    fn has_year_zero(&self) -> bool;

    fn earliest_valid_year(&self) -> i32;

    fn latest_valid_year(&self) -> i32 {
        MAX_YEAR
    }

    fn is_leap_year(&self, year: i32) -> bool;

    fn date_to_jdn(&self, year: i32, month: u8, day: u8) -> JulianDay;

    fn jdn_to_date(&self, jdn: JulianDay) -> CivilDate;

    fn months_in_year(&self, _year: i32) -> u8 {
        MONTHS_IN_YEAR
    }

    /// Days in the month, or 0 for a month number the calendar does not have
    fn days_in_month(&self, year: i32, month: u8) -> u8 {
        gregorian::month_length(month, self.is_leap_year(year))
    }

    fn days_in_year(&self, year: i32) -> u16 {
        gregorian::year_length(self.is_leap_year(year))
    }

    fn days_in_week(&self) -> u8 {
        DAYS_IN_WEEK
    }

    /// Pure validity predicate over `(year, month, day)`
    fn is_valid_ymd(&self, year: i32, month: u8, day: u8) -> bool {
        year >= self.earliest_valid_year()
            && year <= self.latest_valid_year()
            && (self.has_year_zero() || year != 0)
            && month >= 1
            && month <= self.months_in_year(year)
            && day >= MIN_DAY
            && day <= self.days_in_month(year, month)
    }

    /// First day of the first year counted: year 0 when the calendar has one,
    /// otherwise year 1
    fn epoch(&self) -> JulianDay {
        self.date_to_jdn(i32::from(!self.has_year_zero()), 1, 1)
    }

    fn earliest_valid_date(&self) -> JulianDay {
        self.date_to_jdn(self.earliest_valid_year(), 1, 1)
    }

    fn latest_valid_date(&self) -> JulianDay {
        let year = self.latest_valid_year();
        let month = self.months_in_year(year);
        self.date_to_jdn(year, month, self.days_in_month(year, month))
    }

    fn valid_range(&self) -> DateRange {
        DateRange::from_ordered(self.earliest_valid_date(), self.latest_valid_date())
    }

    /// Follows the historical use of the calendar rather than extending it
    fn is_proleptic(&self) -> bool {
        false
    }

    fn is_lunar(&self) -> bool {
        false
    }

    fn is_lunisolar(&self) -> bool {
        false
    }

    fn is_solar(&self) -> bool {
        true
    }

    /// ISO weekday of the customary day of prayer
    fn week_day_of_pray(&self) -> u8 {
        SUNDAY
    }
}

/// Gregorian rules applied to a shifted year number.
///
/// `internal = external + offset` on the way into the Gregorian primitives
/// and the reverse on the way out. The calendar's own year-zero convention
/// is handed to the primitives, so a calendar with a year zero sees
/// astronomical Gregorian years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearShifted {
    kind:                CalendarKind,
    offset:              i32,
    has_year_zero:       bool,
    earliest_valid_year: i32,
}

impl YearShifted {
    pub const fn new(kind: CalendarKind, offset: i32, has_year_zero: bool, earliest_valid_year: i32) -> Self {
        Self {
            kind,
            offset,
            has_year_zero,
            earliest_valid_year,
        }
    }

    /// Amount added to a year of this calendar to get the Gregorian year
    pub const fn offset(&self) -> i32 {
        self.offset
    }

    const fn to_gregorian(&self, year: i32) -> i32 {
        year + self.offset
    }
}

impl CalendarRules for YearShifted {
    fn kind(&self) -> CalendarKind {
        self.kind
    }

    fn has_year_zero(&self) -> bool {
        self.has_year_zero
    }

    fn earliest_valid_year(&self) -> i32 {
        self.earliest_valid_year
    }

    fn is_leap_year(&self, year: i32) -> bool {
        gregorian::is_leap_year(self.to_gregorian(year), self.has_year_zero)
    }

    fn date_to_jdn(&self, year: i32, month: u8, day: u8) -> JulianDay {
        JulianDay::new(gregorian::date_to_jdn(self.to_gregorian(year), month, day, self.has_year_zero))
    }

    fn jdn_to_date(&self, jdn: JulianDay) -> CivilDate {
        let (year, month, day) = gregorian::jdn_to_date(jdn.get(), self.has_year_zero);
        CivilDate::new(year - self.offset, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::{GregorianProleptic, Japanese, minguo, thai};

    #[test]
    fn test_days_in_month_follows_leap_rule() {
        let rules = GregorianProleptic;
        assert_eq!(rules.days_in_month(2024, 2), 29);
        assert_eq!(rules.days_in_month(2023, 2), 28);
        assert_eq!(rules.days_in_month(2023, 4), 30);
        assert_eq!(rules.days_in_month(2023, 13), 0);
        assert_eq!(rules.days_in_month(2023, 0), 0);
    }

    #[test]
    fn test_shifted_day_counts_use_shifted_leap_rule() {
        let thai = thai::rules();
        // 2543 BE is 2000 CE
        assert_eq!(thai.days_in_month(2543, 2), 29);
        assert_eq!(thai.days_in_year(2543), 366);
        // 2443 BE is 1900 CE
        assert_eq!(thai.days_in_month(2443, 2), 28);

        let minguo = minguo::rules();
        assert_eq!(minguo.days_in_month(89, 2), 29);
        assert_eq!(minguo.days_in_year(96), 365);
    }

    #[test]
    fn test_month_sums_match_year_length() {
        let calendars: [&dyn CalendarRules; 4] = [&GregorianProleptic, &thai::rules(), &Japanese, &minguo::rules()];

        for rules in calendars {
            for year in [1, 89, 96, 97, 2443, 2543, 2550, 2551, 9999] {
                let sum: u16 = (1..=rules.months_in_year(year))
                    .map(|m| u16::from(rules.days_in_month(year, m)))
                    .sum();
                assert_eq!(sum, rules.days_in_year(year), "{:?} year {year}", rules.kind());
            }
        }
    }

    #[test]
    fn test_is_valid_ymd() {
        let rules = GregorianProleptic;
        assert!(rules.is_valid_ymd(2000, 2, 29));
        assert!(!rules.is_valid_ymd(2001, 2, 29));
        assert!(!rules.is_valid_ymd(0, 1, 1));
        assert!(!rules.is_valid_ymd(2000, 13, 1));
        assert!(!rules.is_valid_ymd(2000, 1, 0));
        assert!(!rules.is_valid_ymd(10000, 1, 1));
        assert!(rules.is_valid_ymd(-4713, 1, 1));
        assert!(!rules.is_valid_ymd(-4714, 12, 31));
    }

    #[test]
    fn test_shifted_offset() {
        assert_eq!(thai::rules().offset(), -543);
        assert_eq!(minguo::rules().offset(), 1911);
    }
}
