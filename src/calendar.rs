//! The calendar system façade.
//!
//! A [`CalendarSystem`] owns one set of [`CalendarRules`] and one
//! [`EraTable`]. It validates every input before handing it to the rules, so
//! the conversion primitives only ever see dates the calendar has.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calendars::{self, EraContext};
use crate::config::{CalendarConfig, ConfigSource};
use crate::consts::{DAYS_IN_WEEK, MIN_DAY, THURSDAY};
use crate::era::{self, Era, EraTable};
use crate::locale::Translator;
use crate::prelude::*;
use crate::rules::CalendarRules;
use crate::{
    CalendarError, CalendarResult, CivilDate, DateDifference, DateRange, JulianDay, StringFormat, WeekNumberSystem,
};

const CALENDAR_LABEL_CONTEXT: &str = "calendar label";

/// The supported calendar systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalendarKind {
    #[display(fmt = "gregorian-proleptic")]
    GregorianProleptic,
    #[display(fmt = "thai")]
    Thai,
    #[display(fmt = "japanese")]
    Japanese,
    #[display(fmt = "minguo")]
    Minguo,
}

impl CalendarKind {
    pub const fn all() -> [Self; 4] {
        [Self::GregorianProleptic, Self::Thai, Self::Japanese, Self::Minguo]
    }

    /// Stable type tag, as accepted by [`FromStr`]
    pub const fn calendar_type(self) -> &'static str {
        match self {
            Self::GregorianProleptic => "gregorian-proleptic",
            Self::Thai => "thai",
            Self::Japanese => "japanese",
            Self::Minguo => "minguo",
        }
    }

    /// Human readable name, passed through `translator`
    pub fn label(self, translator: &dyn Translator) -> String {
        let label = match self {
            Self::GregorianProleptic => "Gregorian (Proleptic)",
            Self::Thai => "Thai",
            Self::Japanese => "Japanese",
            Self::Minguo => "Taiwanese",
        };
        translator.translate(CALENDAR_LABEL_CONTEXT, label)
    }
}

impl FromStr for CalendarKind {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::all()
            .into_iter()
            .find(|kind| kind.calendar_type().eq_ignore_ascii_case(tag))
            .ok_or_else(|| CalendarError::UnknownCalendar(tag.to_owned()))
    }
}

/// Creates a calendar system from its type tag.
///
/// Missing providers behave as an empty configuration and the identity
/// translator.
///
/// # Errors
/// Returns `CalendarError::UnknownCalendar` if `calendar_type` is not one of
/// the supported tags.
pub fn create_calendar_system(
    calendar_type: &str,
    config: Option<&dyn ConfigSource>,
    translator: Option<&dyn Translator>,
) -> CalendarResult<CalendarSystem> {
    let kind: CalendarKind = calendar_type.parse()?;
    Ok(CalendarSystem::with_providers(kind, config.unwrap_or(&()), translator.unwrap_or(&())))
}

/// A calendar system: date validation, conversion, arithmetic and eras.
///
/// Immutable once constructed, so one instance can be shared freely across
/// threads.
#[derive(Debug)]
pub struct CalendarSystem {
    rules:  Box<dyn CalendarRules>,
    eras:   EraTable,
    config: CalendarConfig,
    label:  String,
}

impl CalendarSystem {
    /// Creates a calendar system with default settings and untranslated names
    pub fn new(kind: CalendarKind) -> Self {
        Self::with_providers(kind, &(), &())
    }

    /// Creates a calendar system, reading settings from `config` and era and
    /// calendar names through `translator`.
    ///
    /// Configured eras replace the built-in ones only if every entry parses
    /// and together they cover the valid range without gaps or overlaps.
    pub fn with_providers(kind: CalendarKind, config: &dyn ConfigSource, translator: &dyn Translator) -> Self {
        let rules = calendars::rules_for(kind);
        let config = CalendarConfig::load(config, kind);
        let eras = load_eras(kind, rules.as_ref(), &config, translator);
        let label = kind.label(translator);

        debug!(
            "created {kind} calendar: {} eras, common era naming {}",
            eras.len(),
            config.use_common_era
        );

        Self {
            rules,
            eras,
            config,
            label,
        }
    }

    pub fn kind(&self) -> CalendarKind {
        self.rules.kind()
    }

    pub fn calendar_type(&self) -> &'static str {
        self.kind().calendar_type()
    }

    /// Translated display name of the calendar
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rules(&self) -> &dyn CalendarRules {
        self.rules.as_ref()
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn eras(&self) -> &EraTable {
        &self.eras
    }

    pub fn epoch(&self) -> JulianDay {
        self.rules.epoch()
    }

    pub fn earliest_valid_date(&self) -> JulianDay {
        self.rules.earliest_valid_date()
    }

    pub fn latest_valid_date(&self) -> JulianDay {
        self.rules.latest_valid_date()
    }

    pub fn valid_range(&self) -> DateRange {
        self.rules.valid_range()
    }

    pub fn has_year_zero(&self) -> bool {
        self.rules.has_year_zero()
    }

    pub fn earliest_valid_year(&self) -> i32 {
        self.rules.earliest_valid_year()
    }

    pub fn latest_valid_year(&self) -> i32 {
        self.rules.latest_valid_year()
    }

    pub fn is_proleptic(&self) -> bool {
        self.rules.is_proleptic()
    }

    pub fn is_lunar(&self) -> bool {
        self.rules.is_lunar()
    }

    pub fn is_lunisolar(&self) -> bool {
        self.rules.is_lunisolar()
    }

    pub fn is_solar(&self) -> bool {
        self.rules.is_solar()
    }

    pub fn week_day_of_pray(&self) -> u8 {
        self.rules.week_day_of_pray()
    }

    pub fn uses_common_era(&self) -> bool {
        self.config.use_common_era
    }

    // Validity

    pub fn is_valid(&self, year: i32, month: u8, day: u8) -> bool {
        self.rules.is_valid_ymd(year, month, day)
    }

    pub fn is_valid_year(&self, year: i32) -> bool {
        year >= self.earliest_valid_year()
            && year <= self.latest_valid_year()
            && (self.has_year_zero() || year != 0)
    }

    pub fn is_valid_year_day(&self, year: i32, day_of_year: u16) -> bool {
        self.is_valid_year(year) && day_of_year >= 1 && day_of_year <= self.rules.days_in_year(year)
    }

    pub fn is_valid_era_date(&self, era_name: &str, year_in_era: i32, month: u8, day: u8) -> bool {
        self.date_from_era(era_name, year_in_era, month, day).is_ok()
    }

    /// Whether `jdn` lies within the calendar's supported span
    pub fn is_valid_jdn(&self, jdn: JulianDay) -> bool {
        self.valid_range().contains(jdn)
    }

    fn check_year(&self, year: i32) -> CalendarResult<()> {
        if year < self.earliest_valid_year() || year > self.latest_valid_year() {
            return Err(CalendarError::OutOfRange {
                year,
                month: 1,
                day: MIN_DAY,
            });
        }
        if year == 0 && !self.has_year_zero() {
            return Err(CalendarError::MissingYearZero);
        }
        Ok(())
    }

    fn check_month(&self, year: i32, month: u8) -> CalendarResult<()> {
        self.check_year(year)?;
        if month < 1 || month > self.rules.months_in_year(year) {
            return Err(CalendarError::InvalidDate {
                year,
                month,
                day: MIN_DAY,
            });
        }
        Ok(())
    }

    fn check_date(&self, year: i32, month: u8, day: u8) -> CalendarResult<()> {
        self.check_month(year, month)?;
        if day < MIN_DAY || day > self.rules.days_in_month(year, month) {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        Ok(())
    }

    fn check_jdn(&self, jdn: JulianDay) -> CalendarResult<()> {
        if self.is_valid_jdn(jdn) { Ok(()) } else { Err(CalendarError::JulianDayOutOfRange(jdn.get())) }
    }

    // Construction and decomposition

    /// Converts a date of this calendar to its Julian day.
    ///
    /// # Errors
    /// Returns `OutOfRange` for a year outside the calendar, `MissingYearZero`
    /// for year 0 where it does not exist, and `InvalidDate` for a month or
    /// day the year does not have.
    pub fn date(&self, year: i32, month: u8, day: u8) -> CalendarResult<JulianDay> {
        self.check_date(year, month, day)?;
        Ok(self.rules.date_to_jdn(year, month, day))
    }

    /// Converts a year and 1-based day of year to a Julian day
    pub fn date_from_year_day(&self, year: i32, day_of_year: u16) -> CalendarResult<JulianDay> {
        self.check_year(year)?;
        if day_of_year < 1 || day_of_year > self.rules.days_in_year(year) {
            return Err(CalendarError::InvalidYearDay { year, day_of_year });
        }
        Ok(self.rules.date_to_jdn(year, 1, MIN_DAY) + i64::from(day_of_year) - 1)
    }

    /// Converts an era-relative date, e.g. Heisei 19-07-09, to a Julian day
    pub fn date_from_era(&self, era_name: &str, year_in_era: i32, month: u8, day: u8) -> CalendarResult<JulianDay> {
        let era = self.era_by_name(era_name, year_in_era)?;
        let year = era
            .year_within(year_in_era, self.rules.as_ref())
            .ok_or_else(|| CalendarError::EraLookup(format!("year {year_in_era} of era '{era_name}'")))?;
        self.date(year, month, day)
    }

    /// Converts an ISO week date to a Julian day.
    ///
    /// `weekday` is 1 (Monday) through 7 (Sunday). Week 1 of `year` is the
    /// week holding its first Thursday, so it may start in December of the
    /// previous year, and the last week may end in January of the next.
    ///
    /// # Errors
    /// Returns the year errors of [`date`](Self::date), `InvalidWeekDate` for
    /// a week or weekday the year does not have, and `JulianDayOutOfRange`
    /// when the day spills over the first or last valid year.
    pub fn date_from_iso_week(&self, year: i32, week: u8, weekday: u8) -> CalendarResult<JulianDay> {
        let weeks = self.weeks_in_year(year, WeekNumberSystem::Iso)?;
        if week < 1 || week > weeks || weekday < 1 || weekday > self.days_in_week() {
            return Err(CalendarError::InvalidWeekDate { year, week, weekday });
        }

        let first = self.rules.date_to_jdn(year, 1, MIN_DAY);
        let first_weekday = i64::from(first.day_of_week());
        let week_one = if first_weekday <= i64::from(THURSDAY) {
            first + 1 - first_weekday
        } else {
            first + 1 + i64::from(DAYS_IN_WEEK) - first_weekday
        };

        let jdn = week_one + i64::from(DAYS_IN_WEEK) * (i64::from(week) - 1) + i64::from(weekday) - 1;
        // Only week 1 of the first year and the last week of the last year
        // can leave the valid range
        self.check_jdn(jdn)?;
        Ok(jdn)
    }

    pub fn is_valid_iso_week_date(&self, year: i32, week: u8, weekday: u8) -> bool {
        self.date_from_iso_week(year, week, weekday).is_ok()
    }

    /// Splits a Julian day into this calendar's year, month and day
    pub fn ymd(&self, jdn: JulianDay) -> CalendarResult<CivilDate> {
        self.check_jdn(jdn)?;
        Ok(self.rules.jdn_to_date(jdn))
    }

    pub fn year(&self, jdn: JulianDay) -> CalendarResult<i32> {
        self.ymd(jdn).map(CivilDate::year)
    }

    pub fn month(&self, jdn: JulianDay) -> CalendarResult<u8> {
        self.ymd(jdn).map(CivilDate::month)
    }

    pub fn day(&self, jdn: JulianDay) -> CalendarResult<u8> {
        self.ymd(jdn).map(CivilDate::day)
    }

    /// Parses `YYYY-MM-DD` in this calendar's own year numbering
    pub fn parse_iso_date(&self, text: &str) -> CalendarResult<JulianDay> {
        let date: CivilDate = text.parse()?;
        self.date(date.year(), date.month(), date.day())
    }

    /// Formats a Julian day as `YYYY-MM-DD` in this calendar
    pub fn format_iso(&self, jdn: JulianDay) -> CalendarResult<String> {
        Ok(self.ymd(jdn)?.to_string())
    }

    // Queries

    /// False for years the calendar does not have
    pub fn is_leap_year(&self, year: i32) -> bool {
        self.is_valid_year(year) && self.rules.is_leap_year(year)
    }

    pub fn months_in_year(&self, year: i32) -> CalendarResult<u8> {
        self.check_year(year)?;
        Ok(self.rules.months_in_year(year))
    }

    pub fn days_in_year(&self, year: i32) -> CalendarResult<u16> {
        self.check_year(year)?;
        Ok(self.rules.days_in_year(year))
    }

    pub fn days_in_month(&self, year: i32, month: u8) -> CalendarResult<u8> {
        self.check_month(year, month)?;
        Ok(self.rules.days_in_month(year, month))
    }

    /// Length of the month holding `jdn`
    pub fn days_in_month_of(&self, jdn: JulianDay) -> CalendarResult<u8> {
        let date = self.ymd(jdn)?;
        Ok(self.rules.days_in_month(date.year(), date.month()))
    }

    pub fn days_in_week(&self) -> u8 {
        self.rules.days_in_week()
    }

    /// 1-based day of the year
    pub fn day_of_year(&self, jdn: JulianDay) -> CalendarResult<u16> {
        let year = self.year(jdn)?;
        let first = self.rules.date_to_jdn(year, 1, MIN_DAY);
        Ok(u16::try_from(jdn - first + 1).unwrap_or(u16::MAX))
    }

    /// ISO day of week, 1 (Monday) through 7 (Sunday)
    pub fn day_of_week(&self, jdn: JulianDay) -> CalendarResult<u8> {
        self.check_jdn(jdn)?;
        Ok(jdn.day_of_week())
    }

    pub fn first_day_of_year(&self, year: i32) -> CalendarResult<JulianDay> {
        self.date(year, 1, MIN_DAY)
    }

    pub fn last_day_of_year(&self, year: i32) -> CalendarResult<JulianDay> {
        let month = self.months_in_year(year)?;
        self.date(year, month, self.rules.days_in_month(year, month))
    }

    pub fn first_day_of_month(&self, year: i32, month: u8) -> CalendarResult<JulianDay> {
        self.date(year, month, MIN_DAY)
    }

    pub fn last_day_of_month(&self, year: i32, month: u8) -> CalendarResult<JulianDay> {
        let days = self.days_in_month(year, month)?;
        self.date(year, month, days)
    }

    /// Week number of `jdn` and the year that week belongs to.
    ///
    /// Under ISO numbering the first days of January may belong to the last
    /// week of the previous year and the last days of December to week 1 of
    /// the next. `FirstFullWeek` also places early January days in the
    /// previous year; the other systems never change the year.
    ///
    /// The week year is not clamped to the calendar. Days in the first or
    /// last valid year may report a week year just outside it, such as
    /// `(52, -4714)` for the earliest Gregorian day under `FirstFullWeek`.
    pub fn week(&self, jdn: JulianDay, system: WeekNumberSystem) -> CalendarResult<(u8, i32)> {
        self.check_jdn(jdn)?;
        Ok(match system {
            WeekNumberSystem::Iso => self.iso_week(jdn),
            WeekNumberSystem::FirstFullWeek => self.regular_week(jdn, 0),
            WeekNumberSystem::FirstPartialWeek => self.regular_week(jdn, 1),
            WeekNumberSystem::Simple => self.simple_week(jdn),
        })
    }

    pub fn weeks_in_year(&self, year: i32, system: WeekNumberSystem) -> CalendarResult<u8> {
        let last = self.last_day_of_year(year)?;
        Ok(match system {
            WeekNumberSystem::Iso => {
                let (week, week_year) = self.iso_week(last);
                if week_year == year { week } else { self.iso_week(last - i64::from(DAYS_IN_WEEK)).0 }
            },
            WeekNumberSystem::FirstFullWeek => self.regular_week(last, 0).0,
            WeekNumberSystem::FirstPartialWeek => self.regular_week(last, 1).0,
            WeekNumberSystem::Simple => self.simple_week(last).0,
        })
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn iso_week(&self, jdn: JulianDay) -> (u8, i32) {
        // A week belongs to the year holding its Thursday
        let thursday = jdn + i64::from(THURSDAY) - i64::from(jdn.day_of_week());
        let week_year = self.rules.jdn_to_date(thursday).year();
        let first = self.rules.date_to_jdn(week_year, 1, MIN_DAY);
        (((thursday - first) / i64::from(DAYS_IN_WEEK) + 1) as u8, week_year)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn regular_week(&self, jdn: JulianDay, first_week_number: i64) -> (u8, i32) {
        let days_in_week = i64::from(DAYS_IN_WEEK);
        let week_start = i64::from(self.config.week_start_day);
        let year = self.rules.jdn_to_date(jdn).year();
        let first = self.rules.date_to_jdn(year, 1, MIN_DAY);

        let offset = (i64::from(jdn.day_of_week()) - week_start).rem_euclid(days_in_week);
        let mut week = (jdn - first - offset + days_in_week) / days_in_week;
        if i64::from(first.day_of_week()) != week_start {
            week += first_week_number;
        }

        if week < 1 {
            return self.regular_week(first - 1, first_week_number);
        }
        (week as u8, year)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn simple_week(&self, jdn: JulianDay) -> (u8, i32) {
        let year = self.rules.jdn_to_date(jdn).year();
        let first = self.rules.date_to_jdn(year, 1, MIN_DAY);
        (((jdn - first) / i64::from(DAYS_IN_WEEK) + 1) as u8, year)
    }

    // Arithmetic

    /// Adds years to a year number, stepping over year 0 if the calendar
    /// has none
    pub fn add_year_number(&self, year: i32, years: i32) -> i32 {
        let new_year = year.saturating_add(years);
        if self.has_year_zero() {
            new_year
        } else if year > 0 && new_year <= 0 {
            new_year.saturating_sub(1)
        } else if year < 0 && new_year >= 0 {
            new_year.saturating_add(1)
        } else {
            new_year
        }
    }

    /// Number of years from `from` to `to`, not counting a missing year 0
    pub fn difference_year_numbers(&self, from: i32, to: i32) -> i32 {
        let diff = to.saturating_sub(from);
        if self.has_year_zero() {
            diff
        } else if to > 0 && from < 0 {
            diff - 1
        } else if to < 0 && from > 0 {
            diff + 1
        } else {
            diff
        }
    }

    /// Shifts a date by whole months, clamping the day to the new month.
    /// The result may fall outside the calendar.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn shift_months(&self, date: CivilDate, months: i32) -> CivilDate {
        let months_in_year = i64::from(self.rules.months_in_year(date.year()));
        let index = i64::from(date.month()) - 1 + i64::from(months);

        let year = self.add_year_number(date.year(), index.div_euclid(months_in_year) as i32);
        let month = (index.rem_euclid(months_in_year) + 1) as u8;
        let day = date.day().min(self.rules.days_in_month(year, month));
        CivilDate::new(year, month, day)
    }

    /// Adds years, clamping Feb 29 to Feb 28 in a common year
    pub fn add_years(&self, jdn: JulianDay, years: i32) -> CalendarResult<JulianDay> {
        let date = self.ymd(jdn)?;
        let year = self.add_year_number(date.year(), years);
        self.check_year(year)?;
        let day = date.day().min(self.rules.days_in_month(year, date.month()));
        self.date(year, date.month(), day)
    }

    /// Adds months, clamping the day to the length of the new month, so
    /// Jan 31 plus one month is the last day of February
    pub fn add_months(&self, jdn: JulianDay, months: i32) -> CalendarResult<JulianDay> {
        let date = self.shift_months(self.ymd(jdn)?, months);
        self.date(date.year(), date.month(), date.day())
    }

    pub fn add_days(&self, jdn: JulianDay, days: i64) -> CalendarResult<JulianDay> {
        self.check_jdn(jdn)?;
        let result = jdn
            .checked_add_days(days)
            .ok_or(CalendarError::JulianDayOutOfRange(jdn.get()))?;
        self.check_jdn(result)?;
        Ok(result)
    }

    /// Whole years from `from` to `to`, negative if `to` is earlier.
    ///
    /// Month ends count as anniversaries, so 2000-02-29 to 2001-02-28 is one
    /// year.
    pub fn years_difference(&self, from: JulianDay, to: JulianDay) -> CalendarResult<i32> {
        let (from_date, to_date) = (self.ymd(from)?, self.ymd(to)?);
        Ok(if to < from {
            -self.whole_years_between(to_date, from_date)
        } else {
            self.whole_years_between(from_date, to_date)
        })
    }

    /// Whole months from `from` to `to`, negative if `to` is earlier
    pub fn months_difference(&self, from: JulianDay, to: JulianDay) -> CalendarResult<i32> {
        let (from_date, to_date) = (self.ymd(from)?, self.ymd(to)?);
        Ok(if to < from {
            -self.whole_months_between(to_date, from_date)
        } else {
            self.whole_months_between(from_date, to_date)
        })
    }

    /// Years, months and days from `from` to `to`.
    ///
    /// The magnitudes are those of the span between the earlier and the
    /// later date; `direction` is -1 when `to` is earlier.
    pub fn date_difference(&self, from: JulianDay, to: JulianDay) -> CalendarResult<DateDifference> {
        let (from_date, to_date) = (self.ymd(from)?, self.ymd(to)?);
        if to < from {
            return Ok(DateDifference {
                direction: -1,
                ..self.difference_between(to_date, from_date)
            });
        }
        Ok(self.difference_between(from_date, to_date))
    }

    fn ends_month(&self, date: CivilDate) -> bool {
        date.day() == self.rules.days_in_month(date.year(), date.month())
    }

    fn whole_years_between(&self, from: CivilDate, to: CivilDate) -> i32 {
        if from.year() == to.year() {
            return 0;
        }
        let years = self.difference_year_numbers(from.year(), to.year());
        let anniversary_reached = to.month() > from.month()
            || (to.month() == from.month()
                && (to.day() >= from.day() || (self.ends_month(from) && self.ends_month(to))));
        if anniversary_reached { years } else { years - 1 }
    }

    fn whole_months_between(&self, from: CivilDate, to: CivilDate) -> i32 {
        let preceding = if from.year() == to.year() {
            0
        } else {
            self.difference_year_numbers(from.year(), to.year()) * i32::from(self.rules.months_in_year(to.year()))
        };
        let months = preceding + i32::from(to.month()) - i32::from(from.month());

        if to.day() >= from.day() || (self.ends_month(from) && self.ends_month(to)) {
            months
        } else {
            months - 1
        }
    }

    fn difference_between(&self, from: CivilDate, to: CivilDate) -> DateDifference {
        let mut diff = DateDifference {
            years:     0,
            months:    0,
            days:      0,
            direction: 1,
        };
        if from == to {
            return diff;
        }

        let months_in_prev_year = i32::from(self.rules.months_in_year(self.add_year_number(to.year(), -1)));
        let prev = self.shift_months(to, -1);
        let days_in_prev_month = i32::from(self.rules.days_in_month(prev.year(), prev.month()));
        let days_in_from_month = i32::from(self.rules.days_in_month(from.year(), from.month()));
        let month_ends = self.ends_month(from) && self.ends_month(to);

        diff.years = self.whole_years_between(from, to);

        let (from_month, to_month) = (i32::from(from.month()), i32::from(to.month()));
        let (from_day, to_day) = (i32::from(from.day()), i32::from(to.day()));

        if to_day >= from_day {
            diff.months = (months_in_prev_year + to_month - from_month) % months_in_prev_year;
            diff.days = to_day - from_day;
        } else if month_ends {
            // 2010-03-31 to 2010-04-30 is one month
            diff.months = (months_in_prev_year + to_month - from_month) % months_in_prev_year;
        } else if prev.month() == from.month() && days_in_prev_month < days_in_from_month {
            // Leap day to the following month of a common year
            diff.months = (months_in_prev_year + to_month - from_month - 1) % months_in_prev_year;
            diff.days = (days_in_from_month + to_day - from_day) % days_in_from_month;
        } else {
            diff.months = (months_in_prev_year + to_month - from_month - 1) % months_in_prev_year;
            diff.days = (days_in_prev_month + to_day - from_day) % days_in_prev_month;
        }

        diff
    }

    // Eras

    /// The era holding `jdn`
    pub fn era(&self, jdn: JulianDay) -> CalendarResult<&Era> {
        self.check_jdn(jdn)?;
        self.eras
            .era_for(jdn)
            .ok_or_else(|| CalendarError::EraLookup(format!("Julian day {jdn}")))
    }

    /// The era called `name` in which `year_in_era` falls
    pub fn era_by_name(&self, name: &str, year_in_era: i32) -> CalendarResult<&Era> {
        self.eras
            .era_by_name(name, year_in_era, self.rules.as_ref())
            .ok_or_else(|| CalendarError::EraLookup(format!("era '{name}'")))
    }

    pub fn era_name(&self, jdn: JulianDay, format: StringFormat) -> CalendarResult<&str> {
        Ok(self.era(jdn)?.name_for(format))
    }

    pub fn year_in_era(&self, jdn: JulianDay) -> CalendarResult<i32> {
        let year = self.year(jdn)?;
        Ok(self.era(jdn)?.year_in_era(year))
    }

    /// Year in era as text; the long form is zero padded to four digits
    pub fn year_in_era_string(&self, jdn: JulianDay, format: StringFormat) -> CalendarResult<String> {
        let year_in_era = self.year_in_era(jdn)?;
        Ok(match format {
            StringFormat::Short => year_in_era.to_string(),
            StringFormat::Long => format!("{year_in_era:04}"),
        })
    }

    /// Full era year, e.g. `"2005 AD"` or `"Heisei Gannen"`
    pub fn era_year(&self, jdn: JulianDay) -> CalendarResult<String> {
        let era = self.era(jdn)?;
        Ok(era.format_year(era.year_in_era(self.year(jdn)?)))
    }

    /// Reads an era year such as `"Heisei 19"` or `"5 BC"` back to a year
    pub fn parse_era_year(&self, text: &str) -> CalendarResult<i32> {
        self.eras.parse_era_year(text, self.rules.as_ref()).ok_or_else(|| {
            trace!("no {} era matches '{text}'", self.kind());
            CalendarError::EraLookup(format!("'{text}'"))
        })
    }

    // Two-digit years

    pub fn short_year_window_start_year(&self) -> i32 {
        self.config.short_year_window_start
    }

    /// Maps 0..=99 into the hundred years starting at the window start;
    /// other years pass through
    pub fn apply_short_year_window(&self, year: i32) -> i32 {
        if !(0..=99).contains(&year) {
            return year;
        }
        let start = self.config.short_year_window_start;
        let short_start = start % 100;
        let century = start - short_start;
        if year >= short_start { year + century } else { year + century + 100 }
    }
}

fn load_eras(
    kind: CalendarKind,
    rules: &dyn CalendarRules,
    config: &CalendarConfig,
    translator: &dyn Translator,
) -> EraTable {
    let valid = rules.valid_range();

    if !config.era_entries.is_empty() {
        match configured_eras(rules, &config.era_entries, valid) {
            Ok(table) => return table,
            Err(err) => {
                warn!("ignoring configured {kind} eras, using built-in eras: {err}");
            },
        }
    }

    let ctx = EraContext {
        rules,
        translator,
        use_common_era: config.use_common_era,
    };
    let table = calendars::default_eras(kind, &ctx).finish();
    let checked = table.validate(valid);
    debug_assert!(checked.is_ok(), "built-in {kind} era table is invalid: {checked:?}");
    table
}

fn configured_eras(rules: &dyn CalendarRules, entries: &[String], valid: DateRange) -> CalendarResult<EraTable> {
    let mut builder = EraTable::builder();
    for entry in entries {
        builder.push(era::parse_era_entry(entry, rules)?);
    }
    builder.build(valid)
}
