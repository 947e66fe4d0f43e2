use crate::jdn::JulianDay;

/// Error type for calendar conversions, validation and era handling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Year, month or day outside the calendar's supported span.
    #[error("Date {year}-{month:02}-{day:02} is outside the supported range")]
    OutOfRange { year: i32, month: u8, day: u8 },

    /// Julian day outside the calendar's supported span.
    #[error("Julian day {0} is outside the supported range")]
    JulianDayOutOfRange(i64),

    /// Calendrically impossible date, e.g. February 30 or day 0.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDate { year: i32, month: u8, day: u8 },

    /// Day of year past the end of the year, or day 0.
    #[error("Year {year} has no day {day_of_year}")]
    InvalidYearDay { year: i32, day_of_year: u16 },

    /// ISO week or weekday the week year does not have.
    #[error("Invalid ISO week date {year}-W{week:02}-{weekday}")]
    InvalidWeekDate { year: i32, week: u8, weekday: u8 },

    /// Year 0 used in a calendar that skips from -1 to 1.
    #[error("Year 0 does not exist in this calendar")]
    MissingYearZero,

    /// No era matches the given date or name.
    #[error("No era matches {0}")]
    EraLookup(String),

    /// Era table has a gap, an overlap or does not cover the valid range.
    #[error("Invalid era table: {0}")]
    InvalidEraTable(String),

    /// A configured era entry could not be parsed.
    #[error("Invalid era entry: {0}")]
    InvalidEraEntry(String),

    /// Start of a day range is after its end.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: JulianDay, end: JulianDay },

    /// Unparseable textual input.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Calendar type tag not recognised.
    #[error("Unknown calendar system: {0}")]
    UnknownCalendar(String),
}

pub type CalendarResult<T> = Result<T, CalendarError>;
