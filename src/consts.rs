/// Latest valid year (inclusive), in each calendar's own numbering
pub const MAX_YEAR: i32 = 9999;

/// Earliest valid proleptic Gregorian year (4713 BC)
pub const MIN_GREGORIAN_YEAR: i32 = -4713;

/// Number of months in every supported calendar
pub const MONTHS_IN_YEAR: u8 = 12;

/// Days in a week, identical across calendars
pub const DAYS_IN_WEEK: u8 = 7;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in a common year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in a 400 year Gregorian cycle
pub(crate) const DAYS_IN_GREGORIAN_CYCLE: i64 = 146_097;
/// Days in a 4 year Julian cycle
pub(crate) const DAYS_IN_JULIAN_CYCLE: i64 = 1461;
/// Shift that moves year numbering onto the March-based computational year
pub(crate) const COMPUTATIONAL_YEAR_SHIFT: i64 = 4800;
/// JDN of the computational epoch, 4800-03-01 BC
pub(crate) const COMPUTATIONAL_EPOCH_JDN: i64 = 32045;

/// Thai Buddhist Era is this many years ahead of the Gregorian year
pub const THAI_YEAR_OFFSET: i32 = 543;
/// Minguo year 1 is Gregorian 1912
pub const MINGUO_YEAR_OFFSET: i32 = 1911;

/// JDN of 0001-01-01 proleptic Gregorian
pub const GREGORIAN_EPOCH_JDN: i64 = 1_721_426;
/// JDN of Thai year 0, month 1, day 1
pub const THAI_EPOCH_JDN: i64 = 1_522_734;
/// JDN of Minguo 1-01-01, which is Gregorian 1912-01-01
pub const MINGUO_EPOCH_JDN: i64 = 2_419_403;

/// ISO weekday number of Thursday, which anchors ISO week 1
pub(crate) const THURSDAY: u8 = 4;
/// ISO weekday number of Sunday
pub const SUNDAY: u8 = 7;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
/// Field separator inside a configured era entry
pub const ERA_FIELD_SEPARATOR: char = ':';

/// Config group holding locale-wide settings
pub const LOCALE_GROUP: &str = "Locale";
/// Prefix of the per-calendar config group, followed by the calendar type
pub const CALENDAR_GROUP_PREFIX: &str = "KCalendarSystem";
/// Selects BCE/CE naming over BC/AD
pub const USE_COMMON_ERA_KEY: &str = "UseCommonEra";
/// First year of the two-digit year window
pub const SHORT_YEAR_WINDOW_KEY: &str = "ShortYearWindowStartYear";
/// First day of the week for non-ISO week numbering
pub const WEEK_START_DAY_KEY: &str = "WeekStartDay";
/// Prefix of the numbered era override entries (`Era1`, `Era2`, ...)
pub const ERA_KEY_PREFIX: &str = "Era";

/// Default first year of the two-digit year window
pub const DEFAULT_SHORT_YEAR_WINDOW_START: i32 = 2000;
