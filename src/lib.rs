//! Calendar systems over Julian Day Numbers.
//!
//! Every date is stored as a [`JulianDay`], a plain count of days that all
//! calendars agree on. A [`CalendarSystem`] interprets that count as a year,
//! month and day of one calendar, does calendar arithmetic on it and names
//! its era. Four calendars are supported:
//!
//! - proleptic Gregorian, from 4713 BC to 9999 AD, without a year zero
//! - Thai solar, Gregorian months with Buddhist Era years (BE = AD + 543)
//! - Japanese, Gregorian arithmetic with imperial eras from Meiji onwards
//! - Minguo, Gregorian months with years counted from 1912
//!
//! ```
//! use calendrica::{CalendarKind, CalendarSystem};
//!
//! let japanese = CalendarSystem::new(CalendarKind::Japanese);
//! let day = japanese.date(1989, 2, 1)?;
//! assert_eq!(japanese.era_year(day)?, "Heisei Gannen");
//!
//! let thai = CalendarSystem::new(CalendarKind::Thai);
//! assert_eq!(thai.ymd(day)?.to_tuple(), (2532, 2, 1));
//! # Ok::<(), calendrica::CalendarError>(())
//! ```

#[macro_use]
mod logging;

mod calendar;
pub mod calendars;
mod config;
mod consts;
mod era;
mod error;
pub mod gregorian;
mod jdn;
mod locale;
mod prelude;
mod range;
mod rules;
mod types;

#[cfg(test)]
mod test_utils;

pub use calendar::{CalendarKind, CalendarSystem, create_calendar_system};
pub use config::{CalendarConfig, ConfigSource, MapConfig, calendar_group, parse_bool};
pub use consts::*;
pub use era::{Era, EraDirection, EraTable, EraTableBuilder, parse_era_entry};
pub use error::{CalendarError, CalendarResult};
pub use jdn::JulianDay;
pub use locale::{Catalog, Translator};
pub use range::DateRange;
pub use rules::{CalendarRules, YearShifted};
pub use types::{CivilDate, DateDifference, StringFormat, WeekNumberSystem};
