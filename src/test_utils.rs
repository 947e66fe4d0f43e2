//! Shared fixtures for unit tests.

use crate::{CalendarKind, CalendarSystem, DateRange, JulianDay};

pub fn jd(value: i64) -> JulianDay {
    JulianDay::new(value)
}

pub fn range(start: i64, end: i64) -> DateRange {
    DateRange::new(jd(start), jd(end)).unwrap()
}

pub fn gregorian() -> CalendarSystem {
    CalendarSystem::new(CalendarKind::GregorianProleptic)
}

pub fn thai() -> CalendarSystem {
    CalendarSystem::new(CalendarKind::Thai)
}

pub fn japanese() -> CalendarSystem {
    CalendarSystem::new(CalendarKind::Japanese)
}

pub fn minguo() -> CalendarSystem {
    CalendarSystem::new(CalendarKind::Minguo)
}
