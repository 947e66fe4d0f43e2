use super::{EraContext, GregorianProleptic};
use crate::era::{EraTable, EraTableBuilder};
use crate::rules::CalendarRules;
use crate::{CalendarKind, CivilDate, DateRange, JulianDay};

/// Imperial eras, named by their first day.
///
/// The year an era begins in is its first year (Gannen), which usually
/// shares a calendar year with the end of the previous era.
const NENGO: [(&str, (i32, u8, u8)); 5] = [
    ("Meiji", (1868, 9, 8)),
    ("Taishō", (1912, 7, 30)),
    ("Shōwa", (1926, 12, 25)),
    ("Heisei", (1989, 1, 8)),
    ("Reiwa", (2019, 5, 1)),
];

/// Gregorian arithmetic starting at 1 AD, with imperial era names from 1868
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Japanese;

impl CalendarRules for Japanese {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Japanese
    }

    fn has_year_zero(&self) -> bool {
        false
    }

    fn earliest_valid_year(&self) -> i32 {
        1
    }

    fn is_leap_year(&self, year: i32) -> bool {
        GregorianProleptic.is_leap_year(year)
    }

    fn date_to_jdn(&self, year: i32, month: u8, day: u8) -> JulianDay {
        GregorianProleptic.date_to_jdn(year, month, day)
    }

    fn jdn_to_date(&self, jdn: JulianDay) -> CivilDate {
        GregorianProleptic.jdn_to_date(jdn)
    }
}

/// AD up to the Meiji restoration, then one Gannen era and one numbered era
/// per imperial era
pub(super) fn default_eras(ctx: &EraContext<'_>) -> EraTableBuilder {
    let (first_year, month, day) = NENGO[0].1;
    let mut builder = EraTable::builder();
    builder.push(ctx.forward(
        1,
        DateRange::from_ordered(ctx.rules.earliest_valid_date(), ctx.jdn(first_year, month, day) - 1),
        ("Anno Domini", "AD"),
        "%Ey %EC",
    ));

    for (idx, (name, (year, month, day))) in NENGO.iter().copied().enumerate() {
        let start = ctx.jdn(year, month, day);
        let end = match NENGO.get(idx + 1) {
            Some((_, (y, m, d))) => ctx.jdn(*y, *m, *d) - 1,
            None => ctx.rules.latest_valid_date(),
        };
        let new_year = ctx.jdn(year + 1, 1, 1);

        builder.push(ctx.forward(
            1,
            DateRange::from_ordered(start, end.min(new_year - 1)),
            (name, name),
            "%EC Gannen",
        ));
        if new_year <= end {
            builder.push(ctx.forward(2, DateRange::from_ordered(new_year, end), (name, name), "%EC %Ey"));
        }
    }

    builder
}
