use super::EraContext;
use crate::consts::{MAX_YEAR, MIN_GREGORIAN_YEAR};
use crate::era::{EraTable, EraTableBuilder};
use crate::rules::CalendarRules;
use crate::{CalendarKind, CivilDate, JulianDay, gregorian};

/// The Gregorian calendar extended back to 4713 BC, without a year zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GregorianProleptic;

impl CalendarRules for GregorianProleptic {
    fn kind(&self) -> CalendarKind {
        CalendarKind::GregorianProleptic
    }

    fn has_year_zero(&self) -> bool {
        false
    }

    fn earliest_valid_year(&self) -> i32 {
        MIN_GREGORIAN_YEAR
    }

    fn is_leap_year(&self, year: i32) -> bool {
        gregorian::is_leap_year(year, false)
    }

    fn date_to_jdn(&self, year: i32, month: u8, day: u8) -> JulianDay {
        JulianDay::new(gregorian::date_to_jdn(year, month, day, false))
    }

    fn jdn_to_date(&self, jdn: JulianDay) -> CivilDate {
        gregorian::jdn_to_date(jdn.get(), false).into()
    }

    fn is_proleptic(&self) -> bool {
        true
    }
}

/// BC/AD, or BCE/CE when the common era naming is selected
pub(super) fn default_eras(ctx: &EraContext<'_>) -> EraTableBuilder {
    let (bc, ad) = if ctx.use_common_era {
        (("Before Common Era", "BCE"), ("Common Era", "CE"))
    } else {
        (("Before Christ", "BC"), ("Anno Domini", "AD"))
    };

    EraTable::builder()
        .era(ctx.backward(1, ctx.span((MIN_GREGORIAN_YEAR, 1, 1), (-1, 12, 31)), bc, "%Ey %EC"))
        .era(ctx.forward(1, ctx.span((1, 1, 1), (MAX_YEAR, 12, 31)), ad, "%Ey %EC"))
}

