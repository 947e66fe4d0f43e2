//! Thai solar calendar: Gregorian months, years counted in the Buddhist Era.

use super::EraContext;
use crate::consts::THAI_YEAR_OFFSET;
use crate::era::{EraTable, EraTableBuilder};
use crate::rules::YearShifted;
use crate::CalendarKind;

/// Thai rules. Year 0 BE exists and is the first valid year.
pub const fn rules() -> YearShifted {
    YearShifted::new(CalendarKind::Thai, -THAI_YEAR_OFFSET, true, 0)
}

pub(super) fn default_eras(ctx: &EraContext<'_>) -> EraTableBuilder {
    EraTable::builder().era(ctx.forward(0, ctx.rules.valid_range(), ("Buddhist Era", "BE"), "%Ey %EC"))
}
