//! Minguo (Republic of China) calendar: Gregorian months, years counted from
//! 1912.

use super::EraContext;
use crate::consts::MINGUO_YEAR_OFFSET;
use crate::era::{EraTable, EraTableBuilder};
use crate::rules::YearShifted;
use crate::CalendarKind;

pub const fn rules() -> YearShifted {
    YearShifted::new(CalendarKind::Minguo, MINGUO_YEAR_OFFSET, false, 1)
}

pub(super) fn default_eras(ctx: &EraContext<'_>) -> EraTableBuilder {
    EraTable::builder().era(ctx.forward(
        1,
        ctx.rules.valid_range(),
        ("Republic of China Era", "ROC"),
        "%EC %Ey",
    ))
}
