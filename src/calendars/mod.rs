//! Concrete calendar rules and their built-in era tables.

mod gregorian;
mod japanese;
pub mod minguo;
pub mod thai;

pub use gregorian::GregorianProleptic;
pub use japanese::Japanese;

use crate::era::{Era, EraDirection, EraTableBuilder};
use crate::locale::Translator;
use crate::rules::CalendarRules;
use crate::{CalendarKind, DateRange, JulianDay};

/// Translation context of long era names
pub const ERA_NAME_CONTEXT: &str = "era name";
/// Translation context of short era names
pub const ERA_SHORT_NAME_CONTEXT: &str = "era short name";
/// Translation context of era year formats
pub const ERA_FORMAT_CONTEXT: &str = "era format";

/// Creates the rules object for a calendar kind
pub fn rules_for(kind: CalendarKind) -> Box<dyn CalendarRules> {
    match kind {
        CalendarKind::GregorianProleptic => Box::new(GregorianProleptic),
        CalendarKind::Japanese => Box::new(Japanese),
        CalendarKind::Thai => Box::new(thai::rules()),
        CalendarKind::Minguo => Box::new(minguo::rules()),
    }
}

/// Builds the built-in eras of a calendar kind
pub(crate) fn default_eras(kind: CalendarKind, ctx: &EraContext<'_>) -> EraTableBuilder {
    match kind {
        CalendarKind::GregorianProleptic => gregorian::default_eras(ctx),
        CalendarKind::Japanese => japanese::default_eras(ctx),
        CalendarKind::Thai => thai::default_eras(ctx),
        CalendarKind::Minguo => minguo::default_eras(ctx),
    }
}

/// What a built-in era table needs to know about its calendar
pub(crate) struct EraContext<'a> {
    pub rules:          &'a dyn CalendarRules,
    pub translator:     &'a dyn Translator,
    pub use_common_era: bool,
}

impl EraContext<'_> {
    pub fn jdn(&self, year: i32, month: u8, day: u8) -> JulianDay {
        self.rules.date_to_jdn(year, month, day)
    }

    /// Inclusive span between two dates of the calendar
    pub fn span(&self, from: (i32, u8, u8), to: (i32, u8, u8)) -> DateRange {
        DateRange::from_ordered(self.jdn(from.0, from.1, from.2), self.jdn(to.0, to.1, to.2))
    }

    /// Forward era anchored on the first day of `range`
    pub fn forward(&self, offset: i32, range: DateRange, names: (&str, &str), format: &str) -> Era {
        let start_year = self.rules.jdn_to_date(range.start()).year();
        self.era(EraDirection::Forward, offset, range, start_year, names, format)
    }

    /// Backward era anchored on the last day of `range`
    pub fn backward(&self, offset: i32, range: DateRange, names: (&str, &str), format: &str) -> Era {
        let start_year = self.rules.jdn_to_date(range.end()).year();
        self.era(EraDirection::Backward, offset, range, start_year, names, format)
    }

    fn era(
        &self,
        direction: EraDirection,
        offset: i32,
        range: DateRange,
        start_year: i32,
        (name, short_name): (&str, &str),
        format: &str,
    ) -> Era {
        Era::new(
            direction,
            offset,
            range,
            start_year,
            self.translator.translate(ERA_NAME_CONTEXT, name),
            self.translator.translate(ERA_SHORT_NAME_CONTEXT, short_name),
            self.translator.translate(ERA_FORMAT_CONTEXT, format),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_cover_valid_range() {
        for kind in CalendarKind::all() {
            let rules = rules_for(kind);
            let ctx = EraContext {
                rules:          rules.as_ref(),
                translator:     &(),
                use_common_era: false,
            };
            let result = default_eras(kind, &ctx).build(rules.valid_range());
            assert!(result.is_ok(), "{kind}: {result:?}");
        }
    }

    #[test]
    fn test_rules_for_kind() {
        for kind in CalendarKind::all() {
            assert_eq!(rules_for(kind).kind(), kind);
        }
    }
}
