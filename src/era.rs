//! Eras: named, contiguous spans of days with their own year numbering.
//!
//! An era counts years either forward from its anchor year (`AD 1, 2, 3`) or
//! backward from it (`3, 2, 1 BC`). The anchor is the range start for a
//! forward era and the range end for a backward one.
//!
//! Era formats are small templates:
//!
//! | Token | Expands to        |
//! |-------|-------------------|
//! | `%Ey` | year in era       |
//! | `%EC` | short era name    |
//! | `%EN` | long era name     |
//! | `%%`  | a literal `%`     |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::ERA_FIELD_SEPARATOR;
use crate::rules::CalendarRules;
use crate::{CalendarError, CalendarResult, CivilDate, DateRange, JulianDay, StringFormat};

const DEFAULT_ERA_FORMAT: &str = "%EC %Ey";
const ERA_ENTRY_FIELDS: usize = 7;
const GANNEN: &str = "Gannen";

/// Direction in which an era counts its years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EraDirection {
    /// Year in era grows with the calendar year
    Forward,
    /// Year in era shrinks as the calendar year grows, as for BC
    Backward,
}

impl EraDirection {
    pub const fn sign(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Forward => '+',
            Self::Backward => '-',
        }
    }
}

impl fmt::Display for EraDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for EraDirection {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Self::Forward),
            "-" => Ok(Self::Backward),
            other => Err(CalendarError::InvalidEraEntry(format!("unknown era direction '{other}'"))),
        }
    }
}

/// A single era of a calendar system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Era {
    direction:  EraDirection,
    offset:     i32,
    range:      DateRange,
    start_year: i32,
    name:       String,
    short_name: String,
    format:     String,
}

impl Era {
    /// Creates an era.
    ///
    /// `start_year` is the calendar year at the anchor of the range and
    /// `offset` is the year in era that the anchor year carries.
    pub fn new(
        direction: EraDirection,
        offset: i32,
        range: DateRange,
        start_year: i32,
        name: impl Into<String>,
        short_name: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            direction,
            offset,
            range,
            start_year,
            name:       name.into(),
            short_name: short_name.into(),
            format:     format.into(),
        }
    }

    pub const fn direction(&self) -> EraDirection {
        self.direction
    }

    pub const fn offset(&self) -> i32 {
        self.offset
    }

    pub const fn range(&self) -> DateRange {
        self.range
    }

    pub const fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    /// Day the year count is anchored on
    pub const fn anchor(&self) -> JulianDay {
        match self.direction {
            EraDirection::Forward => self.range.start(),
            EraDirection::Backward => self.range.end(),
        }
    }

    pub fn name_for(&self, format: StringFormat) -> &str {
        match format {
            StringFormat::Short => &self.short_name,
            StringFormat::Long => &self.name,
        }
    }

    pub fn contains(&self, jdn: JulianDay) -> bool {
        self.range.contains(jdn)
    }

    /// Converts a calendar year to this era's numbering
    pub const fn year_in_era(&self, year: i32) -> i32 {
        match self.direction {
            EraDirection::Forward => year.saturating_sub(self.start_year).saturating_add(self.offset),
            EraDirection::Backward => self.offset.saturating_add(self.start_year).saturating_sub(year),
        }
    }

    /// Converts a year in this era back to the calendar year, or `None` if
    /// the result does not fit in an `i32`
    pub const fn year(&self, year_in_era: i32) -> Option<i32> {
        let Some(base) = self.start_year.checked_sub(self.offset) else {
            return None;
        };
        match self.direction {
            EraDirection::Forward => base.checked_add(year_in_era),
            EraDirection::Backward => match self.offset.checked_add(self.start_year) {
                Some(anchor) => anchor.checked_sub(year_in_era),
                None => None,
            },
        }
    }

    /// Calendar year of `year_in_era` if that year falls within the era's
    /// span and exists in the calendar
    pub fn year_within(&self, year_in_era: i32, rules: &dyn CalendarRules) -> Option<i32> {
        let year = self.year(year_in_era)?;
        let first_year = rules.jdn_to_date(self.range.start()).year();
        let last_year = rules.jdn_to_date(self.range.end()).year();
        let exists = rules.has_year_zero() || year != 0;
        (exists && first_year <= year && year <= last_year).then_some(year)
    }

    /// Renders the era format for a year in this era
    pub fn format_year(&self, year_in_era: i32) -> String {
        self.expand(&self.format, &year_in_era.to_string())
    }

    /// Whether `name` is this era's long or short name, ignoring case
    pub fn is_named(&self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        name == self.name.to_lowercase() || name == self.short_name.to_lowercase()
    }

    /// Recognises text produced by [`format_year`](Self::format_year) and
    /// returns the year in era it names.
    ///
    /// A format without `%Ey` names a single year: the anchor year.
    pub fn parse_formatted(&self, text: &str) -> Option<i32> {
        let text = text.trim().to_lowercase();

        let Some((before, after)) = self.format.split_once("%Ey") else {
            return (self.expand(&self.format, "").trim().to_lowercase() == text).then_some(self.offset);
        };

        let prefix = self.expand(before, "").to_lowercase();
        let suffix = self.expand(after, "").to_lowercase();
        let digits = text.strip_prefix(prefix.as_str())?.strip_suffix(suffix.as_str())?;
        parse_digits(digits)
    }

    fn expand(&self, template: &str, year_in_era: &str) -> String {
        let mut out = String::with_capacity(template.len() + self.name.len());
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.peek() {
                Some('%') => {
                    chars.next();
                    out.push('%');
                },
                Some('E') => {
                    chars.next();
                    match chars.next() {
                        Some('y') => out.push_str(year_in_era),
                        Some('C') => out.push_str(&self.short_name),
                        Some('N') => out.push_str(&self.name),
                        Some(other) => {
                            out.push_str("%E");
                            out.push(other);
                        },
                        None => out.push_str("%E"),
                    }
                },
                _ => out.push('%'),
            }
        }

        out
    }
}

fn parse_digits(s: &str) -> Option<i32> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// A year in era as written: digits, or `Gannen` for the first year
fn parse_year_token(s: &str) -> Option<i32> {
    if s.trim().eq_ignore_ascii_case(GANNEN) { Some(1) } else { parse_digits(s) }
}

/// The eras of one calendar system, ordered by date.
///
/// A validated table covers the calendar's valid range exactly, with each era
/// starting the day after the previous one ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EraTable {
    eras: Vec<Era>,
}

impl EraTable {
    pub fn builder() -> EraTableBuilder {
        EraTableBuilder::default()
    }

    pub fn eras(&self) -> &[Era] {
        &self.eras
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Era> {
        self.eras.iter()
    }

    pub fn len(&self) -> usize {
        self.eras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.eras.is_empty()
    }

    /// Finds the era holding `jdn`; range bounds are inclusive
    pub fn era_for(&self, jdn: JulianDay) -> Option<&Era> {
        let idx = self.eras.partition_point(|era| era.range.end() < jdn);
        self.eras.get(idx).filter(|era| era.contains(jdn))
    }

    /// Finds an era by long or short name.
    ///
    /// Several eras may share a name (Japanese first years are separate
    /// eras), so the one whose span holds the resulting calendar year is
    /// returned. A year in era outside every such span finds nothing.
    pub fn era_by_name(&self, name: &str, year_in_era: i32, rules: &dyn CalendarRules) -> Option<&Era> {
        self.eras
            .iter()
            .filter(|era| era.is_named(name))
            .find(|era| era.year_within(year_in_era, rules).is_some())
    }

    /// Parses an era year such as `"Heisei 19"`, `"2005 AD"` or
    /// `"Heisei Gannen"` into a calendar year.
    ///
    /// Each era's own format is tried first, latest era first. Failing that,
    /// the text may be an era name and a number in either order. Either way
    /// the year must fall within the era it names.
    pub fn parse_era_year(&self, text: &str, rules: &dyn CalendarRules) -> Option<i32> {
        if let Some(year) = self
            .eras
            .iter()
            .rev()
            .find_map(|era| era.parse_formatted(text).and_then(|yie| era.year_within(yie, rules)))
        {
            return Some(year);
        }

        let text = text.trim();
        let (name, year_in_era) = match text.rsplit_once(char::is_whitespace) {
            Some((head, tail)) if parse_year_token(tail).is_some() => (head, parse_year_token(tail)?),
            _ => {
                let (head, tail) = text.split_once(char::is_whitespace)?;
                (tail, parse_year_token(head)?)
            },
        };

        self.era_by_name(name, year_in_era, rules)?
            .year_within(year_in_era, rules)
    }

    /// Checks that the table exactly tiles `valid`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidEraTable` describing the first gap,
    /// overlap or uncovered end found.
    pub fn validate(&self, valid: DateRange) -> CalendarResult<()> {
        let (Some(first), Some(last)) = (self.eras.first(), self.eras.last()) else {
            return Err(CalendarError::InvalidEraTable("no eras defined".to_owned()));
        };

        if first.range.start() != valid.start() {
            return Err(CalendarError::InvalidEraTable(format!(
                "first era {} starts on {} but the calendar starts on {}",
                first.name,
                first.range.start(),
                valid.start()
            )));
        }
        if last.range.end() != valid.end() {
            return Err(CalendarError::InvalidEraTable(format!(
                "last era {} ends on {} but the calendar ends on {}",
                last.name,
                last.range.end(),
                valid.end()
            )));
        }

        for pair in self.eras.windows(2) {
            let [prev, next] = pair else { continue };
            if !prev.range.is_followed_by(&next.range) {
                return Err(CalendarError::InvalidEraTable(format!(
                    "era {} ({}) is not followed directly by {} ({})",
                    prev.name, prev.range, next.name, next.range
                )));
            }
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a EraTable {
    type Item = &'a Era;
    type IntoIter = std::slice::Iter<'a, Era>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects eras in any order and produces a date-ordered [`EraTable`]
#[derive(Debug, Clone, Default)]
pub struct EraTableBuilder {
    eras: Vec<Era>,
}

impl EraTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn era(mut self, era: Era) -> Self {
        self.eras.push(era);
        self
    }

    pub fn push(&mut self, era: Era) -> &mut Self {
        self.eras.push(era);
        self
    }

    /// Orders the eras without checking coverage
    pub fn finish(mut self) -> EraTable {
        self.eras.sort_by_key(Era::range);
        EraTable { eras: self.eras }
    }

    /// Orders the eras and checks they exactly tile `valid`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidEraTable` if the eras leave a gap,
    /// overlap, or do not reach both ends of `valid`.
    pub fn build(self, valid: DateRange) -> CalendarResult<EraTable> {
        let table = self.finish();
        table.validate(valid)?;
        Ok(table)
    }
}

/// Parses a configured era entry.
///
/// The entry has seven `:` separated fields:
/// `direction:offset:start:end:name:short_name:format`. Dates are ISO
/// `YYYY-MM-DD` in the calendar's own numbering. An empty start or end falls
/// back to the calendar's valid range; for a backward era the start is the
/// later date. The format field may itself contain `:`.
///
/// # Errors
/// Returns `CalendarError::InvalidEraEntry` if a field is missing, malformed
/// or names a date the calendar does not have.
pub fn parse_era_entry(entry: &str, rules: &dyn CalendarRules) -> CalendarResult<Era> {
    let invalid = |reason: &str| CalendarError::InvalidEraEntry(format!("{reason}: {entry}"));

    let fields: Vec<&str> = entry.splitn(ERA_ENTRY_FIELDS, ERA_FIELD_SEPARATOR).collect();
    let [direction, offset, start, end, name, short_name, format] = fields.as_slice() else {
        return Err(invalid(&format!("expected {ERA_ENTRY_FIELDS} fields, found {}", fields.len())));
    };

    let direction: EraDirection = direction.parse()?;
    let offset: i32 = offset.trim().parse().map_err(|_| invalid("offset is not a number"))?;
    let start = parse_entry_date(start, rules).map_err(|_| invalid("bad start date"))?;
    let end = parse_entry_date(end, rules).map_err(|_| invalid("bad end date"))?;

    if name.trim().is_empty() {
        return Err(invalid("era name is empty"));
    }

    let (anchor, far) = match direction {
        EraDirection::Forward => (
            start.unwrap_or_else(|| rules.earliest_valid_date()),
            end.unwrap_or_else(|| rules.latest_valid_date()),
        ),
        EraDirection::Backward => (
            start.unwrap_or_else(|| rules.latest_valid_date()),
            end.unwrap_or_else(|| rules.earliest_valid_date()),
        ),
    };
    let range = match direction {
        EraDirection::Forward => DateRange::new(anchor, far),
        EraDirection::Backward => DateRange::new(far, anchor),
    }
    .map_err(|err| invalid(&err.to_string()))?;

    let format = if format.is_empty() { DEFAULT_ERA_FORMAT } else { *format };
    let short_name = if short_name.trim().is_empty() { name } else { short_name };

    Ok(Era::new(
        direction,
        offset,
        range,
        rules.jdn_to_date(anchor).year(),
        name.trim(),
        short_name.trim(),
        format,
    ))
}

fn parse_entry_date(field: &str, rules: &dyn CalendarRules) -> CalendarResult<Option<JulianDay>> {
    if field.trim().is_empty() {
        return Ok(None);
    }
    let date: CivilDate = field.parse()?;
    if !rules.is_valid_ymd(date.year(), date.month(), date.day()) {
        return Err(CalendarError::InvalidDate {
            year:  date.year(),
            month: date.month(),
            day:   date.day(),
        });
    }
    Ok(Some(rules.date_to_jdn(date.year(), date.month(), date.day())))
}
