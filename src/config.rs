//! Calendar settings read from a host-supplied configuration source.
//!
//! Settings live in groups of string key/value pairs. Locale-wide settings
//! are in the `Locale` group; per-calendar settings are in a group named
//! `KCalendarSystem <calendar type>`. Every setting has a default, and a
//! malformed value is logged and replaced by its default.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::calendar::CalendarKind;
use crate::consts::{
    CALENDAR_GROUP_PREFIX, DAYS_IN_WEEK, DEFAULT_SHORT_YEAR_WINDOW_START, ERA_KEY_PREFIX, LOCALE_GROUP, MAX_YEAR,
    SHORT_YEAR_WINDOW_KEY, USE_COMMON_ERA_KEY, WEEK_START_DAY_KEY,
};

/// Read access to grouped string settings.
///
/// The unit type is an empty source, so every setting takes its default.
pub trait ConfigSource {
    fn read_entry(&self, group: &str, key: &str) -> Option<String>;
}

impl ConfigSource for () {
    fn read_entry(&self, _group: &str, _key: &str) -> Option<String> {
        None
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    fn read_entry(&self, group: &str, key: &str) -> Option<String> {
        (**self).read_entry(group, key)
    }
}

/// In-memory [`ConfigSource`], serializable as nested maps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapConfig {
    groups: BTreeMap<String, BTreeMap<String, String>>,
}

impl MapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, group: &str, key: &str, value: impl Into<String>) -> &mut Self {
        self.groups
            .entry(group.to_owned())
            .or_default()
            .insert(key.to_owned(), value.into());
        self
    }

    #[must_use]
    pub fn with(mut self, group: &str, key: &str, value: impl Into<String>) -> Self {
        self.set(group, key, value);
        self
    }
}

impl ConfigSource for MapConfig {
    fn read_entry(&self, group: &str, key: &str) -> Option<String> {
        self.groups.get(group)?.get(key).cloned()
    }
}

/// Name of the settings group for one calendar type
pub fn calendar_group(kind: CalendarKind) -> String {
    format!("{CALENDAR_GROUP_PREFIX} {}", kind.calendar_type())
}

/// Resolved settings for one calendar system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Name Gregorian eras BCE/CE instead of BC/AD
    pub use_common_era: bool,
    /// First year of the hundred-year window two-digit years map into
    pub short_year_window_start: i32,
    /// ISO weekday that starts a week in non-ISO week numbering
    pub week_start_day: u8,
    /// Raw `EraN` entries, in key order
    pub era_entries: Vec<String>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            use_common_era: false,
            short_year_window_start: DEFAULT_SHORT_YEAR_WINDOW_START,
            week_start_day: 1,
            era_entries: Vec::new(),
        }
    }
}

impl CalendarConfig {
    /// Reads the settings for `kind`, falling back to defaults
    pub fn load(source: &dyn ConfigSource, kind: CalendarKind) -> Self {
        let group = calendar_group(kind);
        let mut config = Self::default();

        if let Some(value) = source.read_entry(&group, USE_COMMON_ERA_KEY) {
            match parse_bool(&value) {
                Some(flag) => config.use_common_era = flag,
                None => {
                    warn!("ignoring {group}/{USE_COMMON_ERA_KEY}: '{value}' is not a boolean");
                },
            }
        }

        if let Some(value) = source.read_entry(&group, SHORT_YEAR_WINDOW_KEY) {
            match value.trim().parse::<i32>() {
                Ok(year) if (0..=MAX_YEAR).contains(&year) => config.short_year_window_start = year,
                _ => {
                    warn!("ignoring {group}/{SHORT_YEAR_WINDOW_KEY}: '{value}' is not a year");
                },
            }
        }

        if let Some(value) = source.read_entry(LOCALE_GROUP, WEEK_START_DAY_KEY) {
            match value.trim().parse::<u8>() {
                Ok(day) if (1..=DAYS_IN_WEEK).contains(&day) => config.week_start_day = day,
                _ => {
                    warn!("ignoring {LOCALE_GROUP}/{WEEK_START_DAY_KEY}: '{value}' is not a weekday");
                },
            }
        }

        // Numbered entries run from Era1 until the first missing key
        for n in 1.. {
            let Some(entry) = source.read_entry(&group, &format!("{ERA_KEY_PREFIX}{n}")) else {
                break;
            };
            if !entry.trim().is_empty() {
                config.era_entries.push(entry);
            }
        }

        debug!(
            "loaded {group}: common era {}, short year window {}, {} era entries",
            config.use_common_era,
            config.short_year_window_start,
            config.era_entries.len()
        );
        config
    }
}

/// Accepts the usual spellings of a boolean setting
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_source() {
        let config = CalendarConfig::load(&(), CalendarKind::GregorianProleptic);
        assert_eq!(config, CalendarConfig::default());
        assert_eq!(config.short_year_window_start, 2000);
        assert_eq!(config.week_start_day, 1);
    }

    #[test]
    fn test_reads_calendar_group() {
        let source = MapConfig::new()
            .with("KCalendarSystem gregorian-proleptic", "UseCommonEra", "true")
            .with("KCalendarSystem gregorian-proleptic", "ShortYearWindowStartYear", "1950")
            .with("KCalendarSystem gregorian-proleptic", "Era1", "+:1:0001-01-01::Anno Domini:AD:%EC %Ey")
            .with("KCalendarSystem gregorian-proleptic", "Era2", "")
            .with("KCalendarSystem gregorian-proleptic", "Era3", "-:1:-0001-12-31::Before Christ:BC:%Ey %EC")
            .with("Locale", "WeekStartDay", "7");

        let config = CalendarConfig::load(&source, CalendarKind::GregorianProleptic);
        assert!(config.use_common_era);
        assert_eq!(config.short_year_window_start, 1950);
        assert_eq!(config.week_start_day, 7);
        assert_eq!(config.era_entries.len(), 2);

        // Other calendars do not see the Gregorian group
        let thai = CalendarConfig::load(&source, CalendarKind::Thai);
        assert!(!thai.use_common_era);
        assert!(thai.era_entries.is_empty());
        assert_eq!(thai.week_start_day, 7);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let source = MapConfig::new()
            .with("KCalendarSystem japanese", "UseCommonEra", "maybe")
            .with("KCalendarSystem japanese", "ShortYearWindowStartYear", "soon")
            .with("Locale", "WeekStartDay", "8");

        let config = CalendarConfig::load(&source, CalendarKind::Japanese);
        assert_eq!(config, CalendarConfig::default());
    }

    #[test]
    fn test_parse_bool() {
        for value in ["true", "TRUE", "1", "yes", "on", " On "] {
            assert_eq!(parse_bool(value), Some(true), "{value}");
        }
        for value in ["false", "0", "no", "off"] {
            assert_eq!(parse_bool(value), Some(false), "{value}");
        }
        assert_eq!(parse_bool("2"), None);
    }

    #[test]
    fn test_map_config_serde() {
        let source: MapConfig =
            serde_json::from_str(r#"{"KCalendarSystem thai": {"ShortYearWindowStartYear": "2500"}}"#).unwrap();
        assert_eq!(source.read_entry("KCalendarSystem thai", "ShortYearWindowStartYear").as_deref(), Some("2500"));
        assert_eq!(source.read_entry("KCalendarSystem thai", "UseCommonEra"), None);
        assert_eq!(calendar_group(CalendarKind::Thai), "KCalendarSystem thai");
    }
}
