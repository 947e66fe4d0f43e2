//! Translation of user-visible calendar strings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Supplies localized names for calendars and eras.
///
/// `context` says where the text is used, so that identical English words in
/// different roles can be translated separately. The unit type is the
/// identity translator.
pub trait Translator {
    fn translate(&self, context: &str, text: &str) -> String;
}

impl Translator for () {
    fn translate(&self, _context: &str, text: &str) -> String {
        text.to_owned()
    }
}

impl<T: Translator + ?Sized> Translator for &T {
    fn translate(&self, context: &str, text: &str) -> String {
        (**self).translate(context, text)
    }
}

/// A message catalog keyed by source text.
///
/// Entries may be scoped to a context with the `context|text` key form; an
/// unscoped entry applies in every context. Missing entries translate to the
/// source text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    messages: BTreeMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a translation used in every context
    #[must_use]
    pub fn with(mut self, text: impl Into<String>, translation: impl Into<String>) -> Self {
        self.messages.insert(text.into(), translation.into());
        self
    }

    /// Adds a translation used only in `context`
    #[must_use]
    pub fn with_context(mut self, context: &str, text: &str, translation: impl Into<String>) -> Self {
        self.messages.insert(format!("{context}|{text}"), translation.into());
        self
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for Catalog {
    fn translate(&self, context: &str, text: &str) -> String {
        self.messages
            .get(&format!("{context}|{text}"))
            .or_else(|| self.messages.get(text))
            .cloned()
            .unwrap_or_else(|| text.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_is_identity() {
        assert_eq!(().translate("any", "Anno Domini"), "Anno Domini");
    }

    #[test]
    fn test_catalog_prefers_context() {
        let catalog = Catalog::new()
            .with("Heisei", "平成")
            .with_context("era short name", "Heisei", "H");

        assert_eq!(catalog.translate("era name", "Heisei"), "平成");
        assert_eq!(catalog.translate("era short name", "Heisei"), "H");
        assert_eq!(catalog.translate("era name", "Showa"), "Showa");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_catalog_from_json() {
        let catalog: Catalog = serde_json::from_str(r#"{"Buddhist Era": "พุทธศักราช"}"#).unwrap();
        assert_eq!((&catalog).translate("era name", "Buddhist Era"), "พุทธศักราช");
    }
}
