//! Localized message maps

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fallback locale used when the requested one has no translation
pub const DEFAULT_LOCALE: &str = "en";

/// Text keyed by locale code (e.g. "en", "fr_FR", "pt-BR")
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageByLocale(pub BTreeMap<String, String>);

impl MessageByLocale {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for fixtures
    pub fn with(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.0.insert(locale.into(), text.into());
        self
    }

    /// Pick the best message for `locale`.
    ///
    /// Resolution order: exact code, language part of the code (`fr_FR` and
    /// `fr-FR` both fall back to `fr`), [`DEFAULT_LOCALE`], then the first
    /// entry in code order. Returns `None` only for an empty map.
    pub fn select(&self, locale: &str) -> Option<&str> {
        if let Some(text) = self.0.get(locale) {
            return Some(text);
        }

        let language = locale.split(['_', '-']).next().unwrap_or(locale);
        if let Some(text) = self.0.get(language) {
            return Some(text);
        }

        self.0
            .get(DEFAULT_LOCALE)
            .or_else(|| self.0.values().next())
            .map(String::as_str)
    }
}
