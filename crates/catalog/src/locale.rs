//! Per-locale text values.
//!
//! Product names, category labels, and facet labels are stored per locale.
//! The source locale doubles as the canonical key space for spec lookups, so
//! resolution always has a deterministic fallback.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The source locale used for canonical spec keys and as the resolution
/// fallback when a locale has no value.
pub const DEFAULT_LOCALE: &str = "en";

/// A string with one value per locale.
///
/// Backed by an ordered map so serialization is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Localized(pub BTreeMap<String, String>);

impl Localized {
    /// Create a value present only in the default locale.
    pub fn new(text: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(DEFAULT_LOCALE.to_string(), text.into());
        Self(map)
    }

    /// Set the value for a locale (builder style).
    pub fn with(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.0.insert(locale.into(), text.into());
        self
    }

    /// Resolve the value for `locale`, falling back to the default locale.
    ///
    /// A present-but-empty value is treated as absent, so a half-translated
    /// record still resolves to something displayable.
    pub fn resolve(&self, locale: &str) -> &str {
        match self.0.get(locale) {
            Some(text) if !text.is_empty() => text,
            _ => self.canonical(),
        }
    }

    /// The canonical (source-locale) value, or `""` when unset.
    pub fn canonical(&self) -> &str {
        self.0.get(DEFAULT_LOCALE).map(String::as_str).unwrap_or("")
    }

    /// Iterate all locale variants (used by free-text search, which matches
    /// against every locale rather than only the active one).
    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    /// True when no locale holds a non-empty value.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(String::is_empty)
    }
}
