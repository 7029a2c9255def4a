//! Locale codes and per-locale text maps.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An opaque locale identifier such as `"en"`, `"pt"` or `"es"`.
///
/// Locales carry no ordering semantics of their own; the `Ord` impl exists
/// only so they can key a sorted map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Create a locale from its code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The raw locale code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Locale {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Text keyed by locale.
///
/// Iteration follows locale code order, so any "first available" lookup over
/// this map is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<Locale, String>);

impl LocalizedText {
    /// Create an empty text map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, locale: impl Into<Locale>, text: impl Into<String>) -> Self {
        self.insert(locale, text);
        self
    }

    /// Set the text for a locale, returning any previous value.
    pub fn insert(&mut self, locale: impl Into<Locale>, text: impl Into<String>) -> Option<String> {
        self.0.insert(locale.into(), text.into())
    }

    /// Raw lookup, including empty strings.
    pub fn get(&self, locale: &Locale) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    /// Lookup that treats an empty string the same as a missing entry.
    pub fn get_non_empty(&self, locale: &Locale) -> Option<&str> {
        self.get(locale).filter(|text| !text.is_empty())
    }

    /// Whether there is non-empty text for `locale`.
    pub fn has_text_for(&self, locale: &Locale) -> bool {
        self.get_non_empty(locale).is_some()
    }

    /// Iterate over `(locale, text)` pairs in locale order.
    pub fn iter(&self) -> impl Iterator<Item = (&Locale, &str)> {
        self.0.iter().map(|(locale, text)| (locale, text.as_str()))
    }

    /// All locales with an entry, empty or not.
    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<L, T> FromIterator<(L, T)> for LocalizedText
where
    L: Into<Locale>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, T)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(locale, text)| (locale.into(), text.into()))
                .collect(),
        )
    }
}
