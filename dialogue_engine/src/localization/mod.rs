//! Localization Resolver - picks the display string for a locale.
//!
//! Resolution walks a fixed fallback chain and stops at the first hit:
//! 1. **Requested**: text for the locale the player asked for
//! 2. **Default**: text for the graph's default locale
//! 3. **First available**: the first non-empty entry in locale order
//!
//! Empty strings count as missing at every step. When the chain runs out the
//! resolver reports `MissingTranslation` and leaves the policy decision to
//! the caller.

use dialogue_graph::{Locale, LocalizedText};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The text map had nothing to display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no translation for {requested} (default {default})")]
    MissingTranslation { requested: Locale, default: Locale },
}

/// Which step of the fallback chain produced the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FallbackSource {
    Requested,
    Default,
    FirstAvailable,
}

/// Resolve `text` for `requested`, falling back to `default` and then to any
/// available translation.
pub fn resolve<'a>(
    text: &'a LocalizedText,
    requested: &Locale,
    default: &Locale,
) -> Result<&'a str, ResolveError> {
    resolve_with_source(text, requested, default).map(|(resolved, _)| resolved)
}

/// Like [`resolve`], also reporting which fallback step matched.
pub fn resolve_with_source<'a>(
    text: &'a LocalizedText,
    requested: &Locale,
    default: &Locale,
) -> Result<(&'a str, FallbackSource), ResolveError> {
    if let Some(found) = text.get_non_empty(requested) {
        return Ok((found, FallbackSource::Requested));
    }

    if let Some(found) = text.get_non_empty(default) {
        return Ok((found, FallbackSource::Default));
    }

    text.iter()
        .map(|(_, value)| value)
        .find(|value| !value.is_empty())
        .map(|found| (found, FallbackSource::FirstAvailable))
        .ok_or_else(|| ResolveError::MissingTranslation {
            requested: requested.clone(),
            default: default.clone(),
        })
}
