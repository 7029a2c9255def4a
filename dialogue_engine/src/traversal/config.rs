//! Per-session configuration.

use dialogue_graph::Locale;
use serde::{Deserialize, Serialize};

/// What a session does when a text has no usable translation at all.
///
/// This only happens for graphs admitted with a lenient policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingTextPolicy {
    /// Show a key such as `node.3.body` and log an error.
    #[default]
    Placeholder,
    /// End the session and return `EngineError::MissingText`.
    Abort,
}

/// Settings a session is started with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Display locale. `None` uses the graph's default locale.
    pub locale: Option<Locale>,
    pub missing_text: MissingTextPolicy,
}

impl SessionConfig {
    /// Config that displays text in `locale`.
    pub fn for_locale(locale: impl Into<Locale>) -> Self {
        Self {
            locale: Some(locale.into()),
            ..Self::default()
        }
    }

    pub fn with_missing_text(mut self, policy: MissingTextPolicy) -> Self {
        self.missing_text = policy;
        self
    }
}
