//! CLI configuration

use crate::error::{CliError, CliResult};
use dialogue_engine::{LoadPolicy, SessionConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "dialogue.toml";

/// Authoring configuration, read from `dialogue.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub validation: ValidationSection,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSection {
    /// Defaults to lenient.
    pub policy: LoadPolicy,
}

impl Default for ValidationSection {
    fn default() -> Self {
        Self {
            policy: LoadPolicy::Lenient,
        }
    }
}

impl CliConfig {
    /// Load configuration from file, or defaults if it does not exist
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let config_path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(CliConfig::default());
        }

        let contents = std::fs::read_to_string(config_path).map_err(|source| CliError::File {
            path: config_path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> CliResult<Self> {
        toml::from_str(contents).map_err(|e| CliError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialogue_engine::MissingTextPolicy;
    use dialogue_graph::Locale;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.validation.policy, LoadPolicy::Lenient);
        assert!(config.session.locale.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let config = CliConfig::load(Some(Path::new("/nonexistent/dialogue.toml"))).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_parse_config() {
        let config = CliConfig::parse(
            r#"
            [validation]
            policy = "strict"

            [session]
            locale = "pt"
            missing_text = "abort"
            "#,
        )
        .unwrap();

        assert_eq!(config.validation.policy, LoadPolicy::Strict);
        assert_eq!(config.session.locale, Some(Locale::from("pt")));
        assert_eq!(config.session.missing_text, MissingTextPolicy::Abort);
    }

    #[test]
    fn test_bad_config() {
        let err = CliConfig::parse("[validation]\npolicy = \"sometimes\"").unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
