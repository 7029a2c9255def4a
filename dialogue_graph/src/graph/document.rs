//! Reading and writing graph documents.
//!
//! Parsing only checks the document shape (syntax, field types, non-negative
//! ids). A successfully parsed graph may still fail validation.

use super::DialogueGraph;
use crate::error::{EncodeError, GraphError, LoadError};

/// On-disk encodings of a graph document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Json,
    Toml,
}

impl GraphFormat {
    /// Guess the format from a file extension (`json` or `toml`).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(GraphFormat::Json),
            "toml" => Some(GraphFormat::Toml),
            _ => None,
        }
    }
}

impl DialogueGraph {
    pub fn from_json(source: &str) -> Result<Self, GraphError> {
        serde_json::from_str(source).map_err(|e| LoadError::Json(e).into())
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, GraphError> {
        serde_json::to_string_pretty(self).map_err(|e| EncodeError::Json(e).into())
    }

    pub fn from_toml(source: &str) -> Result<Self, GraphError> {
        toml::from_str(source).map_err(|e| LoadError::Toml(e).into())
    }

    pub fn to_toml(&self) -> Result<String, GraphError> {
        toml::to_string(self).map_err(|e| EncodeError::Toml(e).into())
    }

    /// Parse a document in the given format.
    pub fn parse(source: &str, format: GraphFormat) -> Result<Self, GraphError> {
        match format {
            GraphFormat::Json => Self::from_json(source),
            GraphFormat::Toml => Self::from_toml(source),
        }
    }

    /// Encode the graph in the given format.
    pub fn encode(&self, format: GraphFormat) -> Result<String, GraphError> {
        match format {
            GraphFormat::Json => self.to_json(),
            GraphFormat::Toml => self.to_toml(),
        }
    }
}
