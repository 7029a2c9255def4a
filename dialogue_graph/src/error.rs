//! Errors raised by the content graph.

use thiserror::Error;

use crate::content::NodeId;

/// Errors produced while loading, saving, or reading a dialogue graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Requested node id is outside the graph.
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    /// A graph document could not be parsed.
    #[error("malformed graph document: {0}")]
    Load(#[from] LoadError),

    /// A graph could not be written out.
    #[error("could not encode graph: {0}")]
    Encode(#[from] EncodeError),
}

/// Why a raw graph document was rejected before construction.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid JSON: {0}")]
    Json(serde_json::Error),

    #[error("invalid TOML: {0}")]
    Toml(toml::de::Error),
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("JSON: {0}")]
    Json(serde_json::Error),

    #[error("TOML: {0}")]
    Toml(toml::ser::Error),
}
