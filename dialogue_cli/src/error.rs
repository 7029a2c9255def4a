//! CLI error types

use dialogue_engine::{EngineError, ValidationFailed};
use dialogue_graph::GraphError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by `dialogue` subcommands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot access {}: {source}", .path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported graph file (expected .json or .toml): {}", .0.display())]
    UnknownFormat(PathBuf),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Rejected(#[from] ValidationFailed),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub type CliResult<T> = Result<T, CliError>;
