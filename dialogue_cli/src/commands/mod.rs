//! Subcommand implementations

pub mod convert;
pub mod coverage;
pub mod play;
pub mod validate;

use crate::error::{CliError, CliResult};
use dialogue_graph::{DialogueGraph, GraphFormat};
use std::path::Path;

/// Pick the document format from a file extension
pub fn format_of(path: &Path) -> CliResult<GraphFormat> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(GraphFormat::from_extension)
        .ok_or_else(|| CliError::UnknownFormat(path.to_path_buf()))
}

/// Read and parse a graph document. No validation happens here.
pub fn load_graph(path: &Path) -> CliResult<DialogueGraph> {
    let format = format_of(path)?;
    let source = std::fs::read_to_string(path).map_err(|source| CliError::File {
        path: path.to_path_buf(),
        source,
    })?;

    let graph = DialogueGraph::parse(&source, format)?;
    tracing::debug!(path = %path.display(), nodes = graph.len(), "graph loaded");
    Ok(graph)
}
