//! `dialogue convert` - rewrite a graph document as JSON or TOML

use crate::commands::{format_of, load_graph};
use crate::error::{CliError, CliResult};
use std::path::Path;

pub fn execute(input: &Path, output: &Path) -> CliResult<()> {
    let graph = load_graph(input)?;
    let format = format_of(output)?;

    let encoded = graph.encode(format)?;
    std::fs::write(output, encoded).map_err(|source| CliError::File {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!(from = %input.display(), to = %output.display(), "graph converted");
    Ok(())
}
