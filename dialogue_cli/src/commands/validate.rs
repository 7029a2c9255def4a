//! `dialogue validate` - print issues and fail on blocking ones

use crate::commands::load_graph;
use crate::error::CliResult;
use dialogue_engine::{LoadPolicy, ValidationReport};
use std::io::Write;
use std::path::Path;

/// Validate the graph at `path`, writing one line per issue to `out`.
///
/// Returns whether the graph is loadable under `policy`.
pub fn execute(path: &Path, policy: LoadPolicy, out: &mut impl Write) -> CliResult<bool> {
    let graph = load_graph(path)?;
    let report = ValidationReport::of(&graph);

    for issue in &report.issues {
        writeln!(out, "{issue}")?;
    }

    let blocking = report.blocking(policy).len();
    tracing::info!(
        issues = report.issues.len(),
        blocking,
        ?policy,
        "validated {}",
        path.display()
    );

    Ok(blocking == 0)
}
