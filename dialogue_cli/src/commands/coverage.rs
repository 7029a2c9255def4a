//! `dialogue coverage` - translation coverage and unreachable nodes

use crate::commands::load_graph;
use crate::error::CliResult;
use dialogue_engine::{locale_coverage, unreachable_nodes};
use std::io::Write;
use std::path::Path;

pub fn execute(path: &Path, out: &mut impl Write) -> CliResult<()> {
    let graph = load_graph(path)?;
    let coverage = locale_coverage(&graph);

    writeln!(
        out,
        "{} node(s), {} choice(s), default locale {}",
        coverage.total_nodes,
        coverage.total_choices,
        graph.default_locale()
    )?;

    for (locale, gaps) in &coverage.gaps {
        writeln!(
            out,
            "{locale}: {:.0}% ({} node(s), {} choice(s) missing)",
            coverage.ratio(locale) * 100.0,
            gaps.nodes.len(),
            gaps.choices.len()
        )?;
    }

    let unreachable = unreachable_nodes(&graph);
    if unreachable.is_empty() {
        writeln!(out, "all nodes reachable from root")?;
    } else {
        let ids: Vec<String> = unreachable.iter().map(ToString::to_string).collect();
        writeln!(out, "unreachable: {}", ids.join(", "))?;
    }

    Ok(())
}
