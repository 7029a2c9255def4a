//! Authoring reports that go beyond pass/fail validation.
//!
//! Nothing here affects whether a graph may be loaded. Unreachable nodes in
//! particular are legal: they are often branches written ahead of time.

use dialogue_graph::{DialogueGraph, Locale, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

/// Nodes that cannot be reached from the root by following choices.
///
/// Dangling targets are skipped. If the root itself is invalid, every node is
/// reported.
pub fn unreachable_nodes(graph: &DialogueGraph) -> Vec<NodeId> {
    let mut seen = vec![false; graph.len()];
    let mut queue = VecDeque::new();

    if graph.contains(graph.root()) {
        seen[graph.root().index()] = true;
        queue.push_back(graph.root());
    }

    while let Some(id) = queue.pop_front() {
        let Ok(node) = graph.get(id) else {
            continue;
        };

        for target in node.choices.iter().filter_map(|c| c.next.node()) {
            if graph.contains(target) && !seen[target.index()] {
                seen[target.index()] = true;
                queue.push_back(target);
            }
        }
    }

    seen.iter()
        .enumerate()
        .filter(|(_, reached)| !**reached)
        .map(|(position, _)| NodeId(position))
        .collect()
}

/// Translation gaps for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleGaps {
    /// Nodes missing speaker or body text.
    pub nodes: Vec<NodeId>,
    /// `(node, choice index)` pairs missing a label.
    pub choices: Vec<(NodeId, usize)>,
}

impl LocaleGaps {
    pub fn is_complete(&self) -> bool {
        self.nodes.is_empty() && self.choices.is_empty()
    }
}

/// Per-locale translation coverage of a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleCoverage {
    pub total_nodes: usize,
    pub total_choices: usize,
    pub gaps: BTreeMap<Locale, LocaleGaps>,
}

impl LocaleCoverage {
    /// Fraction of translatable entries (nodes + choices) present for `locale`.
    pub fn ratio(&self, locale: &Locale) -> f32 {
        let total = self.total_nodes + self.total_choices;
        if total == 0 {
            return 1.0;
        }

        let missing = self
            .gaps
            .get(locale)
            .map(|g| g.nodes.len() + g.choices.len())
            .unwrap_or(total);

        (total - missing) as f32 / total as f32
    }
}

/// Report which nodes and choices lack text in each locale used by the graph.
pub fn locale_coverage(graph: &DialogueGraph) -> LocaleCoverage {
    let mut coverage = LocaleCoverage {
        total_nodes: graph.len(),
        total_choices: graph.choice_count(),
        gaps: BTreeMap::new(),
    };

    for locale in graph.locales() {
        let mut gaps = LocaleGaps::default();

        for node in graph.nodes() {
            if !node.speaker.has_text_for(&locale) || !node.body.has_text_for(&locale) {
                gaps.nodes.push(node.id);
            }
            for (index, choice) in node.choices.iter().enumerate() {
                if !choice.text.has_text_for(&locale) {
                    gaps.choices.push((node.id, index));
                }
            }
        }

        coverage.gaps.insert(locale, gaps);
    }

    coverage
}
