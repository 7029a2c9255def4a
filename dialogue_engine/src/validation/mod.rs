//! Graph Validator - structural and content checks over a dialogue graph.
//!
//! Validation is a single linear pass over nodes and choices. It never fails;
//! it returns the issues it found. [`verify`] turns that report into the
//! gate between a raw [`DialogueGraph`] and a [`VerifiedGraph`], which is the
//! only graph type a traversal session accepts.

mod analysis;
mod issue;

pub use analysis::*;
pub use issue::*;

use dialogue_graph::{ChoiceTarget, DialogueGraph};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Check `graph` and return every issue found, in node order.
pub fn validate(graph: &DialogueGraph) -> Vec<Issue> {
    let mut issues = Vec::new();
    let default = graph.default_locale();

    if !graph.contains(graph.root()) {
        issues.push(Issue::node(graph.root(), IssueKind::InvalidRoot));
    }

    for (position, node) in graph.nodes().iter().enumerate() {
        if node.id.index() != position {
            issues.push(Issue::node(node.id, IssueKind::DuplicateOrGappedId));
        }

        if !node.speaker.has_text_for(default) || !node.body.has_text_for(default) {
            issues.push(Issue::node(node.id, IssueKind::EmptyNodeText));
        }

        for (index, choice) in node.choices.iter().enumerate() {
            if let ChoiceTarget::Node(target) = choice.next {
                if !graph.contains(target) {
                    issues.push(Issue::choice(node.id, index, IssueKind::DanglingChoice));
                }
            }

            if !choice.text.has_text_for(default) {
                issues.push(Issue::choice(node.id, index, IssueKind::EmptyChoiceText));
            }
        }
    }

    issues
}

/// The issues found in one graph, with severity helpers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    /// Validate `graph` into a report.
    pub fn of(graph: &DialogueGraph) -> Self {
        Self {
            issues: validate(graph),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has_fatal(&self) -> bool {
        self.issues.iter().any(Issue::is_fatal)
    }

    pub fn fatal(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|issue| issue.is_fatal())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|issue| !issue.is_fatal())
    }

    /// Issues that block loading under `policy`.
    pub fn blocking(&self, policy: LoadPolicy) -> Vec<Issue> {
        self.issues
            .iter()
            .filter(|issue| policy.blocks(issue))
            .cloned()
            .collect()
    }
}

/// How strictly a graph is checked before sessions may use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Production loading: every issue blocks.
    #[default]
    Strict,
    /// Authoring: only fatal issues block, warnings are logged.
    Lenient,
}

impl LoadPolicy {
    pub fn blocks(self, issue: &Issue) -> bool {
        match self {
            LoadPolicy::Strict => true,
            LoadPolicy::Lenient => issue.is_fatal(),
        }
    }
}

/// A graph was refused by [`verify`].
#[derive(Debug, Clone, Error)]
#[error("graph rejected with {} blocking issue(s)", .issues.len())]
pub struct ValidationFailed {
    /// The issues that caused the rejection.
    pub issues: Vec<Issue>,
}

/// A graph that passed [`verify`]. Sessions can only be started from this type.
#[derive(Debug, Clone)]
pub struct VerifiedGraph {
    graph: DialogueGraph,
    warnings: Vec<Issue>,
}

impl VerifiedGraph {
    /// Warnings tolerated under a lenient policy. Always empty when strict.
    pub fn warnings(&self) -> &[Issue] {
        &self.warnings
    }

    pub fn into_inner(self) -> DialogueGraph {
        self.graph
    }
}

impl std::ops::Deref for VerifiedGraph {
    type Target = DialogueGraph;

    fn deref(&self) -> &Self::Target {
        &self.graph
    }
}

impl AsRef<DialogueGraph> for VerifiedGraph {
    fn as_ref(&self) -> &DialogueGraph {
        &self.graph
    }
}

/// Validate `graph` and admit it for traversal if nothing blocks under `policy`.
pub fn verify(graph: DialogueGraph, policy: LoadPolicy) -> Result<VerifiedGraph, ValidationFailed> {
    let report = ValidationReport::of(&graph);
    let blocking = report.blocking(policy);

    if !blocking.is_empty() {
        for issue in &blocking {
            tracing::error!(
                node = %issue.node_id,
                choice = ?issue.choice_index,
                kind = %issue.kind,
                "blocking validation issue"
            );
        }
        return Err(ValidationFailed { issues: blocking });
    }

    let warnings: Vec<Issue> = report.warnings().cloned().collect();
    for issue in &warnings {
        tracing::warn!(
            node = %issue.node_id,
            choice = ?issue.choice_index,
            kind = %issue.kind,
            "tolerated validation warning"
        );
    }

    tracing::debug!(nodes = graph.len(), ?policy, "graph verified");
    Ok(VerifiedGraph { graph, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialogue_graph::{Choice, Node, NodeId};

    fn spoken(id: usize, body: &str) -> Node {
        Node::new(id)
            .with_speaker("en", "Father Elias")
            .with_body("en", body)
    }

    fn four_node_graph() -> DialogueGraph {
        DialogueGraph::builder("en")
            .node(
                spoken(0, "What brings you here?")
                    .with_choice(Choice::new(NodeId(1)).with_text("en", "Faith"))
                    .with_choice(Choice::new(NodeId(2)).with_text("en", "Doubt"))
                    .with_choice(Choice::new(NodeId(3)).with_text("en", "Nothing")),
            )
            .node(spoken(1, "Faith is a lantern."))
            .node(spoken(2, "Doubt is honest."))
            .node(spoken(3, "Then go in peace."))
            .build()
    }

    #[test]
    fn test_valid_graph_has_no_issues() {
        assert!(validate(&four_node_graph()).is_empty());
    }

    #[test]
    fn test_dangling_choice() {
        let graph = DialogueGraph::builder("en")
            .node(
                spoken(0, "What brings you here?")
                    .with_choice(Choice::new(NodeId(1)).with_text("en", "Faith"))
                    .with_choice(Choice::new(NodeId(99)).with_text("en", "The void")),
            )
            .node(spoken(1, "Faith is a lantern."))
            .node(spoken(2, "Doubt is honest."))
            .node(spoken(3, "Then go in peace."))
            .build();

        let issues = validate(&graph);
        assert_eq!(issues, vec![Issue::choice(NodeId(0), 1, IssueKind::DanglingChoice)]);

        let err = verify(graph, LoadPolicy::Lenient).unwrap_err();
        assert_eq!(err.issues.len(), 1);
    }

    #[test]
    fn test_invalid_root() {
        let graph = DialogueGraph::builder("en").root(4).node(spoken(0, "Hi")).build();

        let issues = validate(&graph);
        assert_eq!(issues, vec![Issue::node(NodeId(4), IssueKind::InvalidRoot)]);
    }

    #[test]
    fn test_empty_graph_has_invalid_root() {
        let graph = DialogueGraph::builder("en").build();

        let issues = validate(&graph);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::InvalidRoot);
    }

    #[test]
    fn test_gapped_and_duplicate_ids() {
        let graph = DialogueGraph::builder("en")
            .node(spoken(0, "a"))
            .node(spoken(0, "b"))
            .node(spoken(5, "c"))
            .build();

        let kinds: Vec<_> = validate(&graph).into_iter().map(|i| (i.node_id, i.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                (NodeId(0), IssueKind::DuplicateOrGappedId),
                (NodeId(5), IssueKind::DuplicateOrGappedId),
            ]
        );
    }

    #[test]
    fn test_missing_default_text_is_warning() {
        let graph = DialogueGraph::builder("en")
            .node(
                Node::new(0)
                    .with_speaker("en", "Father Elias")
                    .with_body("pt", "Olá")
                    .with_choice(Choice::terminal().with_text("en", "")),
            )
            .build();

        let report = ValidationReport::of(&graph);
        assert!(!report.has_fatal());
        assert_eq!(report.warnings().count(), 2);
        assert_eq!(report.issues[0].kind, IssueKind::EmptyNodeText);
        assert_eq!(report.issues[1], Issue::choice(NodeId(0), 0, IssueKind::EmptyChoiceText));
    }

    #[test]
    fn test_policy_decides_on_warnings() {
        let graph = DialogueGraph::builder("en")
            .node(Node::new(0).with_speaker("en", "Elias"))
            .build();

        assert!(verify(graph.clone(), LoadPolicy::Strict).is_err());

        let verified = verify(graph, LoadPolicy::Lenient).unwrap();
        assert_eq!(verified.warnings().len(), 1);
        assert_eq!(verified.len(), 1);
    }

    #[test]
    fn test_cycles_are_allowed() {
        let graph = DialogueGraph::builder("en")
            .node(spoken(0, "Again?").with_choice(Choice::new(NodeId(1)).with_text("en", "Yes")))
            .node(spoken(1, "Once more.").with_choice(Choice::new(NodeId(0)).with_text("en", "Back")))
            .build();

        assert!(verify(graph, LoadPolicy::Strict).is_ok());
    }

    #[test]
    fn test_round_trip_keeps_graph_valid() {
        let graph = four_node_graph();

        let restored = DialogueGraph::from_json(&graph.to_json().unwrap()).unwrap();

        assert_eq!(restored, graph);
        assert!(!ValidationReport::of(&restored).has_fatal());
    }
}
