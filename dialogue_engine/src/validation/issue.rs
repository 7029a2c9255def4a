//! Validation issues and their severities.

use dialogue_graph::NodeId;
use serde::{Deserialize, Serialize};

/// How bad an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Tolerable while authoring; production loading should still refuse it.
    Warning,
    /// The graph must not be walked.
    Fatal,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Fatal => f.write_str("fatal"),
        }
    }
}

/// Kinds of problems the validator reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueKind {
    /// A choice points at a node that does not exist.
    DanglingChoice,
    /// Speaker or body text is missing for the default locale.
    EmptyNodeText,
    /// Choice label is missing for the default locale.
    EmptyChoiceText,
    /// The root id is outside the node list.
    InvalidRoot,
    /// A node's id does not match its position.
    DuplicateOrGappedId,
}

impl IssueKind {
    pub fn severity(self) -> Severity {
        match self {
            IssueKind::DanglingChoice | IssueKind::InvalidRoot | IssueKind::DuplicateOrGappedId => {
                Severity::Fatal
            }
            IssueKind::EmptyNodeText | IssueKind::EmptyChoiceText => Severity::Warning,
        }
    }

    pub fn is_fatal(self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            IssueKind::DanglingChoice => "DanglingChoice",
            IssueKind::EmptyNodeText => "EmptyNodeText",
            IssueKind::EmptyChoiceText => "EmptyChoiceText",
            IssueKind::InvalidRoot => "InvalidRoot",
            IssueKind::DuplicateOrGappedId => "DuplicateOrGappedId",
        };
        f.write_str(name)
    }
}

/// A single finding, located at a node and optionally one of its choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// For id problems this is the id the node declares, not its position.
    pub node_id: NodeId,
    pub choice_index: Option<usize>,
    pub kind: IssueKind,
}

impl Issue {
    pub fn node(node_id: NodeId, kind: IssueKind) -> Self {
        Self {
            node_id,
            choice_index: None,
            kind,
        }
    }

    pub fn choice(node_id: NodeId, choice_index: usize, kind: IssueKind) -> Self {
        Self {
            node_id,
            choice_index: Some(choice_index),
            kind,
        }
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    pub fn is_fatal(&self) -> bool {
        self.kind.is_fatal()
    }
}

/// Renders as `node 3 choice 1: DanglingChoice (fatal)`.
impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node {}", self.node_id)?;
        if let Some(index) = self.choice_index {
            write!(f, " choice {index}")?;
        }
        write!(f, ": {} ({})", self.kind, self.severity())
    }
}
