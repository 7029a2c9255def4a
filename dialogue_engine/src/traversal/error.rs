//! Traversal errors.

use dialogue_graph::NodeId;
use thiserror::Error;

use crate::localization::ResolveError;

/// Which text of a node failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Speaker,
    Body,
    Choice(usize),
}

impl TextField {
    /// Key-like placeholder shown instead of missing text, e.g. `node.3.choice.1`.
    pub fn placeholder(self, node: NodeId) -> String {
        match self {
            TextField::Speaker => format!("node.{node}.speaker"),
            TextField::Body => format!("node.{node}.body"),
            TextField::Choice(index) => format!("node.{node}.choice.{index}"),
        }
    }
}

/// Errors returned by session operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The choice index is out of range, or the session has ended
    /// (`available` is then 0). The session is unchanged.
    #[error("choice {index} is not available ({available} choice(s) on offer)")]
    InvalidChoice { index: usize, available: usize },

    /// The operation needs an active session.
    #[error("session has ended")]
    NotActive,

    /// A transition led to a node that does not exist. The session is aborted.
    #[error("corrupt graph: node {node} leads to missing node {target}")]
    CorruptGraph {
        node: NodeId,
        choice: Option<usize>,
        target: NodeId,
    },

    /// No translation at all, under `MissingTextPolicy::Abort`. The session is aborted.
    #[error("missing text for {field:?} of node {node}: {source}")]
    MissingText {
        node: NodeId,
        field: TextField,
        source: ResolveError,
    },
}

impl EngineError {
    /// Whether the caller can keep using the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, EngineError::InvalidChoice { .. } | EngineError::NotActive)
    }
}
