//! Session identity and state.

use dialogue_graph::NodeId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::events::EndReason;

/// Unique identifier for a dialogue session, used to correlate logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a session is in its lifecycle.
///
/// There is no idle variant: before `start` there is simply no session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Waiting for the player to pick a choice on this node.
    Active(NodeId),
    /// Finished. Only a new session can continue the conversation.
    Ended(EndReason),
}

impl SessionState {
    pub fn is_active(&self) -> bool {
        matches!(self, SessionState::Active(_))
    }

    pub fn is_ended(&self) -> bool {
        matches!(self, SessionState::Ended(_))
    }

    /// The node awaiting a choice, if active.
    pub fn current_node(&self) -> Option<NodeId> {
        match self {
            SessionState::Active(id) => Some(*id),
            SessionState::Ended(_) => None,
        }
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        match self {
            SessionState::Active(_) => None,
            SessionState::Ended(reason) => Some(*reason),
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Active(id) => write!(f, "active at node {id}"),
            SessionState::Ended(reason) => write!(f, "ended ({reason:?})"),
        }
    }
}
