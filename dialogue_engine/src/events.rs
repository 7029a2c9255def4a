//! Events emitted by a dialogue session for the presentation layer.

use dialogue_graph::NodeId;
use serde::{Deserialize, Serialize};

/// Why a conversation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// The player picked a choice with no next node.
    Terminal,
    /// The session entered a node without choices.
    Leaf,
    /// The caller ended the session early.
    Cancelled,
    /// The session hit corrupt data and stopped.
    Aborted,
}

/// A node became current. All text is already resolved for the session locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeEntered {
    pub node_id: NodeId,
    pub speaker: String,
    pub body: String,
    /// Choice labels in display order. Index `i` here is index `i` for
    /// `select_choice`.
    pub choices: Vec<String>,
}

/// The conversation is over; no more events follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueEnded {
    pub reason: EndReason,
}

/// Everything a presentation driver needs to react to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DialogueEvent {
    NodeEntered(NodeEntered),
    DialogueEnded(DialogueEnded),
}

impl DialogueEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            DialogueEvent::NodeEntered(_) => "dialogue.node_entered",
            DialogueEvent::DialogueEnded(_) => "dialogue.dialogue_ended",
        }
    }

    /// JSON form for drivers that live across a process or language boundary.
    pub fn to_payload(&self) -> serde_json::Value {
        // Derived Serialize into a Value cannot fail for these types.
        serde_json::to_value(self).unwrap_or_default()
    }

    pub fn as_node_entered(&self) -> Option<&NodeEntered> {
        match self {
            DialogueEvent::NodeEntered(entered) => Some(entered),
            DialogueEvent::DialogueEnded(_) => None,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, DialogueEvent::DialogueEnded(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let event = DialogueEvent::NodeEntered(NodeEntered {
            node_id: NodeId(2),
            speaker: "Father Elias".into(),
            body: "Sit.".into(),
            choices: vec!["Thank you".into()],
        });

        let payload = event.to_payload();
        assert_eq!(event.event_type(), "dialogue.node_entered");
        assert_eq!(payload["type"], "node_entered");
        assert_eq!(payload["node_id"], 2);
        assert_eq!(payload["choices"][0], "Thank you");
    }

    #[test]
    fn test_end_payload() {
        let event = DialogueEvent::DialogueEnded(DialogueEnded {
            reason: EndReason::Leaf,
        });

        assert!(event.is_end());
        assert!(event.as_node_entered().is_none());
        assert_eq!(event.to_payload()["reason"], "leaf");
    }
}
