//! Choices - the labeled edges leaving a node.

use serde::{Deserialize, Serialize};

use super::NodeId;
use crate::text::{Locale, LocalizedText};

/// Where a choice leads.
///
/// Serialized as an optional node id: `null` (or an absent field) means
/// [`ChoiceTarget::Terminal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<NodeId>", into = "Option<NodeId>")]
pub enum ChoiceTarget {
    /// Continue at another node.
    Node(NodeId),
    /// The conversation ends after this choice.
    #[default]
    Terminal,
}

impl ChoiceTarget {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ChoiceTarget::Terminal)
    }

    /// The target node, if any.
    pub fn node(&self) -> Option<NodeId> {
        match self {
            ChoiceTarget::Node(id) => Some(*id),
            ChoiceTarget::Terminal => None,
        }
    }
}

impl From<Option<NodeId>> for ChoiceTarget {
    fn from(value: Option<NodeId>) -> Self {
        value.map_or(ChoiceTarget::Terminal, ChoiceTarget::Node)
    }
}

impl From<ChoiceTarget> for Option<NodeId> {
    fn from(value: ChoiceTarget) -> Self {
        value.node()
    }
}

impl From<NodeId> for ChoiceTarget {
    fn from(id: NodeId) -> Self {
        ChoiceTarget::Node(id)
    }
}

impl std::fmt::Display for ChoiceTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChoiceTarget::Node(id) => write!(f, "node {id}"),
            ChoiceTarget::Terminal => f.write_str("end"),
        }
    }
}

/// A player-selectable option on a node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default, skip_serializing_if = "ChoiceTarget::is_terminal")]
    pub next: ChoiceTarget,

    /// Label shown to the player.
    #[serde(default)]
    pub text: LocalizedText,
}

impl Choice {
    /// Create a choice leading to `next`.
    pub fn new(next: impl Into<ChoiceTarget>) -> Self {
        Self {
            next: next.into(),
            text: LocalizedText::new(),
        }
    }

    /// Create a choice that ends the conversation.
    pub fn terminal() -> Self {
        Self::new(ChoiceTarget::Terminal)
    }

    /// Add the label for a locale.
    pub fn with_text(mut self, locale: impl Into<Locale>, text: impl Into<String>) -> Self {
        self.text.insert(locale, text);
        self
    }
}
