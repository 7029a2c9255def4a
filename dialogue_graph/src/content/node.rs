//! Nodes - single steps of a conversation.

use serde::{Deserialize, Serialize};

use super::{Choice, NodeId};
use crate::text::{Locale, LocalizedText};

/// One step of dialogue: who speaks, what they say, and what the player can
/// answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,

    #[serde(default)]
    pub speaker: LocalizedText,

    #[serde(default)]
    pub body: LocalizedText,

    /// Ordered choices. Empty means the node ends the conversation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,
}

impl Node {
    /// Create node `id` with no text and no choices.
    pub fn new(id: usize) -> Self {
        Self {
            id: NodeId(id),
            speaker: LocalizedText::new(),
            body: LocalizedText::new(),
            choices: Vec::new(),
        }
    }

    pub fn with_speaker(mut self, locale: impl Into<Locale>, text: impl Into<String>) -> Self {
        self.speaker.insert(locale, text);
        self
    }

    pub fn with_body(mut self, locale: impl Into<Locale>, text: impl Into<String>) -> Self {
        self.body.insert(locale, text);
        self
    }

    /// Append a choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// A node with no choices; entering it ends the conversation.
    pub fn is_leaf(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn choice(&self, index: usize) -> Option<&Choice> {
        self.choices.get(index)
    }
}
