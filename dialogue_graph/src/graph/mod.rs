//! Dialogue Graph - the immutable store of nodes a conversation walks.

mod builder;
mod document;

pub use builder::*;
pub use document::GraphFormat;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::content::{Node, NodeId};
use crate::error::GraphError;
use crate::text::Locale;

/// The content graph for one conversation.
///
/// A graph is built once and never mutated afterwards. Nodes are stored in
/// a list and addressed by position; nothing here checks that a node's own
/// `id` matches its position, that choice targets exist, or that text is
/// present. Those checks belong to the validator so that broken graphs can
/// still be loaded and inspected by tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueGraph {
    /// Entry point of the conversation.
    root: NodeId,

    /// Locale every node and choice must at least provide.
    default_locale: Locale,

    #[serde(default)]
    nodes: Vec<Node>,
}

impl DialogueGraph {
    /// Start building a graph whose text falls back to `default_locale`.
    pub fn builder(default_locale: impl Into<Locale>) -> GraphBuilder {
        GraphBuilder::new(default_locale)
    }

    /// Get the node at `id`.
    pub fn get(&self, id: NodeId) -> Result<&Node, GraphError> {
        self.nodes
            .get(id.index())
            .ok_or(GraphError::NodeNotFound(id))
    }

    /// Check whether `id` addresses a node.
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in storage order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Every locale that appears anywhere in the graph, plus the default.
    pub fn locales(&self) -> BTreeSet<Locale> {
        let mut locales = BTreeSet::new();
        locales.insert(self.default_locale.clone());

        for node in &self.nodes {
            locales.extend(node.speaker.locales().cloned());
            locales.extend(node.body.locales().cloned());
            for choice in &node.choices {
                locales.extend(choice.text.locales().cloned());
            }
        }

        locales
    }

    /// Total number of choices across all nodes.
    pub fn choice_count(&self) -> usize {
        self.nodes.iter().map(|n| n.choices.len()).sum()
    }
}
