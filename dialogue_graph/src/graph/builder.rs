//! Builder for dialogue graphs.

use super::DialogueGraph;
use crate::content::{Node, NodeId};
use crate::text::Locale;

/// Collects raw nodes into a [`DialogueGraph`].
///
/// The builder accepts whatever it is given. Gaps, duplicate ids and
/// dangling choices all survive `build()` and are reported later by the
/// validator.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    root: NodeId,
    default_locale: Locale,
    nodes: Vec<Node>,
}

impl GraphBuilder {
    /// Create a builder. The root defaults to node 0.
    pub fn new(default_locale: impl Into<Locale>) -> Self {
        Self {
            root: NodeId(0),
            default_locale: default_locale.into(),
            nodes: Vec::new(),
        }
    }

    /// Set the entry node.
    pub fn root(mut self, root: usize) -> Self {
        self.root = NodeId(root);
        self
    }

    /// Append a node. Storage order is insertion order.
    pub fn node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// Append several nodes.
    pub fn nodes(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.nodes.extend(nodes);
        self
    }

    pub fn build(self) -> DialogueGraph {
        DialogueGraph {
            root: self.root,
            default_locale: self.default_locale,
            nodes: self.nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Choice, ChoiceTarget};

    #[test]
    fn test_builder_keeps_invalid_data() {
        let graph = GraphBuilder::new("en")
            .root(5)
            .node(Node::new(3).with_choice(Choice::new(NodeId(99))))
            .build();

        assert_eq!(graph.root(), NodeId(5));
        assert_eq!(graph.nodes()[0].id, NodeId(3));
        assert_eq!(
            graph.nodes()[0].choices[0].next,
            ChoiceTarget::Node(NodeId(99))
        );
    }

    #[test]
    fn test_empty_builder() {
        let graph = GraphBuilder::new("pt").build();

        assert!(graph.is_empty());
        assert_eq!(graph.default_locale().as_str(), "pt");
    }
}
