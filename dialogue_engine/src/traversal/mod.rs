//! Traversal Engine - the state machine that walks a player through a graph.
//!
//! A [`DialogueSession`] borrows a [`VerifiedGraph`] and moves between two
//! states:
//!
//! - **Active(node)**: the node has been shown and the player must choose
//! - **Ended(reason)**: terminal; start a new session to talk again
//!
//! Every operation appends the events it produced to the session outbox,
//! which the presentation driver drains. Transitions depend only on the
//! graph, the current state and the input, so sessions are deterministic.

mod config;
mod error;
mod state;

pub use config::*;
pub use error::*;
pub use state::*;

use dialogue_graph::{ChoiceTarget, Locale, LocalizedText, Node, NodeId};
use tracing::Span;

use crate::events::{DialogueEnded, DialogueEvent, EndReason, NodeEntered};
use crate::localization::{resolve_with_source, FallbackSource};
use crate::validation::VerifiedGraph;

/// One conversation in progress.
///
/// The graph is shared read-only, so any number of sessions may run against
/// it at once. A session itself has a single owner and no internal locking.
#[derive(Debug)]
pub struct DialogueSession<'g> {
    id: SessionId,
    graph: &'g VerifiedGraph,
    locale: Locale,
    missing_text: MissingTextPolicy,
    state: SessionState,
    /// Nodes entered so far, in order.
    history: Vec<NodeId>,
    /// Events not yet drained by the driver.
    pending_events: Vec<DialogueEvent>,
    span: Span,
}

impl<'g> DialogueSession<'g> {
    /// Start a conversation at the graph's root.
    ///
    /// Emits `NodeEntered` for the root, followed by `DialogueEnded` if the
    /// root has no choices.
    pub fn start(graph: &'g VerifiedGraph, config: SessionConfig) -> Result<Self, EngineError> {
        let id = SessionId::new();
        let locale = config
            .locale
            .unwrap_or_else(|| graph.default_locale().clone());
        let span = tracing::info_span!("dialogue_session", session_id = %id, locale = %locale);

        let mut session = Self {
            id,
            graph,
            locale,
            missing_text: config.missing_text,
            state: SessionState::Active(graph.root()),
            history: Vec::new(),
            pending_events: Vec::new(),
            span,
        };

        let span = session.span.clone();
        let _enter = span.enter();
        tracing::debug!(root = %graph.root(), "session started");

        session.enter(graph.root(), None)?;
        Ok(session)
    }

    /// Pick choice `index` on the current node.
    ///
    /// Fails with `InvalidChoice`, leaving the session untouched, if the
    /// index is out of range or the session has already ended.
    pub fn select_choice(&mut self, index: usize) -> Result<(), EngineError> {
        let span = self.span.clone();
        let _enter = span.enter();

        let SessionState::Active(current) = self.state else {
            tracing::debug!(index, "choice on ended session");
            return Err(EngineError::InvalidChoice {
                index,
                available: 0,
            });
        };

        let graph = self.graph;
        let node = match graph.get(current) {
            Ok(node) => node,
            Err(_) => return Err(self.abort_corrupt(current, None, current)),
        };

        let Some(choice) = node.choice(index) else {
            tracing::debug!(node = %current, index, "choice out of range");
            return Err(EngineError::InvalidChoice {
                index,
                available: node.choices.len(),
            });
        };

        tracing::debug!(node = %current, index, next = %choice.next, "choice selected");
        match choice.next {
            ChoiceTarget::Terminal => {
                self.finish(EndReason::Terminal);
                Ok(())
            }
            ChoiceTarget::Node(next) => self.enter(next, Some((current, index))),
        }
    }

    /// End the conversation now. Calling this on an ended session does nothing.
    pub fn end(&mut self) {
        if self.state.is_ended() {
            return;
        }

        let span = self.span.clone();
        let _enter = span.enter();
        self.finish(EndReason::Cancelled);
    }

    /// Change the display locale for events emitted from now on.
    ///
    /// The position in the graph is unchanged; call [`refresh`](Self::refresh)
    /// to re-display the current node in the new locale.
    pub fn set_locale(&mut self, locale: impl Into<Locale>) {
        self.locale = locale.into();
        tracing::debug!(parent: &self.span, locale = %self.locale, "locale changed");
    }

    /// Emit `NodeEntered` again for the current node without moving.
    pub fn refresh(&mut self) -> Result<(), EngineError> {
        let span = self.span.clone();
        let _enter = span.enter();

        let SessionState::Active(current) = self.state else {
            return Err(EngineError::NotActive);
        };

        let graph = self.graph;
        let node = match graph.get(current) {
            Ok(node) => node,
            Err(_) => return Err(self.abort_corrupt(current, None, current)),
        };

        let entered = self.render(node)?;
        self.pending_events.push(DialogueEvent::NodeEntered(entered));
        Ok(())
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Node ids entered during this session, oldest first.
    pub fn history(&self) -> &[NodeId] {
        &self.history
    }

    /// Events produced since the last drain.
    pub fn pending_events(&self) -> &[DialogueEvent] {
        &self.pending_events
    }

    /// Take all pending events, leaving the outbox empty.
    pub fn drain_events(&mut self) -> Vec<DialogueEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Move to `target`, emitting `NodeEntered` and auto-ending on leaves.
    fn enter(&mut self, target: NodeId, from: Option<(NodeId, usize)>) -> Result<(), EngineError> {
        let graph = self.graph;
        let node = match graph.get(target) {
            Ok(node) => node,
            Err(_) => {
                let (node, choice) = from.map_or((target, None), |(n, c)| (n, Some(c)));
                return Err(self.abort_corrupt(node, choice, target));
            }
        };

        let entered = self.render(node)?;

        self.state = SessionState::Active(target);
        self.history.push(target);
        self.pending_events.push(DialogueEvent::NodeEntered(entered));
        tracing::debug!(node = %target, choices = node.choices.len(), "node entered");

        if node.is_leaf() {
            self.finish(EndReason::Leaf);
        }
        Ok(())
    }

    fn finish(&mut self, reason: EndReason) {
        self.state = SessionState::Ended(reason);
        self.pending_events
            .push(DialogueEvent::DialogueEnded(DialogueEnded { reason }));
        tracing::debug!(?reason, "session ended");
    }

    fn abort_corrupt(&mut self, node: NodeId, choice: Option<usize>, target: NodeId) -> EngineError {
        tracing::error!(%node, ?choice, %target, "transition to missing node");
        self.finish(EndReason::Aborted);
        EngineError::CorruptGraph {
            node,
            choice,
            target,
        }
    }

    /// Resolve every text of `node` for the session locale.
    fn render(&mut self, node: &Node) -> Result<NodeEntered, EngineError> {
        let speaker = self.text(node.id, TextField::Speaker, &node.speaker)?;
        let body = self.text(node.id, TextField::Body, &node.body)?;
        let choices = node
            .choices
            .iter()
            .enumerate()
            .map(|(index, choice)| self.text(node.id, TextField::Choice(index), &choice.text))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NodeEntered {
            node_id: node.id,
            speaker,
            body,
            choices,
        })
    }

    fn text(&mut self, node: NodeId, field: TextField, text: &LocalizedText) -> Result<String, EngineError> {
        match resolve_with_source(text, &self.locale, self.graph.default_locale()) {
            Ok((resolved, source)) => {
                if source != FallbackSource::Requested {
                    tracing::debug!(%node, ?field, ?source, "text fell back");
                }
                Ok(resolved.to_owned())
            }
            Err(err) => match self.missing_text {
                MissingTextPolicy::Placeholder => {
                    tracing::error!(%node, ?field, error = %err, "missing translation");
                    Ok(field.placeholder(node))
                }
                MissingTextPolicy::Abort => {
                    tracing::error!(%node, ?field, error = %err, "missing translation, aborting");
                    self.finish(EndReason::Aborted);
                    Err(EngineError::MissingText {
                        node,
                        field,
                        source: err,
                    })
                }
            },
        }
    }
}
