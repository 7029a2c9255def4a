//! # Dialogue Graph
//!
//! The content model for branching dialogue. A graph is a dense list of
//! nodes, each carrying localized speaker and body text plus an ordered list
//! of choices that lead to another node or end the conversation.
//!
//! This crate holds data only: it does not validate or walk graphs. See
//! `dialogue_engine` for the validator and the traversal state machine.

pub mod content;
pub mod error;
pub mod graph;
pub mod text;

pub use content::*;
pub use error::*;
pub use graph::*;
pub use text::*;
