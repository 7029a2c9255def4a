//! # Dialogue Engine
//!
//! Runs branching conversations over a [`dialogue_graph::DialogueGraph`].
//! Callers pass the graph and locale in explicitly; nothing here holds global
//! state.
//!
//! ## Core Components
//!
//! - **localization**: Resolves localized text through a fallback chain
//! - **validation**: Structural checks, the load gate, and authoring reports
//! - **traversal**: The session state machine that walks a verified graph
//! - **events**: What sessions emit for the presentation layer
//! - **typing**: Typewriter reveal helper for presentation drivers
//!
//! ## Typical Flow
//!
//! 1. Parse a graph document into a `DialogueGraph`
//! 2. `verify` it under a `LoadPolicy` to get a `VerifiedGraph`
//! 3. Start a `DialogueSession` per conversation and feed it choices
//! 4. Drain the session's events and render them

pub mod events;
pub mod localization;
pub mod traversal;
pub mod typing;
pub mod validation;

pub use events::*;
pub use localization::*;
pub use traversal::*;
pub use typing::*;
pub use validation::*;
