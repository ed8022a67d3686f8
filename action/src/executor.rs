//! Action executor - applies one action and produces its inverse.
//!
//! The executor delegates to specialized operation modules in `ops/`:
//! - `ops/update.rs` - UPDATE (property overwrite)
//! - `ops/create.rs` - CREATE (subtree instantiation)
//! - `ops/delete.rs` - DELETE (subtree removal with snapshot)
//! - `ops/reparent.rs` - MOVE (reparent + transform)
//!
//! Batching, undo-log bookkeeping and failure policy live in the store;
//! the executor only ever sees one action at a time.

use canopy_graph::ElementGraph;

use crate::action::Action;
use crate::error::{ActionError, ActionResult};
use crate::ops;

/// Action executor.
pub struct ActionExecutor<'g> {
    graph: &'g mut ElementGraph,
}

impl<'g> ActionExecutor<'g> {
    /// Create a new executor over the graph.
    pub fn new(graph: &'g mut ElementGraph) -> Self {
        Self { graph }
    }

    /// Apply one action.
    ///
    /// On success the returned action, executed against the post-mutation
    /// graph, exactly undoes this one. On failure the graph is unchanged.
    pub fn execute(&mut self, action: &Action) -> ActionResult<Action> {
        match action {
            Action::Update {
                element,
                key,
                value,
            } => ops::execute_update(self.graph, element, key, value),
            Action::Create {
                parent,
                data,
                index,
            } => ops::execute_create(self.graph, parent, data, *index),
            Action::Delete { element } => ops::execute_delete(self.graph, element),
            Action::Move {
                element,
                new_parent,
                position,
                rotation,
                scale,
            } => ops::execute_move(self.graph, element, new_parent, *position, *rotation, *scale),
            Action::Invalid => Err(ActionError::UnrecognizedAction),
        }
    }
}
