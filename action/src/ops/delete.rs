//! DELETE operation - removes a subtree, snapshotting it for the inverse.

use canopy_core::ElementId;
use canopy_graph::ElementGraph;

use crate::action::Action;
use crate::error::{ActionError, ActionResult};

/// Execute a delete, returning the create that rebuilds the subtree at
/// its old parent and sibling position.
pub fn execute_delete(graph: &mut ElementGraph, element: &ElementId) -> ActionResult<Action> {
    if !graph.contains(element.as_str()) {
        return Err(ActionError::TargetNotFound(element.clone()));
    }
    if element == graph.root_id() {
        return Err(ActionError::RootImmutable);
    }

    // Full recursive snapshot: ids, kinds, schema and child order must
    // all survive a rollback.
    let snapshot = graph
        .snapshot(element.as_str())
        .ok_or_else(|| ActionError::TargetNotFound(element.clone()))?;

    let (parent, at) = match graph.detach(element)? {
        Some(origin) => origin,
        // A detached element is unreachable from the root and cannot be
        // addressed by a remote edit; restore under the root if it ever
        // happens.
        None => (graph.root_id().clone(), graph.root().children.len()),
    };
    graph.remove_subtree(element)?;

    Ok(Action::Create {
        parent,
        data: snapshot,
        index: Some(at),
    })
}
