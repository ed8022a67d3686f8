//! CREATE operation - instantiates a described subtree.

use std::collections::HashSet;

use canopy_core::{Element, ElementData, ElementId, GraphResult};
use canopy_graph::ElementGraph;

use crate::action::Action;
use crate::error::{ActionError, ActionResult};

/// Execute a create, returning the delete that removes the subtree again.
pub fn execute_create(
    graph: &mut ElementGraph,
    parent: &ElementId,
    data: &ElementData,
    index: Option<usize>,
) -> ActionResult<Action> {
    if !graph.contains(parent.as_str()) {
        return Err(ActionError::ParentNotFound(parent.clone()));
    }

    // Reject every id collision before instantiating anything, so a
    // failed create leaves no partial subtree behind.
    let mut ids = Vec::new();
    data.collect_ids(&mut ids);
    let mut seen = HashSet::new();
    for id in &ids {
        if graph.contains(id.as_str()) || !seen.insert(id.clone()) {
            return Err(ActionError::DuplicateId(id.clone()));
        }
    }

    instantiate(graph, data)?;
    match index {
        Some(at) => graph.attach_at(parent, &data.id, at)?,
        None => graph.attach(parent, &data.id)?,
    }

    Ok(Action::Delete {
        element: data.id.clone(),
    })
}

/// Insert the described element and its children into the arena, wiring
/// child links as it goes. The subtree root is left detached for the
/// caller to attach.
fn instantiate(graph: &mut ElementGraph, data: &ElementData) -> GraphResult<()> {
    graph.insert_detached(Element::new(
        data.id.clone(),
        data.kind.clone(),
        data.schema.clone(),
    ))?;
    for child in &data.children {
        instantiate(graph, child)?;
        graph.attach(&data.id, &child.id)?;
    }
    Ok(())
}
