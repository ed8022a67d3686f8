//! MOVE operation - reparents an element and sets its local transform.

use canopy_core::{keys, ElementId, PropertyKind, Value, Vec3};
use canopy_graph::ElementGraph;

use crate::action::Action;
use crate::error::{ActionError, ActionResult};

/// Execute a move, returning the move that puts the element back under
/// its old parent with its old transform.
pub fn execute_move(
    graph: &mut ElementGraph,
    element: &ElementId,
    new_parent: &ElementId,
    position: Vec3,
    rotation: Vec3,
    scale: Vec3,
) -> ActionResult<Action> {
    let el = graph
        .by_id(element.as_str())
        .ok_or_else(|| ActionError::TargetNotFound(element.clone()))?;
    if element == graph.root_id() {
        return Err(ActionError::RootImmutable);
    }
    if !graph.contains(new_parent.as_str()) {
        return Err(ActionError::NewParentNotFound(new_parent.clone()));
    }
    if element == new_parent || graph.is_ancestor(element, new_parent) {
        return Err(ActionError::WouldCycle {
            element: element.clone(),
            new_parent: new_parent.clone(),
        });
    }

    // Capture the origin before touching anything. A non-root element in
    // the tree always has a parent.
    let old_parent = el
        .parent
        .clone()
        .ok_or_else(|| ActionError::TargetNotFound(element.clone()))?;
    let old_position = capture(el, keys::POSITION, Vec3::ZERO);
    let old_rotation = capture(el, keys::ROTATION, Vec3::ZERO);
    // An absent scale reads as identity, not zero.
    let old_scale = capture(el, keys::SCALE, Vec3::ONE);

    graph.detach(element)?;
    graph.attach(new_parent, element)?;
    graph.set_property(element, keys::POSITION, Value::Vec3(position))?;
    graph.set_property(element, keys::ROTATION, Value::Vec3(rotation))?;
    graph.set_property(element, keys::SCALE, Value::Vec3(scale))?;

    Ok(Action::Move {
        element: element.clone(),
        new_parent: old_parent,
        position: old_position,
        rotation: old_rotation,
        scale: old_scale,
    })
}

fn capture(el: &canopy_core::Element, key: &str, absent: Vec3) -> Vec3 {
    match el.get_raw(key) {
        Some(value) => Vec3::from_value(value).unwrap_or(absent),
        None => absent,
    }
}
