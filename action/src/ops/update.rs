//! UPDATE operation - overwrites one element property.

use canopy_core::{ElementId, Value};
use canopy_graph::ElementGraph;

use crate::action::Action;
use crate::error::{ActionError, ActionResult};

/// Execute an update, returning the update that restores the prior value.
///
/// The previous value is captured before the overwrite; a property that
/// did not exist yet inverts to a `Null` write, which clears it again on
/// rollback.
pub fn execute_update(
    graph: &mut ElementGraph,
    element: &ElementId,
    key: &str,
    value: &Value,
) -> ActionResult<Action> {
    let el = graph
        .by_id(element.as_str())
        .ok_or_else(|| ActionError::TargetNotFound(element.clone()))?;

    let previous = el.get_raw(key).cloned().unwrap_or(Value::Null);
    graph.set_property(element, key, value.clone())?;

    Ok(Action::Update {
        element: element.clone(),
        key: key.to_string(),
        value: previous,
    })
}
