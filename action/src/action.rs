//! Edit actions for the element graph.

use canopy_core::{ElementData, ElementId, Value, Vec3};
use serde::{Deserialize, Serialize};

/// One atomic edit operation.
///
/// Decoded remote actions carry a `type` tag; a tag this core does not
/// recognize decodes as `Invalid`, which the executor rejects without
/// touching the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Overwrite one property on an element. A `Null` value clears the
    /// property; inverses use this to undo a first write.
    Update {
        element: ElementId,
        key: String,
        value: Value,
    },
    /// Instantiate a described subtree under a parent. `index` is absent
    /// on caller-built creates; delete inverses carry the sibling
    /// position to restore.
    Create {
        parent: ElementId,
        data: ElementData,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
    },
    /// Remove an element and its whole subtree.
    Delete { element: ElementId },
    /// Reparent an element and set its local transform.
    Move {
        element: ElementId,
        new_parent: ElementId,
        position: Vec3,
        rotation: Vec3,
        scale: Vec3,
    },
    /// Sentinel for decoded actions with no recognizable type tag.
    #[serde(other)]
    Invalid,
}

impl Action {
    /// Short name of the action case, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Update { .. } => "update",
            Action::Create { .. } => "create",
            Action::Delete { .. } => "delete",
            Action::Move { .. } => "move",
            Action::Invalid => "invalid",
        }
    }
}
