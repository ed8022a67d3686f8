//! Action error types.

use canopy_core::{ElementId, GraphError};
use thiserror::Error;

/// Result type for action execution.
pub type ActionResult<T> = Result<T, ActionError>;

/// Errors that can occur while executing one action.
///
/// All of these are local, per-action failures; none is fatal to the
/// process. A failing action never leaves a partial mutation behind.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("target element not found: {0}")]
    TargetNotFound(ElementId),

    #[error("parent element not found: {0}")]
    ParentNotFound(ElementId),

    #[error("new parent element not found: {0}")]
    NewParentNotFound(ElementId),

    #[error("duplicate element id: {0}")]
    DuplicateId(ElementId),

    #[error("moving {element} under {new_parent} would create a cycle")]
    WouldCycle {
        element: ElementId,
        new_parent: ElementId,
    },

    #[error("the root element cannot be deleted or moved")]
    RootImmutable,

    #[error("unrecognized action")]
    UnrecognizedAction,

    /// A graph primitive failed in a way the op did not rule out up front.
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}
