//! Common error types for canopy.

use crate::ElementId;
use thiserror::Error;

/// Errors that can occur during element graph operations.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Element not found.
    #[error("element not found: {0}")]
    ElementNotFound(ElementId),

    /// An element with this id already exists in the graph.
    #[error("duplicate element id: {0}")]
    DuplicateId(ElementId),

    /// Attaching would make an element its own ancestor.
    #[error("attaching {child} under {parent} would create a cycle")]
    WouldCycle { parent: ElementId, child: ElementId },

    /// The child is already attached to a different parent.
    #[error("element {child} is already attached to {parent}")]
    AlreadyAttached { child: ElementId, parent: ElementId },

    /// The root element cannot be attached, detached, moved or deleted.
    #[error("the root element cannot be restructured")]
    RootImmutable,

    /// A property exists under a different kind than the one requested.
    #[error("kind mismatch for property {key}: expected {expected}, got {actual}")]
    KindMismatch {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl GraphError {
    pub fn kind_mismatch(
        key: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::KindMismatch {
            key: key.into(),
            expected,
            actual,
        }
    }
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
