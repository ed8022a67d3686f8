//! Transaction store error types.

use canopy_action::ActionError;
use canopy_core::ElementId;
use thiserror::Error;

/// Errors a `request` can return.
///
/// None of these is fatal: an `ActionFailed` still leaves a rollbackable
/// pending record of the applied prefix, and the precondition failures
/// (`AlreadyPending`, `ElementBusy`) apply nothing at all.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A transaction with this id is already pending confirmation.
    #[error("transaction already pending: {id}")]
    AlreadyPending { id: String },

    /// Overlap rejection is enabled and a target element is already
    /// touched by another pending transaction.
    #[error("element {element} already touched by pending transaction {pending}")]
    ElementBusy {
        element: ElementId,
        pending: String,
    },

    /// An action failed part-way through the batch; earlier actions
    /// remain applied and their inverses are retained.
    #[error("action {index} ({kind}) failed: {source}")]
    ActionFailed {
        index: usize,
        kind: &'static str,
        #[source]
        source: ActionError,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
