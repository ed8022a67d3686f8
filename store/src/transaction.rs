//! Transaction construction.

use canopy_action::Action;
use canopy_core::{ElementData, ElementId, Value, Vec3};
use serde::{Deserialize, Serialize};

/// A named, ordered batch of edit actions.
///
/// Built fluently; each append returns the transaction so calls chain.
/// The store only ever reads a transaction handed to it — it clones what
/// it needs to keep.
///
/// # Example
/// ```
/// use canopy_store::Transaction;
/// let txn = Transaction::new("txn-1")
///     .update("a", "foo", 12i64)
///     .delete("b");
/// assert_eq!(txn.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: String,
    actions: Vec<Action>,
}

impl Transaction {
    /// Create an empty transaction under a caller-chosen id.
    ///
    /// Ids are unique per session; the store keys pending records by them.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            actions: Vec::new(),
        }
    }

    /// The transaction id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The actions, in application order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Append a property overwrite.
    pub fn update(
        mut self,
        element: impl Into<ElementId>,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.actions.push(Action::Update {
            element: element.into(),
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Append a subtree creation.
    pub fn create(mut self, parent: impl Into<ElementId>, data: ElementData) -> Self {
        self.actions.push(Action::Create {
            parent: parent.into(),
            data,
            index: None,
        });
        self
    }

    /// Append a subtree deletion.
    pub fn delete(mut self, element: impl Into<ElementId>) -> Self {
        self.actions.push(Action::Delete {
            element: element.into(),
        });
        self
    }

    /// Append a reparent with an explicit local transform.
    pub fn move_to(
        mut self,
        element: impl Into<ElementId>,
        new_parent: impl Into<ElementId>,
        position: Vec3,
        rotation: Vec3,
        scale: Vec3,
    ) -> Self {
        self.actions.push(Action::Move {
            element: element.into(),
            new_parent: new_parent.into(),
            position,
            rotation,
            scale,
        });
        self
    }

    /// Append an already-decoded action.
    pub fn push(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }
}
