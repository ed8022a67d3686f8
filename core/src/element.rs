//! Element structure for the scene hierarchy.
//!
//! An element is a node in the tree: an id, an opaque kind, links to its
//! parent and children, and a typed property bag. The graph arena owns
//! every element; parent links are back-references by id, never owning
//! pointers, so the tree cannot form reference cycles.

use crate::{ElementId, GraphError, GraphResult, PropertyKind, Schema, Value};

/// A node in the hierarchical scene graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Unique identifier for this element.
    pub id: ElementId,
    /// What kind of element this is (opaque to the core).
    pub kind: String,
    /// Back-reference to the owning parent; None only for the root.
    pub parent: Option<ElementId>,
    /// Ordered child ids; sibling order is meaningful.
    pub children: Vec<ElementId>,
    /// Property values.
    pub schema: Schema,
}

impl Element {
    /// Create a new detached element.
    pub fn new(id: ElementId, kind: impl Into<String>, schema: Schema) -> Self {
        Self {
            id,
            kind: kind.into(),
            parent: None,
            children: Vec::new(),
            schema,
        }
    }

    /// Get a property value by name, untyped.
    pub fn get_raw(&self, key: &str) -> Option<&Value> {
        self.schema.get(key)
    }

    /// Get a property under a specific kind.
    ///
    /// An absent (or cleared) property yields the kind's default read; a
    /// property stored under a different kind is a KindMismatch, which is
    /// a distinct failure from absence.
    pub fn get<T: PropertyKind>(&self, key: &str) -> GraphResult<T> {
        match self.schema.get(key) {
            None | Some(Value::Null) => Ok(T::default_read()),
            Some(value) => T::from_value(value)
                .ok_or_else(|| GraphError::kind_mismatch(key, T::KIND, value.type_name())),
        }
    }

    /// Set a property value. Properties are created on first write;
    /// writing Null removes the entry.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        if value.is_null() {
            self.schema.remove(&key);
        } else {
            self.schema.insert(key, value);
        }
    }

    /// Remove a property, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.schema.remove(key)
    }

    /// Returns true if this element is the tree root (has no parent).
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
