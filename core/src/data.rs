//! Serializable element descriptions.
//!
//! `ElementData` is the wire form of an element subtree: enough to
//! instantiate it under a parent. Inbound Create actions carry one, and
//! Delete snapshots one so the inverse Create can rebuild exactly what
//! was removed (ids, kinds, schema, child order).

use crate::{ElementId, Schema, Value};
use serde::{Deserialize, Serialize};

/// Description of an element subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementData {
    /// Id the instantiated root will carry.
    pub id: ElementId,
    /// Element kind.
    #[serde(rename = "type")]
    pub kind: String,
    /// Initial property values.
    #[serde(default)]
    pub schema: Schema,
    /// Nested children, in sibling order.
    #[serde(default)]
    pub children: Vec<ElementData>,
}

impl ElementData {
    /// Create a description with no properties or children.
    pub fn new(id: impl Into<ElementId>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            schema: Schema::new(),
            children: Vec::new(),
        }
    }

    /// Add an initial property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.schema.insert(key.into(), value.into());
        self
    }

    /// Append a child description.
    pub fn with_child(mut self, child: ElementData) -> Self {
        self.children.push(child);
        self
    }

    /// Collect every id in the described subtree, depth-first.
    pub fn collect_ids(&self, out: &mut Vec<ElementId>) {
        out.push(self.id.clone());
        for child in &self.children {
            child.collect_ids(out);
        }
    }
}
