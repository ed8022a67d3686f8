//! Core element graph storage.

use canopy_core::{Element, ElementData, ElementId, GraphError, GraphResult, PropertyKind, Value};
use std::collections::HashMap;

/// The in-memory element hierarchy.
///
/// Owns every element in an arena keyed by id; elements refer to each
/// other only by id. The root is created with the graph and can never be
/// detached, moved or deleted.
#[derive(Debug)]
pub struct ElementGraph {
    /// Element storage.
    elements: HashMap<ElementId, Element>,
    /// Id of the root element.
    root: ElementId,
}

impl Default for ElementGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementGraph {
    /// Create a graph holding only a root element with id `"root"`.
    pub fn new() -> Self {
        Self::with_root("root", "Root")
    }

    /// Create a graph with a root of the given id and kind.
    pub fn with_root(id: impl Into<ElementId>, kind: impl Into<String>) -> Self {
        let root_id = id.into();
        let root = Element::new(root_id.clone(), kind, canopy_core::Schema::new());
        let mut elements = HashMap::new();
        elements.insert(root_id.clone(), root);
        Self {
            elements,
            root: root_id,
        }
    }

    // ==================== Lookup ====================

    /// Get an element by id.
    pub fn by_id(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Get a mutable reference to an element by id.
    pub fn by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// Returns true if an element with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// The root element's id.
    pub fn root_id(&self) -> &ElementId {
        &self.root
    }

    /// The root element.
    pub fn root(&self) -> &Element {
        &self.elements[&self.root]
    }

    /// Number of elements in the graph, root included.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    // ==================== Structure ====================

    /// Add a detached element to the arena.
    ///
    /// The element is not reachable from the root until attached.
    pub fn insert_detached(&mut self, element: Element) -> GraphResult<()> {
        if self.elements.contains_key(&element.id) {
            return Err(GraphError::DuplicateId(element.id));
        }
        if let Some(parent) = &element.parent {
            return Err(GraphError::AlreadyAttached {
                child: element.id.clone(),
                parent: parent.clone(),
            });
        }
        self.elements.insert(element.id.clone(), element);
        Ok(())
    }

    /// Append `child` to `parent`'s children and set the back-reference.
    pub fn attach(&mut self, parent: &ElementId, child: &ElementId) -> GraphResult<()> {
        self.attach_impl(parent, child, None)
    }

    /// Attach `child` at a specific sibling position under `parent`.
    ///
    /// An index past the end appends.
    pub fn attach_at(
        &mut self,
        parent: &ElementId,
        child: &ElementId,
        index: usize,
    ) -> GraphResult<()> {
        self.attach_impl(parent, child, Some(index))
    }

    fn attach_impl(
        &mut self,
        parent: &ElementId,
        child: &ElementId,
        index: Option<usize>,
    ) -> GraphResult<()> {
        if !self.elements.contains_key(parent.as_str()) {
            return Err(GraphError::ElementNotFound(parent.clone()));
        }
        let child_el = self
            .elements
            .get(child.as_str())
            .ok_or_else(|| GraphError::ElementNotFound(child.clone()))?;
        if *child == self.root {
            return Err(GraphError::RootImmutable);
        }
        if let Some(existing) = &child_el.parent {
            return Err(GraphError::AlreadyAttached {
                child: child.clone(),
                parent: existing.clone(),
            });
        }
        if parent == child || self.is_ancestor(child, parent) {
            return Err(GraphError::WouldCycle {
                parent: parent.clone(),
                child: child.clone(),
            });
        }

        let parent_el = self.elements.get_mut(parent.as_str()).unwrap();
        let at = index
            .unwrap_or(parent_el.children.len())
            .min(parent_el.children.len());
        parent_el.children.insert(at, child.clone());
        self.elements.get_mut(child.as_str()).unwrap().parent = Some(parent.clone());
        Ok(())
    }

    /// Remove `child` from its parent's children and clear the
    /// back-reference. Returns the former parent and sibling index, or
    /// `None` if the child was already detached.
    pub fn detach(&mut self, child: &ElementId) -> GraphResult<Option<(ElementId, usize)>> {
        if *child == self.root {
            return Err(GraphError::RootImmutable);
        }
        let child_el = self
            .elements
            .get(child.as_str())
            .ok_or_else(|| GraphError::ElementNotFound(child.clone()))?;
        let Some(parent) = child_el.parent.clone() else {
            return Ok(None);
        };

        let parent_el = self.elements.get_mut(parent.as_str()).unwrap();
        let index = parent_el
            .children
            .iter()
            .position(|c| c == child)
            .expect("parent/child links out of sync");
        parent_el.children.remove(index);
        self.elements.get_mut(child.as_str()).unwrap().parent = None;
        Ok(Some((parent, index)))
    }

    /// Discard a detached element and all its descendants from the arena.
    pub fn remove_subtree(&mut self, id: &ElementId) -> GraphResult<()> {
        if *id == self.root {
            return Err(GraphError::RootImmutable);
        }
        let el = self
            .elements
            .get(id.as_str())
            .ok_or_else(|| GraphError::ElementNotFound(id.clone()))?;
        if let Some(parent) = &el.parent {
            return Err(GraphError::AlreadyAttached {
                child: id.clone(),
                parent: parent.clone(),
            });
        }
        for sub_id in self.subtree_ids(id.as_str()) {
            self.elements.remove(sub_id.as_str());
        }
        Ok(())
    }

    // ==================== Properties ====================

    /// Set a property on an element resolved by id.
    pub fn set_property(&mut self, id: &ElementId, key: &str, value: Value) -> GraphResult<()> {
        let el = self
            .elements
            .get_mut(id.as_str())
            .ok_or_else(|| GraphError::ElementNotFound(id.clone()))?;
        el.set(key, value);
        Ok(())
    }

    /// Read a property under a specific kind on an element resolved by id.
    pub fn get_property<T: PropertyKind>(&self, id: &str, key: &str) -> GraphResult<T> {
        let el = self
            .elements
            .get(id)
            .ok_or_else(|| GraphError::ElementNotFound(ElementId::new(id)))?;
        el.get(key)
    }

    // ==================== Traversal ====================

    /// Returns true if `ancestor` appears on `of`'s parent chain.
    pub fn is_ancestor(&self, ancestor: &ElementId, of: &ElementId) -> bool {
        let mut current = self
            .elements
            .get(of.as_str())
            .and_then(|el| el.parent.as_ref());
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self
                .elements
                .get(id.as_str())
                .and_then(|el| el.parent.as_ref());
        }
        false
    }

    /// Ids of an element and all its descendants, depth-first.
    ///
    /// Empty if the id does not resolve.
    pub fn subtree_ids(&self, id: &str) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack: Vec<&str> = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(el) = self.elements.get(current) {
                out.push(el.id.clone());
                for child in el.children.iter().rev() {
                    stack.push(child.as_str());
                }
            }
        }
        out
    }

    /// Full recursive copy of an element subtree: ids, kinds, schema and
    /// child order all survive.
    pub fn snapshot(&self, id: &str) -> Option<ElementData> {
        let el = self.elements.get(id)?;
        let mut data = ElementData::new(el.id.clone(), el.kind.clone());
        data.schema = el.schema.clone();
        for child in &el.children {
            // Children of a live element always resolve.
            data.children.push(self.snapshot(child.as_str())?);
        }
        Some(data)
    }
}
