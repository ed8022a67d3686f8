//! Canopy Element Graph
//!
//! In-memory storage for the element hierarchy.
//!
//! Responsibilities:
//! - Maintain node identity: O(1) lookup by id, ids unique across the graph
//! - Maintain the hierarchy: ordered children, parent back-references,
//!   no one-sided links after any operation
//! - Typed property access on elements resolved by id
//!
//! The id→element map is state owned by each graph instance, constructed
//! with it and torn down with it.

mod graph;

pub use graph::ElementGraph;
