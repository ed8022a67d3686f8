//! Shared fixtures for canopy integration tests.

pub mod prelude {
    pub use canopy_action::{Action, ActionError, ActionExecutor};
    pub use canopy_core::{
        keys, schema, ColorRgba, Element, ElementData, ElementId, Value, Vec3,
    };
    pub use canopy_graph::ElementGraph;
    pub use canopy_store::{StoreError, Transaction, TransactionStore};

    pub use crate::{furnished_store, read_raw};
}

use canopy_core::{ColorRgba, ElementData, Value};
use canopy_graph::ElementGraph;
use canopy_store::{Transaction, TransactionStore};

/// A store seeded with a small scene:
///
/// ```text
/// root
/// ├── furniture (Group)
/// │   ├── chair (Mesh, color=red, legs=4)
/// │   └── table (Mesh, legs=4)
/// └── lamp (Light, intensity=0.8, lit=true)
/// ```
pub fn furnished_store() -> TransactionStore {
    let mut store = TransactionStore::new(ElementGraph::new());
    store.apply(
        &Transaction::new("fixture")
            .create(
                "root",
                ElementData::new("furniture", "Group")
                    .with_child(
                        ElementData::new("chair", "Mesh")
                            .with_property("color", ColorRgba::new(1.0, 0.0, 0.0, 1.0))
                            .with_property("legs", 4i64),
                    )
                    .with_child(ElementData::new("table", "Mesh").with_property("legs", 4i64)),
            )
            .create(
                "root",
                ElementData::new("lamp", "Light")
                    .with_property("intensity", 0.8f64)
                    .with_property("lit", true),
            ),
    );
    assert_eq!(store.graph().len(), 5, "fixture should seed cleanly");
    store
}

/// Read an element property untyped, None if the element or property is
/// absent.
pub fn read_raw(store: &TransactionStore, id: &str, key: &str) -> Option<Value> {
    store.by_id(id).and_then(|el| el.get_raw(key).cloned())
}
