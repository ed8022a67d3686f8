//! Inbound remote edit batches: decoded into a Transaction, then applied
//! without a local undo log.

use canopy_tests::prelude::*;

#[test]
fn test_decoded_batch_applies_like_a_local_one() {
    // GIVEN a wire batch from a confirmed remote source
    let json = r#"{
        "id": "remote-42",
        "actions": [
            {"type": "create", "parent": "root",
             "data": {"id": "shelf", "type": "Mesh",
                      "schema": {"legs": {"Int": 0}},
                      "children": [{"id": "book", "type": "Mesh"}]}},
            {"type": "update", "element": "book", "key": "title",
             "value": {"String": "Walden"}},
            {"type": "move", "element": "lamp", "new_parent": "shelf",
             "position": {"x": 0.0, "y": 0.5, "z": 0.0},
             "rotation": {"x": 0.0, "y": 0.0, "z": 0.0},
             "scale": {"x": 1.0, "y": 1.0, "z": 1.0}}
        ]
    }"#;
    let txn: Transaction = serde_json::from_str(json).unwrap();

    // WHEN applying it
    let mut store = furnished_store();
    store.apply(&txn);

    // THEN every decoded action took effect in order
    assert_eq!(
        store.by_id("book").unwrap().parent.as_ref().unwrap().as_str(),
        "shelf"
    );
    assert_eq!(
        read_raw(&store, "book", "title"),
        Some(Value::String("Walden".into()))
    );
    assert_eq!(
        store.by_id("lamp").unwrap().parent.as_ref().unwrap().as_str(),
        "shelf"
    );

    // AND confirmed remote edits never become pending
    assert_eq!(store.pending_count(), 0);
}

#[test]
fn test_unrecognized_tag_aborts_remaining_actions() {
    // GIVEN a batch whose first action has a tag this core does not know
    let json = r#"{
        "id": "remote-43",
        "actions": [
            {"type": "sparkle", "element": "lamp"},
            {"type": "create", "parent": "root",
             "data": {"id": "aa", "type": "Cube"}}
        ]
    }"#;
    let txn: Transaction = serde_json::from_str(json).unwrap();
    assert_eq!(txn.actions()[0], Action::Invalid);

    // WHEN applying it
    let mut store = furnished_store();
    store.apply(&txn);

    // THEN aa is never created
    assert!(store.by_id("aa").is_none());
}

#[test]
fn test_unrecognized_tag_mid_batch_keeps_prior_work() {
    // GIVEN a valid action ahead of an undecodable one
    let json = r#"{
        "id": "remote-44",
        "actions": [
            {"type": "update", "element": "lamp", "key": "lit",
             "value": {"Bool": false}},
            {"type": "sparkle", "element": "lamp"},
            {"type": "delete", "element": "lamp"}
        ]
    }"#;
    let txn: Transaction = serde_json::from_str(json).unwrap();

    // WHEN applying it
    let mut store = furnished_store();
    store.apply(&txn);

    // THEN the valid prefix stays applied and the suffix never ran
    assert_eq!(read_raw(&store, "lamp", "lit"), Some(Value::Bool(false)));
    assert!(store.by_id("lamp").is_some());
}
