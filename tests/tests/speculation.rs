//! Speculative apply / commit / rollback scenarios over a seeded scene.

use canopy_tests::prelude::*;

mod rollback_fidelity {
    use super::*;

    #[test]
    fn test_delete_rollback_restores_deep_subtree_exactly() {
        // GIVEN the furnished scene
        let mut store = furnished_store();
        let before: Vec<String> = store
            .graph()
            .subtree_ids("furniture")
            .iter()
            .map(|id| id.to_string())
            .collect();

        // WHEN deleting the furniture group speculatively and rolling back
        store
            .request(&Transaction::new("t").delete("furniture"))
            .unwrap();
        assert!(store.by_id("furniture").is_none());
        assert!(store.by_id("chair").is_none());
        store.rollback("t");

        // THEN the subtree is back: same ids, same order, same schema
        let after: Vec<String> = store
            .graph()
            .subtree_ids("furniture")
            .iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(before, after);
        let children: Vec<&str> = store
            .by_id("furniture")
            .unwrap()
            .children
            .iter()
            .map(|c| c.as_str())
            .collect();
        assert_eq!(children, vec!["chair", "table"]);
        assert_eq!(
            read_raw(&store, "chair", "legs"),
            Some(Value::Int(4))
        );
        assert_eq!(
            read_raw(&store, "chair", "color"),
            Some(Value::Color(ColorRgba::new(1.0, 0.0, 0.0, 1.0)))
        );

        // AND the group sits at its old sibling position under the root
        assert_eq!(store.graph().root().children[0].as_str(), "furniture");
    }

    #[test]
    fn test_mixed_batch_rolls_back_every_effect() {
        // GIVEN
        let mut store = furnished_store();

        // WHEN one transaction updates, creates, moves and deletes
        store
            .request(
                &Transaction::new("t")
                    .update("lamp", "intensity", 0.1f64)
                    .create("table", ElementData::new("vase", "Mesh"))
                    .move_to(
                        "lamp",
                        "furniture",
                        Vec3::new(0.0, 1.0, 0.0),
                        Vec3::ZERO,
                        Vec3::ONE,
                    )
                    .delete("chair"),
            )
            .unwrap();
        store.rollback("t");

        // THEN every property, link and element is back to the fixture
        assert_eq!(read_raw(&store, "lamp", "intensity"), Some(Value::Float(0.8)));
        assert!(store.by_id("vase").is_none());
        assert_eq!(
            store.by_id("lamp").unwrap().parent.as_ref().unwrap().as_str(),
            "root"
        );
        assert!(store.by_id("chair").is_some());
        assert_eq!(store.graph().len(), 5);
    }

    #[test]
    fn test_rollback_after_failed_request_restores_prefix() {
        // GIVEN
        let mut store = furnished_store();

        // WHEN the third action of a request fails
        let result = store.request(
            &Transaction::new("t")
                .update("lamp", "lit", false)
                .update("chair", "legs", 3i64)
                .delete("ghost"),
        );
        assert!(matches!(
            result,
            Err(StoreError::ActionFailed { index: 2, .. })
        ));

        // THEN the prefix took effect
        assert_eq!(read_raw(&store, "lamp", "lit"), Some(Value::Bool(false)));
        assert_eq!(read_raw(&store, "chair", "legs"), Some(Value::Int(3)));

        // AND rolling back the partial transaction undoes it
        store.rollback("t");
        assert_eq!(read_raw(&store, "lamp", "lit"), Some(Value::Bool(true)));
        assert_eq!(read_raw(&store, "chair", "legs"), Some(Value::Int(4)));
    }
}

mod batch_policy {
    use super::*;

    fn failing_batch(id: &str) -> Transaction {
        // Action 1 cannot resolve its target; actions 2.. must never run.
        Transaction::new(id)
            .update("lamp", "lit", false)
            .update("ghost", "x", 1i64)
            .create("root", ElementData::new("never", "Cube"))
    }

    #[test]
    fn test_apply_and_request_stop_at_same_point() {
        // GIVEN two identical stores
        let mut applied = furnished_store();
        let mut requested = furnished_store();

        // WHEN the same failing batch goes through each policy
        applied.apply(&failing_batch("a"));
        let _ = requested.request(&failing_batch("r"));

        // THEN both applied exactly the prefix [0, k)
        for store in [&applied, &requested] {
            assert_eq!(read_raw(store, "lamp", "lit"), Some(Value::Bool(false)));
            assert!(store.by_id("never").is_none());
        }
    }

    #[test]
    fn test_commit_never_mutates_the_graph() {
        // GIVEN a pending move
        let mut store = furnished_store();
        store
            .request(&Transaction::new("t").move_to(
                "chair",
                "root",
                Vec3::new(2.0, 0.0, 2.0),
                Vec3::ZERO,
                Vec3::ONE,
            ))
            .unwrap();
        let parent_before = store.by_id("chair").unwrap().parent.clone();
        let position_before = read_raw(&store, "chair", keys::POSITION);

        // WHEN committing
        store.commit("t");

        // THEN the speculative state is the final state, unchanged
        assert_eq!(store.by_id("chair").unwrap().parent, parent_before);
        assert_eq!(read_raw(&store, "chair", keys::POSITION), position_before);
    }

    #[test]
    fn test_terminal_states_stay_terminal() {
        // GIVEN a committed transaction
        let mut store = furnished_store();
        store
            .request(&Transaction::new("t").update("lamp", "lit", false))
            .unwrap();
        store.commit("t");

        // WHEN rolling it back afterwards
        store.rollback("t");

        // THEN the committed effect is untouched
        assert_eq!(read_raw(&store, "lamp", "lit"), Some(Value::Bool(false)));

        // AND the id can be reused for a fresh request once resolved
        store
            .request(&Transaction::new("t").update("lamp", "lit", true))
            .unwrap();
        store.rollback("t");
        assert_eq!(read_raw(&store, "lamp", "lit"), Some(Value::Bool(false)));
    }
}
