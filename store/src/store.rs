//! Transaction store - speculative apply with deferred commit/rollback.

use std::collections::{HashMap, HashSet};

use canopy_action::{Action, ActionExecutor};
use canopy_core::{Element, ElementId};
use canopy_graph::ElementGraph;

use crate::error::{StoreError, StoreResult};
use crate::transaction::Transaction;

/// Record of a transaction applied speculatively, awaiting the remote
/// authority's answer.
#[derive(Debug, Clone)]
struct PendingTransaction {
    /// The transaction as requested.
    txn: Transaction,
    /// Inverses of the applied prefix, in application order. Its length
    /// is the number of actions that took effect.
    undo: Vec<Action>,
    /// Element ids the transaction targets, for overlap rejection.
    touched: HashSet<ElementId>,
}

/// Orchestrates immediate application of transactions against the element
/// graph and the pending-transaction lifecycle.
///
/// Per transaction id the lifecycle is
/// `None -> Pending (request) -> {Committed, RolledBack}`; both end states
/// are terminal, and `commit`/`rollback` on a non-pending id are no-ops.
/// `apply` never creates a pending record.
///
/// A pending record is retained until `commit` or `rollback` is called —
/// there is no timeout, so a caller that never resolves a request leaks
/// its record.
pub struct TransactionStore {
    graph: ElementGraph,
    pending: HashMap<String, PendingTransaction>,
    reject_pending_overlap: bool,
}

impl TransactionStore {
    /// Create a store over a graph.
    pub fn new(graph: ElementGraph) -> Self {
        Self {
            graph,
            pending: HashMap::new(),
            reject_pending_overlap: false,
        }
    }

    /// The element graph, read-only. Outward lookup surface for
    /// collaborators resolving elements referenced by a transaction.
    pub fn graph(&self) -> &ElementGraph {
        &self.graph
    }

    /// Resolve an element by id.
    pub fn by_id(&self, id: &str) -> Option<&Element> {
        self.graph.by_id(id)
    }

    /// When enabled, `request` refuses transactions that target an
    /// element another pending transaction already touches. Off by
    /// default: overlapping requests are last-applied-wins with
    /// independent undo logs, and rolling back the older one can
    /// overwrite the newer one's edits.
    pub fn set_reject_pending_overlap(&mut self, enabled: bool) {
        self.reject_pending_overlap = enabled;
    }

    /// Returns true if a transaction with this id is pending.
    pub fn has_pending(&self, id: &str) -> bool {
        self.pending.contains_key(id)
    }

    /// Number of transactions awaiting commit or rollback.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    // ========== Lifecycle ==========

    /// Apply a transaction best-effort, retaining no undo log.
    ///
    /// Actions run in order; the first failure is logged and aborts the
    /// *remaining* actions, while actions already applied stay applied.
    /// Used for edits that are already authoritative (a confirmed remote
    /// edit arriving over the bus), where discarding valid prior work in
    /// the batch would be worse than a partial application.
    pub fn apply(&mut self, txn: &Transaction) {
        for (index, action) in txn.actions().iter().enumerate() {
            if let Err(err) = ActionExecutor::new(&mut self.graph).execute(action) {
                tracing::error!(
                    "transaction {}: action {} ({}) failed: {}; dropping remaining actions",
                    txn.id(),
                    index,
                    action.kind(),
                    err
                );
                break;
            }
        }
    }

    /// Apply a transaction speculatively, recording inverses under its id
    /// pending remote confirmation.
    ///
    /// Iteration and failure policy match [`apply`](Self::apply): a
    /// mid-batch failure stops processing and is returned as
    /// `StoreError::ActionFailed` — but the pending record is still
    /// stored with the inverses accumulated before the failure, so the
    /// caller can `rollback` the partial effect. On `Ok(())` the caller
    /// forwards the transaction to the remote authority and later calls
    /// `commit` or `rollback` with the same id.
    pub fn request(&mut self, txn: &Transaction) -> StoreResult<()> {
        if self.pending.contains_key(txn.id()) {
            return Err(StoreError::AlreadyPending {
                id: txn.id().to_string(),
            });
        }

        let touched = transaction_targets(txn);
        if self.reject_pending_overlap {
            for (pending_id, record) in &self.pending {
                if let Some(element) = touched.iter().find(|t| record.touched.contains(*t)) {
                    return Err(StoreError::ElementBusy {
                        element: element.clone(),
                        pending: pending_id.clone(),
                    });
                }
            }
        }

        let mut undo = Vec::new();
        let mut failure = None;
        for (index, action) in txn.actions().iter().enumerate() {
            match ActionExecutor::new(&mut self.graph).execute(action) {
                Ok(inverse) => undo.push(inverse),
                Err(source) => {
                    failure = Some(StoreError::ActionFailed {
                        index,
                        kind: action.kind(),
                        source,
                    });
                    break;
                }
            }
        }

        self.pending.insert(
            txn.id().to_string(),
            PendingTransaction {
                txn: txn.clone(),
                undo,
                touched,
            },
        );

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Confirm a pending transaction: drop its undo log, keeping its
    /// effects. The speculative state already is the final state, so the
    /// graph is not touched. Unknown ids (a second commit, or a commit
    /// after rollback) are silently ignored.
    pub fn commit(&mut self, id: &str) {
        if self.pending.remove(id).is_some() {
            tracing::debug!("transaction {} committed", id);
        }
    }

    /// Reject a pending transaction: replay its undo log in reverse
    /// order through the executor, then drop the record.
    ///
    /// Each inverse is an ordinary action, so a rollback of a rollback is
    /// symmetric. An inverse that fails to replay is logged and skipped;
    /// the remaining inverses still run. Unknown ids log a warning and do
    /// nothing.
    pub fn rollback(&mut self, id: &str) {
        let Some(record) = self.pending.remove(id) else {
            tracing::warn!("rollback of unknown transaction {}", id);
            return;
        };

        for inverse in record.undo.iter().rev() {
            if let Err(err) = ActionExecutor::new(&mut self.graph).execute(inverse) {
                tracing::warn!(
                    "rollback of {}: inverse {} failed: {}",
                    record.txn.id(),
                    inverse.kind(),
                    err
                );
            }
        }
    }
}

/// Element ids a transaction targets: the subjects of its updates,
/// deletes and moves, the parents it creates under and moves to, and
/// every id a create would instantiate.
fn transaction_targets(txn: &Transaction) -> HashSet<ElementId> {
    let mut targets = HashSet::new();
    for action in txn.actions() {
        match action {
            Action::Update { element, .. } | Action::Delete { element } => {
                targets.insert(element.clone());
            }
            Action::Create { parent, data, .. } => {
                targets.insert(parent.clone());
                let mut ids = Vec::new();
                data.collect_ids(&mut ids);
                targets.extend(ids);
            }
            Action::Move {
                element,
                new_parent,
                ..
            } => {
                targets.insert(element.clone());
                targets.insert(new_parent.clone());
            }
            Action::Invalid => {}
        }
    }
    targets
}
