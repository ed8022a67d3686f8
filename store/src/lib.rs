//! Canopy Transaction Store
//!
//! Optimistic transactional mutation over the element graph.
//!
//! Responsibilities:
//! - Build named, ordered batches of actions (Transaction)
//! - Apply batches immediately, before any remote round trip completes
//! - Record inverse actions per pending transaction (the undo log)
//! - Commit (drop the undo log) or roll back (replay it in reverse) once
//!   the remote authority answers
//!
//! Single-threaded and synchronous throughout: callers serialize all
//! calls onto one logical thread, and the confirm/reject round trip
//! happens entirely outside this crate.

mod error;
mod store;
mod transaction;

pub use error::{StoreError, StoreResult};
pub use store::TransactionStore;
pub use transaction::Transaction;
