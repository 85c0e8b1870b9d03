//! # Ledger Store (am-01)
//!
//! The narrow key-value contract every marketplace operation reads and writes
//! through. Nothing above this crate touches the underlying store directly.
//!
//! ## Responsibilities
//!
//! - **Key-value port**: `KeyValueStore` (get / put / ordered prefix scan /
//!   atomic batch write), implemented by in-memory, file-backed and RocksDB
//!   adapters.
//! - **Composite keys**: namespaced, collision-free keys built from string
//!   parts, and the inverse split used by range scans.
//! - **Write sets**: `LedgerTransaction` stages writes in memory so a
//!   multi-record update is validated completely before a single
//!   `atomic_batch_write` applies it.
//! - **Typed records**: `EntityStore` maps `LedgerRecord` entities to keys and
//!   JSON values.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement |
//! |----|-----------|-------------|
//! | 1 | Collision-free keys | `domain/composite_key.rs` rejects `U+0000` / `U+10FFFF` in parts |
//! | 2 | Absent is not an error | `KeyValueStore::get` returns `Ok(None)` |
//! | 3 | All-or-nothing commit | `KeyValueStore::atomic_batch_write` |
//! | 4 | Read-your-writes | `LedgerTransaction::get_state` consults the write set first |
//!
//! ## Usage
//!
//! ```ignore
//! use am_01_ledger_store::{EntityStore, InMemoryKVStore, KeyValueStore, LedgerTransaction};
//!
//! let mut kv = InMemoryKVStore::new();
//! let batch = {
//!     let mut store = EntityStore::new(LedgerTransaction::begin(&kv));
//!     store.put(&record)?;
//!     store.into_batch()
//! };
//! kv.atomic_batch_write(batch)?;
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::storage::{FileBackedKVStore, InMemoryKVStore};
#[cfg(feature = "rocksdb")]
pub use adapters::storage::{RocksDbConfig, RocksDbStore};
pub use domain::composite_key::{create_composite_key, split_composite_key, CompositeKey};
pub use domain::entity_store::{EntityStore, LedgerRecord};
pub use domain::errors::{KVStoreError, StoreError};
pub use domain::transaction::LedgerTransaction;
pub use ports::outbound::{BatchOperation, KeyValueStore, ScanResult};

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 1;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Ledger Store";
