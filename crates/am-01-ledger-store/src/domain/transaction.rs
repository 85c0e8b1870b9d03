//! # Ledger Transaction
//!
//! A staged write set over a read-only view of a `KeyValueStore`.
//!
//! Operations read through the transaction, stage their writes on it, and
//! hand the finished write set to `KeyValueStore::atomic_batch_write`. A
//! transaction that is dropped instead of committed leaves the store
//! untouched, which is how a failed validation produces zero writes.

use std::collections::BTreeMap;
use std::ops::Bound;

use crate::domain::errors::KVStoreError;
use crate::ports::outbound::{BatchOperation, KeyValueStore, ScanResult};

/// Staged writes over a store snapshot.
///
/// `None` in the write set marks a staged delete.
pub struct LedgerTransaction<'a, KV: KeyValueStore + ?Sized> {
    store: &'a KV,
    write_set: BTreeMap<Vec<u8>, Option<Vec<u8>>>,
}

impl<'a, KV: KeyValueStore + ?Sized> LedgerTransaction<'a, KV> {
    /// Open a transaction reading from `store`.
    pub fn begin(store: &'a KV) -> Self {
        Self {
            store,
            write_set: BTreeMap::new(),
        }
    }

    /// Read a key, observing this transaction's own staged writes first.
    pub fn get_state(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        match self.write_set.get(key) {
            Some(staged) => Ok(staged.clone()),
            None => self.store.get(key),
        }
    }

    /// Stage a write.
    pub fn put_state(&mut self, key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) {
        self.write_set.insert(key.into(), Some(value.into()));
    }

    /// Stage a delete.
    pub fn delete_state(&mut self, key: impl Into<Vec<u8>>) {
        self.write_set.insert(key.into(), None);
    }

    /// Ordered prefix scan merging committed state with staged writes.
    pub fn prefix_scan(&self, prefix: &[u8]) -> Result<ScanResult, KVStoreError> {
        let mut merged: BTreeMap<Vec<u8>, Vec<u8>> =
            self.store.prefix_scan(prefix)?.into_iter().collect();

        let staged = self
            .write_set
            .range::<[u8], _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(|(key, _)| key.starts_with(prefix));

        for (key, value) in staged {
            match value {
                Some(value) => {
                    merged.insert(key.clone(), value.clone());
                }
                None => {
                    merged.remove(key);
                }
            }
        }

        Ok(merged.into_iter().collect())
    }

    /// Number of staged writes and deletes.
    pub fn pending_writes(&self) -> usize {
        self.write_set.len()
    }

    /// Consume the transaction, yielding its write set in key order.
    pub fn into_batch(self) -> Vec<BatchOperation> {
        self.write_set
            .into_iter()
            .map(|(key, value)| match value {
                Some(value) => BatchOperation::Put { key, value },
                None => BatchOperation::Delete { key },
            })
            .collect()
    }
}
