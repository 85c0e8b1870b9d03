//! # Entity Store
//!
//! Typed access to ledger records. Each record type owns one composite-key
//! namespace and is stored as JSON under `namespace + [record_id]`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::composite_key::{create_composite_key, split_composite_key};
use crate::domain::errors::StoreError;
use crate::domain::transaction::LedgerTransaction;
use crate::ports::outbound::{BatchOperation, KeyValueStore};

/// An entity persisted in its own ledger namespace.
pub trait LedgerRecord: Serialize + DeserializeOwned {
    /// Composite-key namespace for this record type.
    const NAMESPACE: &'static str;

    /// Primary key within the namespace.
    fn record_id(&self) -> String;
}

/// Record-level view of a `LedgerTransaction`.
pub struct EntityStore<'a, KV: KeyValueStore + ?Sized> {
    tx: LedgerTransaction<'a, KV>,
}

impl<'a, KV: KeyValueStore + ?Sized> EntityStore<'a, KV> {
    /// Wrap an open transaction.
    pub fn new(tx: LedgerTransaction<'a, KV>) -> Self {
        Self { tx }
    }

    /// Open a fresh transaction on `store`.
    pub fn begin(store: &'a KV) -> Self {
        Self::new(LedgerTransaction::begin(store))
    }

    /// Build the ledger key for `namespace` + `parts`.
    pub fn make_key<S: AsRef<str>>(namespace: &str, parts: &[S]) -> Result<String, StoreError> {
        create_composite_key(namespace, parts)
    }

    /// Ledger key of the record `id` of type `R`.
    pub fn key_of<R: LedgerRecord>(id: &str) -> Result<String, StoreError> {
        Self::make_key(R::NAMESPACE, &[id])
    }

    /// Raw read. Missing and zero-length values are both absent.
    pub fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let value = self.tx.get_state(key.as_bytes())?;
        Ok(value.filter(|bytes| !bytes.is_empty()))
    }

    /// Raw staged write.
    pub fn put_raw(&mut self, key: &str, value: Vec<u8>) {
        self.tx.put_state(key.as_bytes().to_vec(), value);
    }

    /// Load record `id`, `None` if it was never written.
    pub fn get<R: LedgerRecord>(&self, id: &str) -> Result<Option<R>, StoreError> {
        let key = Self::key_of::<R>(id)?;
        match self.get_raw(&key)? {
            Some(bytes) => decode(&key, &bytes).map(Some),
            None => Ok(None),
        }
    }

    /// Stage `record` at its key, overwriting any previous value.
    pub fn put<R: LedgerRecord>(&mut self, record: &R) -> Result<(), StoreError> {
        let key = Self::key_of::<R>(&record.record_id())?;
        let bytes = serde_json::to_vec(record).map_err(|e| StoreError::encoding(&key, e))?;
        self.put_raw(&key, bytes);
        Ok(())
    }

    /// Every record of type `R`, ordered by key, paired with the id taken
    /// from its composite key. Zero-length values are skipped, as in `get`.
    pub fn scan<R: LedgerRecord>(&self) -> Result<Vec<(String, R)>, StoreError> {
        let prefix = Self::make_key::<&str>(R::NAMESPACE, &[])?;
        let entries = self.tx.prefix_scan(prefix.as_bytes())?;

        let mut records = Vec::with_capacity(entries.len());
        for (raw_key, bytes) in entries {
            if bytes.is_empty() {
                continue;
            }
            let key = String::from_utf8(raw_key)
                .map_err(|e| StoreError::invalid_key(format!("non UTF-8 ledger key: {e}")))?;
            let (_, parts) = split_composite_key(&key)?;
            let id = parts
                .into_iter()
                .next()
                .ok_or_else(|| StoreError::invalid_key(format!("{key:?} has no id part")))?;
            records.push((id, decode(&key, &bytes)?));
        }
        Ok(records)
    }

    /// Consume the store, yielding the staged write set.
    pub fn into_batch(self) -> Vec<BatchOperation> {
        self.tx.into_batch()
    }
}

fn decode<R: DeserializeOwned>(key: &str, bytes: &[u8]) -> Result<R, StoreError> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::encoding(key, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryKVStore;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Widget {
        name: String,
        weight: u32,
    }

    impl LedgerRecord for Widget {
        const NAMESPACE: &'static str = "WIDGET";

        fn record_id(&self) -> String {
            self.name.clone()
        }
    }

    fn widget(name: &str, weight: u32) -> Widget {
        Widget {
            name: name.to_string(),
            weight,
        }
    }

    #[test]
    fn test_get_absent_is_none() {
        let kv = InMemoryKVStore::new();
        let store = EntityStore::begin(&kv);
        assert_eq!(store.get::<Widget>("missing").unwrap(), None);
    }

    #[test]
    fn test_put_then_get_and_commit() {
        let mut kv = InMemoryKVStore::new();
        let batch = {
            let mut store = EntityStore::begin(&kv);
            store.put(&widget("gear", 3)).unwrap();
            assert_eq!(store.get::<Widget>("gear").unwrap(), Some(widget("gear", 3)));
            store.into_batch()
        };
        kv.atomic_batch_write(batch).unwrap();

        let store = EntityStore::begin(&kv);
        assert_eq!(store.get::<Widget>("gear").unwrap(), Some(widget("gear", 3)));

        let key = EntityStore::<InMemoryKVStore>::key_of::<Widget>("gear").unwrap();
        let raw = kv.get(key.as_bytes()).unwrap().unwrap();
        assert_eq!(raw, br#"{"name":"gear","weight":3}"#.to_vec());
    }

    #[test]
    fn test_scan_extracts_ids_in_order() {
        let kv = InMemoryKVStore::new();
        let mut store = EntityStore::begin(&kv);
        store.put(&widget("b", 2)).unwrap();
        store.put(&widget("a", 1)).unwrap();
        store.put_raw(
            &EntityStore::<InMemoryKVStore>::make_key("OTHER", &["x"]).unwrap(),
            b"{}".to_vec(),
        );

        let scanned = store.scan::<Widget>().unwrap();
        assert_eq!(
            scanned,
            vec![
                ("a".to_string(), widget("a", 1)),
                ("b".to_string(), widget("b", 2)),
            ]
        );
    }

    #[test]
    fn test_malformed_record_is_encoding_error() {
        let mut kv = InMemoryKVStore::new();
        let key = EntityStore::<InMemoryKVStore>::key_of::<Widget>("bad").unwrap();
        kv.put(key.as_bytes(), b"not json").unwrap();

        let store = EntityStore::begin(&kv);
        assert!(matches!(
            store.get::<Widget>("bad"),
            Err(StoreError::Encoding { .. })
        ));
    }

    #[test]
    fn test_empty_value_is_absent() {
        let mut kv = InMemoryKVStore::new();
        let key = EntityStore::<InMemoryKVStore>::key_of::<Widget>("hollow").unwrap();
        kv.put(key.as_bytes(), b"").unwrap();

        let store = EntityStore::begin(&kv);
        assert_eq!(store.get::<Widget>("hollow").unwrap(), None);
    }

    #[test]
    fn test_scan_skips_empty_values() {
        let mut kv = InMemoryKVStore::new();
        let key = EntityStore::<InMemoryKVStore>::key_of::<Widget>("hollow").unwrap();
        kv.put(key.as_bytes(), b"").unwrap();

        let mut store = EntityStore::begin(&kv);
        store.put(&widget("gear", 3)).unwrap();

        assert_eq!(
            store.scan::<Widget>().unwrap(),
            vec![("gear".to_string(), widget("gear", 3))]
        );
    }
}
