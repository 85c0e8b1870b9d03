//! # Store Selection
//!
//! Opens the configured ledger backend behind one `KeyValueStore` type.

use am_01_ledger_store::{
    BatchOperation, FileBackedKVStore, InMemoryKVStore, KVStoreError, KeyValueStore, ScanResult,
};
#[cfg(feature = "rocksdb")]
use am_01_ledger_store::RocksDbStore;
use thiserror::Error;
use tracing::info;

use crate::config::{ConfigError, NodeConfig, StoreKind};

/// Failure to bring up the ledger backend.
#[derive(Debug, Error)]
pub enum StoreOpenError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot open {kind} store: {source}")]
    Backend {
        kind: StoreKind,
        #[source]
        source: KVStoreError,
    },
}

/// The backend chosen at startup.
pub enum NodeStore {
    Memory(InMemoryKVStore),
    File(FileBackedKVStore),
    #[cfg(feature = "rocksdb")]
    RocksDb(RocksDbStore),
}

impl NodeStore {
    /// Open the backend named by `config.store`.
    pub fn open(config: &NodeConfig) -> Result<Self, StoreOpenError> {
        let backend = |source: KVStoreError| StoreOpenError::Backend {
            kind: config.store,
            source,
        };

        let store = match config.store {
            StoreKind::Memory => Self::Memory(InMemoryKVStore::new()),
            StoreKind::File => {
                Self::File(FileBackedKVStore::open(config.state_file()).map_err(backend)?)
            }
            #[cfg(feature = "rocksdb")]
            StoreKind::RocksDb => {
                Self::RocksDb(RocksDbStore::open_default(config.rocksdb_dir()).map_err(backend)?)
            }
            #[cfg(not(feature = "rocksdb"))]
            StoreKind::RocksDb => return Err(ConfigError::Unsupported(StoreKind::RocksDb).into()),
        };

        info!(store = %config.store, data_dir = %config.data_dir.display(), "Ledger store opened");
        Ok(store)
    }

    pub fn kind(&self) -> StoreKind {
        match self {
            Self::Memory(_) => StoreKind::Memory,
            Self::File(_) => StoreKind::File,
            #[cfg(feature = "rocksdb")]
            Self::RocksDb(_) => StoreKind::RocksDb,
        }
    }

    fn inner(&self) -> &dyn KeyValueStore {
        match self {
            Self::Memory(store) => store,
            Self::File(store) => store,
            #[cfg(feature = "rocksdb")]
            Self::RocksDb(store) => store,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn KeyValueStore {
        match self {
            Self::Memory(store) => store,
            Self::File(store) => store,
            #[cfg(feature = "rocksdb")]
            Self::RocksDb(store) => store,
        }
    }
}

impl KeyValueStore for NodeStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        self.inner().get(key)
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        self.inner_mut().put(key, value)
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), KVStoreError> {
        self.inner_mut().delete(key)
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError> {
        self.inner_mut().atomic_batch_write(operations)
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        self.inner().exists(key)
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<ScanResult, KVStoreError> {
        self.inner().prefix_scan(prefix)
    }
}
