use super::memory::{apply_batch, scan_prefix};
use crate::domain::errors::KVStoreError;
use crate::ports::outbound::{BatchOperation, KeyValueStore, ScanResult};
use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// File-backed key-value store for hosts without RocksDB.
///
/// Keeps the full state in memory and rewrites the file after every
/// mutation (write to `*.tmp`, fsync, rename), so a crash leaves either the
/// old or the new state on disk.
pub struct FileBackedKVStore {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
    path: PathBuf,
}

impl FileBackedKVStore {
    /// Open the store at `path`, creating it empty if the file is missing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, KVStoreError> {
        let path = path.as_ref().to_path_buf();

        let data = if path.exists() {
            let data = Self::load_from_file(&path)?;
            #[cfg(feature = "tracing-log")]
            tracing::info!(
                "[am-01] Loaded {} keys from {}",
                data.len(),
                path.display()
            );
            data
        } else {
            #[cfg(feature = "tracing-log")]
            tracing::info!("[am-01] No existing storage file at {}", path.display());
            BTreeMap::new()
        };

        Ok(Self { data, path })
    }

    fn load_from_file(path: &Path) -> Result<BTreeMap<Vec<u8>, Vec<u8>>, KVStoreError> {
        let mut file = std::fs::File::open(path).map_err(io_error)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(io_error)?;

        // Binary format: [key_len:u32][key][value_len:u32][value]...
        let mut data = BTreeMap::new();
        let mut cursor = 0;

        while cursor < bytes.len() {
            let key = read_chunk(&bytes, &mut cursor)?;
            let value = read_chunk(&bytes, &mut cursor)?;
            data.insert(key, value);
        }

        Ok(data)
    }

    fn save_to_file(&self, data: &BTreeMap<Vec<u8>, Vec<u8>>) -> Result<(), KVStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }

        let mut bytes = Vec::new();
        for (key, value) in data {
            write_chunk(&mut bytes, key)?;
            write_chunk(&mut bytes, value)?;
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file = std::fs::File::create(&temp_path).map_err(io_error)?;
        file.write_all(&bytes).map_err(io_error)?;
        file.sync_all().map_err(io_error)?;
        std::fs::rename(&temp_path, &self.path).map_err(io_error)?;

        Ok(())
    }

    /// Persist `next` and adopt it only once it is on disk.
    fn commit(&mut self, next: BTreeMap<Vec<u8>, Vec<u8>>) -> Result<(), KVStoreError> {
        self.save_to_file(&next)?;
        self.data = next;
        Ok(())
    }
}

fn io_error(e: std::io::Error) -> KVStoreError {
    KVStoreError::IOError {
        message: e.to_string(),
    }
}

fn read_chunk(bytes: &[u8], cursor: &mut usize) -> Result<Vec<u8>, KVStoreError> {
    let truncated = |what: &str| KVStoreError::CorruptionError {
        message: format!("truncated {} at offset {}", what, *cursor),
    };

    let len_end = cursor.checked_add(4).filter(|end| *end <= bytes.len());
    let len_end = len_end.ok_or_else(|| truncated("length prefix"))?;
    let mut len_bytes = [0u8; 4];
    len_bytes.copy_from_slice(&bytes[*cursor..len_end]);
    let len = u32::from_le_bytes(len_bytes) as usize;

    let end = len_end
        .checked_add(len)
        .filter(|end| *end <= bytes.len())
        .ok_or_else(|| truncated("entry"))?;
    let chunk = bytes[len_end..end].to_vec();
    *cursor = end;
    Ok(chunk)
}

fn write_chunk(out: &mut Vec<u8>, chunk: &[u8]) -> Result<(), KVStoreError> {
    let len = u32::try_from(chunk.len()).map_err(|_| KVStoreError::IOError {
        message: format!("entry of {} bytes exceeds u32 length prefix", chunk.len()),
    })?;
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(chunk);
    Ok(())
}

impl KeyValueStore for FileBackedKVStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        let mut next = self.data.clone();
        next.insert(key.to_vec(), value.to_vec());
        self.commit(next)
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), KVStoreError> {
        let mut next = self.data.clone();
        next.remove(key);
        self.commit(next)
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError> {
        let mut next = self.data.clone();
        apply_batch(&mut next, operations);
        self.commit(next)
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        Ok(self.data.contains_key(key))
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<ScanResult, KVStoreError> {
        Ok(scan_prefix(&self.data, prefix))
    }
}
