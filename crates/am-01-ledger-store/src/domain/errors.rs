//! # Domain Errors
//!
//! `KVStoreError` is what a backend reports; `StoreError` is what the typed
//! layer above it reports.

use thiserror::Error;

/// Key-value backend errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KVStoreError {
    /// I/O error during read/write.
    #[error("KV store I/O error: {message}")]
    IOError { message: String },

    /// Data corruption in the store.
    #[error("KV store corruption: {message}")]
    CorruptionError { message: String },
}

/// Errors raised while addressing or decoding ledger records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A namespace or key part cannot be encoded into a composite key.
    #[error("invalid composite key: {0}")]
    InvalidKey(String),

    /// The underlying store failed.
    #[error(transparent)]
    Backend(#[from] KVStoreError),

    /// A stored record could not be encoded or decoded.
    #[error("malformed record at {key}: {message}")]
    Encoding { key: String, message: String },
}

impl StoreError {
    pub(crate) fn invalid_key(msg: impl Into<String>) -> Self {
        Self::InvalidKey(msg.into())
    }

    pub(crate) fn encoding(key: &str, err: impl std::fmt::Display) -> Self {
        Self::Encoding {
            key: key.escape_default().to_string(),
            message: err.to_string(),
        }
    }
}
