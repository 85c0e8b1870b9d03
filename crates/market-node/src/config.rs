//! # Node Configuration
//!
//! Environment-driven settings, overridable from the command line.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use am_02_marketplace::prelude::{MarketConfig, INITIAL_BALANCE};
use thiserror::Error;

/// Ledger backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Volatile; state is lost on exit.
    Memory,
    /// Single file under the data directory.
    File,
    /// RocksDB under the data directory. Needs the `rocksdb` feature.
    RocksDb,
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            "rocksdb" | "rocks" => Ok(Self::RocksDb),
            other => Err(ConfigError::UnknownStore(other.to_string())),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Memory => "memory",
            Self::File => "file",
            Self::RocksDb => "rocksdb",
        })
    }
}

/// Complete node configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    pub store: StoreKind,
    /// Directory holding persistent state.
    pub data_dir: PathBuf,
    /// Balance credited at enrollment.
    pub initial_balance: u64,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            store: StoreKind::Memory,
            data_dir: PathBuf::from("./data"),
            initial_balance: INITIAL_BALANCE,
        }
    }
}

impl NodeConfig {
    /// Load from `MARKET_STORE`, `MARKET_DATA_DIR` and `MARKET_INITIAL_BALANCE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(store) = lookup("MARKET_STORE") {
            config.store = store.parse()?;
        }
        if let Some(dir) = lookup("MARKET_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(balance) = lookup("MARKET_INITIAL_BALANCE") {
            config.initial_balance = balance
                .parse()
                .map_err(|_| ConfigError::InvalidBalance(balance))?;
        }

        Ok(config)
    }

    /// Service-level settings.
    pub fn market(&self) -> MarketConfig {
        MarketConfig {
            initial_balance: self.initial_balance,
        }
    }

    /// Path of the file-backed store.
    pub fn state_file(&self) -> PathBuf {
        self.data_dir.join("ledger.state")
    }

    /// Directory of the RocksDB store.
    pub fn rocksdb_dir(&self) -> PathBuf {
        self.data_dir.join("rocksdb")
    }
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown store backend {0:?} (expected memory, file or rocksdb)")]
    UnknownStore(String),

    #[error("initial balance must be a non-negative integer, got {0:?}")]
    InvalidBalance(String),

    #[error("store backend {0} is not compiled in; rebuild with --features {0}")]
    Unsupported(StoreKind),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = NodeConfig::from_lookup(lookup_in(&[])).unwrap();
        assert_eq!(config, NodeConfig::default());
        assert_eq!(config.market().initial_balance, 10_000);
    }

    #[test]
    fn test_env_overrides() {
        let config = NodeConfig::from_lookup(lookup_in(&[
            ("MARKET_STORE", "File"),
            ("MARKET_DATA_DIR", "/var/lib/market"),
            ("MARKET_INITIAL_BALANCE", "250"),
        ]))
        .unwrap();
        assert_eq!(config.store, StoreKind::File);
        assert_eq!(config.state_file(), PathBuf::from("/var/lib/market/ledger.state"));
        assert_eq!(config.initial_balance, 250);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            NodeConfig::from_lookup(lookup_in(&[("MARKET_STORE", "postgres")])),
            Err(ConfigError::UnknownStore("postgres".into()))
        );
        assert_eq!(
            NodeConfig::from_lookup(lookup_in(&[("MARKET_INITIAL_BALANCE", "-1")])),
            Err(ConfigError::InvalidBalance("-1".into()))
        );
    }
}
