//! # Marketplace Service
//!
//! Implements `MarketplaceApi` over any `KeyValueStore`.
//!
//! ## Architecture
//!
//! Every operation runs against an `EntityStore` opened on a fresh
//! `LedgerTransaction`:
//! 1. Resolve the caller identity
//! 2. Load the records involved (reads observe staged writes)
//! 3. Run the domain invariants
//! 4. Stage the new records
//! 5. Commit the write set with one `atomic_batch_write`
//!
//! An error in steps 1-4 drops the transaction, so nothing reaches the store.

mod api;
mod query;
mod trading;

use am_01_ledger_store::{EntityStore, InMemoryKVStore};
use tracing::debug;

use crate::domain::entities::{Asset, AssetId, Trader, TraderId, INITIAL_BALANCE};
use crate::domain::errors::MarketError;
use crate::domain::identity::resolve_identity;
use crate::ports::outbound::{CredentialSource, KeyValueStore};

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketConfig {
    /// Balance credited at enrollment.
    pub initial_balance: u64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            initial_balance: INITIAL_BALANCE,
        }
    }
}

/// The marketplace state machine.
pub struct MarketplaceService<KV: KeyValueStore> {
    pub(crate) store: KV,
    pub(crate) config: MarketConfig,
}

impl MarketplaceService<InMemoryKVStore> {
    /// Service over an empty in-memory store with default config.
    pub fn in_memory() -> Self {
        Self::new(InMemoryKVStore::new(), MarketConfig::default())
    }
}

impl<KV: KeyValueStore> MarketplaceService<KV> {
    pub fn new(store: KV, config: MarketConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// The backing store.
    pub fn store(&self) -> &KV {
        &self.store
    }

    pub fn into_store(self) -> KV {
        self.store
    }

    /// Run a read-only operation.
    pub(crate) fn read<T>(
        &self,
        op: impl FnOnce(&EntityStore<'_, KV>) -> Result<T, MarketError>,
    ) -> Result<T, MarketError> {
        let entities = EntityStore::begin(&self.store);
        op(&entities)
    }

    /// Run `op` in a transaction and commit its write set if it succeeds.
    pub(crate) fn execute<T>(
        &mut self,
        op: impl FnOnce(&mut EntityStore<'_, KV>) -> Result<T, MarketError>,
    ) -> Result<T, MarketError> {
        let (value, batch) = {
            let mut entities = EntityStore::begin(&self.store);
            let value = op(&mut entities)?;
            (value, entities.into_batch())
        };

        if !batch.is_empty() {
            debug!(writes = batch.len(), "[am-02] Committing write set");
            self.store.atomic_batch_write(batch)?;
        }
        Ok(value)
    }
}

/// Identity of the caller behind `caller`.
pub(crate) fn caller_id(caller: &dyn CredentialSource) -> Result<TraderId, MarketError> {
    let credential = caller.caller_credential()?;
    Ok(resolve_identity(&credential))
}

/// Load an enrolled trader or fail with `TraderNotFound` naming `role`.
pub(crate) fn require_trader<KV: KeyValueStore + ?Sized>(
    entities: &EntityStore<'_, KV>,
    role: &'static str,
    id: &TraderId,
) -> Result<Trader, MarketError> {
    entities
        .get::<Trader>(id.as_str())?
        .ok_or_else(|| MarketError::trader_not_found(role, id))
}

pub(crate) fn require_asset<KV: KeyValueStore + ?Sized>(
    entities: &EntityStore<'_, KV>,
    id: &AssetId,
) -> Result<Asset, MarketError> {
    entities
        .get::<Asset>(id.as_str())?
        .ok_or_else(|| MarketError::AssetNotFound(id.clone()))
}
