//! # MarketplaceApi Implementation
//!
//! Trader and asset lifecycle. Purchases live in `trading.rs`, the snapshot
//! query in `query.rs`.

use tracing::debug;

use super::{caller_id, require_asset, require_trader, MarketplaceService};
use crate::domain::entities::{Asset, AssetId, MarketSnapshot, PurchaseReceipt, Trader, TraderId};
use crate::domain::errors::MarketError;
use crate::domain::invariants::{check_not_enrolled, check_ownership};
use crate::ports::inbound::MarketplaceApi;
use crate::ports::outbound::{CredentialSource, KeyValueStore};

impl<KV: KeyValueStore> MarketplaceApi for MarketplaceService<KV> {
    fn enroll(&mut self, caller: &dyn CredentialSource, name: &str) -> Result<Trader, MarketError> {
        let id = caller_id(caller)?;
        let balance = self.config.initial_balance;

        let trader = self.execute(|entities| {
            let existing = entities.get::<Trader>(id.as_str())?;
            check_not_enrolled(existing.as_ref(), &id)?;

            let trader = Trader::enroll(id.clone(), name, balance);
            entities.put(&trader)?;
            Ok(trader)
        })?;

        debug!(trader = %trader.id, balance, "[am-02] Trader enrolled");
        Ok(trader)
    }

    fn get_trader(&self, id: &TraderId) -> Result<Option<Trader>, MarketError> {
        self.read(|entities| Ok(entities.get::<Trader>(id.as_str())?))
    }

    fn store_trader(&mut self, trader: &Trader) -> Result<(), MarketError> {
        self.execute(|entities| Ok(entities.put(trader)?))
    }

    fn create_asset(
        &mut self,
        caller: &dyn CredentialSource,
        name: &str,
    ) -> Result<Asset, MarketError> {
        let owner = caller_id(caller)?;

        let asset = self.execute(|entities| {
            require_trader(entities, "trader", &owner)?;

            let asset = Asset::new(name, owner.clone());
            entities.put(&asset)?;
            Ok(asset)
        })?;

        debug!(asset = %asset.id(), owner = %asset.owner, "[am-02] Asset created");
        Ok(asset)
    }

    fn list_for_sale(
        &mut self,
        caller: &dyn CredentialSource,
        asset_id: &AssetId,
        price: u64,
    ) -> Result<Asset, MarketError> {
        let seller = caller_id(caller)?;

        let asset = self.execute(|entities| {
            require_trader(entities, "trader", &seller)?;
            let mut asset = require_asset(entities, asset_id)?;
            check_ownership(&asset, asset_id, &seller)?;

            asset.list(price);
            entities.put(&asset)?;
            Ok(asset)
        })?;

        debug!(asset = %asset_id, price, "[am-02] Asset listed for sale");
        Ok(asset)
    }

    fn get_asset(&self, id: &AssetId) -> Result<Option<Asset>, MarketError> {
        self.read(|entities| Ok(entities.get::<Asset>(id.as_str())?))
    }

    fn buy(
        &mut self,
        caller: &dyn CredentialSource,
        asset_id: &AssetId,
    ) -> Result<PurchaseReceipt, MarketError> {
        let buyer = caller_id(caller)?;
        self.purchase(&buyer, asset_id)
    }

    fn list_snapshot(&self, caller: &dyn CredentialSource) -> Result<MarketSnapshot, MarketError> {
        let id = caller_id(caller)?;
        self.snapshot(&id)
    }
}
