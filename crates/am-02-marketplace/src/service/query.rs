use super::{require_trader, MarketplaceService};
use crate::domain::entities::{Asset, AssetId, MarketSnapshot, TraderId};
use crate::domain::errors::MarketError;
use crate::ports::outbound::KeyValueStore;

impl<KV: KeyValueStore> MarketplaceService<KV> {
    /// Profile of `id` plus a full, id-ordered scan of the asset namespace.
    pub(crate) fn snapshot(&self, id: &TraderId) -> Result<MarketSnapshot, MarketError> {
        self.read(|entities| {
            let trader = require_trader(entities, "trader", id)?;
            let assets = entities
                .scan::<Asset>()?
                .into_iter()
                .map(|(asset_id, asset)| (AssetId::new(asset_id), asset))
                .collect();
            Ok(MarketSnapshot { trader, assets })
        })
    }
}
