//! # Purchase Settlement
//!
//! The one operation that touches three records. All loads and checks run
//! before anything is staged; buyer, seller and asset are then committed as a
//! single write set.

use tracing::debug;

use super::{require_asset, require_trader, MarketplaceService};
use crate::domain::entities::{AssetId, PurchaseReceipt, TraderId};
use crate::domain::errors::MarketError;
use crate::domain::invariants::{check_purchase, settle_purchase};
use crate::ports::outbound::KeyValueStore;

impl<KV: KeyValueStore> MarketplaceService<KV> {
    pub(crate) fn purchase(
        &mut self,
        buyer_id: &TraderId,
        asset_id: &AssetId,
    ) -> Result<PurchaseReceipt, MarketError> {
        let receipt = self.execute(|entities| {
            let buyer = require_trader(entities, "buyer", buyer_id)?;
            let asset = require_asset(entities, asset_id)?;
            check_purchase(&buyer, asset_id, &asset)?;
            let seller = require_trader(entities, "seller", &asset.owner)?;

            let settlement = settle_purchase(buyer, seller, asset)?;

            entities.put(&settlement.buyer)?;
            entities.put(&settlement.seller)?;
            entities.put(&settlement.asset)?;

            Ok(PurchaseReceipt {
                asset_id: asset_id.clone(),
                buyer: settlement.buyer.id,
                seller: settlement.seller.id,
                price: settlement.price,
                buyer_balance: settlement.buyer.balance,
                seller_balance: settlement.seller.balance,
            })
        })?;

        debug!(
            asset = %receipt.asset_id,
            buyer = %receipt.buyer,
            seller = %receipt.seller,
            price = receipt.price,
            "[am-02] Purchase settled"
        );
        Ok(receipt)
    }
}
