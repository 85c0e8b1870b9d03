//! # Inbound Ports (Driving Ports)
//!
//! The marketplace operations. Every mutating call is read → validate →
//! write: on error nothing has been written.

use crate::domain::entities::{Asset, AssetId, MarketSnapshot, PurchaseReceipt, Trader, TraderId};
use crate::domain::errors::MarketError;
use crate::ports::outbound::CredentialSource;

/// Primary API of the marketplace.
pub trait MarketplaceApi {
    /// Enroll the caller under `name` with the initial balance.
    ///
    /// ## Errors
    ///
    /// - `Credential`: the caller credential is unavailable
    /// - `AlreadyEnrolled`: a trader already exists for this identity
    fn enroll(&mut self, caller: &dyn CredentialSource, name: &str) -> Result<Trader, MarketError>;

    /// Look up a trader. Absent is `Ok(None)`.
    fn get_trader(&self, id: &TraderId) -> Result<Option<Trader>, MarketError>;

    /// Overwrite the trader record at its key.
    fn store_trader(&mut self, trader: &Trader) -> Result<(), MarketError>;

    /// Create an unlisted asset owned by the caller.
    ///
    /// An existing asset with the same name is overwritten, since both map to
    /// the same id.
    ///
    /// ## Errors
    ///
    /// - `TraderNotFound`: caller is not enrolled
    fn create_asset(&mut self, caller: &dyn CredentialSource, name: &str)
        -> Result<Asset, MarketError>;

    /// Put one of the caller's assets on sale.
    ///
    /// ## Errors
    ///
    /// - `TraderNotFound`: caller is not enrolled
    /// - `AssetNotFound`: no asset under `asset_id`
    /// - `NotOwner`: caller does not own the asset
    fn list_for_sale(
        &mut self,
        caller: &dyn CredentialSource,
        asset_id: &AssetId,
        price: u64,
    ) -> Result<Asset, MarketError>;

    /// Look up an asset. Absent is `Ok(None)`.
    fn get_asset(&self, id: &AssetId) -> Result<Option<Asset>, MarketError>;

    /// Buy a listed asset.
    ///
    /// ## Errors (checked in this order)
    ///
    /// 1. `TraderNotFound`: caller is not enrolled
    /// 2. `AssetNotFound`
    /// 3. `SelfTrade`: caller already owns the asset
    /// 4. `NotForSale`
    /// 5. `InsufficientBalance`
    /// 6. `TraderNotFound`: the owner is not enrolled
    /// 7. `BalanceOverflow`: crediting the seller would overflow
    fn buy(
        &mut self,
        caller: &dyn CredentialSource,
        asset_id: &AssetId,
    ) -> Result<PurchaseReceipt, MarketError>;

    /// The caller's profile plus every asset on the ledger.
    ///
    /// ## Errors
    ///
    /// - `TraderNotFound`: caller is not enrolled
    fn list_snapshot(&self, caller: &dyn CredentialSource) -> Result<MarketSnapshot, MarketError>;
}
