//! # Domain Invariants
//!
//! Pure checks over loaded entities. The service loads records, runs these,
//! and only then stages writes, so a failed check never leaves a partial
//! update behind.
//!
//! | Check | Error |
//! |-------|-------|
//! | `check_not_enrolled` | `AlreadyEnrolled` |
//! | `check_ownership` | `NotOwner` |
//! | `check_purchase` | `SelfTrade`, `NotForSale`, `InsufficientBalance` (in that order) |
//! | `settle_purchase` | `BalanceOverflow`; total balance is conserved |

use crate::domain::entities::{Asset, AssetId, Trader, TraderId};
use crate::domain::errors::MarketError;

/// Fails if a trader is already stored under `id`.
pub fn check_not_enrolled(existing: Option<&Trader>, id: &TraderId) -> Result<(), MarketError> {
    match existing {
        Some(_) => Err(MarketError::AlreadyEnrolled(id.clone())),
        None => Ok(()),
    }
}

/// Fails unless `caller` owns `asset`.
pub fn check_ownership(
    asset: &Asset,
    asset_id: &AssetId,
    caller: &TraderId,
) -> Result<(), MarketError> {
    if asset.owner == *caller {
        Ok(())
    } else {
        Err(MarketError::NotOwner {
            asset: asset_id.clone(),
            caller: caller.clone(),
        })
    }
}

/// Buyer-side purchase checks, evaluated in a fixed order.
pub fn check_purchase(buyer: &Trader, asset_id: &AssetId, asset: &Asset) -> Result<(), MarketError> {
    if asset.owner == buyer.id {
        return Err(MarketError::SelfTrade(asset_id.clone()));
    }
    if !asset.for_sale {
        return Err(MarketError::NotForSale(asset_id.clone()));
    }
    if buyer.balance < asset.price {
        return Err(MarketError::InsufficientBalance {
            price: asset.price,
            available: buyer.balance,
        });
    }
    Ok(())
}

/// New buyer, seller and asset states after a purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub buyer: Trader,
    pub seller: Trader,
    pub asset: Asset,
    pub price: u64,
}

/// Move `asset.price` from buyer to seller and the asset from seller to buyer.
///
/// Expects `check_purchase` to have passed. Both balance updates are checked,
/// so the function never panics and the sum of the two balances is unchanged.
pub fn settle_purchase(
    mut buyer: Trader,
    mut seller: Trader,
    mut asset: Asset,
) -> Result<Settlement, MarketError> {
    let price = asset.price;

    buyer.balance = buyer
        .balance
        .checked_sub(price)
        .ok_or(MarketError::InsufficientBalance {
            price,
            available: buyer.balance,
        })?;
    seller.balance = seller
        .balance
        .checked_add(price)
        .ok_or(MarketError::BalanceOverflow {
            balance: seller.balance,
            amount: price,
        })?;
    asset.transfer_to(buyer.id.clone());

    Ok(Settlement {
        buyer,
        seller,
        asset,
        price,
    })
}
