//! # Domain Entities
//!
//! Traders and assets as they are persisted on the ledger.
//!
//! ## Persisted Layout
//!
//! Records are JSON. Field names are part of the ledger format and must not
//! change: a trader is `{"name","id","balance"}`, an asset is
//! `{"name","price","owner","forsale"}`. Unknown fields are ignored on read.

use am_01_ledger_store::LedgerRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::identity::compute_asset_id;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Composite-key namespace for trader records.
pub const TRADER_NAMESPACE: &str = "TRADER";

/// Composite-key namespace for asset records.
pub const ASSET_NAMESPACE: &str = "ASSET";

/// Balance credited to a trader at enrollment.
pub const INITIAL_BALANCE: u64 = 10_000;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Derived trader identifier: lowercase hex SHA3-256 of the caller credential.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraderId(String);

impl TraderId {
    /// Wrap an already-derived identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TraderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Asset identifier: hex of the first 8 bytes of SHA3-256(name).
///
/// Callers pass ids as free-form strings; an id that was never derived from a
/// name simply does not resolve to an asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// TRADER
// =============================================================================

/// A marketplace participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trader {
    /// Display name. Not unique.
    pub name: String,
    /// Primary key, derived from the caller credential.
    pub id: TraderId,
    /// Spendable balance.
    pub balance: u64,
}

impl Trader {
    /// A freshly enrolled trader.
    pub fn enroll(id: TraderId, name: impl Into<String>, balance: u64) -> Self {
        Self {
            name: name.into(),
            id,
            balance,
        }
    }
}

impl LedgerRecord for Trader {
    const NAMESPACE: &'static str = TRADER_NAMESPACE;

    fn record_id(&self) -> String {
        self.id.as_str().to_string()
    }
}

// =============================================================================
// ASSET
// =============================================================================

/// A named, ownable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Name the id is derived from.
    pub name: String,
    /// Asking price. Only meaningful while `for_sale`.
    pub price: u64,
    /// Owning trader.
    pub owner: TraderId,
    /// Purchase gate.
    #[serde(rename = "forsale")]
    pub for_sale: bool,
}

impl Asset {
    /// A new, unlisted asset owned by `owner`.
    pub fn new(name: impl Into<String>, owner: TraderId) -> Self {
        Self {
            name: name.into(),
            price: 0,
            owner,
            for_sale: false,
        }
    }

    /// Id derived from the asset name.
    pub fn id(&self) -> AssetId {
        compute_asset_id(&self.name)
    }

    /// Put the asset on sale at `price`.
    pub fn list(&mut self, price: u64) {
        self.price = price;
        self.for_sale = true;
    }

    /// Hand the asset to `buyer` and take it off the market.
    pub fn transfer_to(&mut self, buyer: TraderId) {
        self.owner = buyer;
        self.for_sale = false;
    }
}

impl LedgerRecord for Asset {
    const NAMESPACE: &'static str = ASSET_NAMESPACE;

    fn record_id(&self) -> String {
        self.id().as_str().to_string()
    }
}

// =============================================================================
// READ MODELS
// =============================================================================

/// A trader's profile plus the whole asset catalog, keyed by asset id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub trader: Trader,
    pub assets: BTreeMap<AssetId, Asset>,
}

/// Outcome of a settled purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseReceipt {
    pub asset_id: AssetId,
    pub buyer: TraderId,
    pub seller: TraderId,
    pub price: u64,
    /// Buyer balance after settlement.
    pub buyer_balance: u64,
    /// Seller balance after settlement.
    pub seller_balance: u64,
}
