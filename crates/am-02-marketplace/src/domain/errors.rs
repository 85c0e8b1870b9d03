//! # Domain Errors
//!
//! Every failure a marketplace operation can report. Display strings are
//! what callers see in the response envelope, so they stay short and stable.

use am_01_ledger_store::{KVStoreError, StoreError};
use thiserror::Error;

use crate::domain::entities::{AssetId, TraderId};

/// Marketplace operation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MarketError {
    /// Wrong arity, unparseable price or an unencodable key part.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `role` is "trader", "buyer" or "seller".
    #[error("{role} not exist: {id}")]
    TraderNotFound { role: &'static str, id: TraderId },

    #[error("already enrolled: {0}")]
    AlreadyEnrolled(TraderId),

    #[error("asset does not exist: {0}")]
    AssetNotFound(AssetId),

    #[error("asset {asset} does not belong to you")]
    NotOwner { asset: AssetId, caller: TraderId },

    #[error("asset {0} not for sale")]
    NotForSale(AssetId),

    #[error("cannot buy your own asset {0}")]
    SelfTrade(AssetId),

    #[error("not enough balance: price {price}, available {available}")]
    InsufficientBalance { price: u64, available: u64 },

    /// Crediting the seller would overflow `u64`.
    #[error("seller balance overflow: {balance} + {amount}")]
    BalanceOverflow { balance: u64, amount: u64 },

    /// The ledger store failed.
    #[error("store error: {0}")]
    Store(String),

    /// A record could not be serialized or deserialized.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// The caller credential could not be obtained.
    #[error("cannot get caller credential: {0}")]
    Credential(String),

    #[error("Unexpected method: {0}")]
    UnexpectedMethod(String),
}

impl MarketError {
    /// Stable label for metrics and structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::TraderNotFound { .. } => "trader_not_found",
            Self::AlreadyEnrolled(_) => "already_enrolled",
            Self::AssetNotFound(_) => "asset_not_found",
            Self::NotOwner { .. } => "not_owner",
            Self::NotForSale(_) => "not_for_sale",
            Self::SelfTrade(_) => "self_trade",
            Self::InsufficientBalance { .. } => "insufficient_balance",
            Self::BalanceOverflow { .. } => "balance_overflow",
            Self::Store(_) => "store",
            Self::Encoding(_) => "encoding",
            Self::Credential(_) => "credential",
            Self::UnexpectedMethod(_) => "unexpected_method",
        }
    }

    pub(crate) fn trader_not_found(role: &'static str, id: &TraderId) -> Self {
        Self::TraderNotFound {
            role,
            id: id.clone(),
        }
    }
}

impl From<StoreError> for MarketError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidKey(msg) => Self::InvalidArgument(msg),
            StoreError::Backend(kv) => kv.into(),
            err @ StoreError::Encoding { .. } => Self::Encoding(err.to_string()),
        }
    }
}

impl From<KVStoreError> for MarketError {
    fn from(err: KVStoreError) -> Self {
        Self::Store(err.to_string())
    }
}

impl From<serde_json::Error> for MarketError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}
