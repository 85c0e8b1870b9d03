//! # Identity Derivation
//!
//! Trader and asset identifiers are digests, so every validating party
//! derives the same keys from the same inputs.

use sha3::{Digest, Sha3_256};

use crate::domain::entities::{AssetId, TraderId};

/// Bytes of the SHA3-256 digest kept for an asset id.
pub const ASSET_ID_BYTES: usize = 8;

/// Trader id for the given caller credential: lowercase hex SHA3-256.
pub fn resolve_identity(credential: &[u8]) -> TraderId {
    TraderId::new(hex::encode(Sha3_256::digest(credential)))
}

/// Asset id for `name`: hex of the first 8 digest bytes.
pub fn compute_asset_id(name: &str) -> AssetId {
    let digest = Sha3_256::digest(name.as_bytes());
    AssetId::new(hex::encode(&digest[..ASSET_ID_BYTES]))
}
