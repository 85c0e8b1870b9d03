//! # Outbound Ports (Driven Ports)
//!
//! Capabilities the host platform supplies.

use crate::domain::errors::MarketError;

pub use am_01_ledger_store::KeyValueStore;

/// Source of the caller's verified credential bytes.
///
/// The marketplace never inspects the bytes; it only hashes them into a
/// `TraderId`.
pub trait CredentialSource {
    /// Raw credential of the caller of the current operation.
    fn caller_credential(&self) -> Result<Vec<u8>, MarketError>;
}
