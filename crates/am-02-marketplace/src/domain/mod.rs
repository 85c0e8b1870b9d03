//! # Marketplace Domain
//!
//! Pure types and rules. Nothing here touches the ledger.

pub mod entities;
pub mod errors;
pub mod identity;
pub mod invariants;
