//! # AM-02 Marketplace - Trader and Asset State Transitions
//!
//! **Subsystem ID:** 2
//!
//! ## Purpose
//!
//! Deterministic state-transition logic for a small asset marketplace kept on
//! an ordered key-value ledger. Traders enroll with a derived identity, create
//! named assets, list them for sale and buy them from each other. Balances and
//! ownership move together: a purchase touches the buyer, the seller and the
//! asset, and all three records are committed as one write set.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | One trader per derived identity | `domain/invariants.rs` - `check_not_enrolled()` |
//! | Only the owner may list an asset | `domain/invariants.rs` - `check_ownership()` |
//! | No self-trade, for-sale gating, sufficient balance | `domain/invariants.rs` - `check_purchase()` |
//! | Balance conservation on settlement | `domain/invariants.rs` - `settle_purchase()` |
//! | Validate before write, all-or-nothing commit | `service/mod.rs` - `MarketplaceService::execute()` |
//!
//! ## Layout
//!
//! | Layer | Location | Purpose |
//! |-------|----------|---------|
//! | Domain | `domain/` | Entities, identity derivation, errors, invariants |
//! | Ports | `ports/` | `MarketplaceApi` (inbound), `CredentialSource` (outbound) |
//! | Adapters | `adapters/` | Credential sources for hosts and tests |
//! | Service | `service/` | `MarketplaceService` over any `KeyValueStore` |
//! | Dispatch | `dispatch/` | Operation-name routing with `Response` envelopes |
//!
//! ## Usage Example
//!
//! ```
//! use am_02_marketplace::prelude::*;
//!
//! let mut handler = MarketplaceHandler::new(MarketplaceService::in_memory());
//! let alice = FixedCredential::new("alice");
//!
//! let response = handler.invoke(&alice, "enroll", &["Alice".to_string()]);
//! assert!(response.is_ok());
//!
//! let response = handler.invoke(&alice, "list", &[]);
//! assert_eq!(response.status, Status::Ok);
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod dispatch;
pub mod domain;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain
    pub use crate::domain::entities::{
        Asset, AssetId, MarketSnapshot, PurchaseReceipt, Trader, TraderId, ASSET_NAMESPACE,
        INITIAL_BALANCE, TRADER_NAMESPACE,
    };
    pub use crate::domain::errors::MarketError;
    pub use crate::domain::identity::{compute_asset_id, resolve_identity};
    pub use crate::domain::invariants::{
        check_not_enrolled, check_ownership, check_purchase, settle_purchase, Settlement,
    };

    // Ports
    pub use crate::ports::inbound::MarketplaceApi;
    pub use crate::ports::outbound::CredentialSource;

    // Adapters
    pub use crate::adapters::credentials::{FixedCredential, UnavailableCredential};

    // Service
    pub use crate::service::{MarketConfig, MarketplaceService};

    // Dispatch
    pub use crate::dispatch::{MarketplaceHandler, Operation, Outcome, Response, Status};
}

// =============================================================================
// SUBSYSTEM METADATA
// =============================================================================

/// Subsystem identifier.
pub const SUBSYSTEM_ID: u8 = 2;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Marketplace";

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
