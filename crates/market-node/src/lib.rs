//! # Market Node
//!
//! Host process for the asset marketplace.
//!
//! ## Startup Sequence
//!
//! 1. Initialize telemetry (`MARKET_*` environment)
//! 2. Load `NodeConfig` from the environment, then apply CLI overrides
//! 3. Open the configured ledger store
//! 4. Run the marketplace init hook
//! 5. Serve JSON-line requests from stdin until EOF or Ctrl-C
//!
//! ## Modules
//!
//! - `config` - `NodeConfig`, `StoreKind`, `ConfigError`
//! - `store` - `NodeStore`, one `KeyValueStore` over the selected backend
//! - `runtime` - `MarketNode`, request/response line handling

pub mod config;
pub mod runtime;
pub mod store;

pub use config::{ConfigError, NodeConfig, StoreKind};
pub use runtime::{MarketNode, Request, ResponseLine};
pub use store::{NodeStore, StoreOpenError};
