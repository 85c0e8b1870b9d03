//! # Asset Marketplace Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmark bodies (driven by benches/)
//! │   └── marketplace.rs
//! │
//! └── integration/      # Cross-crate flows
//!     ├── marketplace_flows.rs   # handler + service + store
//!     ├── persistence.rs         # file-backed store across restarts
//!     └── node_flows.rs          # JSON-line host
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p am-tests
//! cargo test -p am-tests integration::persistence
//!
//! # Benchmarks
//! cargo bench -p am-tests
//! ```

pub mod benchmarks;
pub mod integration;
