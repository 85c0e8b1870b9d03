//! # Integration Tests
//!
//! Cross-crate flows: ledger store + marketplace + host.

pub mod marketplace_flows;
pub mod node_flows;
pub mod persistence;
