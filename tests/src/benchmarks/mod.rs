//! # Marketplace Benchmarks
//!
//! Criterion bodies shared with `benches/marketplace_benchmarks.rs`.

pub mod marketplace;
