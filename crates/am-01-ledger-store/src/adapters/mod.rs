//! # Adapters Layer
//!
//! Concrete `KeyValueStore` implementations.

pub mod storage;
