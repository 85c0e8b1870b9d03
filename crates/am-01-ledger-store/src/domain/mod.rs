//! # Domain Layer
//!
//! - `composite_key` - namespaced key encoding and splitting
//! - `transaction` - staged write set over a `KeyValueStore`
//! - `entity_store` - typed records on top of a transaction
//! - `errors` - store error types

pub mod composite_key;
pub mod entity_store;
pub mod errors;
pub mod transaction;
