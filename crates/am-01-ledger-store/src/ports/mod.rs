//! # Ports Layer
//!
//! Driven ports the ledger store depends on. The host platform (or a test)
//! supplies the concrete store.

pub mod outbound;

pub use outbound::*;
