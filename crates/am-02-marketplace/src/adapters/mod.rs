//! # Adapters
//!
//! Concrete outbound-port implementations.

pub mod credentials;

pub use credentials::{FixedCredential, UnavailableCredential};
