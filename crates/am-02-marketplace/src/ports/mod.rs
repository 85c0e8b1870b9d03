//! # Ports
//!
//! - `inbound`: the API this crate exposes (`MarketplaceApi`)
//! - `outbound`: what it needs from the host (`CredentialSource`, `KeyValueStore`)

pub mod inbound;
pub mod outbound;
