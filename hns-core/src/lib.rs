//! Canonical wire codec for Handshake chain primitives
//!
//! This crate converts between in-memory values and the byte-exact
//! encoding used by the node:
//! - Primitive integer, varint and byte-run codec
//! - Versioned addresses
//! - Block headers and blocks over any encodable transaction type
//! - Name hashing and sealed-bid blinds for the name auction

pub mod address;
pub mod block;
pub mod codec;
pub mod config;
pub mod encoding;
pub mod error;
pub mod names;
pub mod network;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use address::*;
pub use block::*;
pub use codec::*;
pub use config::*;
pub use error::*;
pub use names::*;
pub use network::*;
pub use types::*;
