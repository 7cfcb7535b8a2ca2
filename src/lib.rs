//! # Consensus-Wire
//!
//! Canonical binary wire format and consensus-critical validation for the
//! fundamental objects of a proof-of-work blockchain: block headers,
//! transaction inputs, and inventory announcements.
//!
//! This is the layer every peer, wallet, and indexer must agree on
//! bit-for-bit. A single divergent byte in encoding, a wrong endianness, or
//! a relaxed validation check breaks interoperability or lets invalid data
//! through as valid.
//!
//! ## Design Principles
//!
//! 1. **One-shot operations**: every decode is a parse-validate-or-fail
//!    call that either returns a fully constructed value or a typed error;
//!    no partially built object is ever observable
//! 2. **Self-validating objects**: a block header runs its consensus checks
//!    inline during construction rather than trusting upstream decoders
//! 3. **No hidden state**: no cache, registry, or lock; concurrent callers
//!    may decode different byte streams with no coordination
//! 4. **Typed failures, no logging**: every failure surfaces to the caller
//!    as a [`WireError`]; nothing is retried or swallowed
//!
//! ## Usage
//!
//! ```rust
//! use consensus_wire::{BlockHeader, NetworkParams};
//!
//! // Bitcoin mainnet genesis header
//! let bytes = hex::decode(
//!     "0100000000000000000000000000000000000000000000000000000000000000\
//!      000000003ba3edfd7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa\
//!      4b1e5e4a29ab5f49ffff001d1dac2b7c",
//! )
//! .unwrap();
//! let params = NetworkParams::mainnet();
//! let header = BlockHeader::from_bytes(&bytes, true, &params).unwrap();
//! assert_eq!(
//!     header.hash().to_string(),
//!     "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f",
//! );
//! ```

pub mod block_header;
pub mod buffer;
pub mod constants;
pub mod difficulty;
pub mod error;
pub mod hash;
pub mod inventory;
pub mod outpoint;
pub mod params;
pub mod transaction_input;

// Re-export the public surface
pub use block_header::BlockHeader;
pub use buffer::{ByteReader, ByteWriter};
pub use constants::*;
pub use difficulty::{encode_compact_bits, CompactTarget};
pub use error::{Result, WireError};
pub use hash::{double_sha256, Sha256Hash};
pub use inventory::{
    InventoryItem, INV_BLOCK, INV_ERROR, INV_FILTERED_BLOCK, INV_TX, INV_WITNESS_BLOCK,
    INV_WITNESS_FILTERED_BLOCK, INV_WITNESS_TX,
};
pub use outpoint::OutPoint;
pub use params::NetworkParams;
pub use transaction_input::TransactionInput;
