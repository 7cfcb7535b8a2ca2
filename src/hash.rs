//! 256-bit hash values and the double-SHA-256 primitive
//!
//! The protocol uses the same 32-byte hash in two byte orders: "internal"
//! order (big-endian numeric order, used for proof-of-work comparison and
//! display) and "wire" order (byte-reversed, used on the byte stream).
//! [`Sha256Hash`] stores internal order; conversion is a pure reversal.

use std::fmt;

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Result, WireError};

/// SHA-256 of SHA-256 over arbitrary bytes.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

/// A 256-bit hash held in internal (big-endian numeric) byte order.
///
/// Equality and hashing are over the internal bytes. Immutable once
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sha256Hash([u8; 32]);

impl Sha256Hash {
    /// The all-zero hash, used as the previous-block sentinel.
    pub const ZERO: Sha256Hash = Sha256Hash([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Sha256Hash(bytes)
    }

    /// Construct from a slice holding internal-order bytes. Fails unless the
    /// slice is exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 32 {
            return Err(WireError::TruncatedInput(format!(
                "hash requires 32 bytes, got {}",
                bytes.len()
            )));
        }
        let mut inner = [0u8; 32];
        inner.copy_from_slice(bytes);
        Ok(Sha256Hash(inner))
    }

    /// Construct from wire-order bytes, reversing into internal order.
    pub fn from_wire_slice(bytes: &[u8]) -> Result<Self> {
        let mut hash = Sha256Hash::from_slice(bytes)?;
        hash.0.reverse();
        Ok(hash)
    }

    /// Construct from a 64-character hex string in internal (display) order.
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)
            .map_err(|e| WireError::TruncatedInput(format!("invalid hash hex: {}", e)))?;
        Sha256Hash::from_slice(&bytes)
    }

    /// Internal-order bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Wire-order bytes (reverse of internal order).
    pub fn to_wire_bytes(&self) -> [u8; 32] {
        let mut bytes = self.0;
        bytes.reverse();
        bytes
    }

    /// Big-endian unsigned interpretation of the internal bytes, used for
    /// proof-of-work comparison against the expanded target.
    pub fn to_u256(&self) -> U256 {
        U256::from_big_endian(&self.0)
    }
}

impl fmt::Display for Sha256Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl AsRef<[u8]> for Sha256Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
