//! Reference to a previously created transaction output
//!
//! Wire layout: 32-byte transaction hash in wire order, then a 4-byte
//! little-endian output index. Pure codec: whether the referenced output
//! actually exists is the chain layer's concern, so an index that is
//! structurally nonsensical (the coinbase sentinel 0xffffffff included) is
//! accepted as-is.

use serde::{Deserialize, Serialize};

use crate::buffer::{ByteReader, ByteWriter};
use crate::error::Result;
use crate::hash::Sha256Hash;

/// Identifies exactly one output of a prior transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    hash: Sha256Hash,
    index: u32,
}

impl OutPoint {
    pub fn new(hash: Sha256Hash, index: u32) -> Self {
        OutPoint { hash, index }
    }

    /// Decode from the byte stream.
    pub fn read(reader: &mut ByteReader) -> Result<Self> {
        let hash = Sha256Hash::from_wire_slice(reader.read_bytes(32)?)?;
        let index = reader.read_u32()?;
        Ok(OutPoint { hash, index })
    }

    /// Encode to the byte stream.
    pub fn write<'w>(&self, writer: &'w mut ByteWriter) -> &'w mut ByteWriter {
        writer
            .write_bytes(&self.hash.to_wire_bytes())
            .write_u32(self.index)
    }

    /// Hash of the transaction containing the referenced output.
    pub fn hash(&self) -> &Sha256Hash {
        &self.hash
    }

    /// Index of the output within that transaction.
    pub fn index(&self) -> u32 {
        self.index
    }
}
