//! Inventory item codec
//!
//! Inventory items announce the availability of an object or request one
//! from a peer.
//!
//! ```text
//!   Size       Field     Description
//!   ====       =====     ===========
//!   4 bytes    Type      0=Error, 1=Transaction, 2=Block, 3=Filtered Block
//!   32 bytes   Hash      Object hash (wire order)
//! ```
//!
//! The BIP-144 witness variants set bit 0x40000000 and appear only in
//! request messages; a decoder treats them as ordinary type values, with
//! any additional-data semantics left to the message layer.

use serde::{Deserialize, Serialize};

use crate::buffer::{ByteReader, ByteWriter};
use crate::error::Result;
use crate::hash::Sha256Hash;

/// Inventory error code
pub const INV_ERROR: u32 = 0;

/// Transaction inventory item
pub const INV_TX: u32 = 1;

/// Block inventory item
pub const INV_BLOCK: u32 = 2;

/// Filtered block inventory item
pub const INV_FILTERED_BLOCK: u32 = 3;

/// Witness transaction inventory item (BIP 144) - request messages only
pub const INV_WITNESS_TX: u32 = 0x4000_0001;

/// Witness block inventory item (BIP 144) - request messages only
pub const INV_WITNESS_BLOCK: u32 = 0x4000_0002;

/// Witness filtered block inventory item (BIP 144) - request messages only
pub const INV_WITNESS_FILTERED_BLOCK: u32 = 0x4000_0003;

/// A (type, hash) announcement record. Equality and hashing cover both
/// fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InventoryItem {
    item_type: u32,
    hash: Sha256Hash,
}

impl InventoryItem {
    pub fn new(item_type: u32, hash: Sha256Hash) -> Self {
        InventoryItem { item_type, hash }
    }

    /// Decode from the byte stream.
    pub fn read(reader: &mut ByteReader) -> Result<Self> {
        let item_type = reader.read_u32()?;
        let hash = Sha256Hash::from_wire_slice(reader.read_bytes(32)?)?;
        Ok(InventoryItem { item_type, hash })
    }

    /// Encode to the byte stream.
    pub fn write<'w>(&self, writer: &'w mut ByteWriter) -> &'w mut ByteWriter {
        writer
            .write_u32(self.item_type)
            .write_bytes(&self.hash.to_wire_bytes())
    }

    pub fn item_type(&self) -> u32 {
        self.item_type
    }

    pub fn hash(&self) -> &Sha256Hash {
        &self.hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::INVENTORY_ITEM_SIZE;

    #[test]
    fn test_round_trip() {
        let item = InventoryItem::new(INV_BLOCK, Sha256Hash::new([0xcd; 32]));
        let mut writer = ByteWriter::new();
        item.write(&mut writer);
        assert_eq!(writer.len(), INVENTORY_ITEM_SIZE);

        let bytes = writer.into_bytes();
        let mut reader = ByteReader::new(&bytes);
        assert_eq!(InventoryItem::read(&mut reader).unwrap(), item);
    }

    #[test]
    fn test_witness_types_pass_through_decode() {
        for item_type in [INV_WITNESS_TX, INV_WITNESS_BLOCK, INV_WITNESS_FILTERED_BLOCK] {
            let item = InventoryItem::new(item_type, Sha256Hash::new([1; 32]));
            let mut writer = ByteWriter::new();
            item.write(&mut writer);
            let bytes = writer.into_bytes();
            let mut reader = ByteReader::new(&bytes);
            assert_eq!(
                InventoryItem::read(&mut reader).unwrap().item_type(),
                item_type
            );
        }
    }

    #[test]
    fn test_equality_covers_type_and_hash() {
        let hash = Sha256Hash::new([2; 32]);
        assert_ne!(
            InventoryItem::new(INV_TX, hash),
            InventoryItem::new(INV_BLOCK, hash)
        );
        assert_ne!(
            InventoryItem::new(INV_TX, hash),
            InventoryItem::new(INV_TX, Sha256Hash::new([3; 32]))
        );
    }

    #[test]
    fn test_truncated_stream_fails() {
        let mut reader = ByteReader::new(&[0u8; 10]);
        assert!(InventoryItem::read(&mut reader).is_err());
    }
}
