//! Wire-format and signature-hash constants

/// Serialized block header length
pub const HEADER_SIZE: usize = 80;

/// Serialized outpoint length: 32-byte hash plus 4-byte index
pub const OUTPOINT_SIZE: usize = 36;

/// Serialized inventory item length: 4-byte type plus 32-byte hash
pub const INVENTORY_ITEM_SIZE: usize = 36;

/// Signature hash type: sign all inputs and outputs
pub const SIGHASH_ALL: u32 = 1;

/// Signature hash type: sign inputs only, outputs unconstrained
pub const SIGHASH_NONE: u32 = 2;

/// Signature hash type: sign the single output paired with this input
pub const SIGHASH_SINGLE: u32 = 3;

/// Signature hash modifier: sign only this input
pub const SIGHASH_ANYONE_CAN_PAY: u32 = 0x80;
