//! Transaction input codec and signature-hash serialization
//!
//! Wire layout: outpoint, varint script length, script bytes, 4-byte
//! sequence number. The spend amount is never on the wire; it must be set
//! by the application once the referenced output has been resolved.

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::buffer::{ByteReader, ByteWriter};
use crate::constants::SIGHASH_ALL;
use crate::error::Result;
use crate::outpoint::OutPoint;

/// One input of a transaction.
///
/// The script bytes are the only mutable wire field: signing replaces them
/// in place. Everything else is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    out_point: OutPoint,
    script_bytes: Vec<u8>,
    seq_number: u32,
    index: u32,
    value: U256,
}

impl TransactionInput {
    /// Create an input for the given outpoint with an empty script and a
    /// zero spend amount.
    pub fn new(index: u32, out_point: OutPoint, seq_number: u32) -> Self {
        TransactionInput {
            out_point,
            script_bytes: Vec::new(),
            seq_number,
            index,
            value: U256::zero(),
        }
    }

    /// Decode an input from the byte stream. `index` is the position of
    /// this input within its transaction, which the signature-hash sequence
    /// rule depends on.
    pub fn read(reader: &mut ByteReader, index: u32) -> Result<Self> {
        let out_point = OutPoint::read(reader)?;
        let script_bytes = reader.read_var_bytes()?.to_vec();
        let seq_number = reader.read_u32()?;
        Ok(TransactionInput {
            out_point,
            script_bytes,
            seq_number,
            index,
            value: U256::zero(),
        })
    }

    /// Encode to the byte stream: a straight mirror of [`Self::read`].
    pub fn write<'w>(&self, writer: &'w mut ByteWriter) -> &'w mut ByteWriter {
        self.out_point
            .write(writer)
            .write_var_bytes(&self.script_bytes)
            .write_u32(self.seq_number)
    }

    /// Serialize this input for use in a transaction signature.
    ///
    /// The input's own script is replaced by `substitute_script`, and the
    /// sequence number is zeroed for every input other than the one being
    /// signed when the hash type is not SIGHASH_ALL. Non-ALL hash types
    /// authorize later mutation of other inputs' sequence numbers (fee
    /// bumping) without invalidating the signature, so those fields must
    /// not be part of what is signed. Does not mutate the input.
    pub fn serialize_for_signature(
        &self,
        signing_index: u32,
        hash_type: u32,
        substitute_script: &[u8],
        writer: &mut ByteWriter,
    ) {
        let seq_number = if hash_type == SIGHASH_ALL || self.index == signing_index {
            self.seq_number
        } else {
            0
        };
        self.out_point
            .write(writer)
            .write_var_bytes(substitute_script)
            .write_u32(seq_number);
    }

    pub fn out_point(&self) -> &OutPoint {
        &self.out_point
    }

    /// Position of this input within its transaction.
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn script_bytes(&self) -> &[u8] {
        &self.script_bytes
    }

    /// Replace the input script (script substitution during signing).
    pub fn set_script_bytes(&mut self, script_bytes: Vec<u8>) {
        self.script_bytes = script_bytes;
    }

    pub fn seq_number(&self) -> u32 {
        self.seq_number
    }

    /// Coins spent by this input. Not part of the serialized form; defaults
    /// to zero until the application resolves the referenced output.
    pub fn value(&self) -> U256 {
        self.value
    }

    pub fn set_value(&mut self, value: U256) {
        self.value = value;
    }
}
