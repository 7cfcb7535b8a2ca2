//! Block header codec and parse-time consensus validation
//!
//! The 80-byte header is the unit of proof of work: its double-SHA-256 hash
//! names the block and must, as an unsigned 256-bit integer, not exceed the
//! target encoded in the compact difficulty field. The hash is derived at
//! decode time from the raw bytes exactly as they appeared on the wire; it
//! is never transmitted.
//!
//! Wire layout:
//!
//! ```text
//!   Size       Field         Description
//!   ====       =====         ===========
//!   4 bytes    Version       Block version number
//!   32 bytes   PrevHash      Hash of the preceding block (wire order)
//!   32 bytes   MerkleRoot    Merkle root of the block transactions (wire order)
//!   4 bytes    Time          Time the block was mined (seconds since epoch)
//!   4 bytes    Difficulty    Compact target difficulty
//!   4 bytes    Nonce         Nonce producing the required hash
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::buffer::{ByteReader, ByteWriter};
use crate::constants::HEADER_SIZE;
use crate::difficulty::CompactTarget;
use crate::error::{Result, WireError};
use crate::hash::{double_sha256, Sha256Hash};
use crate::params::NetworkParams;

/// A parsed block header.
///
/// Immutable except for the matched-transaction list, which a filtering
/// collaborator attaches after the fact for filtered blocks. The block hash
/// is computed during decoding and stored as a plain field; the value
/// constructors take it directly for headers rebuilt from already-validated
/// state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    version: i32,
    block_hash: Sha256Hash,
    prev_hash: Sha256Hash,
    merkle_root: Sha256Hash,
    block_time: u32,
    target_difficulty: u32,
    nonce: i32,
    matches: Option<Vec<Sha256Hash>>,
}

impl BlockHeader {
    /// Create a header from known field values.
    pub fn new(
        version: i32,
        block_hash: Sha256Hash,
        prev_hash: Sha256Hash,
        block_time: u32,
        target_difficulty: u32,
        merkle_root: Sha256Hash,
        nonce: i32,
    ) -> Self {
        BlockHeader {
            version,
            block_hash,
            prev_hash,
            merkle_root,
            block_time,
            target_difficulty,
            nonce,
            matches: None,
        }
    }

    /// Create a header from known field values with a matched-transaction
    /// list already attached.
    #[allow(clippy::too_many_arguments)]
    pub fn with_matches(
        version: i32,
        block_hash: Sha256Hash,
        prev_hash: Sha256Hash,
        block_time: u32,
        target_difficulty: u32,
        merkle_root: Sha256Hash,
        nonce: i32,
        matches: Vec<Sha256Hash>,
    ) -> Self {
        BlockHeader {
            version,
            block_hash,
            prev_hash,
            merkle_root,
            block_time,
            target_difficulty,
            nonce,
            matches: Some(matches),
        }
    }

    /// Decode a header from a serialized byte slice.
    pub fn from_bytes(bytes: &[u8], verify: bool, params: &NetworkParams) -> Result<Self> {
        BlockHeader::read(&mut ByteReader::new(bytes), verify, params)
    }

    /// Decode a header from the byte stream, optionally running the
    /// parse-time consensus checks.
    ///
    /// The block hash is computed over the 80 raw bytes before the fields
    /// are re-read from the same position. With `verify` set, three checks
    /// run in order: the compact target must decode to a positive value no
    /// greater than the network proof-of-work ceiling; the block hash must
    /// not exceed the target (skipped when the previous hash is the zero
    /// sentinel, which synthetic test headers use); and the block time must
    /// not run more than the allowed drift ahead of the wall clock. Any
    /// failure aborts construction.
    pub fn read(reader: &mut ByteReader, verify: bool, params: &NetworkParams) -> Result<Self> {
        if reader.available() < HEADER_SIZE {
            return Err(WireError::TruncatedInput(format!(
                "header requires {} bytes, {} available",
                HEADER_SIZE,
                reader.available()
            )));
        }
        //
        // Compute the block hash from the serialized header bytes, then
        // back up and parse the individual fields
        //
        let start_position = reader.position();
        let mut hash_bytes = double_sha256(reader.read_bytes(HEADER_SIZE)?);
        hash_bytes.reverse();
        let block_hash = Sha256Hash::new(hash_bytes);
        reader.set_position(start_position);

        let version = reader.read_i32()?;
        let prev_hash = Sha256Hash::from_wire_slice(reader.read_bytes(32)?)?;
        let merkle_root = Sha256Hash::from_wire_slice(reader.read_bytes(32)?)?;
        let block_time = reader.read_u32()?;
        let target_difficulty = reader.read_u32()?;
        let nonce = reader.read_i32()?;

        if verify {
            //
            // The target must be positive and no easier than the network
            // ceiling permits
            //
            let target = CompactTarget::decode(target_difficulty);
            if !target.is_positive() || target.value() > params.proof_of_work_limit {
                return Err(WireError::InvalidDifficultyTarget(format!(
                    "compact target {:#010x} in block {}",
                    target_difficulty, block_hash
                )));
            }
            //
            // The block hash must not exceed the target. A zero previous
            // hash skips this check so synthetic headers can be built
            // without mining them.
            //
            if block_hash.to_u256() > target.value() && prev_hash != Sha256Hash::ZERO {
                return Err(WireError::ProofOfWorkNotSatisfied(format!(
                    "block hash {} is higher than target {:#010x}",
                    block_hash, target_difficulty
                )));
            }
            //
            // Wall clock is read once so the check is deterministic within
            // this call
            //
            let current_time = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs();
            if block_time as u64 > current_time + params.allowed_time_drift {
                return Err(WireError::TimestampTooFarInFuture(format!(
                    "block {} timestamp {} exceeds {} + {}s drift",
                    block_hash, block_time, current_time, params.allowed_time_drift
                )));
            }
        }

        Ok(BlockHeader {
            version,
            block_hash,
            prev_hash,
            merkle_root,
            block_time,
            target_difficulty,
            nonce,
            matches: None,
        })
    }

    /// Encode the 80-byte header payload. The block hash is derivable and
    /// never written.
    pub fn write<'w>(&self, writer: &'w mut ByteWriter) -> &'w mut ByteWriter {
        writer
            .write_i32(self.version)
            .write_bytes(&self.prev_hash.to_wire_bytes())
            .write_bytes(&self.merkle_root.to_wire_bytes())
            .write_u32(self.block_time)
            .write_u32(self.target_difficulty)
            .write_i32(self.nonce)
    }

    /// Serialized header bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(HEADER_SIZE);
        self.write(&mut writer);
        writer.into_bytes()
    }

    /// Work contributed by this header: `2^256 / (target + 1)`.
    ///
    /// Monotonically increasing as the target shrinks, which is what chain
    /// selection compares; not a validity check. Degenerate targets (zero,
    /// negative, overflowed) contribute zero work.
    pub fn block_work(&self) -> U256 {
        let target = CompactTarget::decode(self.target_difficulty);
        if !target.is_positive() {
            return U256::zero();
        }
        // 2^256 does not fit in 256 bits; (!t / (t + 1)) + 1 is the same
        // quotient without widening
        let value = target.value();
        (!value / (value + U256::one())) + U256::one()
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    /// The hash naming this block, in internal order.
    pub fn hash(&self) -> &Sha256Hash {
        &self.block_hash
    }

    pub fn prev_hash(&self) -> &Sha256Hash {
        &self.prev_hash
    }

    pub fn merkle_root(&self) -> &Sha256Hash {
        &self.merkle_root
    }

    /// Time the block was mined, seconds since the Unix epoch.
    pub fn block_time(&self) -> u32 {
        self.block_time
    }

    /// Target difficulty in compact form.
    pub fn target_difficulty(&self) -> u32 {
        self.target_difficulty
    }

    pub fn nonce(&self) -> i32 {
        self.nonce
    }

    /// Matched transactions attached by a filtering collaborator, if any.
    pub fn matches(&self) -> Option<&[Sha256Hash]> {
        self.matches.as_deref()
    }

    pub fn set_matches(&mut self, matches: Option<Vec<Sha256Hash>>) {
        self.matches = matches;
    }
}
