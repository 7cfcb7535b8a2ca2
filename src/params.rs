//! Network parameters consumed by header validation
//!
//! These are configuration inputs, not computed values: the proof-of-work
//! ceiling bounds how easy mining may ever become and the allowed clock
//! drift bounds how far in the future a block timestamp may sit. The
//! validator takes them by reference so alternative networks and test
//! setups can supply their own.

use primitive_types::U256;

use crate::difficulty::CompactTarget;

/// Compact form of the mainnet proof-of-work ceiling (minimum difficulty).
pub const MAX_TARGET_COMPACT: u32 = 0x1d00ffff;

/// Mainnet allowed clock drift: 2 hours in seconds.
pub const ALLOWED_TIME_DRIFT: u64 = 2 * 60 * 60;

/// Per-network validation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkParams {
    /// Maximum permitted expanded target. A header whose decoded target
    /// exceeds this is invalid regardless of its hash.
    pub proof_of_work_limit: U256,
    /// Seconds a block timestamp may run ahead of local wall-clock time.
    pub allowed_time_drift: u64,
}

impl NetworkParams {
    /// Production network parameters.
    pub fn mainnet() -> Self {
        NetworkParams {
            proof_of_work_limit: CompactTarget::decode(MAX_TARGET_COMPACT).value(),
            allowed_time_drift: ALLOWED_TIME_DRIFT,
        }
    }
}

impl Default for NetworkParams {
    fn default() -> Self {
        NetworkParams::mainnet()
    }
}
