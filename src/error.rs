//! Error types for wire decoding and header validation

use thiserror::Error;

/// Failures surfaced while decoding or validating a consensus object.
///
/// Every variant is unrecoverable for the object being constructed: the
/// caller never observes a partially built header or input. The detail
/// string carries which check failed (and the computed block hash where
/// relevant) so an upstream layer can decide whether to disconnect a peer,
/// reject a block, or log and continue.
#[derive(Error, Debug)]
pub enum WireError {
    #[error("Input truncated: {0}")]
    TruncatedInput(String),

    #[error("Invalid difficulty target: {0}")]
    InvalidDifficultyTarget(String),

    #[error("Proof of work not satisfied: {0}")]
    ProofOfWorkNotSatisfied(String),

    #[error("Block timestamp too far in the future: {0}")]
    TimestampTooFarInFuture(String),
}

pub type Result<T> = std::result::Result<T, WireError>;
