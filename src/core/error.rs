//! Command rejections and snapshot failures.
//!
//! A rejected command never mutates the match. Hosts are expected to hit
//! these during UI races (double taps, stale token views), so they are plain
//! values rather than panics.

use derive_more::{Display, Error};

use super::phase::GamePhase;

/// Why a controller refused a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// The command is not valid in the current phase.
    #[display("{command} is not allowed while {actual}")]
    WrongPhase {
        /// Command name, for logs.
        command: &'static str,
        /// Phase the match was in.
        actual: GamePhase,
    },

    /// Token index outside the active player's token range.
    #[display("token {index} does not exist (player has {count})")]
    TokenOutOfRange {
        /// Requested index.
        index: usize,
        /// Tokens the player owns.
        count: usize,
    },

    /// The token cannot move with the current roll.
    #[display("token {index} has no legal move for roll {roll}")]
    IllegalMove {
        /// Requested index.
        index: usize,
        /// Current die value.
        roll: u8,
    },

    /// A host-supplied die value outside `1..=6`.
    #[display("die value {_0} is outside 1..=6")]
    InvalidRoll(#[error(not(source))] u8),

    /// The match has ended or was abandoned.
    #[display("the match is over")]
    MatchOver,
}

/// Why a snapshot could not be produced or restored.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SnapshotError {
    /// Serialization failed.
    #[display("failed to encode snapshot: {_0}")]
    Encode(#[error(not(source))] String),

    /// Bytes did not decode into a snapshot.
    #[display("failed to decode snapshot: {_0}")]
    Decode(#[error(not(source))] String),

    /// Snapshot decoded but violates a match invariant.
    #[display("corrupt snapshot: {_0}")]
    Corrupt(#[error(not(source))] String),
}

impl From<bincode::Error> for SnapshotError {
    fn from(err: bincode::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
