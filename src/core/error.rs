//! Error types.
//!
//! Rejected commands leave the match untouched; the `ActionError` says why.

use thiserror::Error;

use super::entity::EntityId;
use super::player::PlayerId;
use super::state::Phase;
use crate::cards::CardId;
use crate::zones::GridPos;

/// Reason a command was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("{action} is not allowed during {phase}")]
    WrongPhase { action: &'static str, phase: Phase },

    #[error("{0} is not in the deploying player's hand")]
    CardNotInHand(EntityId),

    #[error("cell {0} is outside the grid")]
    OutOfBounds(GridPos),

    #[error("cell {0} is already occupied")]
    CellOccupied(GridPos),

    #[error("card costs {cost} DP but only {available} is available")]
    InsufficientDp { cost: u32, available: u32 },
}

/// Invalid configuration or template data.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Invalid(String),

    #[error("malformed config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed weapon template table: {0}")]
    Templates(#[source] serde_json::Error),
}

/// Failure encoding or decoding a match snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot codec failed: {0}")]
    Codec(#[from] bincode::Error),
}

/// A broken state invariant, reported by `MatchState::check_invariants`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("{0} appears in more than one zone")]
    DuplicateCard(CardId),

    #[error("{player} has two units at {pos}")]
    DoubleOccupancy { player: PlayerId, pos: GridPos },

    #[error("{player}'s position map does not match its field")]
    PositionMismatch { player: PlayerId },

    #[error("{player} has {dp} DP over a max of {max_dp}")]
    DpOverMax { player: PlayerId, dp: u32, max_dp: u32 },

    #[error("{player}'s max DP {max_dp} exceeds the ceiling")]
    MaxDpOverCeiling { player: PlayerId, max_dp: u32 },

    #[error("{player} holds {size} cards, over capacity")]
    HandOverCapacity { player: PlayerId, size: usize },

    #[error("{player} holds a card owned by its opponent")]
    ForeignCard { player: PlayerId },

    #[error("card count changed from {expected} to {found}")]
    CardCount { expected: usize, found: usize },
}
