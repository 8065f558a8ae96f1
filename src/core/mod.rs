//! Core types: ids, players, RNG, configuration, actions, errors and state.
//!
//! Everything here is independent of card content; the `cards`, `rules`
//! and `game` modules build on it.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{CombatTiming, MatchConfig};
pub use entity::{EntityId, IdAllocator};
pub use error::{ActionError, ConfigError, InvariantViolation, SnapshotError};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use state::{MatchState, Phase, PlayerState, Selection};
