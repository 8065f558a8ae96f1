//! # lane-duel
//!
//! Rules engine for a two-player lane-combat card game.
//!
//! Each match rolls a catalog of weapon cards, deals both players a shuffled
//! copy, and alternates deploy phases on a 2x4 grid per player. After both
//! players deploy, every unit strikes the first enemy in its column; defeated
//! units return to the bottom of their owner's deck at full health.
//!
//! ## Design Principles
//!
//! 1. **Single Writer**: A `GameStore` owns its match. Commands take
//!    `&mut self` and either commit or return an `ActionError` without
//!    touching state.
//!
//! 2. **Persistent Data Structures**: O(1) cloning via `im-rs`, so a
//!    snapshot can be taken after every command.
//!
//! 3. **Deterministic Replay**: A seeded ChaCha8 stream drives catalog rolls
//!    and shuffles; the same seed and action history reproduce a match.
//!
//! ## Modules
//!
//! - `core`: Ids, players, RNG, configuration, actions, errors, match state
//! - `zones`: Zones and the deployment grid
//! - `cards`: Tags, definitions, instances, catalog generation, decks
//! - `rules`: Placement legality and lane combat
//! - `game`: The match store and deferred combat timer

pub mod cards;
pub mod core;
pub mod game;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionError, ActionRecord, CombatTiming, ConfigError, EntityId, GameRng,
    GameRngState, IdAllocator, InvariantViolation, MatchConfig, MatchState, Phase, PlayerId,
    PlayerMap, PlayerState, Selection, SnapshotError,
};

pub use crate::zones::{FieldPositions, GridPos, Zone};

pub use crate::cards::{
    CardCatalog, CardDefinition, CardId, CardInstance, DeckCard, Tag, WeaponTemplate,
};

pub use crate::rules::{CombatEvent, CombatResolution};

pub use crate::game::{CombatTicket, GameStore};
