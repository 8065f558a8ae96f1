//! Game rules: placement legality and lane combat.
//!
//! Both halves are pure functions over state; the store decides when to
//! call them and commits their results.

pub mod combat;
pub mod legal;

pub use combat::{resolve, CombatEvent, CombatResolution, NO_COMBAT_LINE};
pub use legal::{check_drag, check_play, legal_plays};
