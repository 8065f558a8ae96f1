//! Lane combat.
//!
//! Every deployed unit strikes the first enemy unit (in the enemy's field
//! order) standing in the same column. Rows do not matter: a column is a
//! lane. All targets and damage values are read from the state before any
//! damage lands, so combat is simultaneous and a unit that dies this round
//! still deals its damage.
//!
//! After the exchange, units at 0 hp or below are defeated: they leave the
//! field and the grid and go to the bottom of their owner's deck at full
//! health. Survivors keep their damage into the next round.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::entity::EntityId;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::state::PlayerState;

/// Report line used when nothing happened.
pub const NO_COMBAT_LINE: &str = "No combat occurred this turn.";

/// Something that happened during combat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatEvent {
    Damage {
        attacker: EntityId,
        attacker_name: String,
        defender: EntityId,
        defender_name: String,
        amount: i32,
    },
    Defeated {
        unit: EntityId,
        owner: PlayerId,
        name: String,
    },
}

impl std::fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CombatEvent::Damage {
                attacker_name,
                defender_name,
                amount,
                ..
            } => write!(f, "{attacker_name} deals {amount} damage to {defender_name}"),
            CombatEvent::Defeated { name, .. } => write!(f, "{name} was defeated!"),
        }
    }
}

/// Output of `resolve`.
#[derive(Clone, Debug)]
pub struct CombatResolution {
    /// Players after damage and recycling.
    pub players: PlayerMap<PlayerState>,

    /// Hits in attack order, then defeats.
    pub events: Vec<CombatEvent>,
}

impl CombatResolution {
    /// Human-readable report; a single placeholder line when nothing happened.
    #[must_use]
    pub fn log_lines(&self) -> Vec<String> {
        if self.events.is_empty() {
            return vec![NO_COMBAT_LINE.to_string()];
        }
        self.events.iter().map(ToString::to_string).collect()
    }
}

/// A planned hit: defender's owner, defender's field index, damage.
struct Hit {
    owner: PlayerId,
    index: usize,
    amount: i32,
}

/// Resolve one round of lane combat.
///
/// Player 1's units attack first in field order, then player 2's; with
/// simultaneous damage the order only affects the report.
#[must_use]
pub fn resolve(players: &PlayerMap<PlayerState>) -> CombatResolution {
    let mut events = Vec::new();
    let mut hits = Vec::new();

    for side in PlayerId::all() {
        let attackers = &players[side];
        let defenders = &players[side.opponent()];

        for attacker in attackers.field.iter() {
            let Some(lane) = attackers.positions.column_of(attacker.instance_id) else {
                continue;
            };

            // Two defenders can share a lane (one per row); field order decides.
            let target = defenders
                .field
                .iter()
                .enumerate()
                .find(|(_, unit)| defenders.positions.column_of(unit.instance_id) == Some(lane));

            if let Some((index, defender)) = target {
                hits.push(Hit {
                    owner: defenders.id,
                    index,
                    amount: attacker.ad(),
                });
                events.push(CombatEvent::Damage {
                    attacker: attacker.instance_id,
                    attacker_name: attacker.name().to_string(),
                    defender: defender.instance_id,
                    defender_name: defender.name().to_string(),
                    amount: attacker.ad(),
                });
            }
        }
    }

    let mut next = players.clone();

    for hit in hits {
        if let Some(unit) = next[hit.owner].field.get_mut(hit.index) {
            unit.take_damage(hit.amount);
        }
    }

    for (owner, player) in next.iter_mut() {
        let field = std::mem::take(&mut player.field);
        for unit in field {
            if unit.is_defeated() {
                events.push(CombatEvent::Defeated {
                    unit: unit.instance_id,
                    owner,
                    name: unit.name().to_string(),
                });
                player.positions.remove(unit.instance_id);
                player.deck.push_back(unit.into_deck_card());
            } else {
                player.field.push_back(unit);
            }
        }
    }

    for event in &events {
        trace!("combat: {event}");
    }

    CombatResolution {
        players: next,
        events,
    }
}
