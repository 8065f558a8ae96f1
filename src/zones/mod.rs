//! Card zones and the deployment grid.
//!
//! Every card copy sits in exactly one zone of its owner: the deck (ordered,
//! drawn from the front), the hand (ordered, bounded), or the field
//! (deployment order, each unit pinned to a grid cell).

pub mod grid;

pub use grid::{FieldPositions, GridPos};

use serde::{Deserialize, Serialize};

/// Where a card copy currently lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Deck,
    Hand,
    Field,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Deck => "deck",
            Zone::Hand => "hand",
            Zone::Field => "field",
        };
        f.write_str(name)
    }
}
