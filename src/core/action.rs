//! Store commands and the action history.
//!
//! Every command the store accepts can be expressed as an `Action` value,
//! which makes a match replayable: feeding the recorded actions into a
//! store built with the same seed reproduces the same state.

use serde::{Deserialize, Serialize};

use super::entity::EntityId;
use super::player::PlayerId;
use crate::zones::GridPos;

/// A store command.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Deal a fresh match.
    InitializeGame,
    /// Advance the phase machine.
    EndPhase,
    /// Select a hand card (clears the unit selection).
    SelectCard(Option<EntityId>),
    /// Select a field unit (clears the card selection).
    SelectUnit(Option<EntityId>),
    /// Clear selection, drag and inspection pointers.
    DeselectAll,
    /// Inspect a card.
    ViewCard(Option<EntityId>),
    /// Inspect a player's remaining deck.
    ViewDeck(Option<PlayerId>),
    /// Deploy a hand card onto the deploying player's grid.
    PlayCard { instance: EntityId, pos: GridPos },
    /// Begin dragging an affordable hand card.
    StartDrag(EntityId),
    /// Stop dragging.
    CancelDrag,
    /// Run lane combat on the current fields.
    ResolveCombat,
    /// Close the combat report and start the next round.
    DismissCombatResults,
}

impl Action {
    /// Short command name, used in logs and phase errors.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::InitializeGame => "initialize_game",
            Action::EndPhase => "end_phase",
            Action::SelectCard(_) => "select_card",
            Action::SelectUnit(_) => "select_unit",
            Action::DeselectAll => "deselect_all",
            Action::ViewCard(_) => "view_card",
            Action::ViewDeck(_) => "view_deck",
            Action::PlayCard { .. } => "play_card",
            Action::StartDrag(_) => "start_drag",
            Action::CancelDrag => "cancel_drag",
            Action::ResolveCombat => "resolve_combat",
            Action::DismissCombatResults => "dismiss_combat_results",
        }
    }

    /// Whether the command can change rules state (as opposed to UI pointers).
    #[must_use]
    pub fn affects_rules(&self) -> bool {
        matches!(
            self,
            Action::InitializeGame
                | Action::EndPhase
                | Action::PlayCard { .. }
                | Action::ResolveCombat
                | Action::DismissCombatResults
        )
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player whose phase it was, `None` during the end phase.
    pub player: Option<PlayerId>,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the match.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: Option<PlayerId>, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
