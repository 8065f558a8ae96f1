//! Placement validation and legal-move enumeration.

use crate::cards::CardInstance;
use crate::core::action::Action;
use crate::core::entity::EntityId;
use crate::core::error::ActionError;
use crate::core::state::{MatchState, PlayerState};
use crate::zones::GridPos;

/// Validate deploying `instance` from `player`'s hand onto `pos`.
///
/// Only `player`'s own grid is checked for occupancy.
pub fn check_play(
    player: &PlayerState,
    instance: EntityId,
    pos: GridPos,
    grid_size: u8,
) -> Result<&CardInstance, ActionError> {
    let card = player
        .hand_card(instance)
        .ok_or(ActionError::CardNotInHand(instance))?;

    if !pos.in_bounds(grid_size) {
        return Err(ActionError::OutOfBounds(pos));
    }
    if player.positions.is_occupied(pos) {
        return Err(ActionError::CellOccupied(pos));
    }
    check_affordable(player, card)?;

    Ok(card)
}

/// Validate picking up `instance` for a drag: in hand and affordable.
pub fn check_drag(player: &PlayerState, instance: EntityId) -> Result<&CardInstance, ActionError> {
    let card = player
        .hand_card(instance)
        .ok_or(ActionError::CardNotInHand(instance))?;
    check_affordable(player, card)?;
    Ok(card)
}

fn check_affordable(player: &PlayerState, card: &CardInstance) -> Result<(), ActionError> {
    if player.dp < card.cost() {
        return Err(ActionError::InsufficientDp {
            cost: card.cost(),
            available: player.dp,
        });
    }
    Ok(())
}

/// Every `PlayCard` the deploying player could make right now.
#[must_use]
pub fn legal_plays(state: &MatchState, grid_size: u8) -> Vec<Action> {
    let player = state.player(state.deploying_player());

    let mut actions = Vec::new();
    for card in player.hand.iter().filter(|c| c.cost() <= player.dp) {
        for pos in player.positions.free_cells(grid_size) {
            actions.push(Action::PlayCard {
                instance: card.instance_id,
                pos,
            });
        }
    }
    actions
}
