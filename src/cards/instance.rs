//! Card instances - runtime card state.
//!
//! `CardInstance` is a card copy in a hand or on a field. It carries its
//! own instance id and current hp; damage persists across rounds until the
//! unit is defeated and recycled.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId, DeckCard};
use crate::core::entity::EntityId;
use crate::core::player::PlayerId;

/// A card in play.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique id for this draw of the card.
    pub instance_id: EntityId,

    /// The card copy this instance was drawn from.
    pub card: CardDefinition,

    /// Owning player.
    pub owner: PlayerId,

    /// Current hit points. May drop to zero or below during combat.
    pub hp: i32,
}

impl CardInstance {
    /// Instantiate a deck card at full health.
    #[must_use]
    pub fn new(instance_id: EntityId, deck_card: DeckCard) -> Self {
        let hp = deck_card.card.max_hp;
        Self {
            instance_id,
            card: deck_card.card,
            owner: deck_card.owner,
            hp,
        }
    }

    #[must_use]
    pub fn card_id(&self) -> CardId {
        self.card.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.card.name
    }

    #[must_use]
    pub fn cost(&self) -> u32 {
        self.card.cost
    }

    #[must_use]
    pub fn ad(&self) -> i32 {
        self.card.ad
    }

    #[must_use]
    pub fn max_hp(&self) -> i32 {
        self.card.max_hp
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// Subtract damage from hp.
    pub fn take_damage(&mut self, amount: i32) {
        self.hp -= amount;
    }

    /// Return the copy to deck form: instance id dropped, health restored.
    #[must_use]
    pub fn into_deck_card(self) -> DeckCard {
        DeckCard::new(self.card, self.owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_card() -> DeckCard {
        DeckCard::new(
            CardDefinition::new(CardId::new(3), "Recon Drone", 2, 3, 2),
            PlayerId::Player1,
        )
    }

    #[test]
    fn test_card_instance_new() {
        let instance = CardInstance::new(EntityId(10), deck_card());

        assert_eq!(instance.instance_id, EntityId(10));
        assert_eq!(instance.card_id(), CardId::new(3));
        assert_eq!(instance.owner, PlayerId::Player1);
        assert_eq!(instance.hp, 3);
        assert_eq!(instance.cost(), 2);
    }

    #[test]
    fn test_damage_and_defeat() {
        let mut instance = CardInstance::new(EntityId(10), deck_card());

        instance.take_damage(2);
        assert_eq!(instance.hp, 1);
        assert!(!instance.is_defeated());

        instance.take_damage(4);
        assert_eq!(instance.hp, -3);
        assert!(instance.is_defeated());
    }

    #[test]
    fn test_recycle_restores_health() {
        let mut instance = CardInstance::new(EntityId(10), deck_card());
        instance.take_damage(5);

        let recycled = instance.into_deck_card();
        assert_eq!(recycled.id(), CardId::new(3));
        assert_eq!(recycled.card.hp(), 3);

        let redrawn = CardInstance::new(EntityId(11), recycled);
        assert_eq!(redrawn.hp, redrawn.max_hp());
    }

    #[test]
    fn test_card_instance_serialization() {
        let mut instance = CardInstance::new(EntityId(10), deck_card());
        instance.take_damage(1);

        let json = serde_json::to_string(&instance).unwrap();
        let deserialized: CardInstance = serde_json::from_str(&json).unwrap();

        assert_eq!(instance, deserialized);
    }
}
