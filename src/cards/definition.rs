//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: name, cost,
//! max hp, attack damage and tags. A `DeckCard` is a definition stamped
//! with the player who owns that copy.
//!
//! Instance-specific data (damage taken, instance id) lives in
//! `CardInstance`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::tags::Tag;
use crate::core::player::PlayerId;

/// Unique identifier for a card copy.
///
/// Catalog entries and each player's copies get distinct ids. A copy keeps
/// its id through draw, deployment, defeat and recycling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Tag list; no template carries more than three.
pub type Tags = SmallVec<[Tag; 3]>;

/// Static card definition.
///
/// ## Example
///
/// ```
/// use lane_duel::cards::{CardDefinition, CardId, Tag};
///
/// let card = CardDefinition::new(CardId::new(1), "Flak Cannon", 3, 4, 2)
///     .with_tag(Tag::Heavy);
///
/// assert_eq!(card.hp(), 4);
/// assert_eq!(card.tags.as_slice(), &[Tag::Heavy]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this copy.
    pub id: CardId,

    /// Card name (used in combat log lines).
    pub name: String,

    /// DP cost, 1-9.
    pub cost: u32,

    /// Hit points at full health.
    pub max_hp: i32,

    /// Attack damage dealt each combat.
    pub ad: i32,

    /// Categories.
    pub tags: Tags,
}

impl CardDefinition {
    /// Create a new card definition with no tags.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, cost: u32, max_hp: i32, ad: i32) -> Self {
        Self {
            id,
            name: name.into(),
            cost,
            max_hp,
            ad,
            tags: Tags::new(),
        }
    }

    /// Add a tag (builder pattern).
    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Definitions are always at full health.
    #[must_use]
    pub fn hp(&self) -> i32 {
        self.max_hp
    }

    /// Same card under a different id.
    #[must_use]
    pub fn reidentified(&self, id: CardId) -> Self {
        Self { id, ..self.clone() }
    }
}

/// A card copy waiting in a player's deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckCard {
    pub card: CardDefinition,
    pub owner: PlayerId,
}

impl DeckCard {
    #[must_use]
    pub fn new(card: CardDefinition, owner: PlayerId) -> Self {
        Self { card, owner }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.card.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_card_definition_builder() {
        let card = CardDefinition::new(CardId::new(1), "Gunship", 6, 5, 4)
            .with_tag(Tag::Air)
            .with_tag(Tag::Heavy);

        assert_eq!(card.name, "Gunship");
        assert_eq!(card.cost, 6);
        assert_eq!(card.hp(), 5);
        assert_eq!(card.ad, 4);
        assert_eq!(card.tags.len(), 2);
    }

    #[test]
    fn test_reidentified_keeps_stats() {
        let card = CardDefinition::new(CardId::new(1), "Mortar", 2, 2, 3).with_tag(Tag::Support);
        let copy = card.reidentified(CardId::new(9));

        assert_eq!(copy.id, CardId::new(9));
        assert_eq!(copy.name, card.name);
        assert_eq!(copy.tags, card.tags);
    }

    #[test]
    fn test_card_definition_serialization() {
        let card = CardDefinition::new(CardId::new(1), "Test", 2, 3, 1).with_tag(Tag::Armor);

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardDefinition = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
