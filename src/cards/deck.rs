//! Per-player decks and card instancing.

use im::Vector;

use super::catalog::CardCatalog;
use super::definition::DeckCard;
use super::instance::CardInstance;
use crate::core::entity::IdAllocator;
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;

/// Build `owner`'s deck: a shuffled copy of the whole catalog.
///
/// Every copy gets a fresh `CardId`, so the two players' decks never share
/// ids even though they hold the same cards.
pub fn create_player_deck(
    catalog: &CardCatalog,
    owner: PlayerId,
    rng: &mut GameRng,
    ids: &mut IdAllocator,
) -> Vector<DeckCard> {
    let mut cards: Vec<_> = catalog.iter().collect();
    rng.shuffle(&mut cards);

    cards
        .into_iter()
        .map(|card| DeckCard::new(card.reidentified(ids.alloc_card()), owner))
        .collect()
}

/// Put a deck card into play at full health under a new instance id.
pub fn create_card_instance(card: DeckCard, ids: &mut IdAllocator) -> CardInstance {
    CardInstance::new(ids.alloc_entity(), card)
}
