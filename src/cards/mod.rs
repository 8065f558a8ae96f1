//! Card system: tags, definitions, instances, catalog and decks.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for a card copy
//! - `CardDefinition`: Static card data (cost, hp, ad, tags)
//! - `DeckCard`: A definition owned by a player, waiting in a deck
//! - `CardInstance`: A card in a hand or on the field, with current hp
//! - `CardCatalog`: The master set rolled at match start

pub mod catalog;
pub mod deck;
pub mod definition;
pub mod instance;
pub mod tags;

pub use catalog::{CardCatalog, WeaponTemplate, WEAPON_TEMPLATES};
pub use deck::{create_card_instance, create_player_deck};
pub use definition::{CardDefinition, CardId, DeckCard, Tags};
pub use instance::CardInstance;
pub use tags::Tag;
