//! Master card catalog generation.
//!
//! A catalog is rolled once per match from a table of weapon templates.
//! The template order is shuffled, then:
//!
//! - the first nine entries get costs 1 through 9 and a stat total budgeted
//!   for that cost (tags eat into the budget);
//! - later entries roll hp and ad freely and derive their cost from them.
//!
//! Every stat lands in 1..=9 and every cost in 1..=9.

use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId, Tags};
use super::tags::Tag;
use crate::core::entity::IdAllocator;
use crate::core::error::ConfigError;
use crate::core::rng::GameRng;

/// Entries that get a fixed cost ladder.
const COST_LADDER: usize = 9;

/// Largest hp, ad or cost a generated card can have.
const STAT_CAP: i32 = 9;

/// Largest hp + ad for a laddered entry.
const TOTAL_CAP: i32 = 18;

/// Name and tags a catalog entry is built from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponTemplate {
    pub name: String,
    #[serde(default)]
    pub tags: Tags,
}

impl WeaponTemplate {
    #[must_use]
    pub fn new(name: impl Into<String>, tags: &[Tag]) -> Self {
        Self {
            name: name.into(),
            tags: tags.iter().copied().collect(),
        }
    }

    /// The built-in template table.
    #[must_use]
    pub fn bundled() -> Vec<WeaponTemplate> {
        WEAPON_TEMPLATES
            .iter()
            .map(|(name, tags)| WeaponTemplate::new(*name, tags))
            .collect()
    }

    /// Parse a template table from a JSON array of `{name, tags}` objects.
    pub fn list_from_json(json: &str) -> Result<Vec<WeaponTemplate>, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Templates)
    }
}

/// Built-in weapon table.
pub const WEAPON_TEMPLATES: [(&str, &[Tag]); 26] = [
    ("Combat Knife", &[Tag::Infantry]),
    ("Assault Rifle", &[Tag::Infantry]),
    ("Sniper Rifle", &[Tag::Infantry, Tag::Stealth]),
    ("Light Machine Gun", &[Tag::Infantry, Tag::Heavy]),
    ("Grenade Launcher", &[Tag::Infantry, Tag::Support]),
    ("Field Mortar", &[Tag::Support]),
    ("Flamethrower", &[Tag::Infantry]),
    ("Recon Drone", &[Tag::Air, Tag::Stealth]),
    ("Attack Helicopter", &[Tag::Air, Tag::Heavy]),
    ("Stealth Bomber", &[Tag::Air, Tag::Stealth, Tag::Heavy]),
    ("Fighter Jet", &[Tag::Air]),
    ("Main Battle Tank", &[Tag::Armor, Tag::Heavy]),
    ("Light Tank", &[Tag::Armor]),
    ("Armored Car", &[Tag::Armor, Tag::Support]),
    ("Self-Propelled Howitzer", &[Tag::Armor, Tag::Heavy, Tag::Support]),
    ("Bunker", &[Tag::Structure]),
    ("Watchtower", &[Tag::Structure, Tag::Support]),
    ("Flak Cannon", &[Tag::Structure, Tag::Air]),
    ("Missile Silo", &[Tag::Structure, Tag::Heavy]),
    ("Minefield", &[Tag::Structure, Tag::Stealth]),
    ("Medic Station", &[Tag::Support]),
    ("Supply Truck", &[Tag::Support, Tag::Armor]),
    ("Railgun", &[Tag::Heavy]),
    ("Cloaking Field", &[Tag::Stealth]),
    ("Shotgun", &[]),
    ("Crossbow", &[]),
];

/// Roll hp and ad for a laddered entry of the given cost.
///
/// The budget shrinks by one per tag; hp and ad each stay within 1..=9.
pub fn stats_for_cost(cost: u32, tag_count: usize, rng: &mut GameRng) -> (i32, i32) {
    let effective_cost = (cost as i32 - tag_count as i32).max(1);

    let min_total = if effective_cost == 1 {
        2
    } else {
        (effective_cost - 1) * 2 + 1
    };
    let max_total = TOTAL_CAP.min(effective_cost * 2);
    let total = rng.gen_inclusive(min_total, max_total);

    let min_hp = (total - STAT_CAP).max(1);
    let max_hp = STAT_CAP.min(total - 1);
    let hp = rng.gen_inclusive(min_hp, max_hp);

    (hp, total - hp)
}

/// Cost for a freely rolled entry.
#[must_use]
pub fn cost_for_stats(hp: i32, ad: i32, tag_count: usize) -> u32 {
    let base = (hp + ad + 1) / 2;
    (base + tag_count as i32).clamp(1, STAT_CAP) as u32
}

/// The match's master set of card definitions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCatalog {
    cards: Vector<CardDefinition>,
}

impl CardCatalog {
    /// Roll a catalog of up to `size` cards from `templates`.
    pub fn generate(
        templates: &[WeaponTemplate],
        size: usize,
        rng: &mut GameRng,
        ids: &mut IdAllocator,
    ) -> Self {
        let mut shuffled = templates.to_vec();
        rng.shuffle(&mut shuffled);

        let cards: Vector<CardDefinition> = shuffled
            .into_iter()
            .take(size)
            .enumerate()
            .map(|(index, weapon)| {
                let tag_count = weapon.tags.len();
                let (cost, hp, ad) = if index < COST_LADDER {
                    let cost = index as u32 + 1;
                    let (hp, ad) = stats_for_cost(cost, tag_count, rng);
                    (cost, hp, ad)
                } else {
                    let hp = rng.gen_inclusive(1, STAT_CAP);
                    let ad = rng.gen_inclusive(1, STAT_CAP);
                    (cost_for_stats(hp, ad, tag_count), hp, ad)
                };

                CardDefinition {
                    id: ids.alloc_card(),
                    name: weapon.name,
                    cost,
                    max_hp: hp,
                    ad,
                    tags: weapon.tags,
                }
            })
            .collect();

        debug!("generated catalog of {} cards", cards.len());
        Self { cards }
    }

    /// Wrap an explicit card list.
    #[must_use]
    pub fn from_cards(cards: Vec<CardDefinition>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.iter().find(|card| card.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }
}
