//! Card tag taxonomy.
//!
//! A closed set of seven categories. Tags raise a card's cost during
//! catalog balancing; color and abbreviation are for display only.

use serde::{Deserialize, Serialize};

/// Card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tag {
    Air,
    Armor,
    Structure,
    Infantry,
    Stealth,
    Support,
    Heavy,
}

impl Tag {
    /// Every tag, in declaration order.
    pub const ALL: [Tag; 7] = [
        Tag::Air,
        Tag::Armor,
        Tag::Structure,
        Tag::Infantry,
        Tag::Stealth,
        Tag::Support,
        Tag::Heavy,
    ];

    /// Display color as a `#rrggbb` hex string.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Tag::Air => "#66ccff",
            Tag::Armor => "#888888",
            Tag::Structure => "#aa8844",
            Tag::Infantry => "#44aa44",
            Tag::Stealth => "#aa44aa",
            Tag::Support => "#44aaaa",
            Tag::Heavy => "#ff6644",
        }
    }

    /// Three-letter badge text.
    #[must_use]
    pub const fn abbrev(self) -> &'static str {
        match self {
            Tag::Air => "AIR",
            Tag::Armor => "ARM",
            Tag::Structure => "STR",
            Tag::Infantry => "INF",
            Tag::Stealth => "STH",
            Tag::Support => "SUP",
            Tag::Heavy => "HVY",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
