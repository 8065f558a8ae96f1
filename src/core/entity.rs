//! Identity for in-play cards.
//!
//! Every card instance on a hand or field carries an `EntityId`. Card
//! copies in the catalog and decks carry a `CardId` instead (see
//! `cards::definition`). Both come from the same `IdAllocator`, so an id is
//! never handed out twice within one match, not even across re-deals. The
//! allocator lives in `MatchState`, so a restored snapshot keeps counting
//! from where it was taken.
//!
//! ```
//! use lane_duel::core::IdAllocator;
//!
//! let mut ids = IdAllocator::new();
//! let a = ids.alloc_entity();
//! let b = ids.alloc_entity();
//! assert_ne!(a, b);
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Unique identifier for a card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Monotonic id source for card copies and card instances.
///
/// Starts at 1 so that 0 never names a live card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAllocator {
    next: u32,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdAllocator {
    /// Create an allocator starting at id 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Allocate an id for a new card instance.
    pub fn alloc_entity(&mut self) -> EntityId {
        EntityId(self.bump())
    }

    /// Allocate an id for a new card copy (catalog entry or deck card).
    pub fn alloc_card(&mut self) -> CardId {
        CardId::new(self.bump())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator_is_monotonic() {
        let mut ids = IdAllocator::new();

        let e1 = ids.alloc_entity();
        let c1 = ids.alloc_card();
        let e2 = ids.alloc_entity();

        assert_eq!(e1, EntityId(1));
        assert_eq!(c1, CardId::new(2));
        assert_eq!(e2, EntityId(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", EntityId(42)), "Entity(42)");
    }

    #[test]
    fn test_serialization() {
        let id = EntityId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
