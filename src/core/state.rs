//! Match state: players, phase machine position, combat report, UI pointers.
//!
//! ## PlayerState
//!
//! One player's deck, hand, field, grid positions and DP.
//!
//! ## MatchState
//!
//! Both players plus turn/phase, the combat log, transient selection
//! pointers and the action history. It also carries the match's catalog,
//! id allocator and RNG position, so a snapshot restored into any store
//! continues exactly where it was taken. Collections are `im` persistent
//! structures, so cloning a `MatchState` is O(1) and a snapshot can be
//! taken after every command.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::config::MatchConfig;
use super::entity::{EntityId, IdAllocator};
use super::error::{InvariantViolation, SnapshotError};
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRngState;
use crate::cards::{create_card_instance, CardCatalog, CardId, CardInstance, DeckCard};
use crate::zones::{FieldPositions, GridPos, Zone};

/// Segment of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Player 1 deploys.
    Player1Phase,
    /// Player 2 deploys.
    Player2Phase,
    /// Combat resolves and its report is shown.
    EndPhase,
}

impl Phase {
    /// The phase after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Phase::Player1Phase => Phase::Player2Phase,
            Phase::Player2Phase => Phase::EndPhase,
            Phase::EndPhase => Phase::Player1Phase,
        }
    }

    /// The player whose deploy window this is, `None` in the end phase.
    #[must_use]
    pub const fn active_player(self) -> Option<PlayerId> {
        match self {
            Phase::Player1Phase => Some(PlayerId::Player1),
            Phase::Player2Phase => Some(PlayerId::Player2),
            Phase::EndPhase => None,
        }
    }

    /// The player whose hand and grid deploy commands act on.
    ///
    /// Player 2 keeps the board through the end phase.
    #[must_use]
    pub const fn deploying_player(self) -> PlayerId {
        match self {
            Phase::Player1Phase => PlayerId::Player1,
            Phase::Player2Phase | Phase::EndPhase => PlayerId::Player2,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Player1Phase => "player1Phase",
            Phase::Player2Phase => "player2Phase",
            Phase::EndPhase => "endPhase",
        };
        f.write_str(name)
    }
}

/// One player's side of the match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: PlayerId,

    /// Cards in hand, in draw order.
    pub hand: Vector<CardInstance>,

    /// Deployed units, in deployment order.
    pub field: Vector<CardInstance>,

    /// Remaining cards; drawn from the front, recycled onto the back.
    pub deck: Vector<DeckCard>,

    /// Spendable DP.
    pub dp: u32,

    /// DP refill level.
    pub max_dp: u32,

    /// Grid cell of every deployed unit.
    pub positions: FieldPositions,
}

impl PlayerState {
    /// A player with an empty hand and field.
    #[must_use]
    pub fn new(id: PlayerId, deck: Vector<DeckCard>, starting_dp: u32) -> Self {
        Self {
            id,
            hand: Vector::new(),
            field: Vector::new(),
            deck,
            dp: starting_dp,
            max_dp: starting_dp,
            positions: FieldPositions::new(),
        }
    }

    /// Find a card in hand.
    #[must_use]
    pub fn hand_card(&self, instance: EntityId) -> Option<&CardInstance> {
        self.hand.iter().find(|c| c.instance_id == instance)
    }

    /// Find a deployed unit.
    #[must_use]
    pub fn field_unit(&self, instance: EntityId) -> Option<&CardInstance> {
        self.field.iter().find(|c| c.instance_id == instance)
    }

    /// Remove a card from hand.
    pub fn take_from_hand(&mut self, instance: EntityId) -> Option<CardInstance> {
        let index = self.hand.iter().position(|c| c.instance_id == instance)?;
        Some(self.hand.remove(index))
    }

    /// Put a unit on the field at `pos`.
    ///
    /// Returns the unit back when the cell is taken.
    pub fn deploy(&mut self, unit: CardInstance, pos: GridPos) -> Result<(), CardInstance> {
        if !self.positions.place(unit.instance_id, pos) {
            return Err(unit);
        }
        self.field.push_back(unit);
        Ok(())
    }

    /// Draw the front deck card into hand if the hand has room.
    ///
    /// Returns the new instance id.
    pub fn draw(&mut self, max_hand_size: usize, ids: &mut IdAllocator) -> Option<EntityId> {
        if self.hand.len() >= max_hand_size {
            return None;
        }
        let card = self.deck.pop_front()?;
        let instance = create_card_instance(card, ids);
        let id = instance.instance_id;
        self.hand.push_back(instance);
        Some(id)
    }

    /// Reset DP to the refill level.
    pub fn refill_dp(&mut self) {
        self.dp = self.max_dp;
    }

    /// Raise max DP by one, up to `ceiling`.
    pub fn raise_max_dp(&mut self, ceiling: u32) {
        self.max_dp = (self.max_dp + 1).min(ceiling);
    }

    /// Which zone holds a card copy.
    #[must_use]
    pub fn zone_of(&self, card: CardId) -> Option<Zone> {
        if self.hand.iter().any(|c| c.card_id() == card) {
            Some(Zone::Hand)
        } else if self.field.iter().any(|c| c.card_id() == card) {
            Some(Zone::Field)
        } else if self.deck.iter().any(|c| c.id() == card) {
            Some(Zone::Deck)
        } else {
            None
        }
    }

    /// All card copies this player owns, across zones.
    pub fn card_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.hand
            .iter()
            .map(CardInstance::card_id)
            .chain(self.field.iter().map(CardInstance::card_id))
            .chain(self.deck.iter().map(DeckCard::id))
    }

    /// Total cards across deck, hand and field.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.field.len() + self.deck.len()
    }
}

/// Transient pointers for the presentation layer. Not rules state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub selected_card: Option<EntityId>,
    pub selected_unit: Option<EntityId>,
    pub dragging_card: Option<EntityId>,
    pub viewing_card: Option<EntityId>,
    pub viewing_deck_owner: Option<PlayerId>,
}

impl Selection {
    /// Clear card/unit selection, drag and card inspection.
    ///
    /// The deck viewer is left alone.
    pub fn clear(&mut self) {
        self.selected_card = None;
        self.selected_unit = None;
        self.dragging_card = None;
        self.viewing_card = None;
    }
}

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Round number (starts at 1).
    pub turn: u32,

    /// Current phase.
    pub phase: Phase,

    /// Both players.
    pub players: PlayerMap<PlayerState>,

    /// Last combat's report lines.
    pub combat_log: Vector<String>,

    /// Whether a combat report is waiting to be dismissed.
    pub show_combat_results: bool,

    /// UI pointers.
    pub selection: Selection,

    /// Never set; matches run until reinitialized.
    pub winner: Option<PlayerId>,

    /// Accepted commands since the last initialization.
    pub history: Vector<ActionRecord>,

    /// Card copies each player owns (the catalog size at deal time).
    pub cards_per_player: usize,

    /// Definitions rolled for this match.
    pub catalog: CardCatalog,

    /// Id source for card copies and instances. Never rewinds within a match.
    pub ids: IdAllocator,

    /// RNG position after the last deal.
    pub rng: GameRngState,
}

impl MatchState {
    /// Turn 1, player 1's phase, with the given players.
    #[must_use]
    pub fn new(players: PlayerMap<PlayerState>, cards_per_player: usize) -> Self {
        Self {
            turn: 1,
            phase: Phase::Player1Phase,
            players,
            combat_log: Vector::new(),
            show_combat_results: false,
            selection: Selection::default(),
            winner: None,
            history: Vector::new(),
            cards_per_player,
            catalog: CardCatalog::default(),
            ids: IdAllocator::new(),
            rng: GameRngState::default(),
        }
    }

    /// The player whose deploy window this is.
    #[must_use]
    pub fn active_player(&self) -> Option<PlayerId> {
        self.phase.active_player()
    }

    /// The player deploy commands act on.
    #[must_use]
    pub fn deploying_player(&self) -> PlayerId {
        self.phase.deploying_player()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        &mut self.players[id]
    }

    /// Next history sequence number.
    #[must_use]
    pub fn next_sequence(&self) -> u32 {
        self.history.len() as u32
    }

    /// Verify zone exclusivity, grid occupancy and DP bounds.
    pub fn check_invariants(&self, config: &MatchConfig) -> Result<(), InvariantViolation> {
        let mut seen: FxHashSet<CardId> = FxHashSet::default();

        for (id, player) in self.players.iter() {
            for card in player.card_ids() {
                if !seen.insert(card) {
                    return Err(InvariantViolation::DuplicateCard(card));
                }
            }

            let count = player.card_count();
            if count != self.cards_per_player {
                return Err(InvariantViolation::CardCount {
                    expected: self.cards_per_player,
                    found: count,
                });
            }

            let foreign = player.hand.iter().any(|c| c.owner != id)
                || player.field.iter().any(|c| c.owner != id)
                || player.deck.iter().any(|c| c.owner != id);
            if foreign {
                return Err(InvariantViolation::ForeignCard { player: id });
            }

            if player.positions.len() != player.field.len()
                || player.field.iter().any(|u| !player.positions.contains(u.instance_id))
            {
                return Err(InvariantViolation::PositionMismatch { player: id });
            }

            let mut cells: FxHashSet<GridPos> = FxHashSet::default();
            for (_, pos) in player.positions.iter() {
                if !cells.insert(pos) {
                    return Err(InvariantViolation::DoubleOccupancy { player: id, pos });
                }
            }

            if player.dp > player.max_dp {
                return Err(InvariantViolation::DpOverMax {
                    player: id,
                    dp: player.dp,
                    max_dp: player.max_dp,
                });
            }
            if player.max_dp > config.max_dp {
                return Err(InvariantViolation::MaxDpOverCeiling {
                    player: id,
                    max_dp: player.max_dp,
                });
            }
            if player.hand.len() > config.max_hand_size {
                return Err(InvariantViolation::HandOverCapacity {
                    player: id,
                    size: player.hand.len(),
                });
            }
        }

        Ok(())
    }

    /// Encode as a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardDefinition;

    fn deck(owner: PlayerId, ids: &mut IdAllocator, n: usize) -> Vector<DeckCard> {
        (0..n)
            .map(|i| {
                DeckCard::new(
                    CardDefinition::new(ids.alloc_card(), format!("Unit {i}"), 1, 2, 1),
                    owner,
                )
            })
            .collect()
    }

    fn state(n: usize) -> (MatchState, IdAllocator) {
        let mut ids = IdAllocator::new();
        let players = PlayerMap::new(|p| PlayerState::new(p, Vector::new(), 1));
        let mut state = MatchState::new(players, n);
        for p in PlayerId::all() {
            state.player_mut(p).deck = deck(p, &mut ids, n);
        }
        (state, ids)
    }

    #[test]
    fn test_phase_cycle() {
        assert_eq!(Phase::Player1Phase.next(), Phase::Player2Phase);
        assert_eq!(Phase::Player2Phase.next(), Phase::EndPhase);
        assert_eq!(Phase::EndPhase.next(), Phase::Player1Phase);
        assert_eq!(Phase::EndPhase.active_player(), None);
        assert_eq!(Phase::EndPhase.deploying_player(), PlayerId::Player2);
        assert_eq!(Phase::Player1Phase.deploying_player(), PlayerId::Player1);
        assert_eq!(format!("{}", Phase::Player2Phase), "player2Phase");
    }

    #[test]
    fn test_draw_respects_capacity() {
        let (mut state, mut ids) = state(6);
        let player = state.player_mut(PlayerId::Player1);

        for _ in 0..5 {
            assert!(player.draw(5, &mut ids).is_some());
        }
        assert!(player.draw(5, &mut ids).is_none());
        assert_eq!(player.hand.len(), 5);
        assert_eq!(player.deck.len(), 1);
    }

    #[test]
    fn test_draw_from_front() {
        let (mut state, mut ids) = state(3);
        let player = state.player_mut(PlayerId::Player2);
        let front = player.deck[0].id();

        player.draw(5, &mut ids);
        assert_eq!(player.hand[0].card_id(), front);
        assert_eq!(player.zone_of(front), Some(Zone::Hand));
    }

    #[test]
    fn test_deploy_moves_between_zones() {
        let (mut state, mut ids) = state(3);
        let player = state.player_mut(PlayerId::Player1);
        let id = player.draw(5, &mut ids).unwrap();

        let unit = player.take_from_hand(id).unwrap();
        let card = unit.card_id();
        player.deploy(unit, GridPos::new(0, 1)).unwrap();

        assert_eq!(player.zone_of(card), Some(Zone::Field));
        assert_eq!(player.positions.get(id), Some(GridPos::new(0, 1)));
        assert!(player.take_from_hand(id).is_none());
    }

    #[test]
    fn test_deploy_to_occupied_cell_hands_unit_back() {
        let (mut state, mut ids) = state(3);
        let player = state.player_mut(PlayerId::Player1);
        let a = player.draw(5, &mut ids).unwrap();
        let b = player.draw(5, &mut ids).unwrap();

        let unit_a = player.take_from_hand(a).unwrap();
        player.deploy(unit_a, GridPos::new(1, 1)).unwrap();

        let unit_b = player.take_from_hand(b).unwrap();
        let returned = player.deploy(unit_b, GridPos::new(1, 1)).unwrap_err();
        assert_eq!(returned.instance_id, b);
        assert_eq!(player.field.len(), 1);
    }

    #[test]
    fn test_max_dp_caps() {
        let (mut state, _) = state(0);
        let player = state.player_mut(PlayerId::Player1);
        player.max_dp = 9;

        player.raise_max_dp(10);
        player.raise_max_dp(10);
        player.refill_dp();

        assert_eq!(player.max_dp, 10);
        assert_eq!(player.dp, 10);
    }

    #[test]
    fn test_invariants_hold_for_fresh_state() {
        let (state, _) = state(4);
        assert_eq!(state.check_invariants(&MatchConfig::default()), Ok(()));
    }

    #[test]
    fn test_invariants_catch_duplicates() {
        let (mut state, _) = state(4);
        let dup = state.player(PlayerId::Player1).deck[0].clone();
        let p1 = state.player_mut(PlayerId::Player1);
        p1.deck.pop_back();
        p1.deck.push_back(dup.clone());

        assert_eq!(
            state.check_invariants(&MatchConfig::default()),
            Err(InvariantViolation::DuplicateCard(dup.id()))
        );
    }

    #[test]
    fn test_invariants_catch_dp_over_max() {
        let (mut state, _) = state(1);
        state.player_mut(PlayerId::Player2).dp = 3;

        assert!(matches!(
            state.check_invariants(&MatchConfig::default()),
            Err(InvariantViolation::DpOverMax { .. })
        ));
    }

    #[test]
    fn test_invariants_catch_orphaned_position() {
        let (mut state, _) = state(1);
        state
            .player_mut(PlayerId::Player1)
            .positions
            .place(EntityId(999), GridPos::new(0, 0));

        assert_eq!(
            state.check_invariants(&MatchConfig::default()),
            Err(InvariantViolation::PositionMismatch { player: PlayerId::Player1 })
        );
    }

    #[test]
    fn test_snapshot_bytes_roundtrip() {
        let (mut state, mut ids) = state(3);
        let player = state.player_mut(PlayerId::Player1);
        let id = player.draw(5, &mut ids).unwrap();
        let unit = player.take_from_hand(id).unwrap();
        player.deploy(unit, GridPos::new(1, 2)).unwrap();
        state.combat_log.push_back("No combat occurred this turn.".to_string());
        state.ids = ids;

        let bytes = state.to_bytes().unwrap();
        let restored = MatchState::from_bytes(&bytes).unwrap();

        assert_eq!(state, restored);
        assert!(MatchState::from_bytes(&bytes[..bytes.len() / 2]).is_err());
    }
}
