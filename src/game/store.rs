//! The match store.
//!
//! `GameStore` owns one match and is its single writer: every command takes
//! `&mut self`, validates against the current state, and either commits or
//! returns an `ActionError` with the state untouched. Accepted commands that
//! change rules state are appended to the match history, so a store built
//! from the same config and fed the same history ends in the same rules
//! state. Selection and viewer commands are not recorded.
//!
//! ```text
//! Player1Phase --end_phase--> Player2Phase --end_phase--> EndPhase
//!      ^                                                     |
//!      +------- dismiss_combat_results <-- resolve_combat ---+
//! ```

use std::time::Duration;

use im::Vector;
use log::{debug, info, trace};

use super::schedule::{CombatTicket, CombatTimer};
use crate::cards::{create_player_deck, CardCatalog, WeaponTemplate};
use crate::core::action::{Action, ActionRecord};
use crate::core::config::{CombatTiming, MatchConfig};
use crate::core::entity::EntityId;
use crate::core::error::{ActionError, ConfigError};
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::GameRng;
use crate::core::state::{MatchState, Phase, PlayerState, Selection};
use crate::rules::{check_drag, check_play, legal_plays, resolve};
use crate::zones::GridPos;

/// One match and the commands that drive it.
#[derive(Clone, Debug)]
pub struct GameStore {
    config: MatchConfig,
    templates: Vec<WeaponTemplate>,
    rng: GameRng,
    state: MatchState,
    timer: CombatTimer,
}

impl GameStore {
    /// Create a store with the bundled weapon templates and deal a match.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        Self::with_templates(config, WeaponTemplate::bundled())
    }

    /// Create a store rolling its catalog from `templates`.
    pub fn with_templates(
        config: MatchConfig,
        templates: Vec<WeaponTemplate>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if templates.is_empty() {
            return Err(ConfigError::Invalid("weapon template table is empty".into()));
        }

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!("new match store, seed {}", rng.seed());

        let empty = PlayerMap::new(|p| PlayerState::new(p, Vector::new(), config.starting_dp));
        let mut store = Self {
            config,
            templates,
            rng,
            state: MatchState::new(empty, 0),
            timer: CombatTimer::new(),
        };
        store.deal();
        Ok(store)
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.state.turn
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &PlayerState {
        self.state.player(id)
    }

    /// The player whose deploy window this is, `None` in the end phase.
    #[must_use]
    pub fn active_player(&self) -> Option<PlayerId> {
        self.state.active_player()
    }

    #[must_use]
    pub fn combat_log(&self) -> &Vector<String> {
        &self.state.combat_log
    }

    #[must_use]
    pub fn show_combat_results(&self) -> bool {
        self.state.show_combat_results
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.state.selection
    }

    /// Card definitions rolled for the current match.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.state.catalog
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Seed of the store's RNG stream.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Commands accepted since the last initialization.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.state.history
    }

    /// Whether a deferred combat is armed.
    #[must_use]
    pub fn has_pending_combat(&self) -> bool {
        self.timer.pending().is_some()
    }

    /// The armed combat, for callers driving the delay on their own runtime.
    #[must_use]
    pub fn pending_combat(&self) -> Option<CombatTicket> {
        self.timer.pending()
    }

    /// Every placement the deploying player could make right now.
    #[must_use]
    pub fn legal_plays(&self) -> Vec<Action> {
        legal_plays(&self.state, self.config.grid_size)
    }

    // === Snapshots ===

    /// O(1) copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> MatchState {
        self.state.clone()
    }

    /// Swap in a previously taken state.
    ///
    /// The store picks up the snapshot's id allocator and RNG position, so
    /// ids and later deals continue as they would have in the source store.
    /// Invalidates any armed combat. A state caught between entering the end
    /// phase and resolving combat has its combat scheduled again: armed
    /// under deferred timing, run on the spot (and recorded as
    /// `ResolveCombat`) under immediate timing.
    pub fn restore(&mut self, state: MatchState) {
        self.timer.cancel_all();
        self.rng = GameRng::from_state(&state.rng);
        self.state = state;
        info!(
            "restored match at turn {} ({})",
            self.state.turn, self.state.phase
        );

        if self.state.phase == Phase::EndPhase && !self.state.show_combat_results {
            self.schedule_combat();
        }
    }

    // === Commands ===

    /// Dispatch any command.
    pub fn apply(&mut self, action: Action) -> Result<(), ActionError> {
        match action {
            Action::InitializeGame => self.initialize_game(),
            Action::EndPhase => self.end_phase(),
            Action::SelectCard(id) => self.select_card(id),
            Action::SelectUnit(id) => self.select_unit(id),
            Action::DeselectAll => self.deselect_all(),
            Action::ViewCard(id) => self.view_card(id),
            Action::ViewDeck(owner) => self.view_deck(owner),
            Action::PlayCard { instance, pos } => self.play_card(instance, pos),
            Action::StartDrag(id) => self.start_drag(id),
            Action::CancelDrag => self.cancel_drag(),
            Action::ResolveCombat => self.resolve_combat(),
            Action::DismissCombatResults => self.dismiss_combat_results(),
        }
    }

    /// Deal a fresh match: new catalog, new decks, opening hands.
    ///
    /// Any armed combat from the previous match is cancelled.
    pub fn initialize_game(&mut self) -> Result<(), ActionError> {
        self.deal();
        Ok(())
    }

    /// Select a hand card, clearing the unit selection.
    pub fn select_card(&mut self, instance: Option<EntityId>) -> Result<(), ActionError> {
        self.record(Action::SelectCard(instance));
        let selection = &mut self.state.selection;
        selection.selected_card = instance;
        selection.selected_unit = None;
        Ok(())
    }

    /// Select a field unit, clearing the card selection.
    pub fn select_unit(&mut self, instance: Option<EntityId>) -> Result<(), ActionError> {
        self.record(Action::SelectUnit(instance));
        let selection = &mut self.state.selection;
        selection.selected_unit = instance;
        selection.selected_card = None;
        Ok(())
    }

    pub fn deselect_all(&mut self) -> Result<(), ActionError> {
        self.record(Action::DeselectAll);
        self.state.selection.clear();
        Ok(())
    }

    /// Point the card inspector at `instance`.
    pub fn view_card(&mut self, instance: Option<EntityId>) -> Result<(), ActionError> {
        self.record(Action::ViewCard(instance));
        self.state.selection.viewing_card = instance;
        Ok(())
    }

    /// Point the deck viewer at `owner`'s deck.
    pub fn view_deck(&mut self, owner: Option<PlayerId>) -> Result<(), ActionError> {
        self.record(Action::ViewDeck(owner));
        self.state.selection.viewing_deck_owner = owner;
        Ok(())
    }

    /// Deploy a card from the deploying player's hand onto their grid.
    ///
    /// In the end phase deploys go to player 2, who moved last.
    pub fn play_card(&mut self, instance: EntityId, pos: GridPos) -> Result<(), ActionError> {
        let action = Action::PlayCard { instance, pos };
        let owner = self.state.deploying_player();

        let mut player = self.state.player(owner).clone();
        let cost = match check_play(&player, instance, pos, self.config.grid_size) {
            Ok(card) => card.cost(),
            Err(err) => return Self::reject(&action, err),
        };
        let unit = player
            .take_from_hand(instance)
            .ok_or(ActionError::CardNotInHand(instance))?;
        let name = unit.name().to_string();
        player
            .deploy(unit, pos)
            .map_err(|_| ActionError::CellOccupied(pos))?;
        player.dp = player.dp.saturating_sub(cost);

        self.record(action);
        *self.state.player_mut(owner) = player;
        let selection = &mut self.state.selection;
        selection.selected_card = None;
        selection.dragging_card = None;

        debug!("{owner} deployed {name} at {pos} for {cost} DP");
        self.debug_check();
        Ok(())
    }

    /// Pick up an affordable hand card of the deploying player.
    pub fn start_drag(&mut self, instance: EntityId) -> Result<(), ActionError> {
        let action = Action::StartDrag(instance);
        let owner = self.state.deploying_player();

        if let Err(err) = check_drag(self.state.player(owner), instance) {
            return Self::reject(&action, err);
        }

        self.record(action);
        let selection = &mut self.state.selection;
        selection.dragging_card = Some(instance);
        selection.selected_card = Some(instance);
        Ok(())
    }

    pub fn cancel_drag(&mut self) -> Result<(), ActionError> {
        self.record(Action::CancelDrag);
        self.state.selection.dragging_card = None;
        Ok(())
    }

    /// Advance the phase machine.
    ///
    /// Ending player 1's phase draws a card for player 2 and refills their
    /// DP. Ending player 2's phase enters the end phase and runs or arms
    /// combat, depending on the configured timing.
    pub fn end_phase(&mut self) -> Result<(), ActionError> {
        let action = Action::EndPhase;
        let next = self.state.phase.next();
        match self.state.phase {
            Phase::Player1Phase => {
                self.record(action);
                let max_hand = self.config.max_hand_size;
                let player2 = &mut self.state.players[PlayerId::Player2];
                if let Some(drawn) = player2.draw(max_hand, &mut self.state.ids) {
                    trace!("player2 drew {drawn}");
                }
                player2.refill_dp();
                self.state.selection.clear();
                self.enter_phase(next);
            }
            Phase::Player2Phase => {
                self.record(action);
                self.state.selection.clear();
                self.enter_phase(next);
                self.schedule_combat();
            }
            Phase::EndPhase => {
                let err = ActionError::WrongPhase {
                    action: action.name(),
                    phase: self.state.phase,
                };
                return Self::reject(&action, err);
            }
        }
        self.debug_check();
        Ok(())
    }

    /// Let `elapsed` pass on the combat timer. Returns true if combat ran.
    pub fn advance_clock(&mut self, elapsed: Duration) -> bool {
        if !self.timer.advance(elapsed) {
            return false;
        }
        self.run_combat();
        true
    }

    /// Run an armed combat once its delay has passed on an external clock.
    ///
    /// Returns false for a ticket from an earlier match, an earlier round or
    /// an already fired combat.
    pub fn fire_combat(&mut self, ticket: CombatTicket) -> bool {
        if !self.timer.is_current(ticket) {
            debug!("ignoring stale combat ticket");
            return false;
        }
        self.run_combat();
        true
    }

    /// Resolve lane combat now and show the report.
    ///
    /// Allowed in any phase; disarms a pending deferred combat.
    pub fn resolve_combat(&mut self) -> Result<(), ActionError> {
        self.run_combat();
        Ok(())
    }

    /// Close the combat report and start the next round.
    ///
    /// Both players gain a point of max DP and refill to it; player 1 draws.
    /// Accepted in any phase, with or without a report on display.
    pub fn dismiss_combat_results(&mut self) -> Result<(), ActionError> {
        self.record(Action::DismissCombatResults);
        self.state.turn += 1;
        self.state.combat_log = Vector::new();
        self.state.show_combat_results = false;

        let ceiling = self.config.max_dp;
        for (_, player) in self.state.players.iter_mut() {
            player.raise_max_dp(ceiling);
            player.refill_dp();
        }

        let max_hand = self.config.max_hand_size;
        let player1 = &mut self.state.players[PlayerId::Player1];
        if let Some(drawn) = player1.draw(max_hand, &mut self.state.ids) {
            trace!("player1 drew {drawn}");
        }

        info!("turn {} begins", self.state.turn);
        self.enter_phase(Phase::Player1Phase);
        self.debug_check();
        Ok(())
    }

    // === Internals ===

    fn deal(&mut self) {
        self.timer.cancel_all();

        // Ids keep counting across re-deals
        let mut ids = std::mem::take(&mut self.state.ids);
        let catalog = CardCatalog::generate(
            &self.templates,
            self.config.catalog_size,
            &mut self.rng,
            &mut ids,
        );

        let starting_dp = self.config.starting_dp;
        let mut players = PlayerMap::new(|p| PlayerState::new(p, Vector::new(), starting_dp));
        for (owner, player) in players.iter_mut() {
            player.deck = create_player_deck(&catalog, owner, &mut self.rng, &mut ids);
            for _ in 0..self.config.initial_hand_size {
                player.draw(self.config.max_hand_size, &mut ids);
            }
        }

        let mut state = MatchState::new(players, catalog.len());
        state.catalog = catalog;
        state.ids = ids;
        state.rng = self.rng.state();
        self.state = state;
        self.record(Action::InitializeGame);

        info!(
            "match initialized: {} catalog cards, {} in each hand",
            self.state.catalog.len(),
            self.state.player(PlayerId::Player1).hand.len()
        );
        self.debug_check();
    }

    fn run_combat(&mut self) {
        self.timer.disarm();
        self.record(Action::ResolveCombat);

        let resolution = resolve(&self.state.players);
        self.state.combat_log = resolution.log_lines().into_iter().collect();
        self.state.players = resolution.players;
        self.state.show_combat_results = true;

        info!(
            "combat resolved on turn {}: {} events",
            self.state.turn,
            resolution.events.len()
        );
        self.debug_check();
    }

    fn schedule_combat(&mut self) {
        match self.config.combat_timing {
            CombatTiming::Immediate => self.run_combat(),
            CombatTiming::Deferred(delay) => {
                self.timer.arm(delay);
                debug!("combat armed, due in {delay:?}");
            }
        }
    }

    fn enter_phase(&mut self, phase: Phase) {
        self.state.phase = phase;
        info!("turn {}: {phase}", self.state.turn);
    }

    fn reject<T>(action: &Action, err: ActionError) -> Result<T, ActionError> {
        debug!("{} rejected: {err}", action.name());
        Err(err)
    }

    fn record(&mut self, action: Action) {
        if !action.affects_rules() {
            trace!("{}", action.name());
            return;
        }
        debug!("{}", action.name());
        let record = ActionRecord::new(
            self.state.active_player(),
            action,
            self.state.turn,
            self.state.next_sequence(),
        );
        self.state.history.push_back(record);
    }

    fn debug_check(&self) {
        debug_assert_eq!(self.state.check_invariants(&self.config), Ok(()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::COMBAT_DELAY;
    use crate::rules::NO_COMBAT_LINE;

    fn store() -> GameStore {
        GameStore::new(MatchConfig::default().with_seed(7)).unwrap()
    }

    fn immediate() -> GameStore {
        GameStore::new(
            MatchConfig::default()
                .with_seed(7)
                .with_combat_timing(CombatTiming::Immediate),
        )
        .unwrap()
    }

    /// Force a hand card to the given cost and return its instance id.
    fn set_hand_cost(store: &mut GameStore, player: PlayerId, index: usize, cost: u32) -> EntityId {
        let mut state = store.snapshot();
        let card = state.player_mut(player).hand.get_mut(index).unwrap();
        card.card.cost = cost;
        let id = card.instance_id;
        store.restore(state);
        id
    }

    #[test]
    fn test_new_store_is_dealt() {
        let store = store();
        assert_eq!(store.turn(), 1);
        assert_eq!(store.phase(), Phase::Player1Phase);
        assert_eq!(store.catalog().len(), 26);

        for p in PlayerId::all() {
            let player = store.player(p);
            assert_eq!(player.hand.len(), 5);
            assert_eq!(player.deck.len(), 21);
            assert!(player.field.is_empty());
            assert_eq!((player.dp, player.max_dp), (1, 1));
        }
        assert_eq!(store.history().len(), 1);
        assert_eq!(store.history()[0].action, Action::InitializeGame);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = MatchConfig::default().with_grid_size(0);
        assert!(GameStore::new(config).is_err());
        assert!(GameStore::with_templates(MatchConfig::default(), Vec::new()).is_err());
    }

    #[test]
    fn test_selection_is_exclusive() {
        let mut store = store();
        store.select_card(Some(EntityId(5))).unwrap();
        store.select_unit(Some(EntityId(6))).unwrap();
        assert_eq!(store.selection().selected_card, None);
        assert_eq!(store.selection().selected_unit, Some(EntityId(6)));

        store.view_card(Some(EntityId(6))).unwrap();
        store.view_deck(Some(PlayerId::Player2)).unwrap();
        store.deselect_all().unwrap();
        assert_eq!(store.selection().selected_unit, None);
        assert_eq!(store.selection().viewing_card, None);
        assert_eq!(store.selection().viewing_deck_owner, Some(PlayerId::Player2));
    }

    #[test]
    fn test_drag_requires_affordable_hand_card() {
        let mut store = store();
        let cheap = set_hand_cost(&mut store, PlayerId::Player1, 0, 1);
        let pricey = set_hand_cost(&mut store, PlayerId::Player1, 1, 4);

        assert_eq!(
            store.start_drag(EntityId(9999)),
            Err(ActionError::CardNotInHand(EntityId(9999)))
        );
        assert_eq!(
            store.start_drag(pricey),
            Err(ActionError::InsufficientDp {
                cost: 4,
                available: 1
            })
        );
        assert_eq!(store.selection().dragging_card, None);

        store.start_drag(cheap).unwrap();
        assert_eq!(store.selection().dragging_card, Some(cheap));
        assert_eq!(store.selection().selected_card, Some(cheap));
        store.cancel_drag().unwrap();
        assert_eq!(store.selection().dragging_card, None);
        assert_eq!(store.selection().selected_card, Some(cheap));
    }

    #[test]
    fn test_player2_deploys_during_end_phase() {
        let mut store = store();
        store.end_phase().unwrap();
        store.end_phase().unwrap();
        let id = set_hand_cost(&mut store, PlayerId::Player2, 0, 1);

        store.start_drag(id).unwrap();
        store.play_card(id, GridPos::new(0, 0)).unwrap();

        let player2 = store.player(PlayerId::Player2);
        assert_eq!(player2.field.len(), 1);
        assert_eq!(player2.field[0].instance_id, id);
        assert_eq!(player2.dp, 0);
        assert!(store.player(PlayerId::Player1).field.is_empty());
        assert_eq!(store.phase(), Phase::EndPhase);
    }

    #[test]
    fn test_end_phase_rejected_in_end_phase() {
        let mut store = store();
        store.end_phase().unwrap();
        store.end_phase().unwrap();
        assert!(matches!(
            store.end_phase(),
            Err(ActionError::WrongPhase { .. })
        ));
    }

    #[test]
    fn test_deferred_combat_fires_on_clock() {
        let mut store = store();
        store.end_phase().unwrap();
        store.end_phase().unwrap();

        assert!(store.has_pending_combat());
        assert!(!store.show_combat_results());
        assert!(!store.advance_clock(COMBAT_DELAY / 2));
        assert!(store.advance_clock(COMBAT_DELAY));

        assert!(!store.has_pending_combat());
        assert!(store.show_combat_results());
        assert_eq!(store.combat_log().len(), 1);
        assert_eq!(store.combat_log()[0], NO_COMBAT_LINE);
    }

    #[test]
    fn test_immediate_combat() {
        let mut store = immediate();
        store.end_phase().unwrap();
        store.end_phase().unwrap();

        assert!(!store.has_pending_combat());
        assert!(store.show_combat_results());
        assert_eq!(store.phase(), Phase::EndPhase);
    }

    #[test]
    fn test_reinitialize_cancels_pending_combat() {
        let mut store = store();
        store.end_phase().unwrap();
        store.end_phase().unwrap();
        let ticket = store.pending_combat().unwrap();

        store.initialize_game().unwrap();
        assert!(!store.has_pending_combat());
        assert!(!store.fire_combat(ticket));
        assert!(!store.advance_clock(COMBAT_DELAY * 10));
        assert!(!store.show_combat_results());
        assert_eq!(store.phase(), Phase::Player1Phase);
    }

    #[test]
    fn test_fire_combat_with_current_ticket() {
        let mut store = store();
        store.end_phase().unwrap();
        store.end_phase().unwrap();
        let ticket = store.pending_combat().unwrap();
        assert_eq!(ticket.delay(), COMBAT_DELAY);

        assert!(store.fire_combat(ticket));
        assert!(store.show_combat_results());
        assert!(!store.fire_combat(ticket));
    }

    #[test]
    fn test_dismiss_without_results_starts_next_round() {
        let mut store = store();
        store.dismiss_combat_results().unwrap();

        assert_eq!(store.turn(), 2);
        assert_eq!(store.phase(), Phase::Player1Phase);
        assert!(!store.show_combat_results());
        for p in PlayerId::all() {
            assert_eq!((store.player(p).dp, store.player(p).max_dp), (2, 2));
        }
        // Player 1's hand was full, so the draw was skipped
        assert_eq!(store.player(PlayerId::Player1).hand.len(), 5);
    }

    #[test]
    fn test_previous_round_ticket_is_rejected() {
        let mut store = store();
        store.end_phase().unwrap();
        store.end_phase().unwrap();
        let round1 = store.pending_combat().unwrap();

        store.resolve_combat().unwrap();
        store.dismiss_combat_results().unwrap();
        store.end_phase().unwrap();
        store.end_phase().unwrap();
        let round2 = store.pending_combat().unwrap();

        assert_ne!(round1, round2);
        assert!(!store.fire_combat(round1));
        assert!(!store.show_combat_results());
        assert!(store.has_pending_combat());
        assert!(store.fire_combat(round2));
        assert!(store.show_combat_results());
    }

    #[test]
    fn test_restore_under_immediate_timing_runs_combat() {
        let mut deferred = store();
        deferred.end_phase().unwrap();
        deferred.end_phase().unwrap();
        let snapshot = deferred.snapshot();
        assert!(!snapshot.show_combat_results);

        let mut store = immediate();
        store.restore(snapshot);

        assert!(!store.has_pending_combat());
        assert!(store.show_combat_results());
        assert_eq!(
            store.history().last().map(|r| r.action.clone()),
            Some(Action::ResolveCombat)
        );
    }

    #[test]
    fn test_restore_reschedules_interrupted_combat() {
        let mut store = store();
        store.end_phase().unwrap();
        store.end_phase().unwrap();
        let snapshot = store.snapshot();
        let stale = store.pending_combat().unwrap();

        store.initialize_game().unwrap();
        store.restore(snapshot);

        assert_eq!(store.phase(), Phase::EndPhase);
        assert!(store.has_pending_combat());
        assert!(!store.fire_combat(stale));
        assert!(store.advance_clock(COMBAT_DELAY));
        assert!(store.show_combat_results());
    }

    #[test]
    fn test_restored_store_allocates_fresh_ids() {
        let mut source = store();
        let mut snapshot = source.snapshot();

        // Retire the newest instance id: its card goes back on the deck
        let player2 = snapshot.player_mut(PlayerId::Player2);
        let returned = player2.hand.pop_back().unwrap();
        let retired = returned.instance_id;
        player2.deck.push_front(returned.into_deck_card());

        let mut other = GameStore::new(
            MatchConfig::default()
                .with_seed(99)
                .with_catalog_size(3),
        )
        .unwrap();
        other.restore(snapshot.clone());
        other.end_phase().unwrap();
        source.restore(snapshot);
        source.end_phase().unwrap();

        let drawn = other.player(PlayerId::Player2).hand.last().unwrap();
        assert_ne!(drawn.instance_id, retired);
        assert!(drawn.instance_id > retired);
        assert_eq!(other.state(), source.state());
    }

    #[test]
    fn test_restore_carries_rng_position() {
        let mut source = store();
        let mut other = GameStore::new(MatchConfig::default().with_seed(99)).unwrap();
        other.restore(source.snapshot());
        assert_eq!(other.seed(), 7);

        source.initialize_game().unwrap();
        other.initialize_game().unwrap();
        assert_eq!(other.state(), source.state());
        assert_eq!(other.catalog(), source.catalog());
    }

    #[test]
    fn test_history_records_accepted_rules_commands_only() {
        let mut store = store();
        let _ = store.play_card(EntityId(9999), GridPos::new(0, 0));
        for _ in 0..50 {
            store.select_card(None).unwrap();
            store.view_deck(Some(PlayerId::Player1)).unwrap();
        }
        store.end_phase().unwrap();

        let actions: Vec<_> = store.history().iter().map(|r| r.action.clone()).collect();
        assert_eq!(actions, vec![Action::InitializeGame, Action::EndPhase]);
        assert_eq!(store.history()[1].player, Some(PlayerId::Player1));
        assert_eq!(store.history()[1].sequence, 1);
    }
}
