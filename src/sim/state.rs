//! Session state and progression
//!
//! The session exclusively owns every enemy and collectible. Entity code
//! detects and publishes; only the reactions here mutate the collections
//! or advance the phase.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::sim::collectible::Collectible;
use crate::sim::enemy::Enemy;
use crate::sim::entity::{Entity, SpriteInstance};
use crate::sim::events::{EventBus, GameEvent};
use crate::sim::player::Player;
use crate::tuning::Tuning;

/// Progression phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Collecting stars toward the score goal
    Scoring,
    /// One key on the grid, use it or lose it
    PursuingKey,
    /// Key in hand, run for the gate
    Fleeing,
    /// Round over, waiting for a new game
    Won,
}

impl GamePhase {
    /// Level index shown by the UI collaborator
    pub fn index(self) -> u8 {
        match self {
            GamePhase::Scoring => 0,
            GamePhase::PursuingKey => 1,
            GamePhase::Fleeing => 2,
            GamePhase::Won => 3,
        }
    }
}

/// Complete session state
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// All randomness flows through this seeded generator
    pub rng: Pcg32,
    pub tuning: Tuning,
    /// Simulation tick counter; the deadline clock for expiries
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub enemies: Vec<Enemy>,
    pub collectibles: Vec<Collectible>,
    pub player: Player,
    pub bus: EventBus,
    /// Next entity id
    next_id: u32,
}

impl GameState {
    /// Create a session and start the first round
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let player = Player::new(
            tuning.player_start_row,
            tuning.player_start_col,
            tuning.score_goal,
        );
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            time_ticks: 0,
            phase: GamePhase::Scoring,
            enemies: Vec::new(),
            collectibles: Vec::new(),
            player,
            bus: EventBus::new(),
            next_id: 1,
        };
        state.start();
        state
    }

    /// Allocate an entity id
    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Begin a round: full enemy pool, one star, player at the start cell
    pub fn start(&mut self) {
        for _ in 0..self.tuning.enemy_count {
            let enemy = Enemy::spawn(&mut self.rng, &self.tuning);
            self.enemies.push(enemy);
        }
        self.spawn_star();
        self.player = Player::new(
            self.tuning.player_start_row,
            self.tuning.player_start_col,
            self.tuning.score_goal,
        );
        self.phase = GamePhase::Scoring;
        log::info!(
            "round started: {} enemies, score goal {}",
            self.enemies.len(),
            self.player.score_goal
        );
    }

    /// Tear down every collectible and enemy
    pub fn end(&mut self) {
        self.destroy_collectibles();
        self.destroy_enemies();
    }

    /// Full reset back to Scoring
    pub fn reset(&mut self) {
        self.end();
        self.start();
    }

    /// Round won: clear the grid and hold in Won until a new game
    pub fn win(&mut self) {
        self.end();
        self.phase = GamePhase::Won;
        log::debug!("phase -> {:?}", self.phase);
    }

    /// Drop every collectible. Expiry deadlines live on the instances, so
    /// clearing the collection cancels every pending respawn with it.
    pub fn destroy_collectibles(&mut self) {
        self.collectibles.clear();
    }

    pub fn destroy_enemies(&mut self) {
        self.enemies.clear();
    }

    /// Remove one collectible by id. A no-op for ids already gone.
    pub fn destroy_collectible(&mut self, id: u32) {
        self.collectibles.retain(|c| c.id != id);
    }

    pub fn spawn_star(&mut self) {
        let id = self.next_entity_id();
        let star = Collectible::star(id, &mut self.rng, self.time_ticks, &self.tuning);
        self.collectibles.push(star);
    }

    pub fn spawn_key(&mut self) {
        let id = self.next_entity_id();
        let key = Collectible::key(id, &mut self.rng, self.time_ticks, &self.tuning);
        self.collectibles.push(key);
    }

    pub fn spawn_gate(&mut self) {
        let id = self.next_entity_id();
        self.collectibles.push(Collectible::gate(id));
    }

    /// Destroy the scoring-phase collectibles and place the key
    pub fn proceed_to_key(&mut self) {
        self.destroy_collectibles();
        self.spawn_key();
        self.phase = GamePhase::PursuingKey;
        log::debug!("phase -> {:?}", self.phase);
    }

    /// Destroy the key and open the gate
    pub fn proceed_to_exit(&mut self) {
        self.destroy_collectibles();
        self.spawn_gate();
        self.phase = GamePhase::Fleeing;
        log::debug!("phase -> {:?}", self.phase);
    }

    /// Replace a collected collectible with a fresh instance of the same
    /// role at a new position. A no-op if the id is already gone (e.g.
    /// replaced by the deadline sweep earlier this frame).
    pub fn refresh_collectible(&mut self, id: u32) {
        let Some(old) = self.collectibles.iter().find(|c| c.id == id).cloned() else {
            return;
        };
        self.destroy_collectible(id);
        let new_id = self.next_entity_id();
        let fresh = old.respawned(new_id, &mut self.rng, self.time_ticks);
        self.collectibles.push(fresh);
    }

    /// Replace every collectible whose deadline has passed. Replacement,
    /// not reuse: the expired instance is removed and a fresh one of the
    /// same role spawns with a new deadline.
    pub fn sweep_expired(&mut self) {
        let now = self.time_ticks;
        if !self.collectibles.iter().any(|c| c.expired(now)) {
            return;
        }
        let expired: Vec<Collectible> = self
            .collectibles
            .iter()
            .filter(|c| c.expired(now))
            .cloned()
            .collect();
        self.collectibles.retain(|c| !c.expired(now));
        for old in expired {
            let id = self.next_entity_id();
            let fresh = old.respawned(id, &mut self.rng, now);
            log::debug!("{:?} #{} expired, respawned as #{}", old.kind, old.id, id);
            self.collectibles.push(fresh);
        }
    }

    /// Session reactions to the events published during this tick. A death
    /// anywhere in the frame overrides every other reaction: death is an
    /// interrupt, not a normal transition.
    pub fn react(&mut self, events: &[GameEvent]) {
        if events.contains(&GameEvent::PlayerDied) {
            log::info!("player died, full reset");
            self.reset();
            return;
        }
        for event in events {
            match event {
                GameEvent::ScoreReached => self.proceed_to_key(),
                GameEvent::KeyObtained => self.proceed_to_exit(),
                GameEvent::EpicWin => self.win(),
                GameEvent::PlayerDied => {}
            }
        }
    }

    /// Draw list for the render collaborator: collectibles below enemies,
    /// player on top
    pub fn sprites(&self) -> Vec<SpriteInstance> {
        let mut out = Vec::with_capacity(self.collectibles.len() + self.enemies.len() + 1);
        out.extend(self.collectibles.iter().map(|c| c.sprite_instance()));
        out.extend(self.enemies.iter().map(|e| e.sprite_instance()));
        out.push(self.player.sprite_instance());
        out
    }

    /// One-line status for the UI overlay
    pub fn status_line(&self) -> String {
        match self.phase {
            GamePhase::Scoring => format!("Score: {}", self.player.score),
            GamePhase::PursuingKey => "Get the key!".to_string(),
            GamePhase::Fleeing => "Run away!".to_string(),
            GamePhase::Won => "You won! Start a new game!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collectible::CollectibleKind;
    use crate::sim::entity::Sprite;

    fn count_kind(state: &GameState, kind: CollectibleKind) -> usize {
        state.collectibles.iter().filter(|c| c.kind == kind).count()
    }

    #[test]
    fn new_session_is_a_fresh_scoring_round() {
        let state = GameState::new(1, Tuning::default());
        assert_eq!(state.phase, GamePhase::Scoring);
        assert_eq!(state.enemies.len(), 3);
        assert_eq!(count_kind(&state, CollectibleKind::Star), 1);
        assert_eq!(state.collectibles.len(), 1);
        assert_eq!(state.player.score, 0);
        assert!(!state.player.has_key);
    }

    #[test]
    fn phase_transitions_swap_the_collectible_set() {
        let mut state = GameState::new(2, Tuning::default());

        state.proceed_to_key();
        assert_eq!(state.phase, GamePhase::PursuingKey);
        assert_eq!(state.collectibles.len(), 1);
        assert_eq!(count_kind(&state, CollectibleKind::Key), 1);

        state.proceed_to_exit();
        assert_eq!(state.phase, GamePhase::Fleeing);
        assert_eq!(state.collectibles.len(), 1);
        assert_eq!(count_kind(&state, CollectibleKind::Gate), 1);

        state.win();
        assert_eq!(state.phase, GamePhase::Won);
        assert!(state.collectibles.is_empty());
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn reset_from_fleeing_restores_the_opening_layout() {
        let mut state = GameState::new(3, Tuning::default());
        state.proceed_to_key();
        state.proceed_to_exit();
        state.player.has_key = true;
        state.player.score = 250;

        state.reset();
        assert_eq!(state.phase, GamePhase::Scoring);
        assert_eq!(state.enemies.len(), 3);
        assert_eq!(state.collectibles.len(), 1);
        assert_eq!(count_kind(&state, CollectibleKind::Star), 1);
        assert_eq!(count_kind(&state, CollectibleKind::Key), 0);
        assert_eq!(count_kind(&state, CollectibleKind::Gate), 0);
        assert_eq!(state.player.score, 0);
        assert!(!state.player.has_key);
    }

    #[test]
    fn destroying_a_collectible_cancels_its_pending_respawn() {
        let mut state = GameState::new(4, Tuning::default());
        let star_deadline = state.collectibles[0].expires_at.unwrap();

        state.destroy_collectibles();
        // Advance the deadline clock well past the original expiry; the
        // sweep must not resurrect anything.
        state.time_ticks = star_deadline + 1000;
        state.sweep_expired();
        assert!(state.collectibles.is_empty());
    }

    #[test]
    fn destroy_collectible_is_idempotent() {
        let mut state = GameState::new(5, Tuning::default());
        let id = state.collectibles[0].id;
        state.destroy_collectible(id);
        state.destroy_collectible(id);
        assert!(state.collectibles.is_empty());
    }

    #[test]
    fn refresh_of_a_missing_id_is_a_noop() {
        let mut state = GameState::new(6, Tuning::default());
        state.refresh_collectible(9999);
        assert_eq!(state.collectibles.len(), 1);
    }

    #[test]
    fn death_reaction_overrides_other_events_from_the_same_frame() {
        let mut state = GameState::new(7, Tuning::default());
        state.react(&[GameEvent::ScoreReached, GameEvent::PlayerDied]);
        assert_eq!(state.phase, GamePhase::Scoring);
        assert_eq!(count_kind(&state, CollectibleKind::Star), 1);
        assert_eq!(count_kind(&state, CollectibleKind::Key), 0);
    }

    #[test]
    fn sweep_replaces_expired_instances() {
        let mut state = GameState::new(8, Tuning::default());
        let old_id = state.collectibles[0].id;
        let deadline = state.collectibles[0].expires_at.unwrap();

        state.time_ticks = deadline;
        state.sweep_expired();

        assert_eq!(state.collectibles.len(), 1);
        let fresh = &state.collectibles[0];
        assert_eq!(fresh.kind, CollectibleKind::Star);
        assert_ne!(fresh.id, old_id);
        assert_eq!(fresh.expires_at, Some(deadline + crate::ms_to_ticks(5000)));
    }

    #[test]
    fn draw_list_puts_the_player_last() {
        let state = GameState::new(9, Tuning::default());
        let sprites = state.sprites();
        assert_eq!(sprites.len(), state.collectibles.len() + state.enemies.len() + 1);
        assert_eq!(sprites.last().unwrap().sprite, Sprite::CharBoy);
    }

    #[test]
    fn status_line_tracks_the_phase() {
        let mut state = GameState::new(10, Tuning::default());
        assert_eq!(state.status_line(), "Score: 0");
        state.proceed_to_key();
        assert_eq!(state.status_line(), "Get the key!");
        state.proceed_to_exit();
        assert_eq!(state.status_line(), "Run away!");
        state.win();
        assert_eq!(state.status_line(), "You won! Start a new game!");
    }

    #[test]
    fn phase_indices_match_the_level_numbers() {
        assert_eq!(GamePhase::Scoring.index(), 0);
        assert_eq!(GamePhase::PursuingKey.index(), 1);
        assert_eq!(GamePhase::Fleeing.index(), 2);
        assert_eq!(GamePhase::Won.index(), 3);
    }
}
