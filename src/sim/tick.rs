//! Fixed timestep simulation tick
//!
//! One call advances the whole world exactly once: deadline sweep, then
//! every enemy, then the player, then the session's event reactions.
//! Nothing else mutates session state.

use crate::consts::*;
use crate::sim::enemy::Enemy;
use crate::sim::entity::Entity;
use crate::sim::player::Direction;
use crate::sim::state::{GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// One discrete hop from the input collaborator
    pub direction: Option<Direction>,
    /// Start a fresh round (the UI "new game" button)
    pub new_game: bool,
    /// Scripted pilot plays the game (headless demo driver)
    pub demo_mode: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.new_game {
        state.reset();
        return;
    }

    // Won is inert until a new game starts
    if state.phase == GamePhase::Won {
        return;
    }

    state.time_ticks += 1;

    // Deadline sweep before anything moves: expiries scheduled for this
    // tick happen before this frame's collision scan, never mid-scan.
    state.sweep_expired();

    let mut input = *input;
    if input.demo_mode && input.direction.is_none() {
        input.direction = demo_direction(state);
    }

    // Enemies advance first, then the player, exactly once each per tick
    for enemy in &mut state.enemies {
        enemy.advance(dt);
    }

    // Respawn-as-replacement: drop finished runs, refill to the same count
    let pool_size = state.enemies.len();
    state.enemies.retain(|e| !e.off_grid());
    for _ in state.enemies.len()..pool_size {
        let fresh = Enemy::spawn(&mut state.rng, &state.tuning);
        state.enemies.push(fresh);
    }

    // A bug touching the player kills it. Detection publishes; what death
    // means is decided by the session reaction below.
    if state
        .enemies
        .iter()
        .any(|enemy| enemy.collides_with(&state.player))
    {
        state.player.die(&mut state.bus);
    }

    if let Some(direction) = input.direction {
        state.player.handle_input(direction);
    }

    // Scan a snapshot of the active collectibles; membership only changes
    // after the scan, via refresh or the reactions below.
    let collected = state
        .player
        .check_collisions(&state.collectibles, &mut state.bus);
    for id in collected {
        state.refresh_collectible(id);
    }

    let events = state.bus.drain();
    state.react(&events);
}

/// Scripted pilot for demo mode: hop toward the active collectible,
/// holding position while a bug is closing on the destination cell.
fn demo_direction(state: &GameState) -> Option<Direction> {
    // Hop cadence: one move every 12 ticks
    if state.time_ticks % 12 != 0 {
        return None;
    }

    let target = state.collectibles.first()?;
    let player = &state.player;

    let vertical = if player.row() > target.row() {
        Some((Direction::Up, player.row() - 1))
    } else if player.row() < target.row() {
        Some((Direction::Down, player.row() + 1))
    } else {
        None
    };

    if let Some((direction, dest_row)) = vertical {
        let danger = state.enemies.iter().any(|enemy| {
            enemy.row() == dest_row
                && enemy.pos.x < player.pos.x + COL_WIDTH
                && player.pos.x - enemy.pos.x < COL_WIDTH * 1.5
        });
        if danger {
            return None;
        }
        return Some(direction);
    }

    if player.col() > target.col() {
        Some(Direction::Left)
    } else if player.col() < target.col() {
        Some(Direction::Right)
    } else {
        None
    }
}
