//! The player character
//!
//! Moves one cell per input event, clamped to the grid per axis. The
//! per-frame collectible scan lives here; what a collection *means* for
//! the session is decided by the event reactions in `state`.

use glam::Vec2;

use crate::consts::*;
use crate::sim::collectible::{Collectible, CollectibleKind};
use crate::sim::entity::{Entity, Sprite};
use crate::sim::events::{EventBus, GameEvent};
use crate::sim::grid;

/// A discrete movement direction from the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The player: position plus progression state
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    /// Points banked this scoring phase
    pub score: u32,
    pub has_key: bool,
    /// Score that ends the scoring phase
    pub score_goal: u32,
}

impl Player {
    pub fn new(row: u32, col: u32, score_goal: u32) -> Self {
        Self {
            pos: Vec2::new(grid::col_x(col), grid::char_y(row)),
            score: 0,
            has_key: false,
            score_goal,
        }
    }

    /// Map a direction to a single-cell hop
    pub fn handle_input(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.try_move(0.0, -ROW_HEIGHT),
            Direction::Down => self.try_move(0.0, ROW_HEIGHT),
            Direction::Left => self.try_move(-COL_WIDTH, 0.0),
            Direction::Right => self.try_move(COL_WIDTH, 0.0),
        }
    }

    /// Apply a move, validating each axis independently: a component that
    /// would leave the grid is dropped, the other still applies.
    pub fn try_move(&mut self, dx: f32, dy: f32) {
        let new_x = self.pos.x + dx;
        let new_y = self.pos.y + dy;

        if new_x >= 0.0 && new_x < grid::grid_width() {
            self.pos.x = new_x;
        }
        if new_y > PLAYER_MIN_Y && new_y < (ROWS - 1) as f32 * ROW_HEIGHT {
            self.pos.y = new_y;
        }
    }

    /// Scan the active collectibles once and publish what happened.
    /// Returns the ids of collected stars so the session can refresh them;
    /// key and gate pickups only publish, membership changes are the
    /// session's job. After the scan, a crossed score goal publishes
    /// exactly once and zeroes the score so it cannot re-fire next frame.
    pub fn check_collisions(
        &mut self,
        collectibles: &[Collectible],
        bus: &mut EventBus,
    ) -> Vec<u32> {
        let mut collected_stars = Vec::new();

        for collectible in collectibles {
            if !self.collides_with(collectible) {
                continue;
            }
            match collectible.kind {
                CollectibleKind::Star => {
                    self.score += collectible.score_value;
                    collected_stars.push(collectible.id);
                }
                CollectibleKind::Key => {
                    self.has_key = true;
                    bus.publish(GameEvent::KeyObtained);
                }
                CollectibleKind::Gate => {
                    bus.publish(GameEvent::EpicWin);
                }
            }
        }

        if self.score >= self.score_goal {
            bus.publish(GameEvent::ScoreReached);
            self.score = 0;
        }

        collected_stars
    }

    /// Death detection publishes; recovery is the session's policy
    pub fn die(&self, bus: &mut EventBus) {
        bus.publish(GameEvent::PlayerDied);
    }
}

impl Entity for Player {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn sprite(&self) -> Sprite {
        Sprite::CharBoy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(row: u32, col: u32) -> Player {
        Player::new(row, col, 500)
    }

    #[test]
    fn starts_on_the_requested_cell() {
        let player = player_at(5, 2);
        assert_eq!(player.row(), 5);
        assert_eq!(player.col(), 2);
        assert_eq!(player.score, 0);
        assert!(!player.has_key);
    }

    #[test]
    fn hops_one_cell_per_input() {
        let mut player = player_at(5, 2);
        player.handle_input(Direction::Up);
        assert_eq!(player.row(), 4);
        player.handle_input(Direction::Left);
        assert_eq!(player.col(), 1);
        player.handle_input(Direction::Right);
        player.handle_input(Direction::Down);
        assert_eq!((player.row(), player.col()), (5, 2));
    }

    #[test]
    fn clamped_at_the_edges() {
        let mut player = player_at(5, 0);
        player.handle_input(Direction::Left);
        assert_eq!(player.col(), 0);
        player.handle_input(Direction::Down);
        assert_eq!(player.row(), 5);

        let mut player = player_at(1, COLS - 1);
        player.handle_input(Direction::Right);
        assert_eq!(player.col(), (COLS - 1) as i32);
        player.handle_input(Direction::Up);
        assert_eq!(player.row(), 1);
    }

    #[test]
    fn axes_validate_independently() {
        // Diagonal move from the bottom row: vertical is blocked,
        // horizontal still applies.
        let mut player = player_at(5, 2);
        player.try_move(COL_WIDTH, ROW_HEIGHT);
        assert_eq!(player.row(), 5);
        assert_eq!(player.col(), 3);
    }

    #[test]
    fn score_goal_publishes_once_and_resets() {
        let mut player = player_at(5, 2);
        let mut bus = EventBus::new();
        player.score = 500;

        let collected = player.check_collisions(&[], &mut bus);
        assert!(collected.is_empty());
        assert_eq!(player.score, 0);
        assert_eq!(bus.drain(), vec![GameEvent::ScoreReached]);

        // Same scan again: below goal now, nothing fires
        player.check_collisions(&[], &mut bus);
        assert!(bus.drain().is_empty());
    }
}
