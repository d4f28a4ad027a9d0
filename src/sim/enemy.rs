//! Enemy bugs
//!
//! Bugs march left to right along a fixed lane at a speed rolled once at
//! spawn. The session replaces a bug that leaves the grid with a fresh
//! one, so the pool size never changes.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::entity::{Entity, Sprite};
use crate::sim::grid;
use crate::tuning::Tuning;

/// A bug crossing the grid at constant speed
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    /// Horizontal speed in pixels per second, fixed at spawn
    pub speed: f32,
}

impl Enemy {
    /// Spawn off the left edge on a random travel lane with a random speed
    pub fn spawn(rng: &mut Pcg32, tuning: &Tuning) -> Self {
        let lane = TRAVEL_LANES[rng.random_range(0..TRAVEL_LANES.len())];
        Self {
            pos: Vec2::new(-COL_WIDTH, grid::lane_y(lane)),
            speed: rng.random_range(tuning.enemy_speed_min..=tuning.enemy_speed_max),
        }
    }

    /// Advance by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.pos.x += self.speed * dt;
    }

    /// True once the bug has fully left the right edge
    pub fn off_grid(&self) -> bool {
        self.pos.x >= grid::grid_width()
    }
}

impl Entity for Enemy {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn sprite(&self) -> Sprite {
        Sprite::EnemyBug
    }
}
