//! Collectibles: stars to bank, a key to find, a gate to escape through
//!
//! A collectible may carry an expiry deadline, measured in absolute
//! simulation ticks. The session sweeps deadlines once per tick and
//! replaces expired instances; destroying a collectible removes its
//! deadline with it, so a stale "timer" firing after teardown is
//! unrepresentable.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::ms_to_ticks;
use crate::sim::entity::{Entity, Sprite};
use crate::sim::grid;
use crate::tuning::Tuning;

/// The closed set of collectible roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectibleKind {
    /// Worth points, the scoring-phase pickup
    Star,
    /// Unlocks the exit phase
    Key,
    /// The exit itself
    Gate,
}

/// A pickup on the grid, optionally expiring on a tick deadline
#[derive(Debug, Clone)]
pub struct Collectible {
    pub id: u32,
    pub kind: CollectibleKind,
    pub pos: Vec2,
    /// Points granted on collection (0 for Key and Gate)
    pub score_value: u32,
    /// Lifetime in milliseconds; `None` never auto-expires
    pub expire_ms: Option<u32>,
    /// Absolute sim tick at which this instance is replaced
    pub expires_at: Option<u64>,
}

impl Collectible {
    /// A star at a random travel-lane cell
    pub fn star(id: u32, rng: &mut Pcg32, now_tick: u64, tuning: &Tuning) -> Self {
        Self::at_random(
            id,
            CollectibleKind::Star,
            tuning.star_score,
            Some(tuning.star_expire_ms),
            rng,
            now_tick,
        )
    }

    /// The key, at a random travel-lane cell
    pub fn key(id: u32, rng: &mut Pcg32, now_tick: u64, tuning: &Tuning) -> Self {
        Self::at_random(
            id,
            CollectibleKind::Key,
            0,
            Some(tuning.key_expire_ms),
            rng,
            now_tick,
        )
    }

    /// The exit gate: fixed cell in the bottom-left corner, never expires
    pub fn gate(id: u32) -> Self {
        Self {
            id,
            kind: CollectibleKind::Gate,
            pos: Vec2::new(grid::col_x(0), grid::char_y(ROWS - 1)),
            score_value: 0,
            expire_ms: None,
            expires_at: None,
        }
    }

    fn at_random(
        id: u32,
        kind: CollectibleKind,
        score_value: u32,
        expire_ms: Option<u32>,
        rng: &mut Pcg32,
        now_tick: u64,
    ) -> Self {
        let col = rng.random_range(0..COLS);
        let lane = TRAVEL_LANES[rng.random_range(0..TRAVEL_LANES.len())];
        Self {
            id,
            kind,
            pos: Vec2::new(grid::col_x(col), grid::lane_y(lane)),
            score_value,
            expire_ms,
            expires_at: expire_ms.map(|ms| now_tick + ms_to_ticks(ms)),
        }
    }

    /// Replacement instance: same role, score and lifetime, fresh deadline,
    /// new random position. Gates respawn in place.
    pub fn respawned(&self, id: u32, rng: &mut Pcg32, now_tick: u64) -> Self {
        match self.kind {
            CollectibleKind::Gate => Self::gate(id),
            kind => Self::at_random(id, kind, self.score_value, self.expire_ms, rng, now_tick),
        }
    }

    /// Whether the expiry deadline has passed
    pub fn expired(&self, now_tick: u64) -> bool {
        self.expires_at.is_some_and(|deadline| now_tick >= deadline)
    }
}

impl Entity for Collectible {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn sprite(&self) -> Sprite {
        match self.kind {
            CollectibleKind::Star => Sprite::Star,
            CollectibleKind::Key => Sprite::Key,
            CollectibleKind::Gate => Sprite::Selector,
        }
    }
}
