//! Grid Hopper - a lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, progression)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, asset loading and raw input capture are external
//! collaborators: the core exposes a per-tick entry point
//! ([`sim::tick`]), a draw list ([`sim::GameState::sprites`]) and a typed
//! event bus ([`sim::EventBus`]), nothing else.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Grid dimensions
    pub const ROW_HEIGHT: f32 = 83.0;
    pub const COL_WIDTH: f32 = 101.0;
    pub const ROWS: u32 = 6;
    pub const COLS: u32 = 5;

    /// Lanes enemies travel along and loose collectibles land on
    pub const TRAVEL_LANES: [u32; 3] = [1, 2, 3];

    /// Sprite anchor offsets - the art is taller than a row
    pub const LANE_SPRITE_OFFSET: f32 = -20.0;
    pub const CHAR_SPRITE_OFFSET: f32 = -10.0;

    /// Two entities on the same row collide when their centers are closer
    /// than `COL_WIDTH - COLLIDE_SLACK`. Fixed playability constant.
    pub const COLLIDE_SLACK: f32 = 30.0;

    /// Exclusive lower bound on player y: keeps the player off the top row
    pub const PLAYER_MIN_Y: f32 = 50.0;
}

/// Convert a millisecond duration to whole simulation ticks (rounded up)
#[inline]
pub fn ms_to_ticks(ms: u32) -> u64 {
    ((ms as f32 / 1000.0) / consts::SIM_DT).ceil() as u64
}
