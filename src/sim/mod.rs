//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Expiration deadlines measured in ticks, never wall-clock time
//! - No rendering or platform dependencies

pub mod collectible;
pub mod enemy;
pub mod entity;
pub mod events;
pub mod grid;
pub mod player;
pub mod state;
pub mod tick;

pub use collectible::{Collectible, CollectibleKind};
pub use enemy::Enemy;
pub use entity::{Entity, Sprite, SpriteInstance};
pub use events::{EventBus, GameEvent};
pub use grid::{col_for_x, row_for_y};
pub use player::{Direction, Player};
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
