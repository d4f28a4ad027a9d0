//! Shared entity capabilities
//!
//! Every game object exposes a position and a sprite; row/column
//! derivation and the collision test are provided on top of those.
//! The closed set of drawables lives in [`Sprite`] so branching on
//! "what is this thing" is always a match, never a type check.

use glam::Vec2;

use crate::consts::*;
use crate::sim::grid;

/// Identifies the art asset for a drawable entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    EnemyBug,
    CharBoy,
    Star,
    Key,
    Selector,
}

impl Sprite {
    /// Image path the render collaborator should draw for this entity
    pub fn asset_path(&self) -> &'static str {
        match self {
            Sprite::EnemyBug => "images/enemy-bug.png",
            Sprite::CharBoy => "images/char-boy.png",
            Sprite::Star => "images/star.png",
            Sprite::Key => "images/key.png",
            Sprite::Selector => "images/selector.png",
        }
    }
}

/// One draw call for the render collaborator
#[derive(Debug, Clone, Copy)]
pub struct SpriteInstance {
    pub sprite: Sprite,
    pub x: f32,
    pub y: f32,
}

/// Position + sprite capability shared by every game object
pub trait Entity {
    fn pos(&self) -> Vec2;
    fn sprite(&self) -> Sprite;

    /// Current row, derived from position
    fn row(&self) -> u32 {
        grid::row_for_y(self.pos().y)
    }

    /// Current column, derived from position
    fn col(&self) -> i32 {
        grid::col_for_x(self.pos().x)
    }

    /// Overlap test: same row, and column centers within
    /// `COL_WIDTH - COLLIDE_SLACK` of each other. Deliberately narrower
    /// than a full column for forgiving hit detection.
    fn collides_with(&self, other: &dyn Entity) -> bool {
        self.row() == other.row()
            && (self.pos().x - other.pos().x).abs() < COL_WIDTH - COLLIDE_SLACK
    }

    /// Draw call for the render collaborator
    fn sprite_instance(&self) -> SpriteInstance {
        let pos = self.pos();
        SpriteInstance {
            sprite: self.sprite(),
            x: pos.x,
            y: pos.y,
        }
    }
}
