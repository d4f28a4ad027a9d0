//! Grid geometry
//!
//! Pure conversions between pixel coordinates and row/column indices.
//! Nothing here holds state; everything is a function of the grid
//! constants in [`crate::consts`].

use crate::consts::*;

/// Row index for a pixel y coordinate. Anything above the grid is row 0.
#[inline]
pub fn row_for_y(y: f32) -> u32 {
    if y < 0.0 { 0 } else { (y / ROW_HEIGHT).ceil() as u32 }
}

/// Column index for a pixel x coordinate. Negative for entities still
/// off the left edge.
#[inline]
pub fn col_for_x(x: f32) -> i32 {
    (x / COL_WIDTH).floor() as i32
}

/// Pixel y anchor for a sprite traveling on `row` (enemies, stars, keys)
#[inline]
pub fn lane_y(row: u32) -> f32 {
    row as f32 * ROW_HEIGHT + LANE_SPRITE_OFFSET
}

/// Pixel y anchor for a character standing on `row` (player, gate)
#[inline]
pub fn char_y(row: u32) -> f32 {
    row as f32 * ROW_HEIGHT + CHAR_SPRITE_OFFSET
}

/// Pixel x anchor for `col`
#[inline]
pub fn col_x(col: u32) -> f32 {
    col as f32 * COL_WIDTH
}

/// Total grid width in pixels
#[inline]
pub fn grid_width() -> f32 {
    COLS as f32 * COL_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn row_clamps_above_grid() {
        assert_eq!(row_for_y(-1.0), 0);
        assert_eq!(row_for_y(-500.0), 0);
        assert_eq!(row_for_y(0.0), 0);
    }

    #[test]
    fn lane_anchors_round_back_to_their_row() {
        // The sprite offsets are smaller than a row, so the ceil-based
        // derivation lands back on the spawn row.
        for row in TRAVEL_LANES {
            assert_eq!(row_for_y(lane_y(row)), row);
        }
        for row in 1..ROWS {
            assert_eq!(row_for_y(char_y(row)), row);
        }
    }

    #[test]
    fn col_floor_behavior() {
        assert_eq!(col_for_x(0.0), 0);
        assert_eq!(col_for_x(COL_WIDTH - 0.5), 0);
        assert_eq!(col_for_x(COL_WIDTH), 1);
        assert_eq!(col_for_x(-COL_WIDTH), -1);
    }

    proptest! {
        #[test]
        fn row_is_monotonic_in_y(a in -1000.0f32..2000.0, b in -1000.0f32..2000.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(row_for_y(lo) <= row_for_y(hi));
        }

        #[test]
        fn row_never_negative_region(y in -1000.0f32..0.0) {
            prop_assert_eq!(row_for_y(y), 0);
        }
    }
}
