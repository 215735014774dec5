// Row latch - double-buffers the pattern row across the column boundary
//
// The pattern-store address is driven continuously with the look-ahead
// tile's {code, fine_y}. The latch captures the store output only on the
// last pixel of each column, so during a column the displayed row is stable
// while the store output already tracks the next tile.

use super::constants::PHASE_COLUMN_END;
use super::position::TileCoord;

/// The latched 32-bit pattern row for the column currently being displayed.
pub struct RowLatch {
    current: u32,
}

impl RowLatch {
    pub fn new() -> Self {
        Self { current: 0 }
    }

    /// The row backing the pixels of the column on screen.
    #[inline]
    pub fn row(&self) -> u32 {
        self.current
    }

    /// Advance one pixel clock: at the last pixel of a column, capture the
    /// pattern-store output (`pattern_row`) for the column about to start.
    #[inline]
    pub fn tick(&mut self, coord: TileCoord, pattern_row: u32) {
        if coord.fine_x == PHASE_COLUMN_END {
            self.current = pattern_row;
        }
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }

    pub(super) fn restore(&mut self, row: u32) {
        self.current = row;
    }
}

impl Default for RowLatch {
    fn default() -> Self {
        Self::new()
    }
}
