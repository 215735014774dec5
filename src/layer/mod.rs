// Character layer - the tile pipeline that paints the logo/score/playfield
//
// Composes the position decoder, fetch sequencer, row latch, and pixel
// decoder into one synchronous pipeline. Everything advances on a single
// `tick` per output pixel; all latches update with values computed from the
// state as it stood before the tick, matching registered hardware.

mod constants;
pub mod fetch;
pub mod pixel;
pub mod position;
pub mod row;

pub use fetch::{FetchPhase, FetchSequencer};
pub use pixel::{decode_pixel, LayerPixel};
pub use position::{RasterPos, TileCoord};
pub use row::RowLatch;

use serde::{Deserialize, Serialize};

use crate::memory::pattern::PatternStore;
use crate::memory::tile_ram::{Port, TileRam};

/// The character layer's registered state, as captured in snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerLatches {
    pub pending: u8,
    pub tile_code: u16,
    pub tile_color: u8,
    pub current_row: u32,
}

/// The character layer renderer.
///
/// Owns the fetch sequencer and row latch; drives port A of the tile RAM
/// and samples the pattern store. The caller owns the raster scan and the
/// RAM clock: one `tick` here per pixel, followed by one `TileRam::tick`.
///
/// # Example
///
/// ```
/// use charlayer_rs::layer::{CharLayer, RasterPos};
/// use charlayer_rs::memory::{PatternRom, TileRam};
///
/// let mut layer = CharLayer::new();
/// let mut ram = TileRam::new();
/// let patterns = PatternRom::with_test_tiles();
///
/// let datum = layer.tick(RasterPos::new(0, 0), &mut ram, &patterns);
/// ram.tick();
/// assert_eq!(datum.pack(), 0);
/// ```
pub struct CharLayer {
    fetch: FetchSequencer,
    row_latch: RowLatch,
}

impl CharLayer {
    pub fn new() -> Self {
        Self {
            fetch: FetchSequencer::new(),
            row_latch: RowLatch::new(),
        }
    }

    /// Advance one pixel clock and produce the output datum for `pos`.
    ///
    /// The datum is computed from the latches as they stood at the start of
    /// the tick; the fetch sequencer and row latch then update, and the
    /// pins for the next tile-RAM access are driven onto port A. The caller
    /// must clock the RAM once after each layer tick.
    pub fn tick<P: PatternStore>(
        &mut self,
        pos: RasterPos,
        ram: &mut TileRam,
        patterns: &P,
    ) -> LayerPixel {
        let coord = pos.coord();

        let out = LayerPixel {
            color: self.fetch.tile_color(),
            pixel: decode_pixel(self.row_latch.row(), coord.fine_x),
        };

        // Pattern store output for the continuously driven look-ahead
        // address, sampled before any latch updates this tick.
        let pattern_row = patterns.row(self.fetch.tile_code(), coord.fine_y);

        let pins = self.fetch.tick(coord, ram.data_out(Port::A));
        ram.drive(Port::A, pins);
        self.row_latch.tick(coord, pattern_row);

        out
    }

    /// The latched pattern code of the look-ahead tile.
    pub fn tile_code(&self) -> u16 {
        self.fetch.tile_code()
    }

    /// The latched color of the look-ahead tile.
    pub fn tile_color(&self) -> u8 {
        self.fetch.tile_color()
    }

    /// The pattern row backing the column currently on screen.
    pub fn current_row(&self) -> u32 {
        self.row_latch.row()
    }

    /// All registered state, for snapshots and state inspection.
    pub fn latches(&self) -> LayerLatches {
        LayerLatches {
            pending: self.fetch.pending(),
            tile_code: self.fetch.tile_code(),
            tile_color: self.fetch.tile_color(),
            current_row: self.row_latch.row(),
        }
    }

    /// Restore registered state from a snapshot.
    pub fn restore_latches(&mut self, latches: LayerLatches) {
        self.fetch
            .restore(latches.pending, latches.tile_code, latches.tile_color);
        self.row_latch.restore(latches.current_row);
    }

    /// Return all latches to their power-on state.
    pub fn reset(&mut self) {
        self.fetch.reset();
        self.row_latch.reset();
    }
}

impl Default for CharLayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
