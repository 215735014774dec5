// Raster position decoding
//
// The video timing generator supplies one raster position per pixel clock.
// The layer splits it into coarse tile-grid coordinates and fine intra-tile
// offsets through accessor methods rather than ad-hoc bit slicing.

use serde::{Deserialize, Serialize};

use super::constants::TILE_SIZE;

/// A raster scan position. Only the low 8 bits of each coordinate exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterPos {
    pub x: u8,
    pub y: u8,
}

impl RasterPos {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Decode into tile-grid coordinates and intra-tile offsets.
    #[inline]
    pub fn coord(self) -> TileCoord {
        TileCoord {
            column: self.x / TILE_SIZE,
            row: self.y / TILE_SIZE,
            fine_x: self.x % TILE_SIZE,
            fine_y: self.y % TILE_SIZE,
        }
    }
}

/// Tile-grid coordinates derived from a raster position.
///
/// Recomputed every pixel clock; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCoord {
    /// Tile column (0-31)
    pub column: u8,
    /// Tile row (0-31)
    pub row: u8,
    /// Pixel offset within the tile, x (0-7)
    pub fine_x: u8,
    /// Pixel offset within the tile, y (0-7)
    pub fine_y: u8,
}
