// Memory module - tile map RAM and tile pattern storage
//
// This module provides:
// - Dual-port tile RAM (the map of tile references, shared between the
//   renderer and a CPU-style writer)
// - Pattern storage (the per-tile pixel bitmaps, addressed by code and row)

pub mod charset;
pub mod pattern;
pub mod tile_ram;

pub use pattern::{PatternRom, PatternRomError, PatternStore, PATTERN_ROM_BYTES, PATTERN_TILES};
pub use tile_ram::{
    high_byte_addr, low_byte_addr, Port, PortPins, TileMapEntry, TileRam, TILE_RAM_SIZE,
};
