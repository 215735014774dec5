//! Character layer unit tests
//!
//! Organized by pipeline stage: position decode, fetch sequencing, pixel
//! decode, and whole-pipeline timing.

mod fetch;
mod position;

use crate::layer::{CharLayer, LayerPixel, RasterPos};
use crate::memory::{PatternRom, TileRam};

/// Clock the layer and RAM through one pixel, returning the output datum.
pub(crate) fn step(
    layer: &mut CharLayer,
    ram: &mut TileRam,
    patterns: &PatternRom,
    x: u8,
    y: u8,
) -> LayerPixel {
    let out = layer.tick(RasterPos::new(x, y), ram, patterns);
    ram.tick();
    out
}

/// Clock the layer through a whole scanline, returning the 256 output data.
pub(crate) fn scan_line(
    layer: &mut CharLayer,
    ram: &mut TileRam,
    patterns: &PatternRom,
    y: u8,
) -> Vec<LayerPixel> {
    (0u16..256)
        .map(|x| step(layer, ram, patterns, x as u8, y))
        .collect()
}
