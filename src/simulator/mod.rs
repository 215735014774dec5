// Simulator module - wires the pipeline into a runnable machine
//
// Owns the raster counter, tile RAM, pattern ROM, character layer, color
// lookup table, and a frame buffer, and clocks them together: one tick per
// pixel, 65,536 ticks per frame. Also provides the quality-of-life surface:
// a queued writer port, ROM image loading, screenshots, snapshots, and
// configuration.

mod config;
mod screenshot;
mod snapshot;

pub use config::{ScreenshotConfig, SimulatorConfig, SnapshotConfig, VideoConfig};
pub use screenshot::{save_screenshot, ScreenshotError};
pub use snapshot::{RasterState, Snapshot, SnapshotError};

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::display::{Clut, ClutError, FrameBuffer};
use crate::layer::{CharLayer, LayerPixel};
use crate::memory::{PatternRom, PatternRomError, Port, PortPins, TileMapEntry, TileRam};
use crate::timing::{RasterCounter, PIXELS_PER_FRAME};

/// The complete simulated machine.
///
/// # Example
///
/// ```
/// use charlayer_rs::memory::TileMapEntry;
/// use charlayer_rs::simulator::Simulator;
///
/// let mut sim = Simulator::new();
/// sim.poke_entry(4, 10, TileMapEntry::new('A' as u16, 0x2));
/// sim.run_frame();
/// // Tile (4, 10) covers pixels (80..88, 32..40).
/// assert_ne!(sim.framebuffer().get_pixel(82, 33), 0);
/// ```
pub struct Simulator {
    config: SimulatorConfig,
    ram: TileRam,
    patterns: PatternRom,
    clut: Clut,
    layer: CharLayer,
    raster: RasterCounter,
    frame: FrameBuffer,
    write_queue: VecDeque<(u16, u8)>,
}

impl Simulator {
    /// Create a simulator with the built-in character set and the synthetic
    /// color table. The tile map starts blank.
    pub fn new() -> Self {
        Self::with_config(SimulatorConfig::default())
    }

    /// Create a simulator with explicit configuration.
    pub fn with_config(config: SimulatorConfig) -> Self {
        Simulator {
            config,
            ram: TileRam::new(),
            patterns: PatternRom::with_test_tiles(),
            clut: Clut::new(),
            layer: CharLayer::new(),
            raster: RasterCounter::new(),
            frame: FrameBuffer::new(),
            write_queue: VecDeque::new(),
        }
    }

    /// Advance the machine by one pixel clock.
    ///
    /// Order within the tick: the layer produces the datum for the current
    /// raster position and drives its RAM read port; one queued writer-port
    /// access (if any) is driven onto port B; the RAM clocks; the raster
    /// advances. Returns the datum written to the frame buffer.
    pub fn tick(&mut self) -> LayerPixel {
        let pos = self.raster.pos();
        let datum = self.layer.tick(pos, &mut self.ram, &self.patterns);
        self.frame.set_pixel(pos.x as usize, pos.y as usize, datum.pack());

        let writer_pins = match self.write_queue.pop_front() {
            Some((addr, data)) => PortPins::write(addr, data),
            None => PortPins::idle(),
        };
        self.ram.drive(Port::B, writer_pins);

        self.ram.tick();
        self.raster.advance();
        datum
    }

    /// Run one full frame (65,536 ticks).
    pub fn run_frame(&mut self) {
        for _ in 0..PIXELS_PER_FRAME {
            self.tick();
        }
        log::debug!(
            "frame {} complete, {} writer accesses pending",
            self.raster.frame_count(),
            self.write_queue.len()
        );
    }

    /// Queue one byte write on the writer port (port B).
    ///
    /// Writes drain one per tick, concurrently with rendering, the way a
    /// CPU shares the second RAM port on the real board.
    pub fn queue_write(&mut self, addr: u16, data: u8) {
        self.write_queue.push_back((addr, data));
    }

    /// Queue a whole tile map entry (two byte writes) on the writer port.
    pub fn write_entry(&mut self, row: u8, column: u8, entry: TileMapEntry) {
        self.queue_write(crate::memory::high_byte_addr(row, column), entry.high_byte());
        self.queue_write(crate::memory::low_byte_addr(row, column), entry.low_byte());
    }

    /// Writer-port accesses not yet driven.
    pub fn pending_writes(&self) -> usize {
        self.write_queue.len()
    }

    /// Write a tile map entry directly, bypassing the ports.
    pub fn poke_entry(&mut self, row: u8, column: u8, entry: TileMapEntry) {
        self.ram.poke_entry(row, column, entry);
    }

    /// Read a tile map entry directly, bypassing the ports.
    pub fn peek_entry(&self, row: u8, column: u8) -> TileMapEntry {
        self.ram.peek_entry(row, column)
    }

    /// Replace the pattern ROM with an image loaded from a file.
    pub fn load_pattern_rom<P: AsRef<Path>>(&mut self, path: P) -> Result<(), PatternRomError> {
        self.patterns = PatternRom::from_file(&path)?;
        log::info!("pattern ROM loaded from {}", path.as_ref().display());
        Ok(())
    }

    /// Replace the color lookup table with a PROM image loaded from a file.
    pub fn load_clut<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ClutError> {
        self.clut = Clut::from_file(&path)?;
        log::info!("color PROM loaded from {}", path.as_ref().display());
        Ok(())
    }

    /// Save a screenshot of the last rendered frame.
    pub fn screenshot(&self) -> Result<PathBuf, ScreenshotError> {
        save_screenshot(&self.frame, &self.clut, &self.config.screenshot)
    }

    /// Save the simulation state to a snapshot slot.
    pub fn save_snapshot(&self, slot: u8) -> Result<PathBuf, SnapshotError> {
        let path = Snapshot::from_simulator(self).save_to_file(slot, &self.config.snapshot)?;
        log::info!("snapshot saved to {}", path.display());
        Ok(path)
    }

    /// Restore the simulation state from a snapshot slot.
    pub fn load_snapshot(&mut self, slot: u8) -> Result<(), SnapshotError> {
        Snapshot::load_from_file(slot, &self.config.snapshot)?.restore_to(self)
    }

    /// Return the machine to power-on state. The pattern ROM, color table,
    /// and configuration are kept.
    pub fn reset(&mut self) {
        self.ram.reset();
        self.layer.reset();
        self.raster = RasterCounter::new();
        self.frame.clear(0);
        self.write_queue.clear();
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn clut(&self) -> &Clut {
        &self.clut
    }

    pub fn ram(&self) -> &TileRam {
        &self.ram
    }

    pub fn ram_mut(&mut self) -> &mut TileRam {
        &mut self.ram
    }

    pub fn patterns(&self) -> &PatternRom {
        &self.patterns
    }

    pub fn patterns_mut(&mut self) -> &mut PatternRom {
        &mut self.patterns
    }

    pub fn layer(&self) -> &CharLayer {
        &self.layer
    }

    pub fn layer_mut(&mut self) -> &mut CharLayer {
        &mut self.layer
    }

    pub fn raster(&self) -> &RasterCounter {
        &self.raster
    }

    pub fn raster_mut(&mut self) -> &mut RasterCounter {
        &mut self.raster
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}
