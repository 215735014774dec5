// Snapshot functionality
//
// Serializes the complete simulation state (tile RAM, layer latches, raster
// position) so a run can be captured and resumed at an exact tick.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::layer::{LayerLatches, RasterPos};
use crate::memory::TILE_RAM_SIZE;

use super::config::SnapshotConfig;
use super::Simulator;

/// Errors that can occur during snapshot operations
#[derive(Debug)]
pub enum SnapshotError {
    /// I/O error
    Io(io::Error),

    /// Serialization/deserialization error
    Serialization(serde_json::Error),

    /// Snapshot version mismatch
    VersionMismatch { expected: u32, found: u32 },

    /// Tile RAM image in the snapshot has the wrong size
    BadRamSize { expected: usize, found: usize },
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::Io(e) => write!(f, "I/O error: {}", e),
            SnapshotError::Serialization(e) => write!(f, "Serialization error: {}", e),
            SnapshotError::VersionMismatch { expected, found } => {
                write!(
                    f,
                    "Version mismatch: expected {}, found {}",
                    expected, found
                )
            }
            SnapshotError::BadRamSize { expected, found } => {
                write!(
                    f,
                    "Bad tile RAM size: expected {} bytes, found {}",
                    expected, found
                )
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

impl From<io::Error> for SnapshotError {
    fn from(e: io::Error) -> Self {
        SnapshotError::Io(e)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(e: serde_json::Error) -> Self {
        SnapshotError::Serialization(e)
    }
}

/// Current snapshot format version
const SNAPSHOT_VERSION: u32 = 1;

/// Raster scan state as captured in a snapshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RasterState {
    pub pos: RasterPos,
    pub frame: u64,
}

/// Complete simulation snapshot.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Version number for compatibility checking
    version: u32,

    /// Timestamp when the snapshot was created
    timestamp: String,

    /// Tile RAM contents
    tile_ram: Vec<u8>,

    /// Character layer latches
    latches: LayerLatches,

    /// Raster scan state
    raster: RasterState,
}

impl Snapshot {
    /// Capture the simulator's current state.
    pub fn from_simulator(simulator: &Simulator) -> Self {
        Snapshot {
            version: SNAPSHOT_VERSION,
            timestamp: chrono::Local::now().to_rfc3339(),
            tile_ram: simulator.ram().bytes().to_vec(),
            latches: simulator.layer().latches(),
            raster: RasterState {
                pos: simulator.raster().pos(),
                frame: simulator.raster().frame_count(),
            },
        }
    }

    /// Restore this snapshot into a simulator.
    pub fn restore_to(&self, simulator: &mut Simulator) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::VersionMismatch {
                expected: SNAPSHOT_VERSION,
                found: self.version,
            });
        }
        if self.tile_ram.len() != TILE_RAM_SIZE {
            return Err(SnapshotError::BadRamSize {
                expected: TILE_RAM_SIZE,
                found: self.tile_ram.len(),
            });
        }

        simulator.ram_mut().load_bytes(&self.tile_ram);
        simulator.layer_mut().restore_latches(self.latches);
        simulator
            .raster_mut()
            .restore(self.raster.pos, self.raster.frame);
        Ok(())
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save to a numbered slot file in the configured directory.
    pub fn save_to_file(&self, slot: u8, config: &SnapshotConfig) -> Result<PathBuf, SnapshotError> {
        fs::create_dir_all(&config.directory)?;
        let path = config.directory.join(format!("snapshot_{}.json", slot));
        fs::write(&path, self.to_json()?)?;
        Ok(path)
    }

    /// Load from a numbered slot file in the configured directory.
    pub fn load_from_file(slot: u8, config: &SnapshotConfig) -> Result<Self, SnapshotError> {
        let path = config.directory.join(format!("snapshot_{}.json", slot));
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
