// Character Layer Simulator Library
// Cycle-accurate model of an arcade tile-based character layer renderer

// Public modules
pub mod debug;
pub mod display;
pub mod layer;
pub mod memory;
pub mod simulator;
pub mod timing;

// Re-export main types for convenience
pub use debug::{PipelineState, TraceLevel, TraceLogger};
pub use display::{Clut, ClutError, FrameBuffer, WindowConfig};
pub use layer::{CharLayer, FetchPhase, LayerPixel, RasterPos, TileCoord};
pub use memory::{PatternRom, PatternRomError, PatternStore, Port, PortPins, TileMapEntry, TileRam};
pub use simulator::{Simulator, SimulatorConfig, Snapshot, SnapshotError};
pub use timing::RasterCounter;
