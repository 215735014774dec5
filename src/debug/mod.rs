// Debug module - pipeline inspection and trace logging

pub mod layer;
pub mod trace;

pub use layer::{dump_tile_map, PipelineState};
pub use trace::{TraceEntry, TraceLevel, TraceLogger};
