// Trace logger - records pipeline activity for offline inspection
//
// Collects per-tick pipeline states and free-form messages into a bounded
// in-memory buffer that can be dumped to a file. Distinct from the `log`
// crate output: this is simulation data, not program diagnostics.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::layer::PipelineState;

/// Trace verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TraceLevel {
    /// No tracing
    None,
    /// Free-form messages only
    Messages,
    /// Messages plus per-tick pipeline states
    Pipeline,
}

/// One trace record
#[derive(Debug, Clone)]
pub enum TraceEntry {
    /// Pipeline state at a tick boundary
    Pipeline(PipelineState),
    /// Free-form message
    Message(String),
}

impl std::fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceEntry::Pipeline(state) => write!(f, "{}", state),
            TraceEntry::Message(msg) => write!(f, "{}", msg),
        }
    }
}

/// Bounded in-memory trace buffer.
pub struct TraceLogger {
    level: TraceLevel,
    buffer: Vec<TraceEntry>,
    /// Maximum number of buffered entries (0 = unlimited)
    max_buffer_size: usize,
}

impl TraceLogger {
    /// Create a logger keeping at most 10,000 entries.
    pub fn new(level: TraceLevel) -> Self {
        Self {
            level,
            buffer: Vec::new(),
            max_buffer_size: 10_000,
        }
    }

    /// Change the maximum buffer size (0 = unlimited). Oldest entries are
    /// dropped when the buffer is full.
    pub fn with_max_buffer_size(mut self, size: usize) -> Self {
        self.max_buffer_size = size;
        self
    }

    pub fn level(&self) -> TraceLevel {
        self.level
    }

    pub fn set_level(&mut self, level: TraceLevel) {
        self.level = level;
    }

    /// Record a pipeline state (kept at `Pipeline` level only).
    pub fn pipeline(&mut self, state: PipelineState) {
        if self.level >= TraceLevel::Pipeline {
            self.push(TraceEntry::Pipeline(state));
        }
    }

    /// Record a free-form message.
    pub fn message<S: Into<String>>(&mut self, msg: S) {
        if self.level >= TraceLevel::Messages {
            self.push(TraceEntry::Message(msg.into()));
        }
    }

    fn push(&mut self, entry: TraceEntry) {
        if self.max_buffer_size > 0 && self.buffer.len() >= self.max_buffer_size {
            self.buffer.remove(0);
        }
        self.buffer.push(entry);
    }

    /// The buffered entries, oldest first.
    pub fn entries(&self) -> &[TraceEntry] {
        &self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Write the buffered entries to a file, one per line.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        for entry in &self.buffer {
            writeln!(file, "{}", entry)?;
        }
        Ok(())
    }
}
