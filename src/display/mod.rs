// Display module - color lookup, frame buffering, and the output window
//
// This module provides:
// - Color lookup table (synthetic default or a color PROM image)
// - Frame buffer of packed layer data (256x256)
// - Window creation with scaling support, VSync, and frame timing

pub mod clut;
pub mod framebuffer;
pub mod window;

pub use clut::{rgb_to_rgba, Clut, ClutError, BASE_COLORS, CLUT_PROM_BYTES};
pub use framebuffer::{FrameBuffer, SCREEN_HEIGHT, SCREEN_SIZE, SCREEN_WIDTH};
pub use window::{run_simulator, SimulatorWindow, WindowConfig};
