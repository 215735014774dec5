// Headless rendering demo
//
// Renders a frame without opening a window, dumps the tile map as text, and
// traces the pipeline through the first tile column of the next frame.

use charlayer_rs::debug::{dump_tile_map, PipelineState, TraceLevel, TraceLogger};
use charlayer_rs::memory::TileMapEntry;
use charlayer_rs::simulator::Simulator;

fn write_text(sim: &mut Simulator, row: u8, column: u8, text: &str, color: u8) {
    for (i, ch) in text.chars().enumerate() {
        let entry = TileMapEntry::new(ch.to_ascii_uppercase() as u16, color);
        sim.poke_entry(row, column + i as u8, entry);
    }
}

fn main() {
    env_logger::init();

    let mut sim = Simulator::new();
    write_text(&mut sim, 4, 10, "HELLO TILES", 0x3);
    write_text(&mut sim, 6, 10, "SCORE 01570", 0xE);
    sim.poke_entry(10, 10, TileMapEntry::new(0x70, 0x1));

    sim.run_frame();

    println!("Tile map:");
    println!("{}", dump_tile_map(sim.ram()));

    let lit = sim
        .framebuffer()
        .as_slice()
        .iter()
        .filter(|&&d| d & 0x0F != 0)
        .count();
    println!("Frame {} rendered, {} lit pixels", sim.raster().frame_count(), lit);
    println!();

    // Trace the fetch schedule across the first two tile columns.
    let mut trace = TraceLogger::new(TraceLevel::Pipeline);
    for _ in 0..16 {
        trace.pipeline(PipelineState::capture(&sim));
        sim.tick();
    }
    println!("Pipeline trace:");
    for entry in trace.entries() {
        println!("  {}", entry);
    }
}
