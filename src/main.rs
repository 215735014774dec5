// Character Layer Simulator - Main Entry Point
//
// Composes a demonstration screen (logo, score line, playfield) in the tile
// map and runs the simulated pipeline in a display window.

use charlayer_rs::display::{run_simulator, WindowConfig};
use charlayer_rs::memory::TileMapEntry;
use charlayer_rs::simulator::{Simulator, SimulatorConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Character Layer Simulator (charlayer-rs) v0.1.0");
    println!("===============================================");
    println!();

    let config = SimulatorConfig::load_or_default();
    let window_config = WindowConfig::new()
        .with_scale(config.video.scale)
        .with_fps(config.video.fps)
        .with_vsync(config.video.vsync);

    let mut sim = Simulator::with_config(config);
    compose_demo_screen(&mut sim);

    println!("Keys: S = screenshot, Escape = quit");
    println!();

    run_simulator(window_config, sim)?;

    println!("Display window closed.");
    Ok(())
}

/// Write a text string into the tile map. Character codes map directly to
/// pattern codes for the built-in character set.
fn write_text(sim: &mut Simulator, row: u8, column: u8, text: &str, color: u8) {
    for (i, ch) in text.chars().enumerate() {
        let entry = TileMapEntry::new(ch.to_ascii_uppercase() as u16, color);
        sim.poke_entry(row, column + i as u8, entry);
    }
}

/// Fill a rectangular region of the tile map with one tile.
fn fill_rect(sim: &mut Simulator, row: u8, column: u8, width: u8, height: u8, entry: TileMapEntry) {
    for r in row..row + height {
        for c in column..column + width {
            sim.poke_entry(r, c, entry);
        }
    }
}

/// An attract-mode style screen: score header, logo, and a playfield box.
fn compose_demo_screen(sim: &mut Simulator) {
    write_text(sim, 1, 3, "1UP", 0xF);
    write_text(sim, 1, 11, "HIGH SCORE", 0xF);
    write_text(sim, 2, 2, "00200", 0xE);
    write_text(sim, 2, 13, "00850", 0xE);

    write_text(sim, 8, 11, "CHAR LAYER", 0xC);
    write_text(sim, 10, 9, "TILE PIPELINE", 0xA);

    // Playfield frame out of solid tiles (codes 0x60-0x6F fill with the
    // low nibble; 0x66 reads as base color 6 in palette bank 1).
    let wall = TileMapEntry::new(0x66, 0x1);
    fill_rect(sim, 14, 4, 24, 1, wall);
    fill_rect(sim, 29, 4, 24, 1, wall);
    fill_rect(sim, 14, 4, 1, 16, wall);
    fill_rect(sim, 14, 27, 1, 16, wall);

    // Gradient and checker strips inside the box, one of each per palette.
    for i in 0u8..8 {
        sim.poke_entry(20, 8 + i * 2, TileMapEntry::new(0x71, i));
        sim.poke_entry(23, 8 + i * 2, TileMapEntry::new(0x70, i + 8));
    }

    write_text(sim, 26, 10, "INSERT COIN", 0xE);
}
