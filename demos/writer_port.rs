// Writer port demo
//
// Shows a CPU-style writer updating the score line through the second RAM
// port while the renderer keeps scanning: writes drain one per pixel tick,
// never stealing the render port.

use charlayer_rs::memory::TileMapEntry;
use charlayer_rs::simulator::Simulator;

const SCORE_ROW: u8 = 2;
const SCORE_COLUMN: u8 = 12;

fn queue_score(sim: &mut Simulator, score: u32) {
    let text = format!("{:06}", score);
    for (i, ch) in text.chars().enumerate() {
        let entry = TileMapEntry::new(ch as u16, 0xE);
        sim.write_entry(SCORE_ROW, SCORE_COLUMN + i as u8, entry);
    }
}

fn read_score(sim: &Simulator) -> String {
    (0..6)
        .map(|i| {
            let code = sim.peek_entry(SCORE_ROW, SCORE_COLUMN + i).code;
            char::from_u32(code as u32).unwrap_or('?')
        })
        .collect()
}

fn main() {
    env_logger::init();

    let mut sim = Simulator::new();
    queue_score(&mut sim, 0);
    sim.run_frame();
    println!("score after frame 1: {}", read_score(&sim));

    // 12 byte writes queued mid-frame: they land within the first 12 ticks
    // of the next frame.
    queue_score(&mut sim, 1570);
    println!("queued writer accesses: {}", sim.pending_writes());

    for _ in 0..12 {
        sim.tick();
    }
    println!("pending after 12 ticks: {}", sim.pending_writes());
    println!("score in RAM: {}", read_score(&sim));

    // Finish the frame so the new digits are on screen.
    while sim.raster().pos() != charlayer_rs::RasterPos::new(0, 0) {
        sim.tick();
    }
    println!("frame {} complete", sim.raster().frame_count());
}
