//! Fetch sequencer tests
//!
//! The sequencer is stepped directly with synthetic port data so each phase
//! can be checked in isolation; whole-pipeline behavior lives in timing.rs.

use crate::layer::fetch::{FetchPhase, FetchSequencer};
use crate::layer::RasterPos;
use crate::memory::{high_byte_addr, low_byte_addr};

fn coord(x: u8, y: u8) -> crate::layer::TileCoord {
    RasterPos::new(x, y).coord()
}

#[test]
fn test_phase_dispatch() {
    assert_eq!(FetchPhase::of(0), FetchPhase::DriveHigh);
    assert_eq!(FetchPhase::of(1), FetchPhase::DriveLow);
    assert_eq!(FetchPhase::of(2), FetchPhase::LatchCode);
    for fine_x in 3..7 {
        assert_eq!(FetchPhase::of(fine_x), FetchPhase::Idle);
    }
    assert_eq!(FetchPhase::of(7), FetchPhase::LatchColor);
}

#[test]
fn test_drive_phases_address_the_next_column() {
    let mut seq = FetchSequencer::new();

    // Column 4 of tile row 2: the fetch targets column 5.
    let pins = seq.tick(coord(4 * 8, 2 * 8), 0x00);
    assert!(pins.chip_select);
    assert!(!pins.write_enable);
    assert_eq!(pins.addr, high_byte_addr(2, 5));

    let pins = seq.tick(coord(4 * 8 + 1, 2 * 8), 0x00);
    assert!(pins.chip_select);
    assert_eq!(pins.addr, low_byte_addr(2, 5));
}

#[test]
fn test_port_idle_outside_drive_phases() {
    let mut seq = FetchSequencer::new();
    for fine_x in 2u8..8 {
        let pins = seq.tick(coord(fine_x, 0), 0x00);
        assert!(!pins.chip_select, "port must be free at offset {}", fine_x);
    }
}

#[test]
fn test_code_assembled_from_both_bytes() {
    let mut seq = FetchSequencer::new();

    seq.tick(coord(0, 0), 0x00); // drive high
    seq.tick(coord(1, 0), 0xF3); // latch high byte
    seq.tick(coord(2, 0), 0x2C); // latch low byte, assemble

    assert_eq!(seq.tile_code(), 0x32C);
}

#[test]
fn test_color_latched_at_column_end() {
    let mut seq = FetchSequencer::new();

    seq.tick(coord(0, 0), 0x00);
    seq.tick(coord(1, 0), 0xF3);
    seq.tick(coord(2, 0), 0x2C);
    // Color is still the reset value until offset 7.
    assert_eq!(seq.tile_color(), 0);

    for fine_x in 3u8..7 {
        seq.tick(coord(fine_x, 0), 0xAA);
    }
    assert_eq!(seq.tile_color(), 0);

    seq.tick(coord(7, 0), 0xAA);
    assert_eq!(seq.tile_color(), 0xF);
}

#[test]
fn test_pending_byte_survives_idle_phases() {
    let mut seq = FetchSequencer::new();

    seq.tick(coord(0, 0), 0x00);
    seq.tick(coord(1, 0), 0x9D);
    // Garbage on the port during idle phases must not disturb the held byte.
    for fine_x in 2u8..7 {
        seq.tick(coord(fine_x, 0), 0xFF);
    }
    seq.tick(coord(7, 0), 0xFF);

    assert_eq!(seq.tile_color(), 0x9);
}

#[test]
fn test_look_ahead_wraps_at_last_column() {
    let mut seq = FetchSequencer::new();

    // Column 31 of tile row 6: the fetch wraps to column 0, same row.
    let pins = seq.tick(coord(31 * 8, 6 * 8), 0x00);
    assert_eq!(pins.addr, high_byte_addr(6, 0));

    let pins = seq.tick(coord(31 * 8 + 1, 6 * 8), 0x00);
    assert_eq!(pins.addr, low_byte_addr(6, 0));
}

#[test]
fn test_reset_clears_latches() {
    let mut seq = FetchSequencer::new();
    seq.tick(coord(0, 0), 0x00);
    seq.tick(coord(1, 0), 0xFF);
    seq.tick(coord(2, 0), 0xFF);
    seq.reset();
    assert_eq!(seq.tile_code(), 0);
    assert_eq!(seq.tile_color(), 0);
    assert_eq!(seq.pending(), 0);
}
