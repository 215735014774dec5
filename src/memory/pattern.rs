// Pattern storage - per-tile pixel bitmaps addressed by code and row
//
// The pattern store is addressed combinationally with {code, fine_y} (a
// 13-bit address) and returns one 32-bit packed row: 8 pixels, 4 bits each,
// most-significant nibble = leftmost pixel.

use std::fs;
use std::io;
use std::path::Path;

use super::charset;

/// Number of tiles addressable by a 10-bit pattern code.
pub const PATTERN_TILES: usize = 1024;

/// Rows per tile.
pub const TILE_ROWS: usize = 8;

/// Size of a full pattern ROM image in bytes (4 bytes per row).
pub const PATTERN_ROM_BYTES: usize = PATTERN_TILES * TILE_ROWS * 4;

/// A source of tile pattern rows.
///
/// `row` is combinational: the address pins are driven continuously, so the
/// value for the currently driven {code, fine_y} is always available.
pub trait PatternStore {
    /// The 32-bit packed pixel row for tile `code`, row `fine_y`.
    ///
    /// `code` is taken modulo the store size and `fine_y` modulo 8, matching
    /// a real address bus: out-of-range values index normally, they are not
    /// an error.
    fn row(&self, code: u16, fine_y: u8) -> u32;
}

/// Errors raised while loading a pattern ROM image.
#[derive(Debug)]
pub enum PatternRomError {
    /// I/O error
    Io(io::Error),

    /// Image has the wrong size
    BadImageSize { expected: usize, found: usize },
}

impl std::fmt::Display for PatternRomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternRomError::Io(e) => write!(f, "I/O error: {}", e),
            PatternRomError::BadImageSize { expected, found } => {
                write!(
                    f,
                    "bad pattern ROM image size: expected {} bytes, found {}",
                    expected, found
                )
            }
        }
    }
}

impl std::error::Error for PatternRomError {}

impl From<io::Error> for PatternRomError {
    fn from(e: io::Error) -> Self {
        PatternRomError::Io(e)
    }
}

/// Pattern ROM: 1024 tiles of 8 rows, 32 bits per row.
pub struct PatternRom {
    rows: Vec<u32>,
}

impl PatternRom {
    /// Create a blank (all-zero) pattern ROM.
    pub fn new() -> Self {
        Self {
            rows: vec![0; PATTERN_TILES * TILE_ROWS],
        }
    }

    /// Load a pattern ROM from a raw image: 32 bytes per tile, row-major,
    /// 4 bytes per row, big-endian.
    ///
    /// The image must be exactly `PATTERN_ROM_BYTES` long; anything else is a
    /// wiring mistake and is rejected up front.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PatternRomError> {
        if data.len() != PATTERN_ROM_BYTES {
            return Err(PatternRomError::BadImageSize {
                expected: PATTERN_ROM_BYTES,
                found: data.len(),
            });
        }

        let rows = data
            .chunks_exact(4)
            .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
            .collect();

        Ok(Self { rows })
    }

    /// Load a pattern ROM image from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PatternRomError> {
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Build the built-in character-generator image: ASCII glyphs at their
    /// character codes plus a few solid/gradient test tiles, so the binary
    /// and the tests run without external ROM assets.
    ///
    /// Layout:
    /// - codes 0x20..=0x5F: font glyphs (1bpp expanded to 4bpp, ink = 0xF)
    /// - codes 0x60..=0x6F: solid fill with pixel value = code & 0xF
    /// - code 0x70: 2x2 checkerboard (values 0xF / 0x0)
    /// - code 0x71: horizontal gradient (pixel value = column)
    /// - code 0x72: vertical gradient (pixel value = row)
    /// - everything else: blank
    pub fn with_test_tiles() -> Self {
        let mut rom = Self::new();

        for i in 0..charset::FONT_GLYPHS {
            let code = charset::FONT_BASE as u16 + i as u16;
            for (y, &bits) in charset::FONT[i].iter().enumerate() {
                rom.set_row(code, y as u8, expand_1bpp(bits));
            }
        }

        for value in 0u32..16 {
            let row = value * 0x1111_1111;
            rom.set_tile(0x60 + value as u16, [row; 8]);
        }

        for y in 0..TILE_ROWS as u8 {
            let checker = if y % 2 == 0 { 0xF0F0_F0F0 } else { 0x0F0F_0F0F };
            rom.set_row(0x70, y, checker);
            rom.set_row(0x71, y, 0x0123_4567);
            rom.set_row(0x72, y, (y as u32) * 0x1111_1111);
        }

        rom
    }

    /// Overwrite one row of one tile.
    pub fn set_row(&mut self, code: u16, fine_y: u8, row: u32) {
        self.rows[row_index(code, fine_y)] = row;
    }

    /// Overwrite all 8 rows of one tile.
    pub fn set_tile(&mut self, code: u16, rows: [u32; TILE_ROWS]) {
        for (y, row) in rows.into_iter().enumerate() {
            self.set_row(code, y as u8, row);
        }
    }
}

impl PatternStore for PatternRom {
    fn row(&self, code: u16, fine_y: u8) -> u32 {
        self.rows[row_index(code, fine_y)]
    }
}

impl Default for PatternRom {
    fn default() -> Self {
        Self::new()
    }
}

/// The 13-bit row address {code[9:0], fine_y[2:0]} as a vector index.
#[inline]
fn row_index(code: u16, fine_y: u8) -> usize {
    (((code as usize) & (PATTERN_TILES - 1)) << 3) | ((fine_y as usize) & (TILE_ROWS - 1))
}

/// Expand a 1bpp glyph row to a 4bpp packed row (set bits become 0xF).
fn expand_1bpp(bits: u8) -> u32 {
    let mut row = 0u32;
    for x in 0..8 {
        if bits & (0x80 >> x) != 0 {
            row |= 0xF << ((7 - x) * 4);
        }
    }
    row
}
