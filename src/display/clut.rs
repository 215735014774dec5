// Color lookup table - maps layer output data to RGB
//
// The layer's 8-bit datum {color, pixel} addresses a 256-entry color PROM.
// A real board ships this as a ROM image; a synthetic table is built in so
// everything runs without assets.

use std::fs;
use std::io;
use std::path::Path;

/// Number of lookup entries (one per possible datum).
pub const CLUT_ENTRIES: usize = 256;

/// Size of a color PROM image in bytes (one RGB triplet per entry).
pub const CLUT_PROM_BYTES: usize = CLUT_ENTRIES * 3;

/// Base colors for the synthetic table, 0xRRGGBB.
///
/// The classic 16-color set: recognizable on sight, which is what you want
/// from a diagnostic table.
pub const BASE_COLORS: [u32; 16] = [
    0x000000, // black
    0x0000AA, // blue
    0x00AA00, // green
    0x00AAAA, // cyan
    0xAA0000, // red
    0xAA00AA, // magenta
    0xAA5500, // brown
    0xAAAAAA, // light gray
    0x555555, // dark gray
    0x5555FF, // light blue
    0x55FF55, // light green
    0x55FFFF, // light cyan
    0xFF5555, // light red
    0xFF55FF, // light magenta
    0xFFFF55, // yellow
    0xFFFFFF, // white
];

/// Errors raised while loading a color PROM image.
#[derive(Debug)]
pub enum ClutError {
    /// I/O error
    Io(io::Error),

    /// Image has the wrong size
    BadImageSize { expected: usize, found: usize },
}

impl std::fmt::Display for ClutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClutError::Io(e) => write!(f, "I/O error: {}", e),
            ClutError::BadImageSize { expected, found } => {
                write!(
                    f,
                    "bad color PROM image size: expected {} bytes, found {}",
                    expected, found
                )
            }
        }
    }
}

impl std::error::Error for ClutError {}

impl From<io::Error> for ClutError {
    fn from(e: io::Error) -> Self {
        ClutError::Io(e)
    }
}

/// 256-entry RGBA lookup table.
pub struct Clut {
    entries: [[u8; 4]; CLUT_ENTRIES],
}

impl Clut {
    /// Build the synthetic default table: palette bank `color` is the base
    /// 16-color set rotated by `color`, so bank 0 is the identity mapping
    /// and every bank still contains all 16 colors.
    pub fn new() -> Self {
        let mut entries = [[0; 4]; CLUT_ENTRIES];
        for (datum, entry) in entries.iter_mut().enumerate() {
            let color = (datum >> 4) as u8;
            let pixel = (datum & 0x0F) as u8;
            let rgb = BASE_COLORS[((pixel + color) & 0x0F) as usize];
            *entry = rgb_to_rgba(rgb);
        }
        Self { entries }
    }

    /// Load a color PROM image: 256 RGB triplets in datum order.
    pub fn from_bytes(data: &[u8]) -> Result<Self, ClutError> {
        if data.len() != CLUT_PROM_BYTES {
            return Err(ClutError::BadImageSize {
                expected: CLUT_PROM_BYTES,
                found: data.len(),
            });
        }

        let mut entries = [[0; 4]; CLUT_ENTRIES];
        for (entry, rgb) in entries.iter_mut().zip(data.chunks_exact(3)) {
            *entry = [rgb[0], rgb[1], rgb[2], 0xFF];
        }
        Ok(Self { entries })
    }

    /// Load a color PROM image from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ClutError> {
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// The RGBA color for a packed layer datum.
    #[inline]
    pub fn rgba(&self, datum: u8) -> [u8; 4] {
        self.entries[datum as usize]
    }
}

impl Default for Clut {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert 0xRRGGBB to the [R, G, B, A] bytes expected by the pixels crate.
#[inline]
pub fn rgb_to_rgba(rgb: u32) -> [u8; 4] {
    [
        ((rgb >> 16) & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
        0xFF,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_zero_is_identity() {
        let clut = Clut::new();
        assert_eq!(clut.rgba(0x00), rgb_to_rgba(BASE_COLORS[0]));
        assert_eq!(clut.rgba(0x0F), rgb_to_rgba(BASE_COLORS[15]));
    }

    #[test]
    fn test_banks_rotate_the_base_colors() {
        let clut = Clut::new();
        // Bank 3, pixel 0 lands on base color 3.
        assert_eq!(clut.rgba(0x30), rgb_to_rgba(BASE_COLORS[3]));
        // Rotation wraps: bank 15, pixel 1 lands back on base color 0.
        assert_eq!(clut.rgba(0xF1), rgb_to_rgba(BASE_COLORS[0]));
    }

    #[test]
    fn test_rgb_to_rgba() {
        assert_eq!(rgb_to_rgba(0x123456), [0x12, 0x34, 0x56, 0xFF]);
    }

    #[test]
    fn test_prom_image_size_check() {
        match Clut::from_bytes(&[0u8; 100]) {
            Err(ClutError::BadImageSize { expected, found }) => {
                assert_eq!(expected, CLUT_PROM_BYTES);
                assert_eq!(found, 100);
            }
            _ => panic!("undersized image must be rejected"),
        }
    }

    #[test]
    fn test_prom_image_roundtrip() {
        let mut image = vec![0u8; CLUT_PROM_BYTES];
        image[0x42 * 3..0x42 * 3 + 3].copy_from_slice(&[0x12, 0x34, 0x56]);
        let clut = Clut::from_bytes(&image).unwrap();
        assert_eq!(clut.rgba(0x42), [0x12, 0x34, 0x56, 0xFF]);
    }
}
