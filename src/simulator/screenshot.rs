// Screenshot functionality
//
// Captures the current frame buffer and saves it as a PNG file.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::display::{Clut, FrameBuffer, SCREEN_HEIGHT, SCREEN_SIZE, SCREEN_WIDTH};

use super::config::ScreenshotConfig;

/// Errors that can occur during screenshot operations
#[derive(Debug)]
pub enum ScreenshotError {
    /// I/O error
    Io(io::Error),

    /// PNG encoding error
    PngEncoding(png::EncodingError),
}

impl std::fmt::Display for ScreenshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenshotError::Io(e) => write!(f, "I/O error: {}", e),
            ScreenshotError::PngEncoding(e) => write!(f, "PNG encoding error: {}", e),
        }
    }
}

impl std::error::Error for ScreenshotError {}

impl From<io::Error> for ScreenshotError {
    fn from(e: io::Error) -> Self {
        ScreenshotError::Io(e)
    }
}

impl From<png::EncodingError> for ScreenshotError {
    fn from(e: png::EncodingError) -> Self {
        ScreenshotError::PngEncoding(e)
    }
}

/// Save a screenshot of the current frame.
///
/// Converts the frame buffer (packed layer data) to RGBA through the color
/// lookup table and saves it as a PNG file in the configured directory.
///
/// # Returns
///
/// The path of the saved screenshot.
pub fn save_screenshot(
    frame: &FrameBuffer,
    clut: &Clut,
    config: &ScreenshotConfig,
) -> Result<PathBuf, ScreenshotError> {
    fs::create_dir_all(&config.directory)?;

    let filename = if config.include_timestamp {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        format!("layer_{}.png", timestamp)
    } else {
        "layer.png".to_string()
    };
    let file_path = config.directory.join(filename);

    let mut rgba = vec![0u8; SCREEN_SIZE * 4];
    frame.to_rgba(clut, &mut rgba);

    let file = fs::File::create(&file_path)?;
    let writer = io::BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&rgba)?;

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screenshot_roundtrip() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(1, 0, 0x0F);
        let clut = Clut::new();
        let config = ScreenshotConfig {
            directory: std::env::temp_dir().join("charlayer_screenshot_test"),
            include_timestamp: false,
        };

        let path = save_screenshot(&frame, &clut, &config).expect("screenshot must save");
        assert!(path.exists());

        let file = fs::File::open(&path).unwrap();
        let decoder = png::Decoder::new(io::BufReader::new(file));
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0u8; SCREEN_SIZE * 4];
        let info = reader.next_frame(&mut buf).unwrap();
        assert_eq!(info.width, SCREEN_WIDTH as u32);
        assert_eq!(info.height, SCREEN_HEIGHT as u32);
        assert_eq!(&buf[4..8], &clut.rgba(0x0F));

        let _ = fs::remove_dir_all(&config.directory);
    }
}
