//! Test fixtures: source images and GIF decoding.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage, RgbaImage};

/// Solid color RGBA image.
pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, image::Rgba(rgba))
}

/// Black and white checkerboard with 1x1 cells.
pub fn checkerboard(size: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        if (x + y) % 2 == 0 {
            image::Rgba([0, 0, 0, 255])
        } else {
            image::Rgba([255, 255, 255, 255])
        }
    })
}

/// Opaque two-axis gradient, so geometric effects visibly move pixels.
pub fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([(x * 255 / width.max(1)) as u8, (y * 255 / height.max(1)) as u8, 128, 255])
    })
}

pub fn png_bytes(image: &RgbaImage) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png).unwrap();
    bytes.into_inner()
}

pub fn jpeg_bytes(image: &RgbImage) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Jpeg).unwrap();
    bytes.into_inner()
}

/// Write `image` as a PNG into `dir` and return its path.
pub fn write_png(dir: &Path, name: &str, image: &RgbaImage) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, png_bytes(image)).unwrap();
    path
}

/// An animated GIF read back for inspection.
pub struct DecodedGif {
    pub width: u16,
    pub height: u16,
    pub global_palette: Vec<u8>,
    pub frames: Vec<gif::Frame<'static>>,
    /// Loop setting from the NETSCAPE extension.
    pub repeat: gif::Repeat,
}

impl DecodedGif {
    pub fn decode(bytes: &[u8]) -> Self {
        let mut options = gif::DecodeOptions::new();
        options.set_color_output(gif::ColorOutput::Indexed);
        let mut decoder = options.read_info(bytes).expect("valid GIF header");

        let mut frames = Vec::new();
        while let Some(frame) = decoder.read_next_frame().expect("valid GIF frame") {
            frames.push(frame.clone());
        }

        Self {
            width: decoder.width(),
            height: decoder.height(),
            global_palette: decoder.global_palette().unwrap_or_default().to_vec(),
            frames,
            repeat: decoder.repeat(),
        }
    }

    pub fn delays(&self) -> Vec<u16> {
        self.frames.iter().map(|f| f.delay).collect()
    }

    /// RGB of the global palette entry at `index`.
    pub fn color(&self, index: u8) -> [u8; 3] {
        let i = index as usize * 3;
        [
            self.global_palette[i],
            self.global_palette[i + 1],
            self.global_palette[i + 2],
        ]
    }
}
