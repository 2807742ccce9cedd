//! The [`Image`] pixel buffer.

use super::error::ShapeError;
use crate::color::Rgba;

/// Largest width or height the pipeline renders (GIF stores dimensions as `u16`).
pub const MAX_DIMENSION: u32 = u16::MAX as u32;

/// Reject dimensions above [`MAX_DIMENSION`] before anything is allocated.
pub(crate) fn check_dimensions(width: u32, height: u32) -> Result<(), ShapeError> {
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(ShapeError::TooLarge {
            width,
            height,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}

/// A 2-D grid of straight-alpha RGBA pixels in row-major order.
///
/// # Example
///
/// ```
/// use animoji_fx::{Image, Rgba};
///
/// let mut image = Image::new(2, 2);
/// assert_eq!(image.pixel(1, 1), Rgba::TRANSPARENT);
///
/// image.put(1, 1, Rgba::opaque(255, 0, 0));
/// assert_eq!(image.pixel(1, 1).r, 255);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Image {
    /// Allocate a fully transparent image.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgba::TRANSPARENT)
    }

    /// Allocate an image with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major pixel vector.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::BufferMismatch`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self, ShapeError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(ShapeError::BufferMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build an image from interleaved `[R, G, B, A, ...]` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::BufferMismatch`] if `bytes.len() != width * height * 4`.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, ShapeError> {
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(ShapeError::BufferMismatch {
                width,
                height,
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgba) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// True when the image has no pixels at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        self.pixels[self.index(x, y)]
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Option<Rgba> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(self.pixels[self.index(x as u32, y as u32)])
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    #[inline]
    pub fn put(&mut self, x: u32, y: u32, color: Rgba) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }

    /// Flatten to interleaved `[R, G, B, A, ...]` bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|px| px.to_bytes()).collect()
    }

    /// Apply `f` to every pixel, producing a new image of the same size.
    pub fn map_pixels(&self, mut f: impl FnMut(Rgba) -> Rgba) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&px| f(px)).collect(),
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
