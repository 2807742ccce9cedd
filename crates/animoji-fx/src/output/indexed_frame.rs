//! IndexedFrame struct: one palette-quantized frame.

use std::sync::Arc;

use crate::image::Image;
use crate::palette::Palette;

/// A frame reduced to indices into the shared animation palette.
///
/// Every frame of an animation holds a clone of the same `Arc<Palette>`, so
/// frames can be produced on worker threads without copying the palette.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use animoji_fx::{IndexedFrame, Palette, Rgba};
///
/// let palette = Arc::new(Palette::new(&[Rgba::BLACK, Rgba::WHITE]).unwrap());
/// let frame = IndexedFrame::new(vec![0, 1, 1, 0], 2, 2, palette);
///
/// assert_eq!(frame.indices(), &[0, 1, 1, 0]);
/// assert_eq!(frame.to_rgba().pixel(1, 0), Rgba::WHITE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFrame {
    indices: Vec<u8>,
    width: u32,
    height: u32,
    palette: Arc<Palette>,
}

impl IndexedFrame {
    /// Wrap quantized indices.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height`.
    pub fn new(indices: Vec<u8>, width: u32, height: u32, palette: Arc<Palette>) -> Self {
        debug_assert_eq!(
            indices.len(),
            width as usize * height as usize,
            "indices length ({}) must match width * height ({}x{})",
            indices.len(),
            width,
            height,
        );
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    /// Quantize `image` against `palette`.
    pub fn quantize(image: &Image, palette: Arc<Palette>) -> Self {
        let indices = palette.quantize(image);
        Self::new(indices, image.width(), image.height(), palette)
    }

    /// Palette indices, one per pixel, row-major.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn palette(&self) -> &Arc<Palette> {
        &self.palette
    }

    /// Expand back to RGBA by looking every index up in the palette.
    pub fn to_rgba(&self) -> Image {
        let row = self.width as usize;
        Image::from_fn(self.width, self.height, |x, y| {
            let idx = self.indices[y as usize * row + x as usize];
            self.palette.color(idx as usize)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    fn two_tone() -> Arc<Palette> {
        Arc::new(Palette::new(&[Rgba::opaque(255, 0, 0), Rgba::opaque(0, 0, 255)]).unwrap())
    }

    #[test]
    fn test_quantize_maps_to_nearest() {
        let image = Image::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgba::opaque(200, 10, 10)
            } else {
                Rgba::opaque(10, 10, 180)
            }
        });
        let frame = IndexedFrame::quantize(&image, two_tone());
        assert_eq!(frame.indices(), &[0, 1]);
        assert_eq!((frame.width(), frame.height()), (2, 1));
    }

    #[test]
    fn test_to_rgba_uses_palette_colors() {
        let frame = IndexedFrame::new(vec![1, 0], 1, 2, two_tone());
        let rgba = frame.to_rgba();
        assert_eq!(rgba.pixel(0, 0), Rgba::opaque(0, 0, 255));
        assert_eq!(rgba.pixel(0, 1), Rgba::opaque(255, 0, 0));
    }

    #[test]
    fn test_frames_share_palette() {
        let palette = two_tone();
        let a = IndexedFrame::new(vec![0], 1, 1, Arc::clone(&palette));
        let b = IndexedFrame::new(vec![1], 1, 1, Arc::clone(&palette));
        assert!(Arc::ptr_eq(a.palette(), b.palette()));
    }
}
