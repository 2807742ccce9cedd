//! Palette struct with sampling and nearest-color matching.
//!
//! The animation uses one fixed palette for every frame. It is derived from
//! the source image by a strided scan, so frames stay visually related, and
//! colors the scan never saw are approximated by the nearest entry.

use std::collections::HashSet;

use super::error::PaletteError;
use crate::color::Rgba;
use crate::image::Image;

/// Maximum number of palette entries (one `u8` index per pixel).
pub const MAX_COLORS: usize = 256;

/// Sampling stride in both axes when building a palette from an image.
pub const SAMPLE_STEP: usize = 4;

/// An ordered set of up to 256 unique colors.
///
/// Entry order is significant: it is the first-seen order of the sampling
/// scan, and ties in [`find_nearest`](Palette::find_nearest) resolve to the
/// lowest index.
///
/// # Example
///
/// ```
/// use animoji_fx::{Palette, Rgba};
///
/// let palette = Palette::new(&[Rgba::BLACK, Rgba::WHITE]).unwrap();
/// assert_eq!(palette.len(), 2);
///
/// let (idx, _) = palette.find_nearest(Rgba::opaque(200, 200, 200));
/// assert_eq!(idx, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Palette {
    /// Create a palette from explicit colors.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `colors` is empty ([`PaletteError::EmptyPalette`])
    /// - `colors` has more than 256 entries ([`PaletteError::TooManyColors`])
    /// - `colors` contains duplicates ([`PaletteError::DuplicateColor`])
    pub fn new(colors: &[Rgba]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        if colors.len() > MAX_COLORS {
            return Err(PaletteError::TooManyColors {
                count: colors.len(),
                max: MAX_COLORS,
            });
        }

        let mut seen = HashSet::with_capacity(colors.len());
        for (i, color) in colors.iter().enumerate() {
            if !seen.insert(*color) {
                return Err(PaletteError::DuplicateColor { index: i });
            }
        }

        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// Derive a palette from an image.
    ///
    /// Scans pixels at a stride of [`SAMPLE_STEP`] in both axes, row-major,
    /// keeping each color the first time it is seen and stopping as soon as
    /// [`MAX_COLORS`] unique colors are collected. Falls back to
    /// `[white, black]` when the scan finds nothing (a 0×0 image).
    ///
    /// The collected colors go through [`new`](Self::new), so a sampled
    /// palette upholds the same invariants as an explicit one.
    pub fn sample(image: &Image) -> Result<Self, PaletteError> {
        let mut seen = HashSet::new();
        let mut colors = Vec::with_capacity(MAX_COLORS);

        'scan: for y in (0..image.height()).step_by(SAMPLE_STEP) {
            for x in (0..image.width()).step_by(SAMPLE_STEP) {
                let color = image.pixel(x, y);
                if seen.insert(color) {
                    colors.push(color);
                    if colors.len() >= MAX_COLORS {
                        break 'scan;
                    }
                }
            }
        }

        if colors.is_empty() {
            colors = vec![Rgba::WHITE, Rgba::BLACK];
        }

        tracing::debug!(colors = colors.len(), "Sampled palette");
        Self::new(&colors)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`: empty palettes are rejected at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgba {
        self.colors[idx]
    }

    /// All colors in palette order.
    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Index of the first fully transparent entry, if any.
    pub fn transparent_index(&self) -> Option<u8> {
        self.colors
            .iter()
            .position(|c| c.a == 0)
            .map(|idx| idx as u8)
    }

    /// Flatten to `[R, G, B, R, G, B, ...]`, the layout of a GIF color table.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.colors.iter().flat_map(|c| c.rgb()).collect()
    }

    /// Find the palette entry closest to `color`.
    ///
    /// Distance is squared Euclidean over R, G, B and A. Ties resolve to
    /// the lowest index, so matching is deterministic for a given palette.
    ///
    /// Returns `(index, squared_distance)`.
    #[inline]
    pub fn find_nearest(&self, color: Rgba) -> (usize, u32) {
        // Linear scan, at most 256 entries
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        for (i, &entry) in self.colors.iter().enumerate() {
            let dist = color.distance_sq(entry);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
                if dist == 0 {
                    break;
                }
            }
        }

        (best_idx, best_dist)
    }

    /// Map every pixel of `image` to its nearest palette index.
    pub fn quantize(&self, image: &Image) -> Vec<u8> {
        image
            .pixels()
            .iter()
            .map(|&px| self.find_nearest(px).0 as u8)
            .collect()
    }
}
