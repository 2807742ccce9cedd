//! Rotating highlighter tints per image quarter.

use crate::image::Image;

use super::tint::TINT_OPACITY;

/// Highlighter colors cycled across the quarters: hot pink, yellow, lime
/// green and cyan blue.
pub const HIGHLIGHTERS: [[u8; 3]; 4] = [
    [255, 20, 147],
    [255, 255, 0],
    [50, 255, 50],
    [0, 200, 255],
];

/// Quarter index of a pixel: 0 top-left, 1 top-right, 2 bottom-left,
/// 3 bottom-right. The split is at `width / 2` and `height / 2`.
#[inline]
pub fn quarter_of(x: u32, y: u32, width: u32, height: u32) -> usize {
    let right = x >= width / 2;
    let bottom = y >= height / 2;
    (bottom as usize) * 2 + right as usize
}

/// Highlighter used by `quarter` on frame `frame_index`.
#[inline]
pub fn highlighter_for(frame_index: u32, quarter: usize) -> [u8; 3] {
    HIGHLIGHTERS[(frame_index as usize + quarter) % HIGHLIGHTERS.len()]
}

/// Tint each quarter with its highlighter for this frame, at the same
/// opacity as the tint effect. The assignment advances one color per frame.
pub fn vibes(src: &Image, frame_index: u32) -> Image {
    let (width, height) = src.dimensions();
    Image::from_fn(width, height, |x, y| {
        let overlay = highlighter_for(frame_index, quarter_of(x, y, width, height));
        src.pixel(x, y).blend_rgb(overlay, TINT_OPACITY)
    })
}
