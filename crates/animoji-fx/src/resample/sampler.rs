//! The shared nearest-neighbor inverse mapper.

use crate::image::Image;

/// What to do with a destination pixel whose source coordinate lies
/// outside the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeMode {
    /// Leave the destination pixel at its initial value (transparent).
    Transparent,
    /// Clamp the coordinate to the nearest edge pixel.
    Clamp,
}

/// Build a `width`×`height` image by inverse-mapping every destination
/// pixel through `map` and sampling `src` with nearest-neighbor.
///
/// `map` returns the source coordinate for a destination pixel, or `None`
/// to leave that pixel transparent regardless of `edge`. Coordinates are
/// truncated toward zero before the bounds check, so a value such as
/// `-0.5` samples column 0.
pub fn remap<F>(src: &Image, width: u32, height: u32, edge: EdgeMode, map: F) -> Image
where
    F: Fn(u32, u32) -> Option<(f64, f64)>,
{
    let mut dst = Image::new(width, height);
    if src.is_empty() {
        return dst;
    }

    let max_x = src.width() as i64 - 1;
    let max_y = src.height() as i64 - 1;

    for y in 0..height {
        for x in 0..width {
            let Some((sx, sy)) = map(x, y) else {
                continue;
            };
            let (sx, sy) = (sx as i64, sy as i64);

            let sample = match edge {
                EdgeMode::Transparent => src.get(sx, sy),
                EdgeMode::Clamp => src.get(sx.clamp(0, max_x), sy.clamp(0, max_y)),
            };
            if let Some(color) = sample {
                dst.put(x, y, color);
            }
        }
    }

    dst
}
