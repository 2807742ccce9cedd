//! Aspect-preserving nearest-neighbor resize.
//!
//! Large inputs are shrunk once before the palette is built. Every frame of
//! the animation is held in memory until encode, so this is the main lever
//! on peak memory.

use super::sampler::{remap, EdgeMode};
use crate::image::{check_dimensions, Image, ShapeError};

/// Height that preserves the aspect ratio at `target_width`.
///
/// `round(target_width * src_height / src_width)`, never less than one row.
pub fn scaled_height(src_width: u32, src_height: u32, target_width: u32) -> u32 {
    let exact = target_width as f64 * src_height as f64 / src_width as f64;
    (exact.round() as u32).max(1)
}

/// Resize `src` to `target_width` columns, scaling the height to keep the
/// aspect ratio.
///
/// Each destination pixel samples `src` at `(x * src_w / dst_w, y * src_h / dst_h)`,
/// truncated and clamped to the source bounds.
///
/// # Errors
///
/// Returns [`ShapeError::EmptySource`] if `src` has a zero dimension, and
/// [`ShapeError::TooLarge`] if the scaled size exceeds
/// [`MAX_DIMENSION`](crate::image::MAX_DIMENSION) in either axis.
///
/// # Example
///
/// ```
/// use animoji_fx::{resize_to_width, Image};
///
/// let src = Image::new(200, 100);
/// let small = resize_to_width(&src, 64).unwrap();
/// assert_eq!(small.dimensions(), (64, 32));
/// ```
pub fn resize_to_width(src: &Image, target_width: u32) -> Result<Image, ShapeError> {
    let (src_width, src_height) = src.dimensions();
    if src_width == 0 || src_height == 0 {
        return Err(ShapeError::EmptySource);
    }

    let target_height = scaled_height(src_width, src_height, target_width);
    check_dimensions(target_width, target_height)?;

    let scale_x = src_width as f64 / target_width as f64;
    let scale_y = src_height as f64 / target_height as f64;

    tracing::debug!(
        src_width,
        src_height,
        target_width,
        target_height,
        "Resizing source image"
    );

    Ok(remap(src, target_width, target_height, EdgeMode::Clamp, |x, y| {
        Some((x as f64 * scale_x, y as f64 * scale_y))
    }))
}
