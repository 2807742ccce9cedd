//! Full-turn rotation about the image center.

use super::clock::FrameClock;
use crate::image::{Image, ShapeError};
use crate::resample::{remap, EdgeMode};

/// Direction of the rotation effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RotationDirection {
    #[default]
    Clockwise,
    Anticlockwise,
}

impl RotationDirection {
    /// `+1.0` for clockwise, `-1.0` for anticlockwise.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            RotationDirection::Clockwise => 1.0,
            RotationDirection::Anticlockwise => -1.0,
        }
    }
}

/// Rotation angle in radians for a frame: `index * 2π / count * direction`.
pub fn rotation_angle(clock: FrameClock, direction: RotationDirection) -> f64 {
    clock.turn() * direction.sign()
}

/// Rotate a square image by `angle` radians about its center.
///
/// Each destination pixel is rotated back by `-angle` around the center to
/// find its source. Sources outside the image leave the pixel transparent,
/// so the corners of a rotated frame are empty.
///
/// # Errors
///
/// Returns [`ShapeError::NotSquare`] when width and height differ.
pub fn rotate(src: &Image, angle: f64) -> Result<Image, ShapeError> {
    let (width, height) = src.dimensions();
    if width != height {
        return Err(ShapeError::NotSquare { width, height });
    }

    let center = width as f64 / 2.0;
    let (sin, cos) = angle.sin_cos();
    let (src_w, src_h) = (width as f64, height as f64);

    Ok(remap(src, width, height, EdgeMode::Transparent, |x, y| {
        let dx = x as f64 - center;
        let dy = y as f64 - center;

        let sx = dx * cos + dy * sin + src_w / 2.0;
        let sy = -dx * sin + dy * cos + src_h / 2.0;

        // Bounds are checked before truncation: (-1, 0) must not land on column 0
        (sx >= 0.0 && sx < src_w && sy >= 0.0 && sy < src_h).then_some((sx, sy))
    }))
}
