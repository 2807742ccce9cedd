//! Radial ripple distortion.

use super::clock::FrameClock;
use crate::image::Image;
use crate::resample::{remap, EdgeMode};

/// Maximum radial displacement in pixels.
pub const AMPLITUDE: f64 = 5.0;
/// Wave frequency in radians per pixel of distance.
pub const FREQUENCY: f64 = 0.1;

/// Wave phase in radians for a frame: `index * 2π / count`.
pub fn ripple_phase(clock: FrameClock) -> f64 {
    clock.turn()
}

/// Radial displacement at `distance` from the center.
#[inline]
pub fn displacement(distance: f64, phase: f64) -> f64 {
    AMPLITUDE * (distance * FREQUENCY - phase).sin()
}

/// Push every pixel in or out along its ray from the center by a sine wave
/// of its distance.
///
/// Unlike the other geometric effects, sources that fall outside the image
/// are clamped to the nearest edge pixel, so the output has no holes.
pub fn ripple(src: &Image, phase: f64) -> Image {
    let (width, height) = src.dimensions();
    let cx = width as f64 / 2.0;
    let cy = height as f64 / 2.0;

    remap(src, width, height, EdgeMode::Clamp, |x, y| {
        let dx = x as f64 - cx;
        let dy = y as f64 - cy;
        let distance = (dx * dx + dy * dy).sqrt();
        let angle = dy.atan2(dx);

        let displaced = distance + displacement(distance, phase);
        Some((cx + displaced * angle.cos(), cy + displaced * angle.sin()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_displacement_bounds() {
        for d in 0..200 {
            let value = displacement(d as f64, 1.3);
            assert!(value.abs() <= AMPLITUDE + 1e-12);
        }
        assert_eq!(displacement(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_opaque_input_has_no_holes() {
        let src = Image::from_fn(20, 14, |x, y| Rgba::opaque(x as u8 * 10, y as u8 * 10, 99));
        for phase in [0.0, 1.0, 3.0, 5.5] {
            let dst = ripple(&src, phase);
            assert!(
                dst.pixels().iter().all(|p| p.a == 255),
                "phase {phase} left a transparent pixel"
            );
        }
    }

    #[test]
    fn test_solid_image_unchanged() {
        let src = Image::filled(9, 9, Rgba::opaque(1, 2, 3));
        assert_eq!(ripple(&src, 2.0), src);
    }

    #[test]
    fn test_phase_changes_output() {
        let src = Image::from_fn(32, 32, |x, y| Rgba::opaque(x as u8 * 8, y as u8 * 8, 0));
        assert_ne!(ripple(&src, 0.0), ripple(&src, std::f64::consts::PI));
    }
}
