//! Rotating eight-way kaleidoscope.

use std::f64::consts::TAU;

use super::clock::FrameClock;
use crate::image::Image;
use crate::resample::{remap, EdgeMode};

/// Number of mirrored wedges around the center.
pub const SEGMENTS: u32 = 8;

/// Pattern rotation in radians for a frame: `index * 2π / count`.
pub fn kaleidoscope_rotation(clock: FrameClock) -> f64 {
    clock.turn()
}

/// Fold an angle into the first half-wedge `[0, π / SEGMENTS]`, mirroring
/// the second half of each wedge back onto the first.
#[inline]
pub fn fold_angle(angle: f64) -> f64 {
    let wedge = TAU / SEGMENTS as f64;
    let mut folded = angle % wedge;
    if folded < 0.0 {
        folded += wedge;
    }
    if folded > wedge / 2.0 {
        folded = wedge - folded;
    }
    folded
}

/// Mirror one wedge of `src` around the center into all [`SEGMENTS`]
/// wedges, with the pattern turned by `rotation`.
///
/// Distance from the center is preserved, so destination pixels further
/// out than the source reaches (the corners) stay transparent.
pub fn kaleidoscope(src: &Image, rotation: f64) -> Image {
    let (width, height) = src.dimensions();
    let cx = width as f64 / 2.0;
    let cy = height as f64 / 2.0;

    remap(src, width, height, EdgeMode::Transparent, |x, y| {
        let dx = x as f64 - cx;
        let dy = y as f64 - cy;

        let angle = dy.atan2(dx) + rotation;
        let distance = (dx * dx + dy * dy).sqrt();

        let source_angle = fold_angle(angle) - rotation;
        Some((
            cx + distance * source_angle.cos(),
            cy + distance * source_angle.sin(),
        ))
    })
}
