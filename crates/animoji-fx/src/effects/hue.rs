//! Hue cycling.

use super::clock::FrameClock;
use crate::color::Hsv;
use crate::image::Image;

/// Hue shift in degrees for a frame: `index * 360 / count`.
pub fn hue_shift_degrees(clock: FrameClock) -> f64 {
    clock.fraction() * 360.0
}

/// Rotate the hue of every pixel by `degrees`, keeping saturation, value
/// and alpha.
pub fn shift_hue(src: &Image, degrees: f64) -> Image {
    src.map_pixels(|px| px.with_rgb(Hsv::from(px).shift_hue(degrees).to_rgb()))
}
