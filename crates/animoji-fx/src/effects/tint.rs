//! Cycling color tint layer.

use super::clock::FrameClock;
use crate::color::Hsv;
use crate::image::Image;

/// Opacity of the tint layer over the source.
pub const TINT_OPACITY: f64 = 0.5;

/// Hue of the tint color for a frame: `index * 360 / count`.
pub fn tint_hue(clock: FrameClock) -> f64 {
    clock.fraction() * 360.0
}

/// Blend a fully saturated, full-value color of the given hue over every
/// pixel at [`TINT_OPACITY`]. Alpha is unchanged.
pub fn tint(src: &Image, hue: f64) -> Image {
    let overlay = Hsv::new(hue, 1.0, 1.0).to_rgb();
    src.map_pixels(|px| px.blend_rgb(overlay, TINT_OPACITY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_black_takes_half_tint() {
        let src = Image::filled(2, 1, Rgba::new(0, 0, 0, 255));
        assert_eq!(tint(&src, 0.0).pixel(0, 0), Rgba::opaque(127, 0, 0));
        assert_eq!(tint(&src, 120.0).pixel(1, 0), Rgba::opaque(0, 127, 0));
    }

    #[test]
    fn test_alpha_untouched() {
        let src = Image::filled(1, 1, Rgba::new(200, 100, 50, 33));
        let dst = tint(&src, 240.0);
        // 200/2 + 0 = 100, 100/2 = 50, 50/2 + 255/2 = 152.5 -> 152
        assert_eq!(dst.pixel(0, 0), Rgba::new(100, 50, 152, 33));
    }

    #[test]
    fn test_schedule_matches_hue_cycle() {
        let clock = FrameClock::new(2, 8).unwrap();
        assert_eq!(tint_hue(clock), 90.0);
        assert_eq!(tint_hue(FrameClock::new(0, 8).unwrap()), 0.0);
    }
}
