//! HSV color model
//!
//! Hue in degrees `[0, 360)`, saturation and value in `[0, 1]`. Used by the
//! hue-cycle effect (shift the hue of every pixel) and the tint effect
//! (derive a fully saturated tint color from a hue).

use super::rgba::Rgba;

/// A color in HSV space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees, `0.0..360.0`. Zero for achromatic colors.
    pub h: f64,
    /// Saturation, `0.0..=1.0`.
    pub s: f64,
    /// Value (brightness), `0.0..=1.0`.
    pub v: f64,
}

impl Hsv {
    #[inline]
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Convert 8-bit RGB channels to HSV.
    ///
    /// Uses the max/min/delta formulation. Hue is defined as 0 when the
    /// color is achromatic (delta = 0).
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let rf = r as f64 / 255.0;
        let gf = g as f64 / 255.0;
        let bf = b as f64 / 255.0;

        let max = rf.max(gf).max(bf);
        let min = rf.min(gf).min(bf);
        let delta = max - min;

        let s = if max == 0.0 { 0.0 } else { delta / max };

        let mut h = if delta == 0.0 {
            0.0
        } else if max == rf {
            60.0 * ((gf - bf) / delta + 6.0).rem_euclid(6.0)
        } else if max == gf {
            60.0 * ((bf - rf) / delta + 2.0)
        } else {
            60.0 * ((rf - gf) / delta + 4.0)
        };
        if h < 0.0 {
            h += 360.0;
        }

        Self { h, s, v: max }
    }

    /// Convert back to 8-bit RGB, rounding each channel to the nearest
    /// integer.
    ///
    /// # Example
    /// ```
    /// use animoji_fx::Hsv;
    /// assert_eq!(Hsv::new(240.0, 1.0, 1.0).to_rgb(), [0, 0, 255]);
    /// ```
    pub fn to_rgb(self) -> [u8; 3] {
        let Hsv { h, s, v } = self;
        let c = v * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = v - c;

        let (rf, gf, bf) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        let channel = |f: f64| ((f + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        [channel(rf), channel(gf), channel(bf)]
    }

    /// Rotate the hue by `degrees`, wrapping into `[0, 360)`.
    pub fn shift_hue(self, degrees: f64) -> Self {
        let mut h = (self.h + degrees) % 360.0;
        if h < 0.0 {
            h += 360.0;
        }
        Self { h, ..self }
    }
}

impl From<Rgba> for Hsv {
    /// Alpha is ignored.
    fn from(color: Rgba) -> Self {
        Self::from_rgb(color.r, color.g, color.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hue_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).abs() % 360.0;
        d.min(360.0 - d)
    }

    #[test]
    fn test_primary_colors() {
        let red = Hsv::from_rgb(255, 0, 0);
        assert_eq!((red.h, red.s, red.v), (0.0, 1.0, 1.0));

        let green = Hsv::from_rgb(0, 255, 0);
        assert_eq!(green.h, 120.0);

        let blue = Hsv::from_rgb(0, 0, 255);
        assert_eq!(blue.h, 240.0);
    }

    #[test]
    fn test_achromatic_hue_is_zero() {
        for v in [0u8, 1, 128, 254, 255] {
            let grey = Hsv::from_rgb(v, v, v);
            assert_eq!(grey.h, 0.0, "grey {v} should have hue 0");
            assert_eq!(grey.s, 0.0, "grey {v} should have saturation 0");
        }
        assert_eq!(Hsv::from_rgb(0, 0, 0).v, 0.0);
    }

    #[test]
    fn test_sector_boundaries_invert_exactly() {
        let expected: [(f64, [u8; 3]); 6] = [
            (0.0, [255, 0, 0]),
            (60.0, [255, 255, 0]),
            (120.0, [0, 255, 0]),
            (180.0, [0, 255, 255]),
            (240.0, [0, 0, 255]),
            (300.0, [255, 0, 255]),
        ];

        for (h, rgb) in expected {
            assert_eq!(Hsv::new(h, 1.0, 1.0).to_rgb(), rgb, "hue {h}");
            let back = Hsv::from_rgb(rgb[0], rgb[1], rgb[2]);
            assert_eq!(back.h, h, "rgb {rgb:?} should map back to hue {h}");
            assert_eq!(back.s, 1.0);
            assert_eq!(back.v, 1.0);
        }
    }

    #[test]
    fn test_to_rgb_rounds_not_truncates() {
        // 90 degrees: x = 0.5 -> 127.5 rounds up to 128
        assert_eq!(Hsv::new(90.0, 1.0, 1.0).to_rgb(), [128, 255, 0]);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        for step in 0..24 {
            let h = step as f64 * 15.0;
            for &s in &[0.5, 0.75, 1.0] {
                for &v in &[0.5, 0.75, 1.0] {
                    let rgb = Hsv::new(h, s, v).to_rgb();
                    let back = Hsv::from_rgb(rgb[0], rgb[1], rgb[2]);
                    assert!(
                        hue_distance(back.h, h) < 1.5,
                        "hue drifted: ({h}, {s}, {v}) -> {rgb:?} -> {}",
                        back.h
                    );
                    assert!((back.s - s).abs() < 0.01, "saturation drifted for {h}/{s}/{v}");
                    assert!((back.v - v).abs() < 0.01, "value drifted for {h}/{s}/{v}");
                }
            }
        }
    }

    #[test]
    fn test_shift_hue_wraps() {
        let hsv = Hsv::new(300.0, 1.0, 1.0);
        assert_eq!(hsv.shift_hue(90.0).h, 30.0);
        assert_eq!(hsv.shift_hue(-330.0).h, 330.0);
        assert_eq!(hsv.shift_hue(60.0).h, 0.0);
    }

    #[test]
    fn test_from_rgba_ignores_alpha() {
        let opaque = Hsv::from(Rgba::opaque(10, 200, 30));
        let clear = Hsv::from(Rgba::new(10, 200, 30, 0));
        assert_eq!(opaque, clear);
    }
}
