//! Zoom into the image center.

use super::clock::FrameClock;
use crate::image::Image;
use crate::resample::{remap, EdgeMode};

/// Zoom factor of the first frame.
pub const MIN_ZOOM: f64 = 1.0;
/// Zoom factor of the last frame.
pub const MAX_ZOOM: f64 = 6.0;

/// Zoom factor for a frame, linear from [`MIN_ZOOM`] to [`MAX_ZOOM`].
pub fn zoom_factor(clock: FrameClock) -> f64 {
    MIN_ZOOM + (MAX_ZOOM - MIN_ZOOM) * clock.progress()
}

/// Magnify the center of `src` by `factor`.
///
/// The sampled window is the full source shrunk by `1 / factor` around its
/// center, stretched over the whole destination. A factor of 1 or less is
/// a plain copy.
pub fn zoom(src: &Image, factor: f64) -> Image {
    if factor <= 1.0 {
        return src.clone();
    }

    let (width, height) = src.dimensions();
    let (w, h) = (width as f64, height as f64);

    let region_w = w / factor;
    let region_h = h / factor;
    let min_x = w / 2.0 - region_w / 2.0;
    let min_y = h / 2.0 - region_h / 2.0;

    remap(src, width, height, EdgeMode::Transparent, |x, y| {
        Some((
            min_x + (x as f64 / w) * region_w,
            min_y + (y as f64 / h) * region_h,
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_schedule_endpoints() {
        assert_eq!(zoom_factor(FrameClock::new(0, 6).unwrap()), 1.0);
        assert_eq!(zoom_factor(FrameClock::new(5, 6).unwrap()), 6.0);
        assert_eq!(zoom_factor(FrameClock::new(0, 1).unwrap()), 1.0);
    }

    #[test]
    fn test_factor_one_copies() {
        let src = Image::from_fn(5, 4, |x, y| Rgba::opaque(x as u8, y as u8, 1));
        assert_eq!(zoom(&src, 1.0), src);
    }

    #[test]
    fn test_max_zoom_fills_with_center() {
        let red = Rgba::opaque(255, 0, 0);
        // 12x12 at 6x samples the window [5, 7) in both axes
        let src = Image::from_fn(12, 12, |x, y| {
            if (5..7).contains(&x) && (5..7).contains(&y) {
                red
            } else {
                Rgba::opaque(0, 0, 255)
            }
        });
        let dst = zoom(&src, 6.0);
        assert!(dst.pixels().iter().all(|&p| p == red));
    }

    #[test]
    fn test_double_zoom_samples_middle_half() {
        let src = Image::from_fn(8, 8, |x, y| Rgba::opaque(x as u8, y as u8, 0));
        let dst = zoom(&src, 2.0);
        assert_eq!(dst.pixel(0, 0), Rgba::opaque(2, 2, 0));
        assert_eq!(dst.pixel(7, 7), Rgba::opaque(5, 5, 0));
    }
}
