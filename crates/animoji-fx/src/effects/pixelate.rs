//! Block-average pixelation.

use super::clock::FrameClock;
use crate::color::Rgba;
use crate::image::Image;

/// Largest block size for an image: a quarter of the shorter side, so the
/// final frame still has at least a 4×4 grid of blocks.
pub fn max_block_size(width: u32, height: u32) -> f64 {
    (width as f64 / 4.0).min(height as f64 / 4.0)
}

/// Block size for a frame, linear from 1 to [`max_block_size`].
pub fn block_size(clock: FrameClock, width: u32, height: u32) -> f64 {
    1.0 + (max_block_size(width, height) - 1.0) * clock.progress()
}

/// Replace each block of `block_size` pixels with the mean of its R, G, B
/// and A channels (integer division).
///
/// Block edges sit at `floor(k * block_size)`, so fractional sizes give
/// blocks that differ by a pixel. A size of 1 or less is a plain copy.
pub fn pixelate(src: &Image, block_size: f64) -> Image {
    if block_size <= 1.0 {
        return src.clone();
    }

    let (width, height) = src.dimensions();
    let blocks_x = (width as f64 / block_size).ceil() as u32;
    let blocks_y = (height as f64 / block_size).ceil() as u32;
    let edge = |k: u32, limit: u32| ((k as f64 * block_size) as u32).min(limit);

    let mut dst = Image::new(width, height);
    for by in 0..blocks_y {
        let (y0, y1) = (edge(by, height), edge(by + 1, height));
        for bx in 0..blocks_x {
            let (x0, x1) = (edge(bx, width), edge(bx + 1, width));

            let mut sum = [0u64; 4];
            let mut count = 0u64;
            for y in y0..y1 {
                for x in x0..x1 {
                    for (acc, channel) in sum.iter_mut().zip(src.pixel(x, y).to_bytes()) {
                        *acc += channel as u64;
                    }
                    count += 1;
                }
            }
            if count == 0 {
                continue;
            }

            let mean = Rgba::from_bytes(sum.map(|s| (s / count) as u8));
            for y in y0..y1 {
                for x in x0..x1 {
                    dst.put(x, y, mean);
                }
            }
        }
    }

    dst
}
