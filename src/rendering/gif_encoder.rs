//! Animated GIF encoding.
//!
//! The animation already carries everything a GIF needs: one shared palette
//! (written as the global color table) and per-frame palette indices, so
//! frames are written as-is with no further quantization.

use std::borrow::Cow;
use std::io::Write;

use animoji_fx::Animation;

use crate::error::AppError;

/// Encode `animation` as an infinitely looping GIF into `writer`, returning
/// the writer once the trailer is written.
///
/// The palette's first fully transparent entry, if any, becomes the
/// transparent index of every frame, and frames are disposed to background
/// so transparent areas do not show the previous frame.
pub fn encode_gif<W: Write>(animation: &Animation, writer: W) -> Result<W, AppError> {
    let (width, height) = (animation.width(), animation.height());
    let too_large = || AppError::DimensionsTooLarge { width, height };
    let gif_width = u16::try_from(width).map_err(|_| too_large())?;
    let gif_height = u16::try_from(height).map_err(|_| too_large())?;

    let palette = animation.palette();
    let transparent = palette.transparent_index();
    let dispose = if transparent.is_some() {
        gif::DisposalMethod::Background
    } else {
        gif::DisposalMethod::Keep
    };

    let mut encoder = gif::Encoder::new(writer, gif_width, gif_height, &palette.to_rgb_bytes())?;
    encoder.set_repeat(gif::Repeat::Infinite)?;

    for frame in animation.frames() {
        let gif_frame = gif::Frame {
            width: gif_width,
            height: gif_height,
            delay: frame.delay,
            transparent,
            dispose,
            buffer: Cow::Borrowed(frame.image.indices()),
            ..Default::default()
        };
        encoder.write_frame(&gif_frame)?;
    }

    tracing::debug!(
        frames = animation.len(),
        width,
        height,
        colors = palette.len(),
        "Encoded GIF"
    );

    Ok(encoder.into_inner()?)
}

/// Encode `animation` into an in-memory GIF.
pub fn encode_to_vec(animation: &Animation) -> Result<Vec<u8>, AppError> {
    encode_gif(animation, Vec::new())
}
