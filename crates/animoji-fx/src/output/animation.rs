//! Frame sequence assembly.

use std::sync::Arc;

use super::IndexedFrame;
use crate::palette::Palette;

/// Display delay in hundredths of a second for `rate` frames per second.
///
/// `round(100 / rate)`, halves rounded away from zero. `rate` must be
/// positive; the parameter bundle guarantees it.
///
/// ```
/// use animoji_fx::delay_for_rate;
///
/// assert_eq!(delay_for_rate(6), 17);
/// assert_eq!(delay_for_rate(8), 13);
/// ```
pub fn delay_for_rate(rate: u32) -> u16 {
    debug_assert!(rate > 0, "rate must be positive");
    (100.0 / rate as f64).round() as u16
}

/// One frame of the animation and how long it is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub image: IndexedFrame,
    /// Hundredths of a second.
    pub delay: u16,
}

/// An ordered, fully rendered animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
    frames: Vec<Frame>,
    palette: Arc<Palette>,
    width: u32,
    height: u32,
}

impl Animation {
    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The palette shared by every frame; the GIF global color table.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reverse the playback order. Frame contents and delays are untouched,
    /// so reversing twice restores the original animation.
    pub fn reverse(&mut self) {
        self.frames.reverse();
    }

    /// Consume the animation, yielding its frames in playback order.
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}

/// Collect frames in generation order and give each the delay for `rate`,
/// reversing the sequence when asked.
pub fn assemble(
    images: Vec<IndexedFrame>,
    palette: Arc<Palette>,
    width: u32,
    height: u32,
    rate: u32,
    reverse: bool,
) -> Animation {
    let delay = delay_for_rate(rate);
    let frames = images
        .into_iter()
        .map(|image| Frame { image, delay })
        .collect();

    let mut animation = Animation {
        frames,
        palette,
        width,
        height,
    };
    if reverse {
        animation.reverse();
    }

    tracing::debug!(frames = animation.len(), delay, reverse, "Assembled animation");
    animation
}
