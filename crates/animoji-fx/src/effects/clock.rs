//! Per-frame schedule parameters.

use std::f64::consts::TAU;

use crate::api::ValidationError;

/// Position of one frame within the animation.
///
/// `(index, count)` is the only input an effect gets besides the image, so
/// the same image, effect and clock always produce the same output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameClock {
    index: u32,
    count: u32,
}

impl FrameClock {
    /// # Errors
    ///
    /// Returns [`ValidationError::FrameCount`] if `count` is zero and
    /// [`ValidationError::FrameIndex`] if `index >= count`.
    pub fn new(index: u32, count: u32) -> Result<Self, ValidationError> {
        if count == 0 {
            return Err(ValidationError::FrameCount(0));
        }
        if index >= count {
            return Err(ValidationError::FrameIndex { index, count });
        }
        Ok(Self { index, count })
    }

    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Linear progress from the first to the last frame, `0.0..=1.0`.
    ///
    /// `index / (count - 1)`; a single-frame animation stays at 0.
    #[inline]
    pub fn progress(&self) -> f64 {
        if self.count == 1 {
            0.0
        } else {
            self.index as f64 / (self.count - 1) as f64
        }
    }

    /// Fraction of a full cycle, `index / count`, in `[0, 1)`.
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.index as f64 / self.count as f64
    }

    /// Angle of a full cycle in radians, `index * 2π / count`.
    #[inline]
    pub fn turn(&self) -> f64 {
        self.index as f64 * TAU / self.count as f64
    }

    /// Iterate the clocks of every frame of a `count`-frame animation.
    pub fn all(count: u32) -> impl Iterator<Item = FrameClock> + Clone {
        (0..count).map(move |index| FrameClock { index, count })
    }
}
