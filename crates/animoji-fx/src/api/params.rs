//! Validated parameter bundle for one animation run.

use super::error::ValidationError;
use crate::effects::Effect;
use crate::image::MAX_DIMENSION;

/// Frames generated when the caller does not say.
pub const DEFAULT_FRAME_COUNT: u32 = 12;
/// Frames per second when the caller does not say.
pub const DEFAULT_RATE: u32 = 6;

/// Everything a run needs besides the source image.
///
/// Construct with [`AnimationParams::from_raw`] when the values come from
/// outside the program (command line, config file): it checks signs and
/// ranges and resolves effect names. [`validate`](Self::validate) re-checks
/// a bundle built field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationParams {
    /// Effect chain, applied in order to every frame.
    pub effects: Vec<Effect>,
    pub frame_count: u32,
    /// Frames per second.
    pub rate: u32,
    pub reverse: bool,
    /// Target width of the pre-run resize; 0 keeps the source size.
    pub resize_width: u32,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            effects: Vec::new(),
            frame_count: DEFAULT_FRAME_COUNT,
            rate: DEFAULT_RATE,
            reverse: false,
            resize_width: 0,
        }
    }
}

impl AnimationParams {
    /// Validate raw values and resolve effect names.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::UnknownEffect`] for the first unrecognised name
    /// - [`ValidationError::FrameCount`] if `frame_count <= 0`
    /// - [`ValidationError::Rate`] if `rate <= 0`
    /// - [`ValidationError::ResizeWidth`] if `resize_width < 0`
    /// - [`ValidationError::OutOfRange`] if a value does not fit in `u32`, or
    ///   `resize_width` exceeds [`MAX_DIMENSION`]
    ///
    /// # Example
    ///
    /// ```
    /// use animoji_fx::{AnimationParams, Effect, ValidationError};
    ///
    /// let params = AnimationParams::from_raw(["hue", "ripple"], 8, 10, false, 0).unwrap();
    /// assert_eq!(params.effects, vec![Effect::Hue, Effect::Ripple]);
    ///
    /// let err = AnimationParams::from_raw(["hue"], 0, 10, false, 0).unwrap_err();
    /// assert_eq!(err, ValidationError::FrameCount(0));
    /// ```
    pub fn from_raw<I, S>(
        names: I,
        frame_count: i64,
        rate: i64,
        reverse: bool,
        resize_width: i64,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let effects = Effect::parse_chain(names)?;

        if frame_count <= 0 {
            return Err(ValidationError::FrameCount(frame_count));
        }
        if rate <= 0 {
            return Err(ValidationError::Rate(rate));
        }
        if resize_width < 0 {
            return Err(ValidationError::ResizeWidth(resize_width));
        }
        if resize_width > i64::from(MAX_DIMENSION) {
            return Err(ValidationError::OutOfRange {
                field: "resize",
                value: resize_width,
            });
        }

        Ok(Self {
            effects,
            frame_count: fit_u32("frames", frame_count)?,
            rate: fit_u32("rate", rate)?,
            reverse,
            resize_width: fit_u32("resize", resize_width)?,
        })
    }

    /// Re-check the invariants `from_raw` establishes.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.frame_count == 0 {
            return Err(ValidationError::FrameCount(0));
        }
        if self.rate == 0 {
            return Err(ValidationError::Rate(0));
        }
        if self.resize_width > MAX_DIMENSION {
            return Err(ValidationError::OutOfRange {
                field: "resize",
                value: i64::from(self.resize_width),
            });
        }
        Ok(())
    }

    /// Whether the source is resized before the palette is built.
    #[inline]
    pub fn resizes(&self) -> bool {
        self.resize_width > 0
    }
}

fn fit_u32(field: &'static str, value: i64) -> Result<u32, ValidationError> {
    u32::try_from(value).map_err(|_| ValidationError::OutOfRange { field, value })
}
