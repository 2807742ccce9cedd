//! Error types for the animoji-fx public API.
//!
//! [`ValidationError`] covers bad run parameters and is always raised before
//! any image work. [`FxError`] wraps every error the crate can return for
//! convenient `?` propagation in application code.

use thiserror::Error;

use crate::effects::ParseEffectError;
use crate::image::ShapeError;
use crate::palette::PaletteError;

/// Run parameters that cannot produce an animation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("frame count must be positive (got {0})")]
    FrameCount(i64),

    #[error("frame rate must be positive (got {0})")]
    Rate(i64),

    #[error("resize width must not be negative (got {0})")]
    ResizeWidth(i64),

    /// The value is valid in sign but does not fit the pixel pipeline.
    #[error("{field} is out of range (got {value})")]
    OutOfRange { field: &'static str, value: i64 },

    #[error("frame index {index} is outside a {count}-frame animation")]
    FrameIndex { index: u32, count: u32 },

    #[error(transparent)]
    UnknownEffect(#[from] ParseEffectError),

    #[error("at least one effect is required")]
    NoEffects,
}

/// Unified error type for the animoji-fx public API.
///
/// # Example
///
/// ```
/// use animoji_fx::{Animator, Effect, FxError, Image, RotationDirection};
///
/// fn spin(image: &Image) -> Result<usize, FxError> {
///     let animation = Animator::new(vec![Effect::Rotate(RotationDirection::Clockwise)])
///         .frame_count(4)
///         .render(image)?;
///     Ok(animation.len())
/// }
///
/// assert_eq!(spin(&Image::new(8, 8)).unwrap(), 4);
/// assert!(matches!(spin(&Image::new(8, 4)), Err(FxError::Shape(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FxError {
    #[error("invalid parameters: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Shape(#[from] ShapeError),

    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),
}
