//! Public API: parameter validation, the [`Animator`] builder and the
//! unified error type.

mod builder;
mod error;
mod params;

pub use builder::Animator;
pub use error::{FxError, ValidationError};
pub use params::{AnimationParams, DEFAULT_FRAME_COUNT, DEFAULT_RATE};
