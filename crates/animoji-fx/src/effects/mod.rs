//! The closed set of per-frame effects.
//!
//! Every effect is a pure function of the source image and a [`FrameClock`].
//! [`Effect`] names one of them and dispatches to it; the per-effect modules
//! hold the parameter schedules and pixel rules so they can be used and
//! tested on their own.

mod clock;
mod hue;
mod kaleidoscope;
mod pixelate;
mod ripple;
mod rotate;
mod tint;
mod vibes;
mod zoom;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::image::{Image, ShapeError};

pub use clock::FrameClock;
pub use hue::{hue_shift_degrees, shift_hue};
pub use kaleidoscope::{fold_angle, kaleidoscope, kaleidoscope_rotation, SEGMENTS};
pub use pixelate::{block_size, max_block_size, pixelate};
pub use ripple::{displacement, ripple, ripple_phase, AMPLITUDE, FREQUENCY};
pub use rotate::{rotate, rotation_angle, RotationDirection};
pub use tint::{tint, tint_hue, TINT_OPACITY};
pub use vibes::{highlighter_for, quarter_of, vibes, HIGHLIGHTERS};
pub use zoom::{zoom, zoom_factor, MAX_ZOOM, MIN_ZOOM};

/// An effect name that is not in [`Effect::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown effect: {0}")]
pub struct ParseEffectError(pub String);

/// One named per-frame transform.
///
/// # Example
///
/// ```
/// use animoji_fx::{Effect, FrameClock, Image, Rgba};
///
/// let effect: Effect = "hue".parse().unwrap();
/// let src = Image::filled(4, 4, Rgba::opaque(255, 0, 0));
/// let frame = effect.apply(&src, FrameClock::new(2, 4).unwrap()).unwrap();
///
/// // Half a turn around the hue wheel: red becomes cyan
/// assert_eq!(frame.pixel(0, 0), Rgba::opaque(0, 255, 255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Full turn about the center (`360`, or `360-ccw` anticlockwise).
    Rotate(RotationDirection),
    /// Hue cycle through the full color wheel (`hue`).
    Hue,
    /// Zoom from 1x to 6x into the center (`zoom`).
    Zoom,
    /// Growing block mosaic (`pixelate`).
    Pixelate,
    /// 50% overlay of a cycling rainbow color (`tint-rgb`).
    TintRgb,
    /// Per-quarter highlighter tints (`vibes`).
    Vibes,
    /// Rotating eight-way mirror (`kaleidoscope`).
    Kaleidoscope,
    /// Radial sine-wave distortion (`ripple`).
    Ripple,
}

impl Effect {
    /// Every effect, in the order the CLI lists them.
    pub const ALL: [Effect; 9] = [
        Effect::Rotate(RotationDirection::Clockwise),
        Effect::Rotate(RotationDirection::Anticlockwise),
        Effect::Hue,
        Effect::Zoom,
        Effect::Pixelate,
        Effect::TintRgb,
        Effect::Vibes,
        Effect::Kaleidoscope,
        Effect::Ripple,
    ];

    /// Command-line name of the effect.
    pub fn name(self) -> &'static str {
        match self {
            Effect::Rotate(RotationDirection::Clockwise) => "360",
            Effect::Rotate(RotationDirection::Anticlockwise) => "360-ccw",
            Effect::Hue => "hue",
            Effect::Zoom => "zoom",
            Effect::Pixelate => "pixelate",
            Effect::TintRgb => "tint-rgb",
            Effect::Vibes => "vibes",
            Effect::Kaleidoscope => "kaleidoscope",
            Effect::Ripple => "ripple",
        }
    }

    /// One-line help text.
    pub fn description(self) -> &'static str {
        match self {
            Effect::Rotate(RotationDirection::Clockwise) => {
                "rotate a full turn clockwise (square images only)"
            }
            Effect::Rotate(RotationDirection::Anticlockwise) => {
                "rotate a full turn anticlockwise (square images only)"
            }
            Effect::Hue => "cycle the hue through the color wheel",
            Effect::Zoom => "zoom from 1x to 6x into the center",
            Effect::Pixelate => "grow a block mosaic up to a quarter of the image",
            Effect::TintRgb => "overlay a rainbow color at 50% opacity",
            Effect::Vibes => "tint each quarter with a rotating highlighter color",
            Effect::Kaleidoscope => "mirror eight rotating wedges around the center",
            Effect::Ripple => "push pixels in and out with a radial wave",
        }
    }

    /// Whether the effect rejects images with `width != height`.
    pub fn requires_square(self) -> bool {
        matches!(self, Effect::Rotate(_))
    }

    /// Parse an ordered chain of effect names.
    ///
    /// All names are checked before anything else happens; the first unknown
    /// one is reported.
    pub fn parse_chain<I, S>(names: I) -> Result<Vec<Effect>, ParseEffectError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().map(|name| name.as_ref().parse()).collect()
    }

    /// Transform `src` for the frame described by `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NotSquare`] when a rotation is applied to a
    /// non-square image. No other effect fails.
    pub fn apply(self, src: &Image, clock: FrameClock) -> Result<Image, ShapeError> {
        let (width, height) = src.dimensions();
        let out = match self {
            Effect::Rotate(direction) => rotate(src, rotation_angle(clock, direction))?,
            Effect::Hue => shift_hue(src, hue_shift_degrees(clock)),
            Effect::Zoom => zoom(src, zoom_factor(clock)),
            Effect::Pixelate => pixelate(src, block_size(clock, width, height)),
            Effect::TintRgb => tint(src, tint_hue(clock)),
            Effect::Vibes => vibes(src, clock.index()),
            Effect::Kaleidoscope => kaleidoscope(src, kaleidoscope_rotation(clock)),
            Effect::Ripple => ripple(src, ripple_phase(clock)),
        };
        Ok(out)
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Effect {
    type Err = ParseEffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Effect::ALL
            .into_iter()
            .find(|effect| effect.name() == s)
            .ok_or_else(|| ParseEffectError(s.to_string()))
    }
}
