#![allow(clippy::module_inception)]

//! animoji-fx: frame generation for looping animated emoji
//!
//! This library turns one still image into a sequence of palette-indexed
//! frames. Each frame runs an ordered chain of effects over the source, and
//! every frame is quantized against one palette sampled from the source, so
//! the result maps directly onto a GIF with a single global color table.
//!
//! # Quick Start
//!
//! The [`Animator`] builder is the primary entry point:
//!
//! ```
//! use animoji_fx::{Animator, Effect, Image, Rgba};
//!
//! let source = Image::filled(32, 32, Rgba::opaque(0, 128, 255));
//! let animation = Animator::new(vec![Effect::Kaleidoscope, Effect::Hue])
//!     .frame_count(8)
//!     .rate(10)
//!     .render(&source)
//!     .unwrap();
//!
//! assert_eq!(animation.len(), 8);
//! assert_eq!(animation.frames()[0].delay, 10);
//! ```
//!
//! # Effects
//!
//! [`Effect`] is a closed set; each variant is a pure function of the source
//! image and a [`FrameClock`] (frame index and count):
//!
//! - `360` / `360-ccw`: full turn about the center, square images only
//! - `hue`: hue cycle through the color wheel
//! - `zoom`: 1x to 6x into the center
//! - `pixelate`: block mosaic growing to a quarter of the short side
//! - `tint-rgb`: 50% overlay of a cycling rainbow color
//! - `vibes`: per-quarter highlighter tints
//! - `kaleidoscope`: eight mirrored wedges, rotating
//! - `ripple`: radial sine-wave distortion
//!
//! # Sampling
//!
//! Geometric effects use nearest-neighbor inverse mapping (see
//! [`remap`]). Pixels whose source falls outside the image stay
//! transparent, except for ripple and resize, which clamp to the edge.

pub mod api;
pub mod color;
pub mod compose;
pub mod effects;
pub mod image;
pub mod output;
pub mod palette;
pub mod resample;


pub use api::{
    AnimationParams, Animator, FxError, ValidationError, DEFAULT_FRAME_COUNT, DEFAULT_RATE,
};
pub use color::{Hsv, Rgba};
pub use compose::FrameCompositor;
pub use effects::{Effect, FrameClock, ParseEffectError, RotationDirection};
pub use image::{Image, ShapeError, MAX_DIMENSION};
pub use output::{delay_for_rate, Animation, Frame, IndexedFrame};
pub use palette::{Palette, PaletteError};
pub use resample::{remap, resize_to_width, EdgeMode};
