//! Palette types and utilities
//!
//! This module provides the shared animation palette: sampled once from the
//! source image, then used unchanged to quantize every frame.

mod error;
mod palette;

pub use error::PaletteError;
pub use palette::{Palette, MAX_COLORS, SAMPLE_STEP};
