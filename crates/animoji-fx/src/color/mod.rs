//! Color types and conversion utilities
//!
//! This module provides the 8-bit RGBA pixel type used by every image
//! buffer in the crate, and the HSV model used by the hue and tint effects.
//!
//! # Example
//!
//! ```
//! use animoji_fx::{Hsv, Rgba};
//!
//! let red = Rgba::opaque(255, 0, 0);
//! let hsv = Hsv::from(red);
//! assert_eq!(hsv.h, 0.0);
//!
//! // Rotate the hue by 120 degrees to land on green
//! let green = hsv.shift_hue(120.0).to_rgb();
//! assert_eq!(green, [0, 255, 0]);
//! ```

mod hsv;
mod rgba;

pub use hsv::Hsv;
pub use rgba::Rgba;
