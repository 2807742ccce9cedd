//! Inverse-mapping geometric resampling.
//!
//! Every geometric effect (rotate, zoom, kaleidoscope, ripple) and the
//! pre-run resize work the same way: for each destination pixel, compute a
//! floating-point source coordinate, truncate it toward zero, and copy the
//! source pixel. What happens when that coordinate falls outside the source
//! is chosen per caller through [`EdgeMode`]; the effects deliberately do
//! not share one policy.

mod resize;
mod sampler;

pub use resize::{resize_to_width, scaled_height};
pub use sampler::{remap, EdgeMode};
