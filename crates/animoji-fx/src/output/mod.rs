//! Output types of the frame pipeline.
//!
//! [`IndexedFrame`] is one quantized frame: palette indices plus a shared
//! handle to the animation palette. [`Animation`] is the ordered sequence of
//! [`Frame`]s, each an indexed frame with its display delay, ready to hand
//! to an encoder.

mod animation;
mod indexed_frame;

pub use animation::{assemble, delay_for_rate, Animation, Frame};
pub use indexed_frame::IndexedFrame;
