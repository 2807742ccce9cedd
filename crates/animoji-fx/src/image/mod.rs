//! In-memory RGBA image buffers.
//!
//! [`Image`] is the value threaded through every effect. Effects take a
//! borrowed source and return a freshly allocated destination; nothing in
//! the pipeline mutates an image that another stage can still observe.

mod buffer;
mod error;

pub use buffer::{Image, MAX_DIMENSION};
pub(crate) use buffer::check_dimensions;
pub use error::ShapeError;
