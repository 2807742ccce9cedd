//! Per-frame effect chaining and quantization.

mod compositor;

pub use compositor::FrameCompositor;
