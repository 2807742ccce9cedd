pub mod animation_pipeline;
pub mod image_loader;

pub use animation_pipeline::AnimationPipeline;
pub use image_loader::{decode_image, load_image, read_source};
