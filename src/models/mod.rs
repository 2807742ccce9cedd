pub mod config;

pub use config::{AnimationConfig, Overrides};
