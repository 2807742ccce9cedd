pub mod gif_encoder;

pub use gif_encoder::{encode_gif, encode_to_vec};
