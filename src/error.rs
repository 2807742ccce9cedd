use std::path::PathBuf;

use animoji_fx::{FxError, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("GIF encode error: {0}")]
    Encode(#[from] gif::EncodingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(transparent)]
    Fx(#[from] FxError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Image too large for GIF: {width}x{height} (max 65535x65535)")]
    DimensionsTooLarge { width: u32, height: u32 },
}
