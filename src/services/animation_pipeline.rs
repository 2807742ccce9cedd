use std::io::Write;
use std::path::Path;

use animoji_fx::{AnimationParams, Animator, Image};

use crate::error::AppError;
use crate::rendering::encode_to_vec;
use crate::services::image_loader::{decode_image, load_image};

/// Pipeline that orchestrates decode → animate → encode
pub struct AnimationPipeline {
    animator: Animator,
}

impl AnimationPipeline {
    pub fn new(params: AnimationParams) -> Self {
        Self {
            animator: Animator::from_params(params),
        }
    }

    /// Generate frames sequentially instead of on the thread pool.
    pub fn sequential(mut self) -> Self {
        self.animator = self.animator.parallel(false);
        self
    }

    pub fn params(&self) -> &AnimationParams {
        self.animator.params()
    }

    /// Turn encoded source bytes into GIF bytes.
    pub fn render_bytes(&self, source: &[u8]) -> Result<Vec<u8>, AppError> {
        self.render_image(&decode_image(source)?)
    }

    /// Animate an already decoded image into GIF bytes.
    pub fn render_image(&self, image: &Image) -> Result<Vec<u8>, AppError> {
        let animation = self.animator.render(image)?;
        encode_to_vec(&animation)
    }

    /// Read the source, render it and write the GIF.
    ///
    /// `None` for `input` reads stdin; `None` for `output` writes stdout.
    /// The GIF is fully encoded in memory before anything is written, so a
    /// failed run leaves no output file behind.
    pub fn run(&self, input: Option<&Path>, output: Option<&Path>) -> Result<(), AppError> {
        let image = load_image(input)?;
        let gif = self.render_image(&image)?;

        match output {
            Some(path) => std::fs::write(path, &gif)?,
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(&gif)?;
                stdout.flush()?;
            }
        }

        tracing::info!(bytes = gif.len(), "Wrote animated GIF");
        Ok(())
    }
}
