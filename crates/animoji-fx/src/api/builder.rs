//! Animator builder -- the primary entry point for the crate.
//!
//! [`Animator`] wraps the whole frame pipeline (resize, palette, per-frame
//! effect chain, quantization, assembly) behind a fluent builder.

use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::error::FxError;
use super::params::AnimationParams;
use crate::compose::FrameCompositor;
use crate::effects::{Effect, FrameClock};
use crate::image::{check_dimensions, Image, ShapeError};
use crate::output::{assemble, Animation, IndexedFrame};
use crate::palette::Palette;
use crate::resample::resize_to_width;

/// High-level builder that turns one still image into an [`Animation`].
///
/// # Design
///
/// - Configuration methods consume and return `self`
/// - [`render()`](Self::render) takes `&self`, so one animator can render
///   many images
/// - Frames are generated on the rayon pool when the `parallel` feature is
///   enabled; the output is identical to the sequential path
///
/// # Example
///
/// ```
/// use animoji_fx::{Animator, Effect, Image, Rgba};
///
/// let source = Image::filled(16, 16, Rgba::opaque(255, 0, 0));
/// let animation = Animator::new(vec![Effect::Hue])
///     .frame_count(4)
///     .rate(2)
///     .render(&source)
///     .unwrap();
///
/// assert_eq!(animation.len(), 4);
/// assert!(animation.frames().iter().all(|f| f.delay == 50));
/// ```
#[derive(Debug, Clone)]
pub struct Animator {
    params: AnimationParams,
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    parallel: bool,
}

impl Animator {
    /// Create an animator for an effect chain with the default frame count
    /// (12), rate (6 fps), no reversal and no resize.
    pub fn new(effects: Vec<Effect>) -> Self {
        Self::from_params(AnimationParams {
            effects,
            ..AnimationParams::default()
        })
    }

    /// Create an animator from an already validated parameter bundle.
    pub fn from_params(params: AnimationParams) -> Self {
        Self {
            params,
            parallel: cfg!(feature = "parallel"),
        }
    }

    #[inline]
    pub fn frame_count(mut self, count: u32) -> Self {
        self.params.frame_count = count;
        self
    }

    /// Set frames per second.
    #[inline]
    pub fn rate(mut self, rate: u32) -> Self {
        self.params.rate = rate;
        self
    }

    /// Play the frames last to first.
    #[inline]
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.params.reverse = reverse;
        self
    }

    /// Resize the source to `width` columns before rendering; 0 disables.
    #[inline]
    pub fn resize_width(mut self, width: u32) -> Self {
        self.params.resize_width = width;
        self
    }

    /// Generate frames concurrently. Has no effect without the `parallel`
    /// feature.
    #[inline]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    #[inline]
    pub fn params(&self) -> &AnimationParams {
        &self.params
    }

    /// Render `source` into a complete animation.
    ///
    /// Parameters and the image shape are checked before the first frame is
    /// generated, so a failed run produces nothing.
    ///
    /// # Errors
    ///
    /// - [`FxError::Validation`] for a zero frame count or rate, or a resize
    ///   width above [`MAX_DIMENSION`](crate::image::MAX_DIMENSION)
    /// - [`FxError::Shape`] when a rotation is requested on a non-square
    ///   image, a resize is requested on an empty one, or the frame size
    ///   exceeds [`MAX_DIMENSION`](crate::image::MAX_DIMENSION)
    pub fn render(&self, source: &Image) -> Result<Animation, FxError> {
        let params = &self.params;
        params.validate()?;

        let resized;
        let base = if params.resizes() {
            resized = resize_to_width(source, params.resize_width)?;
            &resized
        } else {
            source
        };

        let (width, height) = base.dimensions();
        check_dimensions(width, height)?;
        if !base.is_square() && params.effects.iter().any(|e| e.requires_square()) {
            return Err(ShapeError::NotSquare { width, height }.into());
        }

        let palette = Arc::new(Palette::sample(base)?);
        let compositor = FrameCompositor::new(params.effects.clone());

        let frames = self.render_frames(&compositor, base, &palette)?;

        tracing::info!(
            effects = %display_chain(&params.effects),
            frames = frames.len(),
            width,
            height,
            colors = palette.len(),
            "Rendered animation"
        );

        Ok(assemble(
            frames,
            palette,
            width,
            height,
            params.rate,
            params.reverse,
        ))
    }

    fn render_frames(
        &self,
        compositor: &FrameCompositor,
        base: &Image,
        palette: &Arc<Palette>,
    ) -> Result<Vec<IndexedFrame>, ShapeError> {
        let clocks: Vec<FrameClock> = FrameClock::all(self.params.frame_count).collect();

        #[cfg(feature = "parallel")]
        if self.parallel {
            return clocks
                .par_iter()
                .map(|&clock| compositor.render(base, clock, palette))
                .collect();
        }

        clocks
            .iter()
            .map(|&clock| compositor.render(base, clock, palette))
            .collect()
    }
}

fn display_chain(effects: &[Effect]) -> String {
    effects
        .iter()
        .map(|effect| effect.name())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ValidationError;
    use crate::color::Rgba;
    use crate::effects::RotationDirection;

    fn gradient(width: u32, height: u32) -> Image {
        Image::from_fn(width, height, |x, y| {
            Rgba::opaque((x * 13) as u8, (y * 29) as u8, ((x + y) * 7) as u8)
        })
    }

    #[test]
    fn test_defaults() {
        let animator = Animator::new(vec![Effect::Zoom]);
        assert_eq!(animator.params().frame_count, 12);
        assert_eq!(animator.params().rate, 6);
        assert!(!animator.params().reverse);
        assert_eq!(animator.params().resize_width, 0);
    }

    #[test]
    fn test_frame_count_and_delay() {
        let animation = Animator::new(vec![Effect::Ripple])
            .frame_count(5)
            .rate(3)
            .render(&gradient(10, 10))
            .unwrap();
        assert_eq!(animation.len(), 5);
        assert!(animation.frames().iter().all(|f| f.delay == 33));
        assert_eq!((animation.width(), animation.height()), (10, 10));
    }

    #[test]
    fn test_zero_frames_rejected() {
        let err = Animator::new(vec![Effect::Hue])
            .frame_count(0)
            .render(&gradient(4, 4))
            .unwrap_err();
        assert_eq!(err, FxError::Validation(ValidationError::FrameCount(0)));
    }

    #[test]
    fn test_non_square_rotation_fails_before_frames() {
        let err = Animator::new(vec![Effect::Hue, Effect::Rotate(RotationDirection::Clockwise)])
            .render(&gradient(10, 20))
            .unwrap_err();
        assert_eq!(
            err,
            FxError::Shape(ShapeError::NotSquare {
                width: 10,
                height: 20
            })
        );
    }

    #[test]
    fn test_resize_applies_before_palette() {
        let animation = Animator::new(vec![Effect::Vibes])
            .frame_count(2)
            .resize_width(8)
            .render(&gradient(32, 16))
            .unwrap();
        assert_eq!((animation.width(), animation.height()), (8, 4));
        for frame in animation.frames() {
            assert_eq!(frame.image.indices().len(), 32);
        }
    }

    #[test]
    fn test_oversized_source_fails_before_frames() {
        let err = Animator::new(vec![Effect::Hue])
            .frame_count(3)
            .render(&Image::new(70_000, 1))
            .unwrap_err();
        assert_eq!(
            err,
            FxError::Shape(ShapeError::TooLarge {
                width: 70_000,
                height: 1,
                max: 65_535
            })
        );
    }

    #[test]
    fn test_unbounded_resize_width_rejected() {
        let err = Animator::new(vec![Effect::Hue])
            .frame_count(1)
            .resize_width(u32::MAX)
            .render(&Image::filled(1, 1, Rgba::WHITE))
            .unwrap_err();
        assert!(matches!(
            err,
            FxError::Validation(ValidationError::OutOfRange { field: "resize", .. })
        ));
    }

    #[test]
    fn test_resize_past_limit_fails_before_frames() {
        // Width is in range but the aspect ratio pushes the height over
        let err = Animator::new(vec![Effect::Hue])
            .resize_width(100)
            .render(&Image::new(1, 1000))
            .unwrap_err();
        assert_eq!(
            err,
            FxError::Shape(ShapeError::TooLarge {
                width: 100,
                height: 100_000,
                max: 65_535
            })
        );
    }

    #[test]
    fn test_resize_of_empty_source_fails() {
        let err = Animator::new(vec![Effect::Hue])
            .resize_width(8)
            .render(&Image::new(0, 0))
            .unwrap_err();
        assert_eq!(err, FxError::Shape(ShapeError::EmptySource));
    }

    #[test]
    fn test_empty_chain_repeats_source() {
        let source = gradient(8, 8);
        let animation = Animator::new(Vec::new())
            .frame_count(3)
            .render(&source)
            .unwrap();
        let first = animation.frames()[0].image.indices().to_vec();
        assert!(animation.frames().iter().all(|f| f.image.indices() == first));
    }

    #[test]
    fn test_all_frames_share_one_palette() {
        let animation = Animator::new(vec![Effect::TintRgb])
            .frame_count(4)
            .render(&gradient(12, 12))
            .unwrap();
        let palette = animation.frames()[0].image.palette();
        assert!(animation
            .frames()
            .iter()
            .all(|f| Arc::ptr_eq(f.image.palette(), palette)));
        assert_eq!(animation.palette(), palette.as_ref());
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let animator = Animator::new(vec![Effect::Kaleidoscope, Effect::Hue]).frame_count(6);
        let source = gradient(16, 16);
        let sequential = animator.clone().parallel(false).render(&source).unwrap();
        let parallel = animator.parallel(true).render(&source).unwrap();
        assert_eq!(sequential, parallel);
    }
}
