//! FrameCompositor: runs an effect chain for one frame.

use std::sync::Arc;

use crate::effects::{Effect, FrameClock};
use crate::image::{Image, ShapeError};
use crate::output::IndexedFrame;
use crate::palette::Palette;

/// An ordered effect chain.
///
/// Effects run in list order, each consuming the previous output. The chain
/// is not commutative: rotating then tinting blends the transparent corners
/// differently from tinting then rotating.
///
/// # Example
///
/// ```
/// use animoji_fx::{Effect, FrameClock, FrameCompositor, Image, Rgba};
///
/// let chain = FrameCompositor::new(vec![Effect::Hue, Effect::Pixelate]);
/// let base = Image::filled(8, 8, Rgba::opaque(255, 0, 0));
///
/// let frame = chain.compose(&base, FrameClock::new(0, 4).unwrap()).unwrap();
/// assert_eq!(frame, base);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameCompositor {
    effects: Vec<Effect>,
}

impl FrameCompositor {
    pub fn new(effects: Vec<Effect>) -> Self {
        Self { effects }
    }

    #[inline]
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Apply every effect in order to `base`. An empty chain returns a copy
    /// of `base`.
    ///
    /// # Errors
    ///
    /// Propagates the first [`ShapeError`] raised by an effect.
    pub fn compose(&self, base: &Image, clock: FrameClock) -> Result<Image, ShapeError> {
        self.effects
            .iter()
            .try_fold(base.clone(), |image, effect| effect.apply(&image, clock))
    }

    /// Compose the frame and quantize it against the shared palette.
    pub fn render(
        &self,
        base: &Image,
        clock: FrameClock,
        palette: &Arc<Palette>,
    ) -> Result<IndexedFrame, ShapeError> {
        let image = self.compose(base, clock)?;
        tracing::debug!(frame = clock.index(), of = clock.count(), "Rendered frame");
        Ok(IndexedFrame::quantize(&image, Arc::clone(palette)))
    }
}
