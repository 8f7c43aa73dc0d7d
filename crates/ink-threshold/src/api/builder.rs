//! Binarizer builder -- the primary ergonomic entry point for the crate.
//!
//! [`Binarizer`] wraps [`binarize`](crate::binarize::binarize) with fluent
//! configuration of the threshold parameters.

use crate::binarize::binarize;
use crate::classify::ThresholdParams;
use crate::surface::PixelSurface;

/// High-level binarization builder.
///
/// `Binarizer` is the recommended entry point for the crate. Configuration
/// methods consume and return `self`; [`run()`](Self::run) takes `&self` so
/// the builder is **reusable** across multiple surfaces.
///
/// # Example
///
/// ```
/// use ink_threshold::{Binarizer, ChannelOrder, PixelSurface};
///
/// let surface = PixelSurface::new(1, 1, ChannelOrder::Rgba, vec![30, 30, 30, 255]).unwrap();
///
/// // Dark-background source: invert flips which side of the threshold is paper.
/// let result = Binarizer::new().threshold(120).invert(true).run(&surface);
///
/// assert_eq!(result.data(), &[255, 255, 255, 255]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Binarizer {
    params: ThresholdParams,
}

impl Binarizer {
    /// Create a binarizer with the default parameters
    /// (threshold 120, normal polarity).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the luma cutoff value.
    #[inline]
    pub fn threshold(mut self, threshold: u8) -> Self {
        self.params.threshold = threshold;
        self
    }

    /// Set the polarity. With `invert = true`, dark regions become the
    /// (white) background, for photographed dark-mode screens or negatives.
    #[inline]
    pub fn invert(mut self, invert: bool) -> Self {
        self.params.invert = invert;
        self
    }

    /// The parameters this builder currently holds.
    #[inline]
    pub fn params(&self) -> ThresholdParams {
        self.params
    }

    /// Binarize a surface into a fresh black-and-white surface of identical
    /// dimensions. The builder is reusable -- `run()` takes `&self`.
    pub fn run(&self, source: &PixelSurface) -> PixelSurface {
        binarize(source, self.params)
    }
}
