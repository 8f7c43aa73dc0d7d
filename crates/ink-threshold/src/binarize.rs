//! Whole-surface transform driver.
//!
//! Iterates the per-pixel classifier over a [`PixelSurface`], producing a
//! new surface of identical dimensions and channel order. Each pixel is
//! independent, so visit order does not affect the result.

use crate::classify::{classify, ThresholdParams};
use crate::surface::PixelSurface;

/// Binarize a surface: every pixel becomes opaque black or opaque white.
///
/// Allocates a fresh output surface with the same width, height, and channel
/// order as `source`; the input is never mutated. Work and memory are both
/// `O(width * height)`.
///
/// The output always satisfies the binary invariant: each pixel is exactly
/// `(0, 0, 0, 255)` or `(255, 255, 255, 255)`, regardless of the source
/// alpha channel (which is discarded).
pub fn binarize(source: &PixelSurface, params: ThresholdParams) -> PixelSurface {
    let (ro, go, bo) = source.channel_order().rgb_offsets();

    let mut out = Vec::with_capacity(source.data().len());
    for px in source.data().chunks_exact(4) {
        out.extend_from_slice(&classify(px[ro], px[go], px[bo], params).bytes());
    }

    // Same dimensions and a buffer of identical length: construction cannot
    // fail after `source` passed the same validation.
    PixelSurface::new(
        source.width(),
        source.height(),
        source.channel_order(),
        out,
    )
    .unwrap_or_else(|_| unreachable!("output buffer matches source geometry"))
}
