//! Per-pixel luma classification.
//!
//! One pixel in, one of two pixels out. The classifier computes an integer
//! luma from the color channels and compares it against the threshold; the
//! polarity of the comparison flips with `invert`.

/// Parameters of the threshold classifier.
///
/// Immutable and `Copy`; passed by value into the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdParams {
    /// Luma cutoff in `0..=255`.
    pub threshold: u8,
    /// Reversed polarity: dark regions become background.
    pub invert: bool,
}

impl Default for ThresholdParams {
    /// Threshold 120, normal polarity. 120 is the documented default of the
    /// upload endpoint and works well for photographed office documents.
    fn default() -> Self {
        Self {
            threshold: 120,
            invert: false,
        }
    }
}

/// Result of classifying one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryPixel {
    /// Emitted as opaque black `(0, 0, 0, 255)`.
    Ink,
    /// Emitted as opaque white `(255, 255, 255, 255)`.
    Background,
}

impl BinaryPixel {
    /// The four output bytes for this classification, in any channel order
    /// (all three color channels are equal, alpha is last in both layouts).
    #[inline]
    pub fn bytes(self) -> [u8; 4] {
        match self {
            BinaryPixel::Ink => [0, 0, 0, 255],
            BinaryPixel::Background => [255, 255, 255, 255],
        }
    }
}

/// Integer luma of an RGB triple.
///
/// ITU-R BT.601 weights scaled to integer arithmetic:
/// `(r*299 + g*587 + b*114) / 1000` with truncating division. The result is
/// always in `0..=255` for in-range inputs. Truncation (not rounding) is
/// deliberate and must not change: the classification of pixels near the
/// threshold depends on it.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000) as u8
}

/// Whether a luma value classifies as background under the given parameters.
///
/// Normal polarity: background when `gray > threshold`. Inverted polarity:
/// background when `gray < threshold`. Exact equality is ink in both modes.
#[inline]
pub fn is_background(gray: u8, params: ThresholdParams) -> bool {
    if params.invert {
        gray < params.threshold
    } else {
        gray > params.threshold
    }
}

/// Classify one pixel's color channels.
#[inline]
pub fn classify(r: u8, g: u8, b: u8, params: ThresholdParams) -> BinaryPixel {
    if is_background(luma(r, g, b), params) {
        BinaryPixel::Background
    } else {
        BinaryPixel::Ink
    }
}
