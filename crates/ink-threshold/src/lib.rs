//! ink-threshold: Luma-threshold binarization for document images
//!
//! This library turns a decoded raster image into a pure black-and-white
//! rendition suitable for printing: each pixel is classified as "ink"
//! (black) or "background" (white) by comparing its integer luma against a
//! caller-supplied threshold, with an optional polarity inversion for
//! dark-background sources (photographed dark-mode screens, negatives).
//!
//! # Quick Start
//!
//! The [`Binarizer`] builder is the primary entry point:
//!
//! ```
//! use ink_threshold::{Binarizer, ChannelOrder, PixelSurface};
//!
//! // A 2x1 surface: one light pixel, one dark pixel.
//! let data = vec![250, 250, 250, 255, 10, 10, 10, 255];
//! let surface = PixelSurface::new(2, 1, ChannelOrder::Rgba, data).unwrap();
//!
//! let result = Binarizer::new().threshold(120).run(&surface);
//!
//! assert_eq!(result.data(), &[255, 255, 255, 255, 0, 0, 0, 255]);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! PixelSurface (RGBA or BGRA bytes)
//!     |
//!     v
//! luma = (r*299 + g*587 + b*114) / 1000     (integer, truncating)
//!     |
//!     v
//! background?  gray > threshold             (invert: gray < threshold)
//!     |
//!     v
//! (255,255,255,255) or (0,0,0,255)          (alpha always opaque)
//! ```
//!
//! # Classification Rules
//!
//! The classifier is a strict binary decision; no gradient or anti-aliased
//! output is ever produced. Three rules define its behavior:
//!
//! - **Normal polarity** (`invert = false`): a pixel is background when its
//!   luma is strictly *greater* than the threshold. Bright regions are paper.
//! - **Inverted polarity** (`invert = true`): a pixel is background when its
//!   luma is strictly *less* than the threshold. Dark regions are background.
//! - **Equality is ink** in both modes: a pixel whose luma exactly equals the
//!   threshold always classifies as ink. This boundary behavior is load
//!   bearing for reproducibility and is pinned by tests.
//!
//! The source alpha channel is discarded entirely: transparent pixels are
//! classified by their RGB values exactly like opaque ones, and every output
//! pixel is fully opaque.
//!
//! # Channel Order
//!
//! [`PixelSurface`] declares its channel order ([`ChannelOrder::Rgba`] or
//! [`ChannelOrder::Bgra`]) so the classifier reads the correct color
//! channels. The output surface keeps the source's declared order; since the
//! classifier only ever emits equal color channels, the order is irrelevant
//! downstream, but the 4-byte stride and alpha position must line up for
//! the encoder.

pub mod api;
pub mod binarize;
pub mod classify;
pub mod surface;


pub use api::Binarizer;
pub use binarize::binarize;
pub use classify::{classify, is_background, luma, BinaryPixel, ThresholdParams};
pub use surface::{ChannelOrder, PixelSurface, SurfaceError};
