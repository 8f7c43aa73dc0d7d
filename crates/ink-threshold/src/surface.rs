//! Decoded pixel surfaces.
//!
//! [`PixelSurface`] is an owned, contiguous 4-bytes-per-pixel buffer with
//! dimension metadata and a declared channel order. It is the unit of data
//! flowing through the binarization pipeline: decoders produce one, the
//! transform consumes one and produces a fresh one, encoders consume one.

use std::fmt;

/// Byte order of the four channels within each pixel.
///
/// The classifier only needs to know where the red, green, and blue bytes
/// sit; alpha is the fourth byte in both layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    /// Red, green, blue, alpha. Native output of most Rust decoders.
    Rgba,
    /// Blue, green, red, alpha. Native byte order for Windows/DirectX
    /// surfaces and Skia bitmaps.
    Bgra,
}

impl ChannelOrder {
    /// Byte offsets of the (red, green, blue) channels within a pixel.
    #[inline]
    pub fn rgb_offsets(self) -> (usize, usize, usize) {
        match self {
            ChannelOrder::Rgba => (0, 1, 2),
            ChannelOrder::Bgra => (2, 1, 0),
        }
    }
}

/// Validation error for [`PixelSurface::new`].
#[derive(Debug, PartialEq, Eq)]
pub enum SurfaceError {
    /// Width or height is zero.
    ZeroDimension { width: u32, height: u32 },
    /// Buffer length does not equal `4 * width * height`.
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::ZeroDimension { width, height } => {
                write!(f, "surface dimensions must be non-zero, got {}x{}", width, height)
            }
            SurfaceError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel buffer length {} does not match expected {} (4 * width * height)",
                    actual, expected
                )
            }
        }
    }
}

impl std::error::Error for SurfaceError {}

/// An owned, decoded image buffer in a fixed 4-channel byte layout.
///
/// Invariants, enforced at construction:
///
/// - `width > 0` and `height > 0`
/// - `data.len() == 4 * width * height`
///
/// Pixels are stored row-major. The surface is exclusively owned by its
/// creator; the transform never mutates its input and always allocates a
/// fresh output surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    channel_order: ChannelOrder,
    data: Vec<u8>,
}

impl PixelSurface {
    /// Create a surface from a raw byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::ZeroDimension`] if either dimension is zero,
    /// or [`SurfaceError::LengthMismatch`] if the buffer length is not
    /// exactly `4 * width * height`.
    pub fn new(
        width: u32,
        height: u32,
        channel_order: ChannelOrder,
        data: Vec<u8>,
    ) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::ZeroDimension { width, height });
        }
        let expected = 4 * width as usize * height as usize;
        if data.len() != expected {
            return Err(SurfaceError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channel_order,
            data,
        })
    }

    /// Surface width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Declared channel order of the pixel buffer.
    #[inline]
    pub fn channel_order(&self) -> ChannelOrder {
        self.channel_order
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw pixel bytes, row-major, 4 bytes per pixel.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the surface and return its pixel bytes.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
