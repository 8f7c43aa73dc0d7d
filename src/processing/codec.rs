//! Image decode/encode via the `image` crate.
//!
//! Decoding accepts any raster format the crate recognizes (JPEG, PNG, BMP,
//! WebP, ...) and normalizes to an RGBA [`PixelSurface`]. Encoding produces
//! baseline JPEG; JPEG has no alpha channel, so the surface's (always
//! opaque) alpha byte is stripped before encoding.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};
use ink_threshold::{ChannelOrder, PixelSurface};

use crate::error::ProcessError;

/// JPEG quality factor for delivered documents. Fixed by the upstream
/// contract.
pub const JPEG_QUALITY: u8 = 80;

/// Decode compressed image bytes into an RGBA surface.
///
/// # Errors
///
/// [`ProcessError::EmptyInput`] for a zero-length buffer,
/// [`ProcessError::Decode`] for unrecognized or corrupt data, and
/// [`ProcessError::ZeroArea`] if the decoder reports a degenerate image.
pub fn decode_rgba(bytes: &[u8]) -> Result<PixelSurface, ProcessError> {
    if bytes.is_empty() {
        return Err(ProcessError::EmptyInput);
    }

    let decoded = image::load_from_memory(bytes)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    PixelSurface::new(width, height, ChannelOrder::Rgba, rgba.into_raw())
        .map_err(|_| ProcessError::ZeroArea { width, height })
}

/// Encode a surface as baseline JPEG at the given quality.
pub fn encode_jpeg(surface: &PixelSurface, quality: u8) -> Result<Vec<u8>, ProcessError> {
    let (ro, go, bo) = surface.channel_order().rgb_offsets();
    let mut rgb = Vec::with_capacity(surface.pixel_count() * 3);
    for px in surface.data().chunks_exact(4) {
        rgb.extend_from_slice(&[px[ro], px[go], px[bo]]);
    }

    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut out), quality);
    encoder
        .write_image(&rgb, surface.width(), surface.height(), ExtendedColorType::Rgb8)
        .map_err(ProcessError::Encode)?;

    Ok(out)
}
