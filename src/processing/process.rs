//! The single-shot document pipeline.

use ink_threshold::{binarize, ThresholdParams};
use tracing::debug;

use crate::error::ProcessError;
use crate::processing::codec::{decode_rgba, encode_jpeg, JPEG_QUALITY};

/// Convert uploaded image bytes into a print-friendly black-and-white JPEG.
///
/// Stateless and single-shot: decode to RGBA, binarize against the luma
/// threshold, encode as quality-80 JPEG. The only failure points are the
/// two codec boundaries; the transform itself is pure arithmetic.
pub fn process_document(bytes: &[u8], params: ThresholdParams) -> Result<Vec<u8>, ProcessError> {
    let surface = decode_rgba(bytes)?;
    debug!(
        width = surface.width(),
        height = surface.height(),
        threshold = params.threshold,
        invert = params.invert,
        "decoded upload"
    );

    let result = binarize(&surface, params);
    let jpeg = encode_jpeg(&result, JPEG_QUALITY)?;
    debug!(input = bytes.len(), output = jpeg.len(), "encoded document");

    Ok(jpeg)
}
