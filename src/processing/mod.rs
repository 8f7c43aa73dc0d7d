//! The codec boundary and the document pipeline.
//!
//! `codec` adapts compressed image bytes to and from [`PixelSurface`];
//! `process` chains decode -> binarize -> encode into the single-shot
//! operation the HTTP boundary and the CLI both call.

pub mod codec;
pub mod process;

pub use codec::{decode_rgba, encode_jpeg, JPEG_QUALITY};
pub use process::process_document;
