//! Image fixtures built in memory with the `image` crate.

use std::io::Cursor;

/// Encode an RGBA image as PNG bytes.
fn to_png(img: image::RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .expect("PNG encode failed");
    buf
}

/// Solid-fill PNG.
pub fn solid_png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    to_png(image::RgbaImage::from_pixel(width, height, image::Rgba(rgba)))
}

/// PNG with a dark left half and a light right half.
pub fn split_png(width: u32, height: u32) -> Vec<u8> {
    to_png(image::RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            image::Rgba([10, 10, 10, 255])
        } else {
            image::Rgba([250, 250, 250, 255])
        }
    }))
}

/// Decode response bytes, returning (width, height, rgba bytes).
pub fn decode_jpeg(bytes: &[u8]) -> (u32, u32, Vec<u8>) {
    let img = image::load_from_memory(bytes).expect("JPEG decode failed");
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    (w, h, rgba.into_raw())
}
