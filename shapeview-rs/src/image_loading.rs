//! Decoding image files into bitmaps.

use crate::content::Bitmap;
use crate::error::ShapeViewResult;
use std::path::Path;

/// Decode PNG or JPEG bytes into a bitmap.
pub fn load_bitmap(bytes: &[u8]) -> ShapeViewResult<Bitmap> {
    let image = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = image.dimensions();
    log::debug!(target: "shapeview", "decoded {}x{} image", width, height);
    Bitmap::new(width, height, image.into_raw())
}

/// Read and decode an image file.
pub fn load_bitmap_file(path: impl AsRef<Path>) -> ShapeViewResult<Bitmap> {
    let path = path.as_ref();
    log::info!(target: "shapeview", "loading {}", path.display());
    let bytes = std::fs::read(path)?;
    load_bitmap(&bytes)
}
