//! Image drawing, pixel data, and PNG output operations for Canvas.

use super::Canvas;
use crate::error::{CanvasError, CanvasResult};
use crate::geometry::{CanvasImageDataRef, RectParams};

impl Canvas {
    // --- Drawing images ---

    /// Draw non-premultiplied image data at its natural size.
    pub fn draw_image_data(
        &mut self,
        image: &CanvasImageDataRef<'_>,
        dx: f32,
        dy: f32,
    ) -> CanvasResult<()> {
        let dest = RectParams {
            x: dx,
            y: dy,
            width: image.width as f32,
            height: image.height as f32,
        };
        self.draw_image_data_scaled(image, &dest)
    }

    /// Draw non-premultiplied image data scaled into `dest`, with bilinear
    /// filtering.
    pub fn draw_image_data_scaled(
        &mut self,
        image: &CanvasImageDataRef<'_>,
        dest: &RectParams,
    ) -> CanvasResult<()> {
        log::debug!(
            target: "canvas",
            "drawImage {}x{} into {} {} {} {}",
            image.width, image.height, dest.x, dest.y, dest.width, dest.height
        );
        let expected = image.width as usize * image.height as usize * 4;
        if image.data.len() != expected {
            return Err(CanvasError::InvalidImageData {
                expected,
                actual: image.data.len(),
            });
        }
        if image.width == 0 || image.height == 0 || dest.is_empty() {
            return Ok(());
        }
        let premultiplied = premultiply(image.data);
        let Some(pixmap) =
            tiny_skia::PixmapRef::from_bytes(&premultiplied, image.width, image.height)
        else {
            return Ok(());
        };
        let paint = tiny_skia::PixmapPaint {
            opacity: 1.0,
            blend_mode: self.state.global_composite_operation.into(),
            quality: tiny_skia::FilterQuality::Bilinear,
        };

        // Translate to destination position, then scale
        let transform = self
            .state
            .transform
            .pre_translate(dest.x, dest.y)
            .pre_scale(
                dest.width / image.width as f32,
                dest.height / image.height as f32,
            );

        let clip = self.state.clip.take();
        self.target_mut().draw_pixmap(
            0,
            0,
            pixmap,
            &paint,
            transform,
            clip.as_ref().map(|c| c.mask()),
        );
        self.state.clip = clip;
        Ok(())
    }

    // --- Image data ---

    /// Get non-premultiplied RGBA data for a region of the canvas.
    ///
    /// Pixels outside the canvas read as transparent black. Open layers are
    /// not included until they are restored.
    pub fn get_image_data(&self, x: i32, y: i32, width: u32, height: u32) -> Vec<u8> {
        let mut data = vec![0u8; (width * height * 4) as usize];
        let src = self.pixmap.data();

        for dy in 0..height {
            for dx in 0..width {
                let src_x = x + dx as i32;
                let src_y = y + dy as i32;
                if src_x < 0
                    || src_x >= self.width as i32
                    || src_y < 0
                    || src_y >= self.height as i32
                {
                    continue;
                }

                let dst_idx = ((dy * width + dx) * 4) as usize;
                let src_idx = ((src_y as u32 * self.width + src_x as u32) * 4) as usize;
                let pixel = &src[src_idx..src_idx + 4];

                // Convert from premultiplied alpha to straight alpha
                let a = pixel[3];
                if a == 255 {
                    data[dst_idx..dst_idx + 4].copy_from_slice(pixel);
                } else if a > 0 {
                    let a16 = a as u16;
                    for c in 0..3 {
                        data[dst_idx + c] = ((pixel[c] as u16 * 255 + a16 / 2) / a16).min(255) as u8;
                    }
                    data[dst_idx + 3] = a;
                }
            }
        }

        data
    }

    /// Non-premultiplied RGBA data for the whole canvas.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.get_image_data(0, 0, self.width, self.height)
    }

    /// Export the canvas as PNG data.
    ///
    /// # Arguments
    /// * `ppi` - Optional pixels per inch for PNG metadata. Defaults to 72 if not specified.
    pub fn to_png(&self, ppi: Option<f32>) -> CanvasResult<Vec<u8>> {
        let ppi = ppi.unwrap_or(72.0);

        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            // Set pixel density metadata (pixels per meter)
            let ppm = (ppi.max(0.0) / 0.0254).round() as u32;
            encoder.set_pixel_dims(Some(png::PixelDimensions {
                xppu: ppm,
                yppu: ppm,
                unit: png::Unit::Meter,
            }));

            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.to_rgba8())?;
        }
        Ok(buf)
    }
}

/// Convert straight-alpha RGBA bytes to premultiplied alpha.
fn premultiply(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    for px in data.chunks_exact(4) {
        let a = px[3];
        match a {
            255 => out.extend_from_slice(px),
            0 => out.extend_from_slice(&[0, 0, 0, 0]),
            _ => {
                let a16 = a as u16;
                out.push(((px[0] as u16 * a16 + 127) / 255) as u8);
                out.push(((px[1] as u16 * a16 + 127) / 255) as u8);
                out.push(((px[2] as u16 * a16 + 127) / 255) as u8);
                out.push(a);
            }
        }
    }
    out
}
