//! Content painters drawn inside the view's shape.

use crate::error::{ShapeViewError, ShapeViewResult};
use shapeview_canvas::{Canvas, CanvasColor, CanvasImageDataRef, Path2D, RectParams};
use std::str::FromStr;

/// Something that paints the content of a view into a rectangle.
pub trait Drawable {
    /// Natural size in pixels, if the content has one.
    fn intrinsic_size(&self) -> Option<(u32, u32)> {
        None
    }

    /// Paint into `bounds` on `canvas`.
    fn draw(&self, canvas: &mut Canvas, bounds: &RectParams) -> ShapeViewResult<()>;
}

impl<F> Drawable for F
where
    F: Fn(&mut Canvas, &RectParams),
{
    fn draw(&self, canvas: &mut Canvas, bounds: &RectParams) -> ShapeViewResult<()> {
        self(canvas, bounds);
        Ok(())
    }
}

/// How a bitmap is fitted into the view bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleType {
    /// Stretch to fill the bounds exactly.
    FitXy,
    /// Scale uniformly to fit inside the bounds, centered.
    #[default]
    FitCenter,
    /// Scale uniformly to cover the bounds, centered and cropped.
    CenterCrop,
    /// Natural size, centered and cropped.
    Center,
}

impl ScaleType {
    /// Destination rectangle for an image of `width` x `height` drawn into
    /// `bounds`.
    pub fn dest_rect(&self, width: u32, height: u32, bounds: &RectParams) -> RectParams {
        let (iw, ih) = (width as f32, height as f32);
        if iw <= 0.0 || ih <= 0.0 {
            return RectParams::default();
        }
        let scale = match self {
            ScaleType::FitXy => return *bounds,
            ScaleType::FitCenter => (bounds.width / iw).min(bounds.height / ih),
            ScaleType::CenterCrop => (bounds.width / iw).max(bounds.height / ih),
            ScaleType::Center => 1.0,
        };
        let (dw, dh) = (iw * scale, ih * scale);
        let (cx, cy) = bounds.center();
        RectParams {
            x: cx - dw / 2.0,
            y: cy - dh / 2.0,
            width: dw,
            height: dh,
        }
    }
}

impl FromStr for ScaleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fit-xy" | "fitXY" => Ok(ScaleType::FitXy),
            "fit-center" | "fitCenter" => Ok(ScaleType::FitCenter),
            "center-crop" | "centerCrop" => Ok(ScaleType::CenterCrop),
            "center" => Ok(ScaleType::Center),
            _ => Err(format!(
                "Invalid scale type: {s}. Expected one of fit-xy, fit-center, center-crop, center"
            )),
        }
    }
}

/// Straight-alpha RGBA pixels and the way they are fitted into the view.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    scale_type: ScaleType,
}

impl Bitmap {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> ShapeViewResult<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(ShapeViewError::InvalidBitmap {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
            scale_type: ScaleType::default(),
        })
    }

    pub fn with_scale_type(mut self, scale_type: ScaleType) -> Self {
        self.scale_type = scale_type;
        self
    }

    pub fn set_scale_type(&mut self, scale_type: ScaleType) {
        self.scale_type = scale_type;
    }

    pub fn scale_type(&self) -> ScaleType {
        self.scale_type
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl Drawable for Bitmap {
    fn intrinsic_size(&self) -> Option<(u32, u32)> {
        Some((self.width, self.height))
    }

    fn draw(&self, canvas: &mut Canvas, bounds: &RectParams) -> ShapeViewResult<()> {
        let dest = self.scale_type.dest_rect(self.width, self.height, bounds);
        log::debug!(
            target: "shapeview",
            "bitmap {}x{} {:?} into {:?}",
            self.width, self.height, self.scale_type, dest
        );
        let image = CanvasImageDataRef {
            data: &self.pixels,
            width: self.width,
            height: self.height,
        };
        let crops = matches!(self.scale_type, ScaleType::CenterCrop | ScaleType::Center);
        if crops {
            canvas.save();
            canvas.clip_path2d(&Path2D::from_rect(bounds));
        }
        let result = canvas.draw_image_data_scaled(&image, &dest);
        if crops {
            canvas.restore();
        }
        Ok(result?)
    }
}

/// Fills the bounds with a single color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorDrawable {
    pub color: CanvasColor,
}

impl ColorDrawable {
    pub fn new(color: CanvasColor) -> Self {
        Self { color }
    }
}

impl Drawable for ColorDrawable {
    fn draw(&self, canvas: &mut Canvas, bounds: &RectParams) -> ShapeViewResult<()> {
        canvas.save();
        canvas.set_fill_style_color(self.color);
        canvas.fill_rect(bounds);
        canvas.restore();
        Ok(())
    }
}
