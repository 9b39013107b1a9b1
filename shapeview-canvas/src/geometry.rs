//! Parameter structs for canvas drawing operations.
//!
//! These structs replace long positional argument lists with named fields,
//! grouping semantically related parameters together.

use crate::error::{CanvasError, CanvasResult};
use std::str::FromStr;

/// Parameters for a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectParams {
    /// X coordinate of the rectangle origin.
    pub x: f32,
    /// Y coordinate of the rectangle origin.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl RectParams {
    /// Build a rectangle from its left, top, right and bottom edges.
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Shrink the rectangle by `d` on every side.
    ///
    /// Negative `d` grows it. The result may have negative extent; callers
    /// that rasterize it get an empty area.
    pub fn inset(&self, d: f32) -> Self {
        Self {
            x: self.x + d,
            y: self.y + d,
            width: self.width - 2.0 * d,
            height: self.height - 2.0 * d,
        }
    }

    /// True when the rectangle encloses no area.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Smallest whole-pixel rectangle containing this one, clamped to a
    /// `width` x `height` surface. Returns `None` when nothing remains.
    pub(crate) fn round_out(&self, width: u32, height: u32) -> Option<tiny_skia::IntRect> {
        let left = self.left().floor().max(0.0);
        let top = self.top().floor().max(0.0);
        let right = self.right().ceil().min(width as f32);
        let bottom = self.bottom().ceil().min(height as f32);
        if right <= left || bottom <= top {
            return None;
        }
        tiny_skia::IntRect::from_ltrb(left as i32, top as i32, right as i32, bottom as i32)
    }
}

/// Parameters for a rounded rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundRectParams {
    /// X coordinate of the rectangle origin.
    pub x: f32,
    /// Y coordinate of the rectangle origin.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
    /// Corner radii in order: [top-left, top-right, bottom-right, bottom-left].
    pub radii: [f32; 4],
}

impl RoundRectParams {
    /// Rounded rectangle covering `rect` with the given corner radii.
    pub fn new(rect: &RectParams, radii: [f32; 4]) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            radii,
        }
    }
}

/// Parameters for a full circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleParams {
    /// X coordinate of the circle center.
    pub x: f32,
    /// Y coordinate of the circle center.
    pub y: f32,
    /// Radius of the circle.
    pub radius: f32,
}

// --- Backend-neutral types ---

/// A backend-neutral RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl CanvasColor {
    pub const BLACK: CanvasColor = CanvasColor::from_rgba8(0, 0, 0, 255);
    pub const WHITE: CanvasColor = CanvasColor::from_rgba8(255, 255, 255, 255);

    /// Create a color from 8-bit RGBA components.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from a packed `0xAARRGGBB` value.
    pub const fn from_argb32(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Format as a CSS `#rrggbbaa` string.
    pub fn to_css_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for CanvasColor {
    type Err = CanvasError;

    /// Parse any CSS color string (`#rgb`, `#rrggbbaa`, `rgba(...)`, named colors).
    fn from_str(s: &str) -> CanvasResult<Self> {
        let parsed = csscolorparser::parse(s)
            .map_err(|e| CanvasError::ColorParseError(format!("{}: {}", s, e)))?;
        let [r, g, b, a] = parsed.to_rgba8();
        Ok(Self { r, g, b, a })
    }
}

impl From<CanvasColor> for tiny_skia::Color {
    fn from(c: CanvasColor) -> Self {
        tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
    }
}

/// A reference to non-premultiplied RGBA image data.
#[derive(Debug, Clone, Copy)]
pub struct CanvasImageDataRef<'a> {
    /// RGBA pixel data, non-premultiplied, 4 bytes per pixel.
    pub data: &'a [u8],
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}
