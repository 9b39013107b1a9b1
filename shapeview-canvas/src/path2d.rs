//! Path2D implementation for reusable path objects.
//!
//! Path2D allows creating path objects that can be reused across multiple
//! fill, stroke, or clip operations.

use crate::geometry::{CircleParams, RectParams, RoundRectParams};
use tiny_skia::{PathBuilder, PathSegment};

/// Kappa for quarter-ellipse cubic Bezier approximation.
const K: f32 = 0.552_284_8;

/// A reusable path object that can be used with fill, stroke, and clip operations.
#[derive(Debug, Clone, Default)]
pub struct Path2D {
    builder: PathBuilder,
}

impl Path2D {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Path containing a single rectangle.
    pub fn from_rect(params: &RectParams) -> Self {
        let mut path = Self::new();
        path.rect(params);
        path
    }

    /// Path containing a single rounded rectangle.
    pub fn from_round_rect(params: &RoundRectParams) -> Self {
        let mut path = Self::new();
        path.round_rect(params);
        path
    }

    /// Path containing a single circle.
    pub fn from_circle(params: &CircleParams) -> Self {
        let mut path = Self::new();
        path.circle(params);
        path
    }

    /// Move to a point without drawing.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(x, y);
    }

    /// Draw a line to a point.
    pub fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(x, y);
    }

    /// Close the current subpath.
    pub fn close_path(&mut self) {
        self.builder.close();
    }

    /// Add a rectangle to the path.
    pub fn rect(&mut self, params: &RectParams) {
        self.move_to(params.x, params.y);
        self.line_to(params.x + params.width, params.y);
        self.line_to(params.x + params.width, params.y + params.height);
        self.line_to(params.x, params.y + params.height);
        self.close_path();
    }

    /// Add a rounded rectangle to the path.
    ///
    /// Radii are clamped to be non-negative and scaled down uniformly when
    /// adjacent corners would overlap. A rectangle with no area adds nothing.
    pub fn round_rect(&mut self, params: &RoundRectParams) {
        let RoundRectParams {
            x,
            y,
            width,
            height,
            radii,
        } = *params;

        if !(width > 0.0 && height > 0.0) {
            return;
        }

        let [mut tl, mut tr, mut br, mut bl] = radii.map(|r| r.max(0.0));

        // Scale radii uniformly if they exceed the rectangle dimensions
        let top = (tl + tr).max(1e-10);
        let bottom = (bl + br).max(1e-10);
        let left = (tl + bl).max(1e-10);
        let right = (tr + br).max(1e-10);
        let scale = (width / top)
            .min(width / bottom)
            .min(height / left)
            .min(height / right)
            .min(1.0);

        if scale < 1.0 {
            tl *= scale;
            tr *= scale;
            br *= scale;
            bl *= scale;
        }

        self.builder.move_to(x + tl, y);

        // Top edge and top-right corner
        self.builder.line_to(x + width - tr, y);
        if tr > 0.0 {
            self.builder.cubic_to(
                x + width - tr + tr * K,
                y,
                x + width,
                y + tr - tr * K,
                x + width,
                y + tr,
            );
        }

        // Right edge and bottom-right corner
        self.builder.line_to(x + width, y + height - br);
        if br > 0.0 {
            self.builder.cubic_to(
                x + width,
                y + height - br + br * K,
                x + width - br + br * K,
                y + height,
                x + width - br,
                y + height,
            );
        }

        // Bottom edge and bottom-left corner
        self.builder.line_to(x + bl, y + height);
        if bl > 0.0 {
            self.builder.cubic_to(
                x + bl - bl * K,
                y + height,
                x,
                y + height - bl + bl * K,
                x,
                y + height - bl,
            );
        }

        // Left edge and top-left corner
        self.builder.line_to(x, y + tl);
        if tl > 0.0 {
            self.builder
                .cubic_to(x, y + tl - tl * K, x + tl - tl * K, y, x + tl, y);
        }
        self.builder.close();
    }

    /// Add a full circle to the path. Non-positive radii add nothing.
    pub fn circle(&mut self, params: &CircleParams) {
        if !(params.radius > 0.0) {
            return;
        }
        self.builder.push_circle(params.x, params.y, params.radius);
    }

    /// True when the path has no drawable geometry.
    pub fn is_empty(&self) -> bool {
        self.to_path().is_none()
    }

    /// Get the finished path for rendering.
    /// Returns None if the path is empty.
    pub fn to_path(&self) -> Option<tiny_skia::Path> {
        // Clone the builder to finish it without consuming it
        self.builder.clone().finish()
    }

    /// Bounding box of the path, if it has any geometry.
    pub fn bounds(&self) -> Option<RectParams> {
        self.to_path().map(|p| {
            let b = p.bounds();
            RectParams::from_ltrb(b.left(), b.top(), b.right(), b.bottom())
        })
    }

    /// All segments of the path, in order.
    pub fn segments(&self) -> Vec<PathSegment> {
        self.to_path()
            .map(|p| p.segments().collect())
            .unwrap_or_default()
    }
}
