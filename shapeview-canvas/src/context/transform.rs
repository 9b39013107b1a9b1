//! Transform operations for Canvas.

use super::Canvas;
use crate::geometry::RectParams;
use tiny_skia::Transform;

impl Canvas {
    /// Translate the canvas.
    pub fn translate(&mut self, x: f32, y: f32) {
        log::debug!(target: "canvas", "translate {} {}", x, y);
        self.state.transform = self.state.transform.pre_translate(x, y);
    }

    /// Scale the canvas.
    pub fn scale(&mut self, x: f32, y: f32) {
        log::debug!(target: "canvas", "scale {} {}", x, y);
        self.state.transform = self.state.transform.pre_scale(x, y);
    }

    /// Scale the canvas about the point (`px`, `py`), which stays fixed.
    pub fn scale_about(&mut self, sx: f32, sy: f32, px: f32, py: f32) {
        log::debug!(target: "canvas", "scale {} {} about {} {}", sx, sy, px, py);
        self.translate(px, py);
        self.scale(sx, sy);
        self.translate(-px, -py);
    }

    /// Get the current transformation matrix.
    pub fn get_transform(&self) -> Transform {
        self.state.transform
    }

    /// Transform a point from user space to device space.
    pub(crate) fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        let t = &self.state.transform;
        (t.sx * x + t.kx * y + t.tx, t.ky * x + t.sy * y + t.ty)
    }

    /// Device-space bounding box of a user-space rectangle.
    pub(crate) fn map_rect(&self, rect: &RectParams) -> Option<RectParams> {
        if !(rect.width.is_finite() && rect.height.is_finite()) {
            return None;
        }
        let corners = [
            self.transform_point(rect.left(), rect.top()),
            self.transform_point(rect.right(), rect.top()),
            self.transform_point(rect.right(), rect.bottom()),
            self.transform_point(rect.left(), rect.bottom()),
        ];
        let (mut left, mut top) = corners[0];
        let (mut right, mut bottom) = corners[0];
        for &(x, y) in &corners[1..] {
            left = left.min(x);
            top = top.min(y);
            right = right.max(x);
            bottom = bottom.max(y);
        }
        Some(RectParams::from_ltrb(left, top, right, bottom))
    }
}
