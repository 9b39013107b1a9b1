//! Fill, stroke, clip, and paint helper operations for Canvas.

use super::Canvas;
use crate::geometry::RectParams;
use crate::path2d::Path2D;
use crate::region::Region;
use crate::style::CompositeOp;
use tiny_skia::Transform;

impl Canvas {
    // --- Clipping ---

    /// Intersect the clip with a Path2D using the non-zero winding rule.
    ///
    /// The path is interpreted in the current user space.
    pub fn clip_path2d(&mut self, path: &Path2D) {
        log::debug!(target: "canvas", "clip");
        let transform = self.state.transform;
        match Region::rasterize(path, true, transform, self.width, self.height) {
            Ok(region) => self.intersect_clip(region),
            Err(e) => log::warn!(target: "canvas", "clip ignored: {}", e),
        }
    }

    pub(crate) fn intersect_clip(&mut self, region: Region) {
        self.state.clip = Some(match self.state.clip.take() {
            Some(current) => current.intersect(&region),
            None => region,
        });
    }

    // --- Drawing operations ---

    /// Fill a Path2D object using the non-zero winding rule.
    pub fn fill_path2d(&mut self, path: &Path2D) {
        log::debug!(target: "canvas", "fill");
        if let Some(p) = path.to_path() {
            let clip = self.state.clip.take();
            let transform = self.state.transform;
            let paint = self.fill_paint();
            self.target_mut().fill_path(
                &p,
                &paint,
                tiny_skia::FillRule::Winding,
                transform,
                clip.as_ref().map(Region::mask),
            );
            self.state.clip = clip;
        }
    }

    /// Stroke a Path2D object with the current line width.
    pub fn stroke_path2d(&mut self, path: &Path2D) {
        log::debug!(target: "canvas", "stroke");
        if let Some(p) = path.to_path() {
            let stroke = tiny_skia::Stroke {
                width: self.state.line_width,
                miter_limit: 10.0,
                ..Default::default()
            };

            let clip = self.state.clip.take();
            let transform = self.state.transform;
            let paint = self.stroke_paint();
            self.target_mut().stroke_path(
                &p,
                &paint,
                &stroke,
                transform,
                clip.as_ref().map(Region::mask),
            );
            self.state.clip = clip;
        }
    }

    /// Paint `region` with the fill style and composite operation.
    ///
    /// The region is in device space and ignores the current transform.
    /// Under `destination-in` the region acts as the whole source: pixels it
    /// does not cover are cleared, covered pixels keep their value scaled by
    /// the coverage times the fill alpha.
    pub fn fill_region(&mut self, region: &Region) {
        log::debug!(target: "canvas", "fillRegion {:?}", self.state.global_composite_operation);
        let mut paint = self.fill_paint();
        let region = if self.state.global_composite_operation == CompositeOp::DestinationIn {
            // dst * a is painted as dst - dst * (1 - a), which also reaches
            // the pixels the region leaves uncovered
            let alpha = (self.state.fill_style.alpha() * 255.0).round() as u8;
            paint.blend_mode = tiny_skia::BlendMode::DestinationOut;
            paint.set_color(tiny_skia::Color::BLACK);
            region.scaled(alpha).complement()
        } else {
            region.clone()
        };
        let coverage = match &self.state.clip {
            Some(clip) => region.intersect(clip),
            None => region,
        };
        let Some(rect) =
            tiny_skia::Rect::from_xywh(0.0, 0.0, self.width as f32, self.height as f32)
        else {
            return;
        };
        self.target_mut().fill_rect(
            rect,
            &paint,
            Transform::identity(),
            Some(coverage.mask()),
        );
    }

    /// Fill a rectangle.
    pub fn fill_rect(&mut self, params: &RectParams) {
        log::debug!(target: "canvas", "fillRect {} {} {} {}", params.x, params.y, params.width, params.height);
        self.fill_path2d(&Path2D::from_rect(params));
    }

    // --- Private paint helpers ---

    fn fill_paint(&self) -> tiny_skia::Paint<'static> {
        self.paint_for_color(self.state.fill_style)
    }

    fn stroke_paint(&self) -> tiny_skia::Paint<'static> {
        self.paint_for_color(self.state.stroke_style)
    }

    fn paint_for_color(&self, color: tiny_skia::Color) -> tiny_skia::Paint<'static> {
        let mut paint = tiny_skia::Paint {
            anti_alias: true,
            blend_mode: self.state.global_composite_operation.into(),
            ..Default::default()
        };
        paint.set_color(color);
        paint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{CanvasColor, CircleParams};

    fn rect(x: f32, y: f32, width: f32, height: f32) -> RectParams {
        RectParams {
            x,
            y,
            width,
            height,
        }
    }

    fn pixel(ctx: &Canvas, x: i32, y: i32) -> Vec<u8> {
        ctx.get_image_data(x, y, 1, 1)
    }

    fn green_canvas(size: u32) -> Canvas {
        let mut ctx = Canvas::new(size, size).unwrap();
        ctx.set_fill_style_color(CanvasColor::from_rgba8(0, 128, 0, 255));
        ctx.fill_rect(&rect(0.0, 0.0, size as f32, size as f32));
        ctx
    }

    #[test]
    fn test_fill_rect_with_transform() {
        let mut ctx = Canvas::new(50, 50).unwrap();
        ctx.set_fill_style("#ff0000").unwrap();
        ctx.translate(20.0, 20.0);
        ctx.fill_rect(&rect(0.0, 0.0, 10.0, 10.0));
        assert_eq!(pixel(&ctx, 25, 25), vec![255, 0, 0, 255]);
        assert_eq!(pixel(&ctx, 5, 5)[3], 0);
    }

    #[test]
    fn test_clip_limits_fill() {
        let mut ctx = Canvas::new(100, 100).unwrap();
        ctx.clip_path2d(&Path2D::from_circle(&CircleParams {
            x: 50.0,
            y: 50.0,
            radius: 20.0,
        }));
        ctx.fill_rect(&rect(0.0, 0.0, 100.0, 100.0));
        assert_eq!(pixel(&ctx, 50, 50)[3], 255);
        assert_eq!(pixel(&ctx, 5, 5)[3], 0);
    }

    #[test]
    fn test_clips_intersect() {
        let mut ctx = Canvas::new(100, 100).unwrap();
        ctx.clip_path2d(&Path2D::from_rect(&rect(0.0, 0.0, 60.0, 60.0)));
        ctx.clip_path2d(&Path2D::from_rect(&rect(40.0, 40.0, 60.0, 60.0)));
        ctx.fill_rect(&rect(0.0, 0.0, 100.0, 100.0));
        assert_eq!(pixel(&ctx, 50, 50)[3], 255);
        assert_eq!(pixel(&ctx, 20, 20)[3], 0);
        assert_eq!(pixel(&ctx, 80, 80)[3], 0);
    }

    #[test]
    fn test_clip_restored_with_state() {
        let mut ctx = Canvas::new(40, 40).unwrap();
        ctx.save();
        ctx.clip_path2d(&Path2D::from_rect(&rect(0.0, 0.0, 10.0, 10.0)));
        ctx.restore();
        ctx.fill_rect(&rect(0.0, 0.0, 40.0, 40.0));
        assert_eq!(pixel(&ctx, 30, 30)[3], 255);
    }

    #[test]
    fn test_fill_region_erases_with_destination_out() {
        let mut ctx = green_canvas(60);
        let region = Region::from_rect(&rect(0.0, 0.0, 30.0, 60.0), 60, 60).unwrap();
        ctx.set_composite_op(CompositeOp::DestinationOut);
        ctx.fill_region(&region);

        assert_eq!(pixel(&ctx, 10, 30)[3], 0);
        assert_eq!(pixel(&ctx, 45, 30), vec![0, 128, 0, 255]);
    }

    #[test]
    fn test_fill_region_destination_in_clears_uncovered_pixels() {
        let mut ctx = green_canvas(60);
        let region = Region::from_rect(&rect(0.0, 0.0, 30.0, 60.0), 60, 60).unwrap();
        ctx.set_composite_op(CompositeOp::DestinationIn);
        ctx.fill_region(&region);

        assert_eq!(pixel(&ctx, 10, 30), vec![0, 128, 0, 255]);
        assert_eq!(pixel(&ctx, 45, 30)[3], 0);
    }

    #[test]
    fn test_destination_in_matches_erasing_the_complement() {
        let circle = Region::from_path(
            &Path2D::from_circle(&CircleParams {
                x: 30.0,
                y: 30.0,
                radius: 21.3,
            }),
            60,
            60,
        )
        .unwrap();

        let mut kept = green_canvas(60);
        kept.set_composite_op(CompositeOp::DestinationIn);
        kept.fill_region(&circle);

        let mut erased = green_canvas(60);
        let full = Region::from_rect(&rect(0.0, 0.0, 60.0, 60.0), 60, 60).unwrap();
        erased.set_composite_op(CompositeOp::DestinationOut);
        erased.fill_region(&full.difference(&circle));

        assert_eq!(kept.to_rgba8(), erased.to_rgba8());
    }

    #[test]
    fn test_stroke_leaves_interior() {
        let mut ctx = Canvas::new(50, 50).unwrap();
        ctx.set_line_width(4.0);
        ctx.set_stroke_style_color(CanvasColor::from_rgba8(0, 0, 255, 255));
        ctx.stroke_path2d(&Path2D::from_rect(&rect(10.0, 10.0, 30.0, 30.0)));
        assert_eq!(pixel(&ctx, 10, 25), vec![0, 0, 255, 255]);
        assert_eq!(pixel(&ctx, 25, 25)[3], 0);
    }
}
