//! The shaped image view.

use crate::config::{BackendCapabilities, ShapeConfig};
use crate::content::Drawable;
use crate::error::ShapeViewResult;
use crate::geometry::{GeometrySnapshot, ShapeMode};
use crate::mask::MaskStrategy;
use shapeview_canvas::{Canvas, CanvasColor, RectParams};

/// Draws content clipped to a circle or rounded rectangle, with an optional
/// border stroked around it.
pub struct ShapedImageView {
    config: ShapeConfig,
    mask_strategy: MaskStrategy,
    drawable: Option<Box<dyn Drawable>>,
    geometry: GeometrySnapshot,
    dirty: bool,
}

impl ShapedImageView {
    /// Create a zero-sized view. Call [`on_size_changed`](Self::on_size_changed)
    /// before drawing.
    pub fn new(config: ShapeConfig, capabilities: BackendCapabilities) -> Self {
        let mask_strategy = MaskStrategy::for_capabilities(&capabilities);
        log::debug!(target: "shapeview", "new view, mask strategy {:?}", mask_strategy);
        let geometry = GeometrySnapshot::compute(&config, 0, 0);
        Self {
            config,
            mask_strategy,
            drawable: None,
            geometry,
            dirty: true,
        }
    }

    pub fn with_drawable(mut self, drawable: impl Drawable + 'static) -> Self {
        self.set_drawable(drawable);
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.on_size_changed(width, height);
        self
    }

    // --- Queries ---

    pub fn config(&self) -> &ShapeConfig {
        &self.config
    }

    pub fn geometry(&self) -> &GeometrySnapshot {
        &self.geometry
    }

    pub fn mask_strategy(&self) -> MaskStrategy {
        self.mask_strategy
    }

    pub fn width(&self) -> u32 {
        self.geometry.width
    }

    pub fn height(&self) -> u32 {
        self.geometry.height
    }

    pub fn drawable(&self) -> Option<&dyn Drawable> {
        self.drawable.as_deref()
    }

    /// True when something changed since the last draw.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the redraw request, returning whether there was one.
    pub fn take_invalidation(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    // --- Configuration ---

    /// Update the view bounds.
    pub fn on_size_changed(&mut self, width: u32, height: u32) {
        log::debug!(target: "shapeview", "size changed to {}x{}", width, height);
        self.geometry = GeometrySnapshot::compute(&self.config, width, height);
        self.dirty = true;
    }

    /// Replace the whole configuration.
    pub fn set_config(&mut self, config: ShapeConfig) {
        self.config = config;
        self.recompute();
    }

    pub fn set_circular(&mut self, circular: bool) {
        self.config.circular = circular;
        self.recompute();
    }

    pub fn set_corner_radius(&mut self, radius: f32) {
        self.config.corner_radius = radius;
        self.recompute();
    }

    pub fn set_top_left_radius(&mut self, radius: f32) {
        self.config.top_left_radius = radius;
        self.recompute();
    }

    pub fn set_top_right_radius(&mut self, radius: f32) {
        self.config.top_right_radius = radius;
        self.recompute();
    }

    pub fn set_bottom_right_radius(&mut self, radius: f32) {
        self.config.bottom_right_radius = radius;
        self.recompute();
    }

    pub fn set_bottom_left_radius(&mut self, radius: f32) {
        self.config.bottom_left_radius = radius;
        self.recompute();
    }

    pub fn set_border_width(&mut self, width: f32) {
        self.config.border_width = width;
        self.recompute();
    }

    pub fn set_border_color(&mut self, color: CanvasColor) {
        self.config.border_color = color;
        self.recompute();
    }

    pub fn set_border_overlaps_content(&mut self, overlaps: bool) {
        self.config.border_overlaps_content = overlaps;
        self.recompute();
    }

    /// Replace the content. Geometry does not depend on it.
    pub fn set_drawable(&mut self, drawable: impl Drawable + 'static) {
        self.drawable = Some(Box::new(drawable));
        self.dirty = true;
    }

    /// Remove the content; only the border is drawn.
    pub fn clear_drawable(&mut self) {
        self.drawable = None;
        self.dirty = true;
    }

    fn recompute(&mut self) {
        self.geometry = GeometrySnapshot::compute(&self.config, self.width(), self.height());
        self.dirty = true;
    }

    // --- Drawing ---

    /// Draw one frame onto `canvas`.
    ///
    /// The content is painted into a layer bounded by the content rect,
    /// masked to the clip shape, and committed before the border is stroked.
    /// The canvas save stack is balanced on return, also when the content
    /// fails to draw.
    pub fn draw(&mut self, canvas: &mut Canvas) -> ShapeViewResult<()> {
        let geometry = &self.geometry;
        if geometry.is_empty() {
            log::debug!(target: "shapeview", "skipping draw of empty view");
            return Ok(());
        }
        let bounds = RectParams {
            x: 0.0,
            y: 0.0,
            width: geometry.width as f32,
            height: geometry.height as f32,
        };

        {
            let mut layer = canvas.layer(&geometry.content_rect)?;
            if let Some(drawable) = &self.drawable {
                layer.save();
                if let Some((sx, sy)) = geometry.content_scale {
                    let (cx, cy) = bounds.center();
                    layer.scale_about(sx, sy, cx, cy);
                }
                drawable.draw(&mut layer, &bounds)?;
                layer.restore();
            }
            if geometry.mode != ShapeMode::Rectangle {
                self.mask_strategy.apply(&mut layer, geometry)?;
            }
        }

        if let Some(border) = &geometry.border {
            canvas.save();
            canvas.set_stroke_style_color(self.config.border_color);
            canvas.set_line_width(geometry.border_width);
            canvas.stroke_path2d(&border.to_path());
            canvas.restore();
        }

        self.dirty = false;
        Ok(())
    }

    /// Draw one frame onto a new transparent canvas the size of the view.
    pub fn render(&mut self) -> ShapeViewResult<Canvas> {
        let mut canvas = Canvas::new(self.width(), self.height())?;
        self.draw(&mut canvas)?;
        Ok(canvas)
    }
}

impl std::fmt::Debug for ShapedImageView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapedImageView")
            .field("config", &self.config)
            .field("mask_strategy", &self.mask_strategy)
            .field("has_drawable", &self.drawable.is_some())
            .field("geometry", &self.geometry)
            .field("dirty", &self.dirty)
            .finish()
    }
}
