//! Canvas rendering context implementation.

mod drawing;
mod image_ops;
mod layer;
mod transform;

pub use layer::LayerGuard;

use crate::drawing_state::DrawingState;
use crate::error::{CanvasError, CanvasResult};
use crate::geometry::{CanvasColor, RectParams};
use crate::region::Region;
use crate::style::CompositeOp;
use tiny_skia::{IntRect, Pixmap, Transform};

/// Maximum canvas dimension (same as Chrome).
const MAX_DIMENSION: u32 = 32767;

/// An offscreen surface opened by `save_layer`.
struct Layer {
    pixmap: Pixmap,
    /// Device-space bounds the layer is clipped to; `None` when the
    /// requested bounds do not intersect the canvas.
    bounds: Option<IntRect>,
}

/// A saved drawing state, and whether saving it opened a layer.
struct SavedState {
    state: DrawingState,
    opens_layer: bool,
}

/// Raster canvas with a Canvas 2D style state stack and compositing layers.
pub struct Canvas {
    /// Width of the canvas in pixels.
    pub(crate) width: u32,
    /// Height of the canvas in pixels.
    pub(crate) height: u32,
    /// Base pixel buffer.
    pub(crate) pixmap: Pixmap,
    /// Open layers, innermost last. Drawing goes to the innermost one.
    layers: Vec<Layer>,
    /// Current drawing state.
    pub(crate) state: DrawingState,
    /// Stack of saved drawing states.
    state_stack: Vec<SavedState>,
}

impl Canvas {
    /// Create a new transparent canvas with the specified dimensions.
    pub fn new(width: u32, height: u32) -> CanvasResult<Self> {
        // Validate dimensions
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(CanvasError::InvalidDimensions { width, height });
        }

        let pixmap =
            Pixmap::new(width, height).ok_or(CanvasError::InvalidDimensions { width, height })?;

        Ok(Self {
            width,
            height,
            pixmap,
            layers: Vec::new(),
            state: DrawingState::default(),
            state_stack: Vec::new(),
        })
    }

    /// Get canvas width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get canvas height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixmap that drawing operations currently target.
    pub(crate) fn target_mut(&mut self) -> &mut Pixmap {
        match self.layers.last_mut() {
            Some(layer) => &mut layer.pixmap,
            None => &mut self.pixmap,
        }
    }

    // --- State stack ---

    /// Save the current drawing state.
    pub fn save(&mut self) {
        log::debug!(target: "canvas", "save");
        self.state_stack.push(SavedState {
            state: self.state.clone(),
            opens_layer: false,
        });
    }

    /// Save the current drawing state and redirect drawing into a fresh
    /// transparent layer clipped to `bounds`.
    ///
    /// `bounds` are in user space and are rounded out to whole device pixels.
    /// The layer is composited source-over onto the surface below when the
    /// matching `restore` runs. Returns the save count before the call, for
    /// use with `restore_to_count`.
    pub fn save_layer(&mut self, bounds: &RectParams) -> CanvasResult<usize> {
        log::debug!(
            target: "canvas",
            "saveLayer {} {} {} {}",
            bounds.x, bounds.y, bounds.width, bounds.height
        );
        let count = self.save_count();
        let pixmap = Pixmap::new(self.width, self.height).ok_or(CanvasError::InvalidDimensions {
            width: self.width,
            height: self.height,
        })?;

        let device_bounds = self.device_bounds(bounds);
        let bounds_region = device_bounds
            .map(|b| Region::from_int_rect(b, self.width, self.height))
            .transpose()?;

        self.state_stack.push(SavedState {
            state: self.state.clone(),
            opens_layer: true,
        });
        self.layers.push(Layer {
            pixmap,
            bounds: device_bounds,
        });
        if let Some(region) = bounds_region {
            self.intersect_clip(region);
        }
        Ok(count)
    }

    /// Open a layer that is restored when the returned guard is dropped.
    pub fn layer(&mut self, bounds: &RectParams) -> CanvasResult<LayerGuard<'_>> {
        let count = self.save_layer(bounds)?;
        Ok(LayerGuard::new(self, count))
    }

    /// Restore the previously saved drawing state, compositing the layer it
    /// opened, if any. Does nothing when the stack is empty.
    pub fn restore(&mut self) {
        log::debug!(target: "canvas", "restore");
        let Some(saved) = self.state_stack.pop() else {
            log::warn!(target: "canvas", "restore called with an empty save stack");
            return;
        };
        self.state = saved.state;
        if saved.opens_layer {
            if let Some(layer) = self.layers.pop() {
                self.composite_layer(layer);
            }
        }
    }

    /// Restore until the save stack is `count` deep.
    pub fn restore_to_count(&mut self, count: usize) {
        while self.state_stack.len() > count {
            self.restore();
        }
    }

    /// Number of saved states on the stack.
    pub fn save_count(&self) -> usize {
        self.state_stack.len()
    }

    /// Number of layers currently open.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Whole device pixels touched by `rect` under the current transform,
    /// without edge antialiasing. This is the area a layer opened with the
    /// same bounds can hold.
    pub fn pixel_region(&self, rect: &RectParams) -> CanvasResult<Region> {
        match self.device_bounds(rect) {
            Some(bounds) => Region::from_int_rect(bounds, self.width, self.height),
            None => Region::empty(self.width, self.height),
        }
    }

    fn device_bounds(&self, rect: &RectParams) -> Option<IntRect> {
        self.map_rect(rect)
            .and_then(|r| r.round_out(self.width, self.height))
    }

    fn composite_layer(&mut self, layer: Layer) {
        let Some(bounds) = layer.bounds else {
            return;
        };
        let Ok(mut region) = Region::from_int_rect(bounds, self.width, self.height) else {
            return;
        };
        if let Some(clip) = &self.state.clip {
            region = region.intersect(clip);
        }

        let paint = tiny_skia::PixmapPaint {
            opacity: 1.0,
            blend_mode: tiny_skia::BlendMode::SourceOver,
            quality: tiny_skia::FilterQuality::Nearest,
        };
        self.target_mut().draw_pixmap(
            0,
            0,
            layer.pixmap.as_ref(),
            &paint,
            Transform::identity(),
            Some(region.mask()),
        );
    }

    // --- Style setters ---

    /// Set the fill style from a CSS color string.
    pub fn set_fill_style(&mut self, style: &str) -> CanvasResult<()> {
        let color: CanvasColor = style.parse()?;
        self.state.fill_style = color.into();
        Ok(())
    }

    /// Set the fill style from a CanvasColor.
    pub fn set_fill_style_color(&mut self, color: CanvasColor) {
        self.state.fill_style = color.into();
    }

    /// Set the stroke style from a CanvasColor.
    pub fn set_stroke_style_color(&mut self, color: CanvasColor) {
        self.state.stroke_style = color.into();
    }

    /// Set the line width.
    /// Ignores non-finite or values <= 0.
    pub fn set_line_width(&mut self, width: f32) {
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    /// Set the global composite operation.
    pub fn set_composite_op(&mut self, op: CompositeOp) {
        self.state.global_composite_operation = op;
    }

    /// Get the global composite operation.
    pub fn composite_op(&self) -> CompositeOp {
        self.state.global_composite_operation
    }
}
