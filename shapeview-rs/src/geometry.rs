//! Clip and border geometry derived from a configuration and view size.

use crate::config::ShapeConfig;
use crate::radii::CornerRadii;
use shapeview_canvas::{CircleParams, Path2D, RectParams, RoundRectParams};

/// Which outline the view clips its content to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeMode {
    Circle,
    /// At least one corner is rounded.
    RoundedRect,
    /// No rounding at all; content is never masked.
    Rectangle,
}

impl ShapeMode {
    pub fn for_config(config: &ShapeConfig) -> Self {
        if config.radii().any_positive() {
            ShapeMode::RoundedRect
        } else if config.circular {
            ShapeMode::Circle
        } else {
            ShapeMode::Rectangle
        }
    }
}

/// A closed outline in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { cx: f32, cy: f32, radius: f32 },
    RoundRect { rect: RectParams, radii: CornerRadii },
}

impl Shape {
    pub fn to_path(&self) -> Path2D {
        match *self {
            Shape::Circle { cx, cy, radius } => Path2D::from_circle(&CircleParams {
                x: cx,
                y: cy,
                radius,
            }),
            Shape::RoundRect { rect, radii } => {
                Path2D::from_round_rect(&RoundRectParams::new(&rect, radii.to_array()))
            }
        }
    }
}

/// Everything the view needs to draw one frame.
///
/// Built in one piece from the configuration and size, and replaced as a
/// whole whenever either changes.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometrySnapshot {
    pub width: u32,
    pub height: u32,
    pub mode: ShapeMode,
    /// Area the content is clipped to; also the compositing layer bounds.
    pub content_rect: RectParams,
    pub clip: Shape,
    /// Outline to stroke, when a border is configured.
    pub border: Option<Shape>,
    pub border_width: f32,
    pub clip_radii: CornerRadii,
    pub border_radii: CornerRadii,
    /// Content scale about the surface center, when the border is inset.
    pub content_scale: Option<(f32, f32)>,
}

impl GeometrySnapshot {
    pub fn compute(config: &ShapeConfig, width: u32, height: u32) -> Self {
        let mode = ShapeMode::for_config(config);
        let border = config.effective_border_width();
        let overlaps = config.border_overlaps_content;
        let inset = border > 0.0 && !overlaps;

        let w = width as f32;
        let h = height as f32;
        let bounds = RectParams {
            x: 0.0,
            y: 0.0,
            width: w,
            height: h,
        };
        let (cx, cy) = bounds.center();
        let min_side = w.min(h);

        let border_radii = config.radii();
        let clip_radii = border_radii.clip_radii(border, overlaps);

        let mut content_rect = match mode {
            ShapeMode::Circle => RectParams {
                x: cx - min_side / 2.0,
                y: cy - min_side / 2.0,
                width: min_side,
                height: min_side,
            },
            ShapeMode::RoundedRect | ShapeMode::Rectangle => bounds,
        };
        if inset {
            content_rect = content_rect.inset(border);
        }

        let clip = match mode {
            ShapeMode::Circle => {
                let (ccx, ccy) = content_rect.center();
                Shape::Circle {
                    cx: ccx,
                    cy: ccy,
                    radius: content_rect.width.min(content_rect.height) / 2.0,
                }
            }
            ShapeMode::RoundedRect | ShapeMode::Rectangle => Shape::RoundRect {
                rect: content_rect,
                radii: clip_radii,
            },
        };

        let border_shape = (border > 0.0).then(|| match mode {
            ShapeMode::Circle => Shape::Circle {
                cx,
                cy,
                radius: min_side / 2.0 - border / 2.0,
            },
            ShapeMode::RoundedRect | ShapeMode::Rectangle => Shape::RoundRect {
                rect: bounds.inset(border / 2.0),
                radii: border_radii,
            },
        });

        let content_scale = (inset && w > 0.0 && h > 0.0)
            .then(|| ((w - 2.0 * border) / w, (h - 2.0 * border) / h));

        log::debug!(
            target: "shapeview",
            "geometry {}x{} {:?} content {:?} clip radii {:?}",
            width, height, mode, content_rect, clip_radii
        );

        Self {
            width,
            height,
            mode,
            content_rect,
            clip,
            border: border_shape,
            border_width: border,
            clip_radii,
            border_radii,
            content_scale,
        }
    }

    /// True when the surface has no area to draw into.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
