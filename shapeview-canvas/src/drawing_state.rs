//! Drawing state that can be saved and restored.

use crate::region::Region;
use crate::style::CompositeOp;
use tiny_skia::Transform;

/// Drawing state that can be saved and restored.
#[derive(Debug, Clone)]
pub(crate) struct DrawingState {
    /// Current fill color.
    pub fill_style: tiny_skia::Color,
    /// Current stroke color.
    pub stroke_style: tiny_skia::Color,
    /// Current line width.
    pub line_width: f32,
    /// Current global composite operation.
    pub global_composite_operation: CompositeOp,
    /// Current transform matrix.
    pub transform: Transform,
    /// Device-space clip coverage, the intersection of every clip applied
    /// since the state was created.
    pub clip: Option<Region>,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self {
            fill_style: tiny_skia::Color::BLACK,
            stroke_style: tiny_skia::Color::BLACK,
            line_width: 1.0,
            global_composite_operation: CompositeOp::SourceOver,
            transform: Transform::identity(),
            clip: None,
        }
    }
}
