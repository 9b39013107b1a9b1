//! Clip masking strategies.
//!
//! Both strategies run inside the view's compositing layer, so they only
//! touch the content drawn for the current frame.

use crate::config::BackendCapabilities;
use crate::geometry::GeometrySnapshot;
use shapeview_canvas::{Canvas, CanvasResult, CompositeOp, Path2D, Region};

/// How pixels outside the clip shape are removed from the layer.
///
/// Both strategies scale each layer pixel by the clip coverage at that
/// pixel, so they produce the same bytes inside the layer bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskStrategy {
    /// Fill `content − clip` (a path difference) with `destination-out`.
    EraseOutside,
    /// Render the clip alone onto a scratch coverage surface and composite
    /// it with `destination-in`.
    KeepInside,
}

impl MaskStrategy {
    pub fn for_capabilities(capabilities: &BackendCapabilities) -> Self {
        if capabilities.path_ops {
            MaskStrategy::EraseOutside
        } else {
            MaskStrategy::KeepInside
        }
    }

    /// Mask the content currently on `canvas` to the clip shape of
    /// `geometry`, in the canvas's current user space. The canvas state is
    /// left as it was found.
    pub fn apply(&self, canvas: &mut Canvas, geometry: &GeometrySnapshot) -> CanvasResult<()> {
        log::debug!(target: "shapeview", "mask {:?} {:?}", self, geometry.clip);
        let clip = geometry.clip.to_path();
        canvas.save();
        let result = match self {
            MaskStrategy::EraseOutside => erase_outside(canvas, geometry, &clip),
            MaskStrategy::KeepInside => keep_inside(canvas, &clip),
        };
        canvas.restore();
        result
    }
}

fn clip_region(canvas: &Canvas, clip: &Path2D) -> CanvasResult<Region> {
    Region::from_path_transformed(clip, canvas.get_transform(), canvas.width(), canvas.height())
}

fn erase_outside(canvas: &mut Canvas, geometry: &GeometrySnapshot, clip: &Path2D) -> CanvasResult<()> {
    // Erase over the layer's whole-pixel bounds, not the fractional rect
    let outer = canvas.pixel_region(&geometry.content_rect)?;
    let inside = clip_region(canvas, clip)?;

    canvas.set_composite_op(CompositeOp::DestinationOut);
    canvas.fill_region(&outer.difference(&inside));
    Ok(())
}

fn keep_inside(canvas: &mut Canvas, clip: &Path2D) -> CanvasResult<()> {
    let scratch = clip_region(canvas, clip)?;

    canvas.set_composite_op(CompositeOp::DestinationIn);
    canvas.fill_region(&scratch);
    Ok(())
}
