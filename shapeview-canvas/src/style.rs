//! Style types and enums for canvas operations.

/// Porter-Duff composite operations used when painting onto the canvas.
///
/// Names follow the Canvas 2D `globalCompositeOperation` keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeOp {
    #[default]
    SourceOver,
    /// Keep destination pixels where the source is opaque.
    DestinationIn,
    /// Erase destination pixels where the source is opaque.
    DestinationOut,
}

impl From<CompositeOp> for tiny_skia::BlendMode {
    fn from(op: CompositeOp) -> Self {
        match op {
            CompositeOp::SourceOver => tiny_skia::BlendMode::SourceOver,
            CompositeOp::DestinationIn => tiny_skia::BlendMode::DestinationIn,
            CompositeOp::DestinationOut => tiny_skia::BlendMode::DestinationOut,
        }
    }
}
