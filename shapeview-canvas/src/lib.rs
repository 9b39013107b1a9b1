//! Raster drawing surface built on tiny-skia.
//!
//! This crate provides the small slice of a Canvas 2D style API that shaped
//! image views need:
//! - paths with per-corner rounded rectangles and circles ([`Path2D`])
//! - a save/restore state stack with compositing layers ([`Canvas::save_layer`],
//!   [`LayerGuard`])
//! - Porter-Duff composite operations ([`CompositeOp`])
//! - coverage regions with difference and intersection ([`Region`])
//!
//! # Example
//!
//! ```rust,ignore
//! use shapeview_canvas::{Canvas, RectParams};
//!
//! let mut canvas = Canvas::new(400, 300)?;
//! canvas.set_fill_style("#ff0000")?;
//! canvas.fill_rect(&RectParams { x: 10.0, y: 10.0, width: 100.0, height: 50.0 });
//! let png_data = canvas.to_png(None)?;
//! ```

mod context;
mod drawing_state;
mod error;
mod geometry;
mod path2d;
mod region;
mod style;

// Re-export public API
pub use context::{Canvas, LayerGuard};
pub use error::{CanvasError, CanvasResult};
pub use geometry::{CanvasColor, CanvasImageDataRef, CircleParams, RectParams, RoundRectParams};
pub use path2d::Path2D;
pub use region::Region;
pub use style::CompositeOp;

/// Re-exported so callers can name path segments and transforms.
pub use tiny_skia::{PathSegment, Transform};
