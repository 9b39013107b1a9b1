//! Image view that clips its content to a circle or to a rectangle with
//! independently rounded corners, and optionally strokes a border around it.
//!
//! The border either overlaps the content or the content is shrunk to make
//! room for it. Rendering goes through [`shapeview_canvas::Canvas`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shapeview_rs::{load_bitmap_file, BackendCapabilities, ShapeConfig, ShapedImageView};
//!
//! let config = ShapeConfig { corner_radius: 20.0, border_width: 4.0, ..Default::default() };
//! let mut view = ShapedImageView::new(config, BackendCapabilities::default())
//!     .with_drawable(load_bitmap_file("avatar.png")?)
//!     .with_size(200, 100);
//! let png = view.render()?.to_png(None)?;
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod geometry;
pub mod image_loading;
pub mod mask;
pub mod radii;
pub mod view;

pub use config::{BackendCapabilities, ShapeConfig, DEFAULT_BORDER_COLOR};
pub use content::{Bitmap, ColorDrawable, Drawable, ScaleType};
pub use error::{ShapeViewError, ShapeViewResult};
pub use geometry::{GeometrySnapshot, Shape, ShapeMode};
pub use image_loading::{load_bitmap, load_bitmap_file};
pub use mask::MaskStrategy;
pub use radii::CornerRadii;
pub use view::ShapedImageView;

pub use shapeview_canvas;
