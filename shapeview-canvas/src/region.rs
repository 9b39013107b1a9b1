//! Coverage regions and boolean operations between them.
//!
//! tiny-skia has no path boolean operations, so the difference of two paths
//! is computed on their rasterized coverage instead. A region is a device
//! space, canvas sized coverage mask.

use crate::error::{CanvasError, CanvasResult};
use crate::geometry::RectParams;
use crate::path2d::Path2D;
use tiny_skia::{Mask, Transform};

/// Antialiased coverage of a set of pixels, sized to a canvas.
#[derive(Clone)]
pub struct Region {
    mask: Mask,
}

impl std::fmt::Debug for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Region")
            .field("width", &self.mask.width())
            .field("height", &self.mask.height())
            .finish()
    }
}

impl Region {
    /// Empty region for a `width` x `height` surface.
    pub fn empty(width: u32, height: u32) -> CanvasResult<Self> {
        let mask = Mask::new(width, height).ok_or(CanvasError::InvalidDimensions { width, height })?;
        Ok(Self { mask })
    }

    /// Region covered by filling `path` with the non-zero rule.
    pub fn from_path(path: &Path2D, width: u32, height: u32) -> CanvasResult<Self> {
        Self::rasterize(path, true, Transform::identity(), width, height)
    }

    /// Region covered by filling `path` after mapping it through `transform`.
    pub fn from_path_transformed(
        path: &Path2D,
        transform: Transform,
        width: u32,
        height: u32,
    ) -> CanvasResult<Self> {
        Self::rasterize(path, true, transform, width, height)
    }

    /// Region covered by a whole-pixel rectangle, without edge antialiasing.
    pub(crate) fn from_int_rect(rect: tiny_skia::IntRect, width: u32, height: u32) -> CanvasResult<Self> {
        let path = Path2D::from_rect(&RectParams {
            x: rect.x() as f32,
            y: rect.y() as f32,
            width: rect.width() as f32,
            height: rect.height() as f32,
        });
        Self::rasterize(&path, false, Transform::identity(), width, height)
    }

    pub(crate) fn rasterize(
        path: &Path2D,
        anti_alias: bool,
        transform: Transform,
        width: u32,
        height: u32,
    ) -> CanvasResult<Self> {
        let mut region = Self::empty(width, height)?;
        if let Some(p) = path.to_path() {
            region
                .mask
                .fill_path(&p, tiny_skia::FillRule::Winding, anti_alias, transform);
        }
        Ok(region)
    }

    /// Region covered by a rectangle.
    pub fn from_rect(rect: &RectParams, width: u32, height: u32) -> CanvasResult<Self> {
        Self::from_path(&Path2D::from_rect(rect), width, height)
    }

    /// Pixels covered by `self` but not by `other`.
    pub fn difference(&self, other: &Region) -> Region {
        self.combine(other, |a, b| mul_div255(a, 255 - b))
    }

    /// Pixels covered by both `self` and `other`.
    pub fn intersect(&self, other: &Region) -> Region {
        self.combine(other, mul_div255)
    }

    /// Every pixel of the surface, with the coverage of `self` removed.
    pub fn complement(&self) -> Region {
        self.map(|c| 255 - c)
    }

    /// Coverage multiplied by `alpha` / 255.
    pub fn scaled(&self, alpha: u8) -> Region {
        self.map(|c| mul_div255(c, alpha))
    }

    /// Coverage at a pixel, 0 when outside the surface.
    pub fn coverage(&self, x: u32, y: u32) -> u8 {
        if x >= self.mask.width() || y >= self.mask.height() {
            return 0;
        }
        self.mask.data()[(y * self.mask.width() + x) as usize]
    }

    /// True when no pixel has any coverage.
    pub fn is_empty(&self) -> bool {
        self.mask.data().iter().all(|&c| c == 0)
    }

    pub fn width(&self) -> u32 {
        self.mask.width()
    }

    pub fn height(&self) -> u32 {
        self.mask.height()
    }

    pub(crate) fn mask(&self) -> &Mask {
        &self.mask
    }

    fn map(&self, op: impl Fn(u8) -> u8) -> Region {
        let mut mask = self.mask.clone();
        for c in mask.data_mut() {
            *c = op(*c);
        }
        Region { mask }
    }

    fn combine(&self, other: &Region, op: impl Fn(u8, u8) -> u8) -> Region {
        let mut mask = self.mask.clone();
        let other_data = other.mask.data();
        for (i, c) in mask.data_mut().iter_mut().enumerate() {
            // Regions of a different size treat missing pixels as uncovered
            let b = other_data.get(i).copied().unwrap_or(0);
            *c = op(*c, b);
        }
        Region { mask }
    }
}

fn mul_div255(a: u8, b: u8) -> u8 {
    ((a as u32 * b as u32 + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CircleParams;

    fn rect(x: f32, y: f32, width: f32, height: f32) -> RectParams {
        RectParams {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn test_rect_region_coverage() {
        let region = Region::from_rect(&rect(10.0, 10.0, 20.0, 20.0), 50, 50).unwrap();
        assert_eq!(region.coverage(15, 15), 255);
        assert_eq!(region.coverage(5, 5), 0);
        assert_eq!(region.coverage(30, 30), 0);
        assert_eq!(region.coverage(500, 5), 0);
    }

    #[test]
    fn test_empty_path_region() {
        let region = Region::from_path(&Path2D::new(), 20, 20).unwrap();
        assert!(region.is_empty());
    }

    #[test]
    fn test_difference_removes_inner_shape() {
        let outer = Region::from_rect(&rect(0.0, 0.0, 100.0, 100.0), 100, 100).unwrap();
        let inner = Region::from_path(
            &Path2D::from_circle(&CircleParams {
                x: 50.0,
                y: 50.0,
                radius: 30.0,
            }),
            100,
            100,
        )
        .unwrap();

        let diff = outer.difference(&inner);
        assert_eq!(diff.coverage(50, 50), 0);
        assert_eq!(diff.coverage(2, 2), 255);
        // Antialiased edges complement each other
        for x in 0..100 {
            let sum = diff.coverage(x, 50) as u32 + inner.coverage(x, 50) as u32;
            assert!((254..=256).contains(&sum), "x={} sum={}", x, sum);
        }
    }

    #[test]
    fn test_intersect_keeps_overlap() {
        let a = Region::from_rect(&rect(0.0, 0.0, 60.0, 60.0), 100, 100).unwrap();
        let b = Region::from_rect(&rect(40.0, 40.0, 60.0, 60.0), 100, 100).unwrap();
        let both = a.intersect(&b);
        assert_eq!(both.coverage(50, 50), 255);
        assert_eq!(both.coverage(20, 20), 0);
        assert_eq!(both.coverage(80, 80), 0);
    }

    #[test]
    fn test_complement_of_antialiased_circle() {
        let circle = Region::from_path(
            &Path2D::from_circle(&CircleParams {
                x: 20.0,
                y: 20.0,
                radius: 12.5,
            }),
            40,
            40,
        )
        .unwrap();
        let outside = circle.complement();
        assert_eq!(outside.coverage(20, 20), 0);
        assert_eq!(outside.coverage(0, 0), 255);
        for x in 0..40 {
            assert_eq!(outside.coverage(x, 20) as u32 + circle.coverage(x, 20) as u32, 255);
        }
        // A full surface minus the shape is the same coverage
        let full = Region::from_rect(&rect(0.0, 0.0, 40.0, 40.0), 40, 40).unwrap();
        assert_eq!(full.difference(&circle).mask().data(), outside.mask().data());
    }

    #[test]
    fn test_scaled_coverage() {
        let region = Region::from_rect(&rect(0.0, 0.0, 10.0, 10.0), 10, 10).unwrap();
        assert_eq!(region.scaled(255).coverage(5, 5), 255);
        assert_eq!(region.scaled(128).coverage(5, 5), 128);
        assert_eq!(region.scaled(0).coverage(5, 5), 0);
    }

    #[test]
    fn test_invalid_region_size() {
        assert!(matches!(
            Region::empty(0, 10),
            Err(CanvasError::InvalidDimensions { .. })
        ));
    }
}
