//! Corner radius arithmetic.

/// Corner radii in order top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii([f32; 4]);

impl CornerRadii {
    pub fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self([top_left, top_right, bottom_right, bottom_left])
    }

    /// The same radius on every corner.
    pub fn uniform(radius: f32) -> Self {
        Self([radius; 4])
    }

    pub fn top_left(&self) -> f32 {
        self.0[0]
    }

    pub fn top_right(&self) -> f32 {
        self.0[1]
    }

    pub fn bottom_right(&self) -> f32 {
        self.0[2]
    }

    pub fn bottom_left(&self) -> f32 {
        self.0[3]
    }

    pub fn to_array(self) -> [f32; 4] {
        self.0
    }

    /// True when at least one corner is rounded.
    pub fn any_positive(&self) -> bool {
        self.0.iter().any(|&r| r > 0.0)
    }

    /// Radii for the clip shape given a border of width `border`.
    ///
    /// Rounded corners grow by half the border when it overlaps the content
    /// and shrink by half of it (never below zero) when it does not. Square
    /// corners stay square either way.
    pub fn clip_radii(&self, border: f32, overlaps: bool) -> Self {
        let half = border.max(0.0) / 2.0;
        Self(self.0.map(|r| {
            if r <= 0.0 {
                0.0
            } else if overlaps {
                r + half
            } else {
                (r - half).max(0.0)
            }
        }))
    }
}

impl From<[f32; 4]> for CornerRadii {
    fn from(radii: [f32; 4]) -> Self {
        Self(radii)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1.0)]
    #[case(20.0)]
    #[case(333.5)]
    fn test_no_border_keeps_radius(#[case] r: f32) {
        let clip = CornerRadii::uniform(r).clip_radii(0.0, false);
        assert_eq!(clip.to_array(), [r; 4]);
        let clip = CornerRadii::uniform(r).clip_radii(0.0, true);
        assert_eq!(clip.to_array(), [r; 4]);
    }

    #[rstest]
    #[case::overlap(20.0, 4.0, true, 22.0)]
    #[case::inset(20.0, 4.0, false, 18.0)]
    #[case::inset_clamped(1.0, 6.0, false, 0.0)]
    #[case::overlap_wide(5.0, 10.0, true, 10.0)]
    fn test_clip_radius_adjustment(
        #[case] r: f32,
        #[case] border: f32,
        #[case] overlaps: bool,
        #[case] expected: f32,
    ) {
        let clip = CornerRadii::uniform(r).clip_radii(border, overlaps);
        assert_eq!(clip.to_array(), [expected; 4]);
    }

    #[test]
    fn test_square_corners_stay_square() {
        let radii = CornerRadii::new(30.0, 0.0, 0.0, 10.0);
        assert_eq!(radii.clip_radii(4.0, true).to_array(), [32.0, 0.0, 0.0, 12.0]);
        assert_eq!(radii.clip_radii(4.0, false).to_array(), [28.0, 0.0, 0.0, 8.0]);
    }

    #[test]
    fn test_negative_radius_is_square() {
        let radii = CornerRadii::new(-5.0, 10.0, 0.0, 0.0);
        assert_eq!(radii.clip_radii(2.0, true).to_array(), [0.0, 11.0, 0.0, 0.0]);
        assert!(radii.any_positive());
        assert!(!CornerRadii::new(-1.0, 0.0, 0.0, 0.0).any_positive());
    }

    #[test]
    fn test_accessors() {
        let radii = CornerRadii::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(radii.top_left(), 1.0);
        assert_eq!(radii.top_right(), 2.0);
        assert_eq!(radii.bottom_right(), 3.0);
        assert_eq!(radii.bottom_left(), 4.0);
    }
}
