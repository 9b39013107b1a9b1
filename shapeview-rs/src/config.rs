//! View configuration and backend capabilities.

use crate::error::ShapeViewResult;
use crate::radii::CornerRadii;
use serde::{Deserialize, Serialize};
use shapeview_canvas::CanvasColor;
use std::path::Path;

/// Default border color: white at alpha 0x60.
pub const DEFAULT_BORDER_COLOR: CanvasColor = CanvasColor::from_argb32(0x60ff_ffff);

/// How the view shapes its content.
///
/// Field names also accept the layout attribute names used by the widget
/// this view reproduces (`round`, `corner`, `corner_top_left`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    /// Clip to a circle. Ignored when any corner radius is positive.
    #[serde(alias = "round")]
    pub circular: bool,
    /// Radius applied to all four corners. Wins over the per-corner values
    /// when positive.
    #[serde(alias = "corner")]
    pub corner_radius: f32,
    #[serde(alias = "corner_top_left")]
    pub top_left_radius: f32,
    #[serde(alias = "corner_top_right")]
    pub top_right_radius: f32,
    #[serde(alias = "corner_bottom_right")]
    pub bottom_right_radius: f32,
    #[serde(alias = "corner_bottom_left")]
    pub bottom_left_radius: f32,
    /// Border stroke width. Zero or negative means no border.
    pub border_width: f32,
    #[serde(with = "color_serde")]
    pub border_color: CanvasColor,
    /// Draw the border over full-size content instead of shrinking the
    /// content to make room for it.
    #[serde(alias = "border_over")]
    pub border_overlaps_content: bool,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            circular: false,
            corner_radius: 0.0,
            top_left_radius: 0.0,
            top_right_radius: 0.0,
            bottom_right_radius: 0.0,
            bottom_left_radius: 0.0,
            border_width: 0.0,
            border_color: DEFAULT_BORDER_COLOR,
            border_overlaps_content: false,
        }
    }
}

impl ShapeConfig {
    /// Parse a JSON attribute document.
    pub fn from_json_str(json: &str) -> ShapeViewResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON attribute file.
    pub fn from_json_file(path: impl AsRef<Path>) -> ShapeViewResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The configured corner radii, with a positive `corner_radius`
    /// broadcast to every corner.
    pub fn radii(&self) -> CornerRadii {
        if self.corner_radius > 0.0 {
            CornerRadii::uniform(self.corner_radius)
        } else {
            CornerRadii::new(
                self.top_left_radius,
                self.top_right_radius,
                self.bottom_right_radius,
                self.bottom_left_radius,
            )
        }
    }

    /// Border width, or 0 when no border should be drawn.
    pub fn effective_border_width(&self) -> f32 {
        if self.border_width.is_finite() && self.border_width > 0.0 {
            self.border_width
        } else {
            0.0
        }
    }
}

/// What the rendering backend supports, injected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendCapabilities {
    /// Boolean path operations (difference) are available.
    pub path_ops: bool,
}

impl Default for BackendCapabilities {
    fn default() -> Self {
        Self { path_ops: true }
    }
}

impl BackendCapabilities {
    /// A backend without path boolean operations.
    pub fn legacy() -> Self {
        Self { path_ops: false }
    }
}

/// Colors are written as CSS hex strings and read from any CSS color string
/// or from a packed `0xAARRGGBB` integer.
mod color_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use shapeview_canvas::CanvasColor;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ColorRepr {
        Css(String),
        Argb(u32),
    }

    pub fn serialize<S: Serializer>(color: &CanvasColor, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&color.to_css_hex())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<CanvasColor, D::Error> {
        match ColorRepr::deserialize(deserializer)? {
            ColorRepr::Css(s) => s.parse().map_err(serde::de::Error::custom),
            ColorRepr::Argb(argb) => Ok(CanvasColor::from_argb32(argb)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShapeConfig::default();
        assert!(!config.circular);
        assert_eq!(config.radii(), CornerRadii::uniform(0.0));
        assert_eq!(config.border_color, CanvasColor::from_rgba8(255, 255, 255, 0x60));
        assert_eq!(config.effective_border_width(), 0.0);
    }

    #[test]
    fn test_corner_radius_wins_over_per_corner() {
        let config = ShapeConfig {
            corner_radius: 12.0,
            top_left_radius: 40.0,
            ..Default::default()
        };
        assert_eq!(config.radii(), CornerRadii::uniform(12.0));
    }

    #[test]
    fn test_per_corner_order() {
        let config = ShapeConfig {
            top_left_radius: 1.0,
            top_right_radius: 2.0,
            bottom_right_radius: 3.0,
            bottom_left_radius: 4.0,
            ..Default::default()
        };
        assert_eq!(config.radii().to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_negative_border_is_no_border() {
        let config = ShapeConfig {
            border_width: -3.0,
            ..Default::default()
        };
        assert_eq!(config.effective_border_width(), 0.0);
    }

    #[test]
    fn test_json_with_attribute_names() {
        let config = ShapeConfig::from_json_str(
            r##"{
                "round": true,
                "corner_top_left": 8,
                "corner_bottom_right": 6.5,
                "border_over": true,
                "border_width": 3,
                "border_color": "#ff000080"
            }"##,
        )
        .unwrap();
        assert!(config.circular);
        assert_eq!(config.top_left_radius, 8.0);
        assert_eq!(config.bottom_right_radius, 6.5);
        assert!(config.border_overlaps_content);
        assert_eq!(config.border_width, 3.0);
        assert_eq!(config.border_color, CanvasColor::from_rgba8(255, 0, 0, 128));
    }

    #[test]
    fn test_json_with_field_names_and_argb_color() {
        let config = ShapeConfig::from_json_str(
            r#"{ "corner_radius": 20, "border_color": 4278190335 }"#,
        )
        .unwrap();
        assert_eq!(config.corner_radius, 20.0);
        assert_eq!(config.border_color, CanvasColor::from_rgba8(0, 0, 255, 255));
        // Unspecified fields keep their defaults
        assert!(!config.border_overlaps_content);
    }

    #[test]
    fn test_json_rejects_bad_color() {
        assert!(ShapeConfig::from_json_str(r#"{ "border_color": "nope" }"#).is_err());
    }

    #[test]
    fn test_json_serialize_round_trip() {
        let config = ShapeConfig {
            circular: true,
            border_width: 2.0,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"border_color\":\"#ffffff60\""));
        assert_eq!(ShapeConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attrs.json");
        std::fs::write(&path, r#"{ "corner": 10 }"#).unwrap();
        let config = ShapeConfig::from_json_file(&path).unwrap();
        assert_eq!(config.corner_radius, 10.0);

        assert!(ShapeConfig::from_json_file(dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_capabilities() {
        assert!(BackendCapabilities::default().path_ops);
        assert!(!BackendCapabilities::legacy().path_ops);
    }
}
