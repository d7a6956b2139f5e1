use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};

use crate::shape::ShapeKind;

/// Smallest and largest brush diameter the tools panel slider offers
pub const BRUSH_DIAMETER_RANGE: std::ops::RangeInclusive<f32> = 1.0..=50.0;

/// Size given to every newly placed shape, per variant.
///
/// Sizes are fixed once a shape exists, so changing these only affects shapes
/// created afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeDefaults {
    pub circle_radius: f32,
    pub rectangle_size: Vec2,
    pub triangle_size: f32,
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        Self {
            circle_radius: 25.0,
            rectangle_size: Vec2::new(60.0, 40.0),
            triangle_size: 50.0,
        }
    }
}

/// The user's current tool selections, persisted between sessions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct ToolSettings {
    pub shape_tool: ShapeKind,
    pub brush_mode: bool,
    pub color: Color32,
    pub brush_diameter: f32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            shape_tool: ShapeKind::Rectangle,
            brush_mode: false,
            color: Color32::RED,
            brush_diameter: 5.0,
        }
    }
}

/// Clamp a requested brush diameter into the supported range
pub fn clamp_brush_diameter(diameter: f32) -> f32 {
    if diameter.is_nan() {
        return *BRUSH_DIAMETER_RANGE.start();
    }
    diameter.clamp(*BRUSH_DIAMETER_RANGE.start(), *BRUSH_DIAMETER_RANGE.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_startup_state() {
        let settings = ToolSettings::default();
        assert_eq!(settings.shape_tool, ShapeKind::Rectangle);
        assert!(!settings.brush_mode);
        assert_eq!(settings.color, Color32::RED);
        assert_eq!(settings.brush_diameter, 5.0);
    }

    #[test]
    fn test_brush_diameter_clamping() {
        assert_eq!(clamp_brush_diameter(0.0), 1.0);
        assert_eq!(clamp_brush_diameter(12.5), 12.5);
        assert_eq!(clamp_brush_diameter(500.0), 50.0);
        assert_eq!(clamp_brush_diameter(f32::NAN), 1.0);
    }

    #[test]
    fn test_settings_restore_missing_fields_from_defaults() {
        let settings: ToolSettings =
            serde_json::from_str(r#"{"shape_tool":"Circle","brush_mode":true}"#).unwrap();
        assert_eq!(settings.shape_tool, ShapeKind::Circle);
        assert!(settings.brush_mode);
        assert_eq!(settings.color, Color32::RED);
        assert_eq!(settings.brush_diameter, 5.0);
    }
}
