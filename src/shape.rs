use std::fmt;
use std::str::FromStr;

use egui::{Color32, Pos2, Vec2};
use serde::{Deserialize, Serialize};

use crate::config::ShapeDefaults;
use crate::error::CanvasError;
use crate::renderer::DrawCommand;

/// Stable identifier of a shape inside a [`crate::Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub(crate) usize);

/// The shape variants a user can place on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::Triangle,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Rectangle => "rectangle",
            Self::Triangle => "triangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "circle" => Ok(Self::Circle),
            "rectangle" => Ok(Self::Rectangle),
            "triangle" => Ok(Self::Triangle),
            _ => Err(CanvasError::UnknownTool(s.to_owned())),
        }
    }
}

/// Variant-specific size, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Circle { radius: f32 },
    Rectangle { size: Vec2 },
    /// Isosceles triangle with its apex up, `size` wide and `size` tall
    Triangle { size: f32 },
}

/// A filled shape placed on the canvas.
///
/// The anchor is the center for circles and triangles and the top-left
/// corner for rectangles.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: ShapeId,
    anchor: Pos2,
    color: Color32,
    geometry: Geometry,
}

impl Shape {
    pub(crate) fn new(
        id: ShapeId,
        kind: ShapeKind,
        anchor: Pos2,
        color: Color32,
        defaults: &ShapeDefaults,
    ) -> Self {
        let geometry = match kind {
            ShapeKind::Circle => Geometry::Circle {
                radius: defaults.circle_radius,
            },
            ShapeKind::Rectangle => Geometry::Rectangle {
                size: defaults.rectangle_size,
            },
            ShapeKind::Triangle => Geometry::Triangle {
                size: defaults.triangle_size,
            },
        };
        Self {
            id,
            anchor,
            color,
            geometry,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        match self.geometry {
            Geometry::Circle { .. } => ShapeKind::Circle,
            Geometry::Rectangle { .. } => ShapeKind::Rectangle,
            Geometry::Triangle { .. } => ShapeKind::Triangle,
        }
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub(crate) fn set_anchor(&mut self, anchor: Pos2) {
        self.anchor = anchor;
    }

    pub(crate) fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    /// Point-in-shape test used for selection. Boundaries are inclusive.
    ///
    /// Triangles are tested against their bounding square, not the drawn
    /// outline, so the empty corners beside the apex still select the shape.
    pub fn contains(&self, pos: Pos2) -> bool {
        let Pos2 { x, y } = self.anchor;
        match self.geometry {
            Geometry::Circle { radius } => {
                let dx = pos.x - x;
                let dy = pos.y - y;
                dx * dx + dy * dy <= radius * radius
            }
            Geometry::Rectangle { size } => {
                pos.x >= x && pos.x <= x + size.x && pos.y >= y && pos.y <= y + size.y
            }
            Geometry::Triangle { size } => {
                let half = size / 2.0;
                pos.x >= x - half && pos.x <= x + half && pos.y >= y - half && pos.y <= y + half
            }
        }
    }

    /// The primitive a draw sink needs to paint this shape
    pub fn draw_command(&self) -> DrawCommand {
        let Pos2 { x, y } = self.anchor;
        match self.geometry {
            Geometry::Circle { radius } => DrawCommand::Circle {
                center: self.anchor,
                radius,
                color: self.color,
            },
            Geometry::Rectangle { size } => DrawCommand::Rect {
                min: self.anchor,
                size,
                color: self.color,
            },
            Geometry::Triangle { size } => {
                let half = size / 2.0;
                DrawCommand::Polygon {
                    points: vec![
                        Pos2::new(x, y - half),
                        Pos2::new(x - half, y + half),
                        Pos2::new(x + half, y + half),
                    ],
                    color: self.color,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(kind: ShapeKind, x: f32, y: f32) -> Shape {
        Shape::new(
            ShapeId(1),
            kind,
            Pos2::new(x, y),
            Color32::RED,
            &ShapeDefaults::default(),
        )
    }

    #[test]
    fn test_kind_parsing_is_case_insensitive() {
        assert_eq!("Circle".parse::<ShapeKind>(), Ok(ShapeKind::Circle));
        assert_eq!("TRIANGLE".parse::<ShapeKind>(), Ok(ShapeKind::Triangle));
        assert_eq!("rectangle".parse::<ShapeKind>(), Ok(ShapeKind::Rectangle));
        assert_eq!(
            "hexagon".parse::<ShapeKind>(),
            Err(CanvasError::UnknownTool("hexagon".to_owned()))
        );
    }

    #[test]
    fn test_default_geometry() {
        assert_eq!(
            shape(ShapeKind::Circle, 0.0, 0.0).geometry(),
            Geometry::Circle { radius: 25.0 }
        );
        assert_eq!(
            shape(ShapeKind::Rectangle, 0.0, 0.0).geometry(),
            Geometry::Rectangle {
                size: Vec2::new(60.0, 40.0)
            }
        );
        assert_eq!(
            shape(ShapeKind::Triangle, 0.0, 0.0).geometry(),
            Geometry::Triangle { size: 50.0 }
        );
    }

    #[test]
    fn test_circle_boundary_is_inclusive() {
        let circle = shape(ShapeKind::Circle, 50.0, 50.0);
        assert!(circle.contains(Pos2::new(75.0, 50.0)));
        assert!(circle.contains(Pos2::new(50.0, 25.0)));
        assert!(!circle.contains(Pos2::new(75.01, 50.0)));
        // Inside the bounding box but outside the disc
        assert!(!circle.contains(Pos2::new(72.0, 72.0)));
    }

    #[test]
    fn test_rectangle_corners_are_inside() {
        let rect = shape(ShapeKind::Rectangle, 10.0, 20.0);
        assert!(rect.contains(Pos2::new(10.0, 20.0)));
        assert!(rect.contains(Pos2::new(70.0, 60.0)));
        assert!(!rect.contains(Pos2::new(70.5, 60.0)));
        assert!(!rect.contains(Pos2::new(9.5, 20.0)));
    }

    #[test]
    fn test_triangle_uses_bounding_square() {
        let triangle = shape(ShapeKind::Triangle, 50.0, 50.0);
        // Top-left corner of the square lies outside the drawn triangle but still hits
        assert!(triangle.contains(Pos2::new(25.0, 25.0)));
        assert!(triangle.contains(Pos2::new(75.0, 50.0)));
        assert!(!triangle.contains(Pos2::new(75.5, 50.0)));
        assert!(!triangle.contains(Pos2::new(50.0, 75.5)));
    }

    #[test]
    fn test_triangle_draws_apex_up() {
        let triangle = shape(ShapeKind::Triangle, 50.0, 50.0);
        match triangle.draw_command() {
            DrawCommand::Polygon { points, color } => {
                assert_eq!(
                    points,
                    vec![Pos2::new(50.0, 25.0), Pos2::new(25.0, 75.0), Pos2::new(75.0, 75.0)]
                );
                assert_eq!(color, Color32::RED);
            }
            other => panic!("expected polygon, got {:?}", other),
        }
    }
}
