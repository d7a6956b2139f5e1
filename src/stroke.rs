use egui::{Color32, Pos2};

use crate::renderer::DrawCommand;

/// One brush dab: a filled disc recorded per pointer event in brush mode.
/// Dabs are never edited once recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushStroke {
    center: Pos2,
    diameter: f32,
    color: Color32,
}

impl BrushStroke {
    pub fn new(center: Pos2, diameter: f32, color: Color32) -> Self {
        Self {
            center,
            diameter,
            color,
        }
    }

    pub fn center(&self) -> Pos2 {
        self.center
    }

    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn draw_command(&self) -> DrawCommand {
        DrawCommand::Circle {
            center: self.center,
            radius: self.diameter / 2.0,
            color: self.color,
        }
    }
}
