use egui::{Color32, Pos2};

use crate::config::ShapeDefaults;
use crate::renderer::{DrawCommand, DrawSink};
use crate::shape::{Shape, ShapeId, ShapeKind};
use crate::stroke::BrushStroke;

/// Everything painted on the canvas: brush dabs underneath, shapes on top.
///
/// Both lists keep insertion order, which is also paint order.
#[derive(Debug, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
    strokes: Vec<BrushStroke>,
    defaults: ShapeDefaults,
    next_id: usize,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: ShapeDefaults) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    pub fn defaults(&self) -> &ShapeDefaults {
        &self.defaults
    }

    pub fn add_shape(&mut self, kind: ShapeKind, pos: Pos2, color: Color32) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.push(Shape::new(id, kind, pos, color, &self.defaults));
        log::info!("Placed {} {:?} at {:?}", kind, id, pos);
        id
    }

    /// Topmost shape containing `pos`, i.e. the most recently added one
    pub fn hit_test(&self, pos: Pos2) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .find(|shape| shape.contains(pos))
            .map(Shape::id)
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|shape| shape.id() == id)
    }

    /// Set the shape's anchor to `pos`. Returns false for an unknown id.
    pub fn move_shape(&mut self, id: ShapeId, pos: Pos2) -> bool {
        match self.shape_mut(id) {
            Some(shape) => {
                shape.set_anchor(pos);
                true
            }
            None => {
                log::debug!("Ignoring move of missing shape {:?}", id);
                false
            }
        }
    }

    /// Recolor the shape in place. Returns false for an unknown id.
    pub fn set_shape_color(&mut self, id: ShapeId, color: Color32) -> bool {
        match self.shape_mut(id) {
            Some(shape) => {
                shape.set_color(color);
                true
            }
            None => {
                log::debug!("Ignoring recolor of missing shape {:?}", id);
                false
            }
        }
    }

    pub fn add_brush_dab(&mut self, pos: Pos2, diameter: f32, color: Color32) {
        self.strokes.push(BrushStroke::new(pos, diameter, color));
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn strokes(&self) -> &[BrushStroke] {
        &self.strokes
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.strokes.is_empty()
    }

    /// Draw instructions in paint order: every dab, then every shape.
    /// Calling this again yields the same sequence as long as nothing changed.
    pub fn draw_commands(&self) -> impl Iterator<Item = DrawCommand> + '_ {
        self.strokes
            .iter()
            .map(BrushStroke::draw_command)
            .chain(self.shapes.iter().map(Shape::draw_command))
    }

    pub fn render(&self, sink: &mut dyn DrawSink) {
        for command in self.draw_commands() {
            command.paint(sink);
        }
    }
}
