use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

/// Background the canvas is cleared to before every repaint
pub const CANVAS_BACKGROUND: Color32 = Color32::WHITE;

/// Fill primitives the scene paints itself with
pub trait DrawSink {
    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);

    fn fill_rect(&mut self, min: Pos2, size: Vec2, color: Color32);

    fn fill_polygon(&mut self, points: &[Pos2], color: Color32);
}

/// A single paint instruction produced by the scene
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    Rect {
        min: Pos2,
        size: Vec2,
        color: Color32,
    },
    Polygon {
        points: Vec<Pos2>,
        color: Color32,
    },
}

impl DrawCommand {
    pub fn paint(&self, sink: &mut dyn DrawSink) {
        match self {
            Self::Circle { center, radius, color } => sink.fill_circle(*center, *radius, *color),
            Self::Rect { min, size, color } => sink.fill_rect(*min, *size, *color),
            Self::Polygon { points, color } => sink.fill_polygon(points, *color),
        }
    }
}

/// Moves canvas coordinates to screen coordinates before forwarding
pub struct TranslatedSink<'a> {
    inner: &'a mut dyn DrawSink,
    offset: Vec2,
}

impl<'a> TranslatedSink<'a> {
    pub fn new(inner: &'a mut dyn DrawSink, origin: Pos2) -> Self {
        Self {
            inner,
            offset: origin.to_vec2(),
        }
    }
}

impl DrawSink for TranslatedSink<'_> {
    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.inner.fill_circle(center + self.offset, radius, color);
    }

    fn fill_rect(&mut self, min: Pos2, size: Vec2, color: Color32) {
        self.inner.fill_rect(min + self.offset, size, color);
    }

    fn fill_polygon(&mut self, points: &[Pos2], color: Color32) {
        let points: Vec<Pos2> = points.iter().map(|p| *p + self.offset).collect();
        self.inner.fill_polygon(&points, color);
    }
}

/// Paints into an egui painter, in screen coordinates
pub struct PainterSink<'a> {
    painter: &'a Painter,
}

impl<'a> PainterSink<'a> {
    pub fn new(painter: &'a Painter) -> Self {
        Self { painter }
    }
}

impl DrawSink for PainterSink<'_> {
    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter.circle_filled(center, radius, color);
    }

    fn fill_rect(&mut self, min: Pos2, size: Vec2, color: Color32) {
        self.painter
            .rect_filled(Rect::from_min_size(min, size), 0.0, color);
    }

    fn fill_polygon(&mut self, points: &[Pos2], color: Color32) {
        self.painter.add(egui::Shape::convex_polygon(
            points.to_vec(),
            color,
            Stroke::NONE,
        ));
    }
}

/// Repaints the whole canvas from the scene every frame
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            background: CANVAS_BACKGROUND,
        }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Clears `rect` and paints every dab and shape of the scene inside it
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with, clipped to the canvas
    ///     rect (egui::Rect): The canvas area in screen coordinates
    ///     scene (Scene): The scene to paint
    pub fn render(&self, painter: &Painter, rect: Rect, scene: &crate::Scene) {
        painter.rect_filled(rect, 0.0, self.background);
        let mut painter_sink = PainterSink::new(painter);
        let mut sink = TranslatedSink::new(&mut painter_sink, rect.min);
        scene.render(&mut sink);
    }
}
