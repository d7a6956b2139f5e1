use egui::{Color32, Pos2, Vec2};

use crate::config::{ToolSettings, clamp_brush_diameter};
use crate::error::CanvasError;
use crate::scene::Scene;
use crate::shape::{ShapeId, ShapeKind};

/// Name accepted by [`InteractionController::select_tool_by_name`] for the brush
pub const BRUSH_TOOL_NAME: &str = "brush";

/// Bookkeeping for a shape being dragged, from press to release
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub shape: ShapeId,
    /// Pointer position minus the shape anchor at press time
    pub offset: Vec2,
    /// Fill color the shape had when it was picked up
    pub saved_color: Color32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl InteractionState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Dragging(_) => "Dragging",
        }
    }
}

/// Turns pointer events and tool choices into scene edits.
///
/// Pointer handlers return `true` when the canvas must be repainted.
#[derive(Debug, Default)]
pub struct InteractionController {
    scene: Scene,
    settings: ToolSettings,
    state: InteractionState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scene(scene: Scene) -> Self {
        Self {
            scene,
            ..Self::default()
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        match &self.state {
            InteractionState::Dragging(session) => Some(session),
            InteractionState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, InteractionState::Dragging(_))
    }

    pub fn settings(&self) -> ToolSettings {
        self.settings
    }

    pub fn apply_settings(&mut self, settings: ToolSettings) {
        self.settings = ToolSettings {
            brush_diameter: clamp_brush_diameter(settings.brush_diameter),
            ..settings
        };
    }

    pub fn shape_tool(&self) -> ShapeKind {
        self.settings.shape_tool
    }

    pub fn is_brush_mode(&self) -> bool {
        self.settings.brush_mode
    }

    pub fn color(&self) -> Color32 {
        self.settings.color
    }

    pub fn brush_diameter(&self) -> f32 {
        self.settings.brush_diameter
    }

    pub fn on_pointer_down(&mut self, pos: Pos2) -> bool {
        if self.settings.brush_mode {
            self.paint_dab(pos);
            return true;
        }

        // Selecting an existing shape wins over placing a new one
        if let Some(id) = self.scene.hit_test(pos) {
            if let Some(shape) = self.scene.shape(id) {
                let session = DragSession {
                    shape: id,
                    offset: pos - shape.anchor(),
                    saved_color: shape.color(),
                };
                log::debug!("Picked up {:?} with offset {:?}", id, session.offset);
                self.state = InteractionState::Dragging(session);
            }
            return false;
        }

        self.scene.add_shape(self.settings.shape_tool, pos, self.settings.color);
        true
    }

    pub fn on_pointer_move(&mut self, pos: Pos2) -> bool {
        if self.settings.brush_mode {
            self.paint_dab(pos);
            return true;
        }

        match self.state {
            InteractionState::Dragging(session) => {
                self.scene.move_shape(session.shape, pos - session.offset)
            }
            InteractionState::Idle => false,
        }
    }

    pub fn on_pointer_up(&mut self, _pos: Pos2) {
        if let InteractionState::Dragging(session) = std::mem::take(&mut self.state) {
            self.scene.set_shape_color(session.shape, session.saved_color);
            log::debug!("Dropped {:?}", session.shape);
        }
    }

    pub fn select_tool(&mut self, kind: ShapeKind) {
        log::info!("Tool selected: {}", kind);
        self.settings.shape_tool = kind;
        self.settings.brush_mode = false;
    }

    pub fn select_brush(&mut self) {
        log::info!("Tool selected: {}", BRUSH_TOOL_NAME);
        self.settings.brush_mode = true;
    }

    /// Select a tool from its display name ("circle", "brush", ...).
    /// Unknown names leave the current selection untouched.
    pub fn select_tool_by_name(&mut self, name: &str) -> Result<(), CanvasError> {
        if name.trim().eq_ignore_ascii_case(BRUSH_TOOL_NAME) {
            self.select_brush();
            return Ok(());
        }
        let kind = name
            .parse::<ShapeKind>()
            .inspect_err(|err| log::warn!("Ignoring tool selection: {}", err))?;
        self.select_tool(kind);
        Ok(())
    }

    pub fn set_color(&mut self, color: Color32) {
        self.settings.color = color;
    }

    pub fn set_brush_diameter(&mut self, diameter: f32) {
        self.settings.brush_diameter = clamp_brush_diameter(diameter);
    }

    fn paint_dab(&mut self, pos: Pos2) {
        self.scene
            .add_brush_dab(pos, self.settings.brush_diameter, self.settings.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_transitions() {
        let mut controller = InteractionController::new();
        controller.select_tool(ShapeKind::Circle);
        assert_eq!(controller.state().name(), "Idle");

        assert!(controller.on_pointer_down(Pos2::new(50.0, 50.0)));
        controller.on_pointer_up(Pos2::new(50.0, 50.0));
        assert_eq!(controller.state().name(), "Idle");

        assert!(!controller.on_pointer_down(Pos2::new(55.0, 50.0)));
        assert_eq!(controller.state().name(), "Dragging");
        controller.on_pointer_up(Pos2::new(55.0, 50.0));
        assert_eq!(controller.state().name(), "Idle");
    }

    #[test]
    fn test_release_restores_saved_color() {
        let mut controller = InteractionController::new();
        controller.on_pointer_down(Pos2::new(10.0, 10.0));
        controller.on_pointer_up(Pos2::new(10.0, 10.0));
        let id = controller.scene().shapes()[0].id();

        controller.on_pointer_down(Pos2::new(20.0, 20.0));
        controller.scene.set_shape_color(id, Color32::YELLOW);
        controller.on_pointer_up(Pos2::new(20.0, 20.0));

        assert_eq!(controller.scene().shape(id).map(|s| s.color()), Some(Color32::RED));
        assert!(controller.drag_session().is_none());
    }

    #[test]
    fn test_unknown_tool_name_keeps_selection() {
        let mut controller = InteractionController::new();
        controller.select_tool_by_name("Triangle").unwrap();
        assert_eq!(controller.shape_tool(), ShapeKind::Triangle);

        let err = controller.select_tool_by_name("spray").unwrap_err();
        assert_eq!(err, CanvasError::UnknownTool("spray".to_owned()));
        assert_eq!(controller.shape_tool(), ShapeKind::Triangle);
        assert!(!controller.is_brush_mode());

        controller.select_tool_by_name("Brush").unwrap();
        assert!(controller.is_brush_mode());
        assert_eq!(controller.shape_tool(), ShapeKind::Triangle);
    }

    #[test]
    fn test_apply_settings_clamps_diameter() {
        let mut controller = InteractionController::new();
        controller.apply_settings(ToolSettings {
            brush_diameter: 400.0,
            ..ToolSettings::default()
        });
        assert_eq!(controller.brush_diameter(), 50.0);
    }
}
