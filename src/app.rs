use crate::config::ToolSettings;
use crate::controller::InteractionController;
use crate::input::{self, InputHandler};
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;

/// We derive Deserialize/Serialize so we can persist tool settings on shutdown.
/// The scene itself is session-only.
#[derive(serde::Deserialize, serde::Serialize, Debug)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct CanvasApp {
    settings: ToolSettings,
    #[serde(skip)]
    controller: InteractionController,
    #[serde(skip)]
    renderer: Renderer,
    #[serde(skip)]
    input_handler: Option<InputHandler>,
}

impl Default for CanvasApp {
    fn default() -> Self {
        Self {
            settings: ToolSettings::default(),
            controller: InteractionController::new(),
            renderer: Renderer::new(),
            input_handler: None,
        }
    }
}

impl CanvasApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = match cc.storage {
            Some(storage) => eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default(),
            None => Self::default(),
        };
        // Restore the last session's tool, color and brush size
        app.controller.apply_settings(app.settings);
        log::info!("Canvas ready with settings {:?}", app.controller.settings());
        app
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut InteractionController {
        &mut self.controller
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Route this frame's pointer input into the controller.
    /// Returns true when the canvas changed.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas: &egui::Response) -> bool {
        // Keep the handler in sync with the canvas (e.g. after a window resize)
        let handler = self
            .input_handler
            .get_or_insert_with(|| InputHandler::new(canvas.rect));
        handler.set_canvas_rect(canvas.rect);

        let events = handler.process_input(ctx, canvas);
        input::dispatch(&mut self.controller, &events)
    }
}

impl eframe::App for CanvasApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        // Only the tool settings survive a restart, never the scene
        self.settings = self.controller.settings();
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Side panel first so the canvas takes the remaining space
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
