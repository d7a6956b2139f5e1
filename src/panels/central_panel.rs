use crate::CanvasApp;

pub fn central_panel(app: &mut CanvasApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available_size = ui.available_size();
        let (response, painter) =
            ui.allocate_painter(available_size, egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        // Handle input before painting so this frame shows the result
        if app.handle_input(ctx, &response) {
            ctx.request_repaint();
        }

        // Full repaint: background, brush dabs, then shapes
        app.renderer().render(&painter, canvas_rect, app.controller().scene());
    });
}
