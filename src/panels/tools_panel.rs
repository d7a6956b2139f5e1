use crate::CanvasApp;
use crate::config::BRUSH_DIAMETER_RANGE;
use crate::shape::ShapeKind;

fn tool_label(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Circle => "⏺ Circle",
        ShapeKind::Rectangle => "◼ Rectangle",
        ShapeKind::Triangle => "▲ Triangle",
    }
}

pub fn tools_panel(app: &mut CanvasApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let controller = app.controller_mut();
            let brush_mode = controller.is_brush_mode();
            let active_shape = controller.shape_tool();

            // Shape tools and the brush are mutually exclusive
            for kind in ShapeKind::ALL {
                let is_selected = !brush_mode && active_shape == kind;
                if ui.selectable_label(is_selected, tool_label(kind)).clicked() {
                    controller.select_tool(kind);
                }
            }
            if ui.selectable_label(brush_mode, "🖌 Brush").clicked() {
                controller.select_brush();
            }

            ui.separator();

            // Color picker
            ui.horizontal(|ui| {
                ui.label("Color:");
                let mut color = controller.color();
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    controller.set_color(color);
                }
            });

            // Brush diameter slider
            ui.horizontal(|ui| {
                ui.label("Brush size:");
                let mut diameter = controller.brush_diameter();
                if ui.add(egui::Slider::new(&mut diameter, BRUSH_DIAMETER_RANGE)).changed() {
                    controller.set_brush_diameter(diameter);
                }
            });

            ui.separator();

            // Scene summary
            let scene = controller.scene();
            ui.label(format!("Shapes: {}", scene.shapes().len()));
            ui.label(format!("Brush dabs: {}", scene.strokes().len()));
            ui.label(format!("State: {}", controller.state().name()));
        });
}
