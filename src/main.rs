#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([400.0, 300.0])
            .with_title("Shape Canvas"),
        ..Default::default()
    };
    eframe::run_native(
        "shape_canvas",
        native_options,
        Box::new(|cc| Ok(Box::new(shape_canvas::CanvasApp::new(cc)))),
    )
}
