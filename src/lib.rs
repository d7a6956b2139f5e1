#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod scene;
pub mod shape;
pub mod stroke;

pub use app::CanvasApp;
pub use config::{ShapeDefaults, ToolSettings};
pub use controller::{DragSession, InteractionController, InteractionState};
pub use error::CanvasError;
pub use input::{InputEvent, InputHandler, InputLocation, PointerFrame};
pub use renderer::{DrawCommand, DrawSink, PainterSink, Renderer, TranslatedSink};
pub use scene::Scene;
pub use shape::{Geometry, Shape, ShapeId, ShapeKind};
pub use stroke::BrushStroke;
