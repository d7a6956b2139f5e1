use egui::{Context, PointerButton, Pos2, Rect, Response};

use crate::controller::InteractionController;

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position relative to the canvas origin
    pub position: Pos2,
    /// Whether this position is on the canvas and not covered by a popup or window
    pub is_in_canvas: bool,
}

/// Primary-button pointer events, in canvas coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed
    PointerDown { location: InputLocation },
    /// Pointer moved while the primary button was held
    PointerMove { location: InputLocation },
    /// Primary button was released
    PointerUp { location: InputLocation },
}

impl InputEvent {
    pub fn location(&self) -> InputLocation {
        match self {
            InputEvent::PointerDown { location }
            | InputEvent::PointerMove { location }
            | InputEvent::PointerUp { location } => *location,
        }
    }
}

/// Primary-button pointer state sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerFrame {
    pub pos: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
    pub held: bool,
    /// The canvas widget is the topmost thing under the pointer
    pub canvas_hovered: bool,
}

/// Handles converting raw egui input into canvas pointer events
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
    /// Set while a press that started on the canvas is held
    gesture_active: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
            gesture_active: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture_active
    }

    fn make_location(&self, pos: Pos2, canvas_hovered: bool) -> InputLocation {
        InputLocation {
            position: (pos - self.canvas_rect.min).to_pos2(),
            is_in_canvas: canvas_hovered && self.canvas_rect.contains(pos),
        }
    }

    /// Process raw egui input and generate canvas events for this frame.
    ///
    /// `canvas` is the response of the canvas widget; egui only reports it as
    /// containing the pointer when no popup or window is layered above it.
    pub fn process_input(&mut self, ctx: &Context, canvas: &Response) -> Vec<InputEvent> {
        let canvas_hovered = canvas.contains_pointer();
        let frame = ctx.input(|input| PointerFrame {
            pos: input.pointer.interact_pos(),
            pressed: input.pointer.button_pressed(PointerButton::Primary),
            released: input.pointer.button_released(PointerButton::Primary),
            held: input.pointer.button_down(PointerButton::Primary),
            canvas_hovered,
        });
        self.translate(frame)
    }

    /// Turn one frame of primary-button pointer state into events.
    ///
    /// Only gestures that begin on an uncovered part of the canvas are
    /// reported, so neither a drag on a side-panel slider nor a click inside
    /// the color picker popup ever paints.
    pub fn translate(&mut self, frame: PointerFrame) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let Some(pos) = frame.pos.or(self.last_pointer_pos) else {
            return events;
        };
        let location = self.make_location(pos, frame.canvas_hovered);
        let moved = self.last_pointer_pos != Some(pos);
        self.last_pointer_pos = Some(pos);

        if frame.pressed && location.is_in_canvas {
            self.gesture_active = true;
            events.push(InputEvent::PointerDown { location });
        } else if self.gesture_active && frame.held && moved {
            events.push(InputEvent::PointerMove { location });
        }

        if frame.released && self.gesture_active {
            self.gesture_active = false;
            events.push(InputEvent::PointerUp { location });
        }

        events
    }
}

/// Feed events into the controller; returns true if the canvas needs a repaint
pub fn dispatch(controller: &mut InteractionController, events: &[InputEvent]) -> bool {
    let mut repaint = false;
    for event in events {
        log::debug!("Canvas input: {:?}", event);
        match event {
            InputEvent::PointerDown { location } => {
                repaint |= controller.on_pointer_down(location.position);
            }
            InputEvent::PointerMove { location } => {
                repaint |= controller.on_pointer_move(location.position);
            }
            InputEvent::PointerUp { location } => {
                controller.on_pointer_up(location.position);
                repaint = true;
            }
        }
    }
    repaint
}
