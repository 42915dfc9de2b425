use egui::{Context, PointerButton, Pos2, Rect};

pub mod gestures;
pub use gestures::{GestureHandler, GestureState};

/// Pointer input relevant to the canvas, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown { pos: Pos2 },
    /// Pointer moved within the canvas
    PointerMove { pos: Pos2 },
    /// Primary button released
    PointerUp { pos: Pos2 },
    /// Pointer left the canvas or the window
    PointerLeave,
}

/// Converts raw egui events into canvas [`InputEvent`]s.
///
/// Positions are made canvas-local by subtracting the canvas origin.
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
    pointer_inside: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            pointer_inside: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn to_local(&self, pos: Pos2) -> Pos2 {
        pos - self.canvas_rect.min.to_vec2()
    }

    /// Translate this frame's egui events.
    ///
    /// `canvas_hovered` says whether the canvas, rather than a floating panel on
    /// top of it, is under the pointer. Presses elsewhere are not ours, and moving
    /// onto a panel leaves the canvas.
    pub fn process_input(&mut self, ctx: &Context, canvas_hovered: bool) -> Vec<InputEvent> {
        let raw_events = ctx.input(|input| input.events.clone());
        raw_events
            .iter()
            .filter_map(|event| self.translate(event, canvas_hovered))
            .collect()
    }

    /// Translate a single egui event, if it concerns the canvas.
    pub fn translate(&mut self, event: &egui::Event, canvas_hovered: bool) -> Option<InputEvent> {
        match *event {
            egui::Event::PointerMoved(pos) => {
                if canvas_hovered && self.canvas_rect.contains(pos) {
                    self.pointer_inside = true;
                    Some(InputEvent::PointerMove {
                        pos: self.to_local(pos),
                    })
                } else if self.pointer_inside {
                    self.pointer_inside = false;
                    Some(InputEvent::PointerLeave)
                } else {
                    None
                }
            }
            egui::Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: true,
                ..
            } => {
                if canvas_hovered && self.canvas_rect.contains(pos) {
                    self.pointer_inside = true;
                    Some(InputEvent::PointerDown {
                        pos: self.to_local(pos),
                    })
                } else {
                    None
                }
            }
            egui::Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: false,
                ..
            } => Some(InputEvent::PointerUp {
                pos: self.to_local(pos),
            }),
            egui::Event::PointerGone if self.pointer_inside => {
                self.pointer_inside = false;
                Some(InputEvent::PointerLeave)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Modifiers, Vec2};

    fn canvas() -> InputHandler {
        InputHandler::new(Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::new(400.0, 300.0)))
    }

    fn press(x: f32, y: f32, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos: Pos2::new(x, y),
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_press_is_canvas_local() {
        let mut input = canvas();
        assert_eq!(
            input.translate(&press(110.0, 60.0, true), true),
            Some(InputEvent::PointerDown {
                pos: Pos2::new(10.0, 10.0)
            })
        );
    }

    #[test]
    fn test_press_under_panel_is_ignored() {
        let mut input = canvas();
        assert_eq!(input.translate(&press(110.0, 60.0, true), false), None);
    }

    #[test]
    fn test_leaving_canvas_emits_leave_once() {
        let mut input = canvas();
        input.translate(&egui::Event::PointerMoved(Pos2::new(150.0, 100.0)), true);
        assert_eq!(
            input.translate(&egui::Event::PointerMoved(Pos2::new(10.0, 10.0)), true),
            Some(InputEvent::PointerLeave)
        );
        assert_eq!(
            input.translate(&egui::Event::PointerMoved(Pos2::new(5.0, 5.0)), true),
            None
        );
    }

    #[test]
    fn test_moving_onto_panel_leaves_canvas() {
        let mut input = canvas();
        input.translate(&press(150.0, 100.0, true), true);
        assert_eq!(
            input.translate(&egui::Event::PointerMoved(Pos2::new(160.0, 110.0)), false),
            Some(InputEvent::PointerLeave)
        );
        assert_eq!(
            input.translate(&egui::Event::PointerMoved(Pos2::new(170.0, 120.0)), false),
            None
        );
        assert_eq!(
            input.translate(&egui::Event::PointerMoved(Pos2::new(180.0, 130.0)), true),
            Some(InputEvent::PointerMove {
                pos: Pos2::new(80.0, 80.0)
            })
        );
    }

    #[test]
    fn test_pointer_gone_leaves() {
        let mut input = canvas();
        input.translate(&egui::Event::PointerMoved(Pos2::new(150.0, 100.0)), true);
        assert_eq!(
            input.translate(&egui::Event::PointerGone, true),
            Some(InputEvent::PointerLeave)
        );
        assert_eq!(input.translate(&egui::Event::PointerGone, true), None);
    }

    #[test]
    fn test_secondary_button_is_ignored() {
        let mut input = canvas();
        let event = egui::Event::PointerButton {
            pos: Pos2::new(110.0, 60.0),
            button: PointerButton::Secondary,
            pressed: true,
            modifiers: Modifiers::NONE,
        };
        assert_eq!(input.translate(&event, true), None);
    }
}
