//! Pointer-gesture state machine that turns press → move → release into
//! committed elements.
//!
//! ```text
//!            down (shape tool)            up / leave
//!   Idle ───────────────────────▶ Drawing ───────────▶ Idle (element committed)
//!    │
//!    │ down (text tool)            prompt resolved
//!    └─────────────────────▶ AwaitingText ─────────▶ Idle (text committed if non-empty)
//! ```

use egui::Pos2;
use log::{debug, trace};

use super::InputEvent;
use crate::element::{Element, Style};
use crate::store::WhiteboardStore;
use crate::tools::Tool;

/// Where the handler is within a gesture
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    /// A provisional element is being shaped by the pointer
    Drawing { start: Pos2, element: Element },
    /// Suspended until the text prompt answers; pointer input is ignored.
    /// `style` is the pending style at the moment of the click.
    AwaitingText { at: Pos2, style: Style },
}

impl GestureState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Drawing { .. } => "Drawing",
            Self::AwaitingText { .. } => "AwaitingText",
        }
    }
}

#[derive(Debug, Default)]
pub struct GestureHandler {
    state: GestureState,
}

impl GestureHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// The in-progress element, drawn on top of the committed ones.
    pub fn provisional(&self) -> Option<&Element> {
        match &self.state {
            GestureState::Drawing { element, .. } => Some(element),
            _ => None,
        }
    }

    /// Canvas position of a text prompt waiting for an answer.
    pub fn pending_text(&self) -> Option<Pos2> {
        match self.state {
            GestureState::AwaitingText { at, .. } => Some(at),
            _ => None,
        }
    }

    /// Feed one input event. Returns true if the provisional element changed.
    pub fn handle_event(&mut self, event: &InputEvent, store: &mut WhiteboardStore) -> bool {
        match *event {
            InputEvent::PointerDown { pos } => self.pointer_down(pos, store),
            InputEvent::PointerMove { pos } => self.pointer_move(pos),
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave => self.pointer_up(store),
        }
    }

    /// Start a gesture with the store's selected tool at canvas position `pos`.
    pub fn pointer_down(&mut self, pos: Pos2, store: &mut WhiteboardStore) -> bool {
        if !matches!(self.state, GestureState::Idle) {
            return false;
        }

        let tool = store.state().selected_tool();
        if !tool.creates_elements() {
            return false;
        }

        let style = store.state().style();
        match tool {
            Tool::Text => {
                debug!("Prompting for text at {:?}", pos);
                self.state = GestureState::AwaitingText { at: pos, style };
                false
            }
            _ => {
                let element = Element::shape(tool, pos, style);
                trace!("Started {:?} gesture at {:?}", tool, pos);
                self.state = GestureState::Drawing {
                    start: pos,
                    element,
                };
                true
            }
        }
    }

    /// Reshape the provisional element: pen appends, other tools resize.
    pub fn pointer_move(&mut self, pos: Pos2) -> bool {
        let GestureState::Drawing { start, element } = &mut self.state else {
            return false;
        };

        if element.kind == Tool::Pen {
            element.points.get_or_insert_with(Vec::new).push(pos);
        } else {
            let delta = pos - *start;
            element.width = Some(delta.x);
            element.height = Some(delta.y);
        }
        trace!("{:?} gesture moved to {:?}", element.kind, pos);
        true
    }

    /// Finish the gesture, committing the provisional element if there is one.
    ///
    /// Pointer-leave is routed here too so drags that exit the canvas still land.
    pub fn pointer_up(&mut self, store: &mut WhiteboardStore) -> bool {
        if !matches!(self.state, GestureState::Drawing { .. }) {
            return false;
        }
        if let GestureState::Drawing { element, .. } = std::mem::take(&mut self.state) {
            store.add_element(element);
        }
        true
    }

    /// Resume after the text prompt. Empty or cancelled (`None`) input adds nothing.
    pub fn resolve_text(&mut self, text: Option<String>, store: &mut WhiteboardStore) {
        let GestureState::AwaitingText { at, style } = self.state else {
            return;
        };
        self.state = GestureState::Idle;

        match text {
            Some(text) if !text.is_empty() => {
                store.add_element(Element::text(at, text, style));
            }
            _ => debug!("Text prompt dismissed without text"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(tool: Tool) -> WhiteboardStore {
        let mut store = WhiteboardStore::new();
        store.set_selected_tool(tool);
        store
    }

    #[test]
    fn test_starts_idle() {
        let handler = GestureHandler::new();
        assert_eq!(handler.state(), &GestureState::Idle);
        assert!(handler.provisional().is_none());
    }

    #[test]
    fn test_select_press_is_noop() {
        let mut store = store_with(Tool::Select);
        let mut handler = GestureHandler::new();
        assert!(!handler.pointer_down(Pos2::new(5.0, 5.0), &mut store));
        assert_eq!(handler.state().name(), "Idle");
    }

    #[test]
    fn test_press_while_drawing_is_ignored() {
        let mut store = store_with(Tool::Line);
        let mut handler = GestureHandler::new();
        handler.pointer_down(Pos2::new(1.0, 1.0), &mut store);
        assert!(!handler.pointer_down(Pos2::new(9.0, 9.0), &mut store));
        assert_eq!(handler.provisional().map(Element::anchor), Some(Pos2::new(1.0, 1.0)));
    }

    #[test]
    fn test_move_allows_negative_size() {
        let mut store = store_with(Tool::Circle);
        let mut handler = GestureHandler::new();
        handler.pointer_down(Pos2::new(50.0, 50.0), &mut store);
        handler.pointer_move(Pos2::new(20.0, 10.0));
        let element = handler.provisional().unwrap();
        assert_eq!(element.width, Some(-30.0));
        assert_eq!(element.height, Some(-40.0));
    }

    #[test]
    fn test_move_while_idle_is_noop() {
        let mut handler = GestureHandler::new();
        assert!(!handler.pointer_move(Pos2::new(1.0, 1.0)));
    }

    #[test]
    fn test_input_ignored_while_awaiting_text() {
        let mut store = store_with(Tool::Text);
        let mut handler = GestureHandler::new();
        handler.pointer_down(Pos2::new(50.0, 50.0), &mut store);
        assert_eq!(handler.pending_text(), Some(Pos2::new(50.0, 50.0)));

        store.set_selected_tool(Tool::Rectangle);
        assert!(!handler.pointer_down(Pos2::new(0.0, 0.0), &mut store));
        assert!(!handler.pointer_move(Pos2::new(10.0, 10.0)));
        assert!(!handler.pointer_up(&mut store));
        assert_eq!(handler.pending_text(), Some(Pos2::new(50.0, 50.0)));
        assert!(store.elements().is_empty());
    }
}
