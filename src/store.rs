//! The drawing store: single source of truth for committed elements and for the
//! tool and style settings applied to the next element.
//!
//! Every mutation is applied in full before observers hear about it, and each
//! mutation produces exactly one [`StoreEvent`]. Operations on unknown ids are
//! silent no-ops and notify nobody.

use log::{debug, info};

use crate::color::Color;
use crate::element::{Element, ElementPatch, Style};
use crate::event::{EventBus, EventHandler, StoreEvent, StyleEvent};
use crate::id_generator::ElementId;
use crate::tools::Tool;

/// Smallest stroke width the store will accept.
pub const MIN_STROKE_WIDTH: f32 = 0.1;

/// Process-wide whiteboard state, read by the renderer and the gesture handler.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhiteboardState {
    elements: Vec<Element>,
    selected_tool: Tool,
    selected_element_id: Option<ElementId>,
    style: Style,
}

impl WhiteboardState {
    pub fn with_style(style: Style) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }

    /// Committed elements in insertion order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|element| element.id == id)
    }

    pub fn selected_tool(&self) -> Tool {
        self.selected_tool
    }

    pub fn selected_element_id(&self) -> Option<ElementId> {
        self.selected_element_id
    }

    /// The style the next created element will carry.
    pub fn style(&self) -> Style {
        self.style
    }

    pub fn stroke_color(&self) -> Color {
        self.style.stroke_color
    }

    pub fn fill_color(&self) -> Color {
        self.style.fill_color
    }

    pub fn stroke_width(&self) -> f32 {
        self.style.stroke_width
    }

    pub fn opacity(&self) -> f32 {
        self.style.opacity
    }
}

/// Owns the [`WhiteboardState`] and notifies subscribers of every change.
#[derive(Debug, Default)]
pub struct WhiteboardStore {
    state: WhiteboardState,
    event_bus: EventBus,
}

impl WhiteboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose pending style starts at `style`.
    pub fn with_style(style: Style) -> Self {
        Self {
            state: WhiteboardState::with_style(style),
            event_bus: EventBus::new(),
        }
    }

    pub fn state(&self) -> &WhiteboardState {
        &self.state
    }

    pub fn elements(&self) -> &[Element] {
        self.state.elements()
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.event_bus.subscribe(handler);
    }

    fn notify(&self, event: StoreEvent) {
        self.event_bus.emit(&event, &self.state);
    }

    /// Append `element` to the end of the committed list.
    pub fn add_element(&mut self, element: Element) {
        let id = element.id;
        debug!("Adding {:?} element {}", element.kind, id);
        self.state.elements.push(element);
        self.notify(StoreEvent::ElementAdded { id });
    }

    /// Shallow-merge `patch` into the element with `id`. Unknown ids are ignored.
    pub fn update_element(&mut self, id: ElementId, patch: &ElementPatch) {
        let Some(element) = self.state.elements.iter_mut().find(|el| el.id == id) else {
            return;
        };
        element.apply(patch);
        self.notify(StoreEvent::ElementUpdated { id });
    }

    /// Remove the element with `id`, dropping the selection if it pointed there.
    pub fn delete_element(&mut self, id: ElementId) {
        let Some(index) = self.state.elements.iter().position(|el| el.id == id) else {
            return;
        };
        self.state.elements.remove(index);

        let selection_cleared = self.state.selected_element_id == Some(id);
        if selection_cleared {
            self.state.selected_element_id = None;
        }

        debug!("Deleted element {}", id);
        self.notify(StoreEvent::ElementDeleted {
            id,
            selection_cleared,
        });
    }

    pub fn set_selected_tool(&mut self, tool: Tool) {
        let old = std::mem::replace(&mut self.state.selected_tool, tool);
        if old != tool {
            info!("Tool changed: {} -> {}", old.name(), tool.name());
        }
        self.notify(StoreEvent::ToolChanged { old, new: tool });
    }

    pub fn set_selected_element(&mut self, id: Option<ElementId>) {
        self.state.selected_element_id = id;
        self.notify(StoreEvent::SelectionChanged { selected: id });
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.state.style.stroke_color = color;
        self.notify(StoreEvent::StyleChanged(StyleEvent::StrokeColor(color)));
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.state.style.fill_color = color;
        self.notify(StoreEvent::StyleChanged(StyleEvent::FillColor(color)));
    }

    /// Widths below [`MIN_STROKE_WIDTH`] are raised to it.
    pub fn set_stroke_width(&mut self, width: f32) {
        let width = width.max(MIN_STROKE_WIDTH);
        self.state.style.stroke_width = width;
        self.notify(StoreEvent::StyleChanged(StyleEvent::StrokeWidth(width)));
    }

    /// Opacity is clamped to `0.0..=1.0`.
    pub fn set_opacity(&mut self, opacity: f32) {
        let opacity = opacity.clamp(0.0, 1.0);
        self.state.style.opacity = opacity;
        self.notify(StoreEvent::StyleChanged(StyleEvent::Opacity(opacity)));
    }

    /// Drop every element and the selection in one step. Style is kept.
    pub fn clear_canvas(&mut self) {
        let removed = self.state.elements.len();
        self.state.elements.clear();
        self.state.selected_element_id = None;
        info!("Canvas cleared ({} elements removed)", removed);
        self.notify(StoreEvent::Cleared { removed });
    }
}
