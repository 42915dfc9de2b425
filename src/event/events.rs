use crate::color::Color;
use crate::id_generator::ElementId;
use crate::tools::Tool;

/// A change to the pending style used for the next element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleEvent {
    StrokeColor(Color),
    FillColor(Color),
    StrokeWidth(f32),
    Opacity(f32),
}

/// One applied mutation of the whiteboard store.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    ElementAdded {
        id: ElementId,
    },
    ElementUpdated {
        id: ElementId,
    },
    ElementDeleted {
        id: ElementId,
        /// Whether the deleted element was the selected one.
        selection_cleared: bool,
    },
    ToolChanged {
        old: Tool,
        new: Tool,
    },
    SelectionChanged {
        selected: Option<ElementId>,
    },
    StyleChanged(StyleEvent),
    Cleared {
        removed: usize,
    },
}
