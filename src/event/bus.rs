use std::cell::RefCell;

use crate::event::{EventHandler, StoreEvent};
use crate::store::WhiteboardState;

/// Broadcasts store events to registered handlers
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive events
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Deliver `event` to every handler, in subscription order.
    ///
    /// `state` must already include the change the event describes.
    pub fn emit(&self, event: &StoreEvent, state: &WhiteboardState) {
        for handler in self.handlers.borrow_mut().iter_mut() {
            handler.handle_event(event, state);
        }
    }
}
