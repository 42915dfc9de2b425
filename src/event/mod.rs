mod bus;
mod events;

pub use bus::EventBus;
pub use events::{StoreEvent, StyleEvent};

use crate::store::WhiteboardState;

/// Observer of store mutations.
///
/// Handlers run after the mutation is fully applied and see the resulting state.
/// They must not mutate the store from inside `handle_event`.
pub trait EventHandler {
    fn handle_event(&mut self, event: &StoreEvent, state: &WhiteboardState);
}

impl<F> EventHandler for F
where
    F: FnMut(&StoreEvent, &WhiteboardState),
{
    fn handle_event(&mut self, event: &StoreEvent, state: &WhiteboardState) {
        self(event, state)
    }
}
