use crate::api::{EngineError, Event};
use crate::inventory::StoreId;
use crate::{occur, Engine};

impl Engine {
    /// Host-side draining of a store, e.g. finished goods leaving the
    /// world. Wakes the scheduler, which is how blocked stations recover.
    pub fn item_removed(&mut self, store: StoreId) -> Result<Vec<Event>, EngineError> {
        let (_, operation) = self.inventory.remove_item(store)?;
        let mut events = occur![operation()];
        events.extend(self.evaluate());
        self.publish(&events);
        Ok(events)
    }
}
