use crate::api::{EngineError, Event};
use crate::inventory::{Item, ItemId, ItemType, StoreId};
use crate::{occur, Engine};

impl Engine {
    /// Host-side stocking of a store, outside any worker errand. Wakes the
    /// scheduler since fresh stock may unblock stations or deliveries.
    pub fn item_added(&mut self, store: StoreId, kind: ItemType) -> Result<Vec<Event>, EngineError> {
        let item = Item {
            id: self.inventory.items_id.one(ItemId),
            kind,
        };
        let operation = self.inventory.add_item(store, item)?;
        let mut events = occur![operation()];
        events.extend(self.evaluate());
        self.publish(&events);
        Ok(events)
    }
}
