use crate::inventory::Inventory::{ItemRemoved, StoreDestroyed};
use crate::inventory::{Inventory, InventoryDomain, InventoryError, StoreId};

impl InventoryDomain {
    pub fn destroy_store<'operation>(
        &'operation mut self,
        id: StoreId,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + 'operation, InventoryError> {
        let index = self
            .stores
            .iter()
            .position(|store| store.id == id)
            .ok_or(InventoryError::StoreNotFound { id })?;
        let operation = move || {
            let store = self.stores.remove(index);
            let mut events = vec![];
            for item in store.items {
                events.push(ItemRemoved {
                    item: item.id,
                    store: id,
                });
            }
            events.push(StoreDestroyed { store: id });
            events
        };
        Ok(operation)
    }
}
