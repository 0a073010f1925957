use crate::inventory::Inventory::ItemAdded;
use crate::inventory::{Inventory, InventoryDomain, InventoryError, Item, StoreId};

impl InventoryDomain {
    pub fn add_item<'operation>(
        &'operation mut self,
        id: StoreId,
        item: Item,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + 'operation, InventoryError> {
        let store = self.get_store(id)?;
        if !store.accepts_kind(item.kind) {
            return Err(InventoryError::ItemMismatch {
                store: id,
                accepts: store.accepts,
                actual: item.kind,
            });
        }
        if store.free_space() == 0 {
            return Err(InventoryError::StoreIsFull { id });
        }
        let operation = move || {
            self.items_id.register(item.id.0);
            let store = self.get_store_mut(id).unwrap();
            store.items.push(item);
            vec![ItemAdded {
                item: item.id,
                kind: item.kind,
                store: id,
            }]
        };
        Ok(operation)
    }
}
