use crate::inventory::Inventory::{ItemAdded, StoreCreated};
use crate::inventory::{
    Inventory, InventoryDomain, InventoryError, Item, ItemId, ItemType, Store, StoreId, StoreRole,
};

impl InventoryDomain {
    pub fn create_store<'operation>(
        &'operation mut self,
        id: StoreId,
        role: StoreRole,
        accepts: Option<ItemType>,
        capacity: usize,
        initial_item: Option<ItemType>,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + 'operation, InventoryError> {
        if self.stores.iter().any(|store| store.id == id) {
            return Err(InventoryError::StoreAlreadyRegistered { id });
        }
        if let Some(kind) = initial_item {
            if let Some(accepted) = accepts {
                if accepted != kind {
                    return Err(InventoryError::ItemMismatch {
                        store: id,
                        accepts,
                        actual: kind,
                    });
                }
            }
        }
        let operation = move || {
            let mut events = vec![StoreCreated { store: id, role }];
            let mut items = vec![];
            if let Some(kind) = initial_item {
                let item = Item {
                    id: self.items_id.one(ItemId),
                    kind,
                };
                events.push(ItemAdded {
                    item: item.id,
                    kind: item.kind,
                    store: id,
                });
                items.push(item);
            }
            self.stores.push(Store {
                id,
                role,
                accepts,
                capacity,
                items,
            });
            events
        };
        Ok(operation)
    }
}
