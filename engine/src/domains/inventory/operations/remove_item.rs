use crate::inventory::Inventory::ItemRemoved;
use crate::inventory::{Inventory, InventoryDomain, InventoryError, Item, ItemType, StoreId};

impl InventoryDomain {
    /// Pops the oldest item of the store.
    pub fn remove_item<'operation>(
        &'operation mut self,
        id: StoreId,
    ) -> Result<(Item, impl FnOnce() -> Vec<Inventory> + 'operation), InventoryError> {
        self.remove_item_of(id, None)
    }

    /// Pops the oldest item of the given kind, or the oldest item at all
    /// when no kind is wanted.
    pub fn remove_item_of<'operation>(
        &'operation mut self,
        id: StoreId,
        wanted: Option<ItemType>,
    ) -> Result<(Item, impl FnOnce() -> Vec<Inventory> + 'operation), InventoryError> {
        let store = self.get_store(id)?;
        let index = match wanted {
            None => {
                if store.items.is_empty() {
                    return Err(InventoryError::StoreIsEmpty { id });
                }
                0
            }
            Some(kind) => store
                .items
                .iter()
                .position(|item| item.kind == kind)
                .ok_or(InventoryError::StoreIsEmpty { id })?,
        };
        let item = store.items[index];
        let operation = move || {
            let store = self.get_store_mut(id).unwrap();
            store.items.remove(index);
            vec![ItemRemoved {
                item: item.id,
                store: id,
            }]
        };
        Ok((item, operation))
    }
}
