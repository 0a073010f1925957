use crate::inventory::{InventoryDomain, InventoryError, Item, Store, StoreId};

impl InventoryDomain {
    pub fn get_store(&self, id: StoreId) -> Result<&Store, InventoryError> {
        self.stores
            .iter()
            .find(|store| store.id == id)
            .ok_or(InventoryError::StoreNotFound { id })
    }

    pub fn get_store_mut(&mut self, id: StoreId) -> Result<&mut Store, InventoryError> {
        self.stores
            .iter_mut()
            .find(|store| store.id == id)
            .ok_or(InventoryError::StoreNotFound { id })
    }

    pub fn peek_item(&self, id: StoreId) -> Result<Option<&Item>, InventoryError> {
        let store = self.get_store(id)?;
        Ok(store.items.first())
    }

    pub fn has_item(&self, id: StoreId) -> Result<bool, InventoryError> {
        let store = self.get_store(id)?;
        Ok(!store.items.is_empty())
    }
}
