use std::collections::HashMap;

use crate::inventory::{Item, ItemId, ItemType, StoreId};
use crate::model::WorkerId;

pub struct DanglingItem {
    pub item: Item,
    pub worker: Option<WorkerId>,
}

#[derive(Debug, Clone, bincode::Encode, bincode::Decode)]
pub enum Hauling {
    DanglingItemAppeared {
        item: ItemId,
        kind: ItemType,
    },
    DanglingItemVanished {
        item: ItemId,
    },
    StoreReserved {
        store: StoreId,
        item: ItemId,
    },
    ReservationReleased {
        store: StoreId,
    },
}

#[derive(Debug, Clone, bincode::Encode, bincode::Decode)]
pub enum HaulingError {
    DanglingItemNotFound { id: ItemId },
    DanglingItemAlreadyRegistered { id: ItemId },
    StoreAlreadyReserved { store: StoreId },
}

#[derive(Default)]
pub struct HaulingDomain {
    pub dangling: Vec<DanglingItem>,
    pub reservations: HashMap<StoreId, ItemId>,
}

impl HaulingDomain {
    pub fn appear_dangling_item(
        &mut self,
        item: Item,
    ) -> Result<Hauling, HaulingError> {
        if self.dangling.iter().any(|dangling| dangling.item.id == item.id) {
            return Err(HaulingError::DanglingItemAlreadyRegistered { id: item.id });
        }
        self.dangling.push(DanglingItem { item, worker: None });
        Ok(Hauling::DanglingItemAppeared {
            item: item.id,
            kind: item.kind,
        })
    }

    pub fn vanish_dangling_item(&mut self, id: ItemId) -> Result<Hauling, HaulingError> {
        let index = self
            .dangling
            .iter()
            .position(|dangling| dangling.item.id == id)
            .ok_or(HaulingError::DanglingItemNotFound { id })?;
        self.dangling.remove(index);
        Ok(Hauling::DanglingItemVanished { item: id })
    }

    pub fn get_dangling_item(&self, id: ItemId) -> Result<&DanglingItem, HaulingError> {
        self.dangling
            .iter()
            .find(|dangling| dangling.item.id == id)
            .ok_or(HaulingError::DanglingItemNotFound { id })
    }

    pub fn get_dangling_item_mut(
        &mut self,
        id: ItemId,
    ) -> Result<&mut DanglingItem, HaulingError> {
        self.dangling
            .iter_mut()
            .find(|dangling| dangling.item.id == id)
            .ok_or(HaulingError::DanglingItemNotFound { id })
    }

    pub fn reserve_store(&mut self, store: StoreId, item: ItemId) -> Result<Hauling, HaulingError> {
        if self.reservations.contains_key(&store) {
            return Err(HaulingError::StoreAlreadyReserved { store });
        }
        self.reservations.insert(store, item);
        Ok(Hauling::StoreReserved { store, item })
    }

    pub fn release_reservation(&mut self, store: StoreId) -> Option<Hauling> {
        self.reservations
            .remove(&store)
            .map(|_| Hauling::ReservationReleased { store })
    }

    pub fn is_reserved(&self, store: StoreId) -> bool {
        self.reservations.contains_key(&store)
    }

    pub fn reservation_of(&self, item: ItemId) -> Option<StoreId> {
        self.reservations
            .iter()
            .find(|(_, reserved)| **reserved == item)
            .map(|(store, _)| *store)
    }

    pub fn deliveries_in_flight(&self) -> usize {
        self.reservations.len()
    }
}
