use crate::collections::Sequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct StoreId(pub u64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    bincode::Encode,
    bincode::Decode,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum StoreRole {
    ExternalInput,
    InternalInput,
    InternalOutput,
    ExternalOutput,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    bincode::Encode,
    bincode::Decode,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum ItemType {
    Flour,
    Water,
    Dough,
    Bread,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct ItemId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct Item {
    pub id: ItemId,
    pub kind: ItemType,
}

pub struct Store {
    pub id: StoreId,
    pub role: StoreRole,
    pub accepts: Option<ItemType>,
    pub capacity: usize,
    pub items: Vec<Item>,
}

impl Store {
    pub fn accepts_kind(&self, kind: ItemType) -> bool {
        match self.accepts {
            Some(accepted) => accepted == kind,
            None => true,
        }
    }

    pub fn free_space(&self) -> usize {
        self.capacity - self.items.len()
    }
}

#[derive(Debug, Clone, bincode::Encode, bincode::Decode)]
pub enum Inventory {
    StoreCreated {
        store: StoreId,
        role: StoreRole,
    },
    StoreDestroyed {
        store: StoreId,
    },
    ItemAdded {
        item: ItemId,
        kind: ItemType,
        store: StoreId,
    },
    ItemRemoved {
        item: ItemId,
        store: StoreId,
    },
}

#[derive(Debug, Clone, bincode::Encode, bincode::Decode)]
pub enum InventoryError {
    StoreNotFound {
        id: StoreId,
    },
    StoreAlreadyRegistered {
        id: StoreId,
    },
    StoreIsFull {
        id: StoreId,
    },
    StoreIsEmpty {
        id: StoreId,
    },
    StoreInUse {
        id: StoreId,
    },
    ItemMismatch {
        store: StoreId,
        accepts: Option<ItemType>,
        actual: ItemType,
    },
}

#[derive(Default)]
pub struct InventoryDomain {
    pub items_id: Sequence,
    pub stores: Vec<Store>,
}
