use engine::inventory::ItemType::{Bread, Flour, Water};
use engine::inventory::StoreRole::{ExternalInput, ExternalOutput};
use engine::inventory::{InventoryDomain, InventoryError, Item, ItemId, StoreId};

fn single_slot(domain: &mut InventoryDomain, id: u64, accepts: Option<engine::inventory::ItemType>) {
    let operation = domain
        .create_store(StoreId(id), ExternalInput, accepts, 1, None)
        .unwrap();
    operation();
}

#[test]
fn test_mismatched_item_leaves_occupancy_unchanged() {
    let mut domain = InventoryDomain::default();
    single_slot(&mut domain, 1, Some(Flour));
    let error = domain
        .add_item(
            StoreId(1),
            Item {
                id: ItemId(10),
                kind: Water,
            },
        )
        .err()
        .unwrap();
    assert_eq!(
        format!("{error:?}"),
        format!(
            "{:?}",
            InventoryError::ItemMismatch {
                store: StoreId(1),
                accepts: Some(Flour),
                actual: Water,
            }
        )
    );
    assert!(domain.get_store(StoreId(1)).unwrap().items.is_empty());
}

#[test]
fn test_occupancy_never_exceeds_capacity() {
    let mut domain = InventoryDomain::default();
    let operation = domain
        .create_store(StoreId(1), ExternalOutput, Some(Bread), 2, None)
        .unwrap();
    operation();
    for id in 10..12 {
        let operation = domain
            .add_item(
                StoreId(1),
                Item {
                    id: ItemId(id),
                    kind: Bread,
                },
            )
            .unwrap();
        operation();
    }
    let error = domain
        .add_item(
            StoreId(1),
            Item {
                id: ItemId(12),
                kind: Bread,
            },
        )
        .err()
        .unwrap();
    assert_eq!(
        format!("{error:?}"),
        format!("{:?}", InventoryError::StoreIsFull { id: StoreId(1) })
    );
    assert_eq!(domain.get_store(StoreId(1)).unwrap().items.len(), 2);
}

#[test]
fn test_duplicate_store_is_rejected() {
    let mut domain = InventoryDomain::default();
    single_slot(&mut domain, 1, Some(Flour));
    let error = domain
        .create_store(StoreId(1), ExternalInput, None, 1, None)
        .err()
        .unwrap();
    assert_eq!(
        format!("{error:?}"),
        format!(
            "{:?}",
            InventoryError::StoreAlreadyRegistered { id: StoreId(1) }
        )
    );
}

#[test]
fn test_removing_from_empty_store_fails() {
    let mut domain = InventoryDomain::default();
    single_slot(&mut domain, 1, Some(Flour));
    let error = domain.remove_item(StoreId(1)).err().unwrap();
    assert_eq!(
        format!("{error:?}"),
        format!("{:?}", InventoryError::StoreIsEmpty { id: StoreId(1) })
    );
}

#[test]
fn test_wildcard_store_accepts_anything() {
    let mut domain = InventoryDomain::default();
    let operation = domain
        .create_store(StoreId(1), ExternalInput, None, 3, None)
        .unwrap();
    operation();
    for (id, kind) in [(10, Flour), (11, Water), (12, Bread)] {
        let operation = domain
            .add_item(
                StoreId(1),
                Item {
                    id: ItemId(id),
                    kind,
                },
            )
            .unwrap();
        operation();
    }
    assert_eq!(domain.get_store(StoreId(1)).unwrap().items.len(), 3);
}

#[test]
fn test_items_leave_in_arrival_order() {
    let mut domain = InventoryDomain::default();
    let operation = domain
        .create_store(StoreId(1), ExternalInput, None, 2, None)
        .unwrap();
    operation();
    for (id, kind) in [(10, Flour), (11, Water)] {
        let operation = domain
            .add_item(
                StoreId(1),
                Item {
                    id: ItemId(id),
                    kind,
                },
            )
            .unwrap();
        operation();
    }
    assert!(domain.has_item(StoreId(1)).unwrap());
    assert_eq!(domain.peek_item(StoreId(1)).unwrap().unwrap().kind, Flour);
    let (first, operation) = domain.remove_item(StoreId(1)).unwrap();
    operation();
    assert_eq!(first.kind, Flour);
    let (second, operation) = domain.remove_item(StoreId(1)).unwrap();
    operation();
    assert_eq!(second.kind, Water);
    assert!(!domain.has_item(StoreId(1)).unwrap());
}

#[test]
fn test_removal_by_kind_skips_other_items() {
    let mut domain = InventoryDomain::default();
    let operation = domain
        .create_store(StoreId(1), ExternalInput, None, 2, None)
        .unwrap();
    operation();
    for (id, kind) in [(10, Flour), (11, Water)] {
        let operation = domain
            .add_item(
                StoreId(1),
                Item {
                    id: ItemId(id),
                    kind,
                },
            )
            .unwrap();
        operation();
    }
    let (taken, operation) = domain.remove_item_of(StoreId(1), Some(Water)).unwrap();
    operation();
    assert_eq!(taken.id, ItemId(11));
    let store = domain.get_store(StoreId(1)).unwrap();
    assert_eq!(store.items[0].id, ItemId(10));
}
