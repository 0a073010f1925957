use log::warn;

use crate::api::Event;
use crate::inventory::StoreRole;
use crate::model::{Activity, Assignment, Crew};
use crate::{occur, Engine};

impl Engine {
    /// Matches unclaimed dangling items to empty, unreserved external input
    /// stores and dispatches idle workers, up to the delivery quota.
    pub(crate) fn assign_deliveries(&mut self) -> Vec<Event> {
        let mut events = vec![];
        let pending: Vec<_> = self
            .hauling
            .dangling
            .iter()
            .filter(|dangling| dangling.worker.is_none())
            .map(|dangling| dangling.item)
            .collect();
        for item in pending {
            if self.hauling.deliveries_in_flight() >= self.policy.max_concurrent_deliveries {
                break;
            }
            let store = self
                .inventory
                .stores
                .iter()
                .find(|store| {
                    store.role == StoreRole::ExternalInput
                        && store.items.is_empty()
                        && store.accepts_kind(item.kind)
                        && !self.hauling.is_reserved(store.id)
                })
                .map(|store| store.id);
            let Some(store) = store else {
                continue;
            };
            let Some(worker) = self.select_nearest_idle_worker(item.id.0) else {
                break;
            };
            let reserved = match self.hauling.reserve_store(store, item.id) {
                Ok(reserved) => reserved,
                Err(error) => {
                    warn!("unable to reserve {store:?} for {:?}: {error:?}", item.id);
                    continue;
                }
            };
            if let Ok(dangling) = self.hauling.get_dangling_item_mut(item.id) {
                dangling.worker = Some(worker);
            }
            if let Ok(record) = self.crew.get_worker_mut(worker) {
                record.assignment = Some(Assignment::Delivery {
                    item: item.id,
                    store,
                });
                record.activity = Activity::PickingUpDangling { item: item.id };
            }
            events.extend(occur![
                reserved,
                Crew::PickupDanglingStarted {
                    worker,
                    item: item.id,
                    store,
                },
            ]);
        }
        events
    }
}
