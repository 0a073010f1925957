use log::warn;

use crate::api::{EngineError, Event};
use crate::inventory::{InventoryError, Item, ItemId, ItemType, StoreId, StoreRole};
use crate::model::{Activity, Crew, WorkerId};
use crate::working::{WorkingError, WorkstationId};
use crate::{occur, Engine};

impl Engine {
    pub fn register_store(
        &mut self,
        id: StoreId,
        role: StoreRole,
        accepts: Option<ItemType>,
        capacity: usize,
        initial_item: Option<ItemType>,
    ) -> Result<Vec<Event>, EngineError> {
        let operation = self
            .inventory
            .create_store(id, role, accepts, capacity, initial_item)?;
        let mut events = occur![operation()];
        events.extend(self.evaluate());
        self.publish(&events);
        Ok(events)
    }

    pub fn unregister_store(&mut self, id: StoreId) -> Result<Vec<Event>, EngineError> {
        let referenced = self.working.workstations.iter().any(|workstation| {
            workstation.eis.contains(&id)
                || workstation.iis.contains(&id)
                || workstation.ios.contains(&id)
                || workstation.eos.contains(&id)
        });
        if referenced {
            return Err(InventoryError::StoreInUse { id }.into());
        }
        let mut events = vec![];
        if self.hauling.is_reserved(id) {
            // abort the delivery heading here, the item goes back to the queue
            let courier = self
                .hauling
                .dangling
                .iter()
                .find(|dangling| self.hauling.reservations.get(&id) == Some(&dangling.item.id))
                .and_then(|dangling| dangling.worker);
            if let Some(worker) = courier {
                events.extend(self.abort_worker_task(worker)?);
            }
            if let Some(event) = self.hauling.release_reservation(id) {
                events.extend(occur![event]);
            }
        }
        let operation = self.inventory.destroy_store(id)?;
        events.extend(occur![operation()]);
        events.extend(self.evaluate());
        self.publish(&events);
        Ok(events)
    }

    pub fn register_workstation(
        &mut self,
        id: WorkstationId,
        eis: Vec<StoreId>,
        iis: Vec<StoreId>,
        ios: Vec<StoreId>,
        eos: Vec<StoreId>,
        duration: f32,
    ) -> Result<Vec<Event>, EngineError> {
        let roles = [
            (&eis, StoreRole::ExternalInput),
            (&iis, StoreRole::InternalInput),
            (&ios, StoreRole::InternalOutput),
            (&eos, StoreRole::ExternalOutput),
        ];
        for (stores, role) in roles {
            for store_id in stores {
                let store = self.inventory.get_store(*store_id)?;
                if store.role != role {
                    return Err(WorkingError::StoreRoleMismatch {
                        id,
                        store: *store_id,
                    }
                    .into());
                }
                // internal outputs name the product they will hold
                if role == StoreRole::InternalOutput && store.accepts.is_none() {
                    return Err(WorkingError::OutputKindUnspecified {
                        id,
                        store: *store_id,
                    }
                    .into());
                }
            }
        }
        let command = self
            .working
            .create_workstation(id, eis, iis, ios, eos, duration)?;
        let mut events = occur![command()];
        events.extend(self.evaluate());
        self.publish(&events);
        Ok(events)
    }

    pub fn unregister_workstation(&mut self, id: WorkstationId) -> Result<Vec<Event>, EngineError> {
        let worker = self.working.get_workstation(id)?.worker;
        let mut events = vec![];
        if let Some(worker) = worker {
            events.extend(self.abort_worker_task(worker)?);
        }
        let command = self.working.destroy_workstation(id)?;
        events.extend(occur![command()]);
        events.extend(self.evaluate());
        self.publish(&events);
        Ok(events)
    }

    pub fn register_worker(
        &mut self,
        id: WorkerId,
        priority: u8,
    ) -> Result<Vec<Event>, EngineError> {
        let mut events = occur![self.crew.appear_worker(id, priority)?];
        events.extend(self.evaluate());
        self.publish(&events);
        Ok(events)
    }

    pub fn unregister_worker(&mut self, id: WorkerId) -> Result<Vec<Event>, EngineError> {
        let idle = self.crew.get_worker(id)?.is_idle();
        let mut events = if idle {
            vec![]
        } else {
            self.abort_worker_task(id)?
        };
        events.extend(occur![self.crew.vanish_worker(id)?]);
        events.extend(self.evaluate());
        self.publish(&events);
        Ok(events)
    }

    pub fn register_dangling_item(
        &mut self,
        id: ItemId,
        kind: ItemType,
    ) -> Result<Vec<Event>, EngineError> {
        self.inventory.items_id.register(id.0);
        let event = self.hauling.appear_dangling_item(Item { id, kind })?;
        let matchable = self
            .inventory
            .stores
            .iter()
            .any(|store| store.role == StoreRole::ExternalInput && store.accepts_kind(kind));
        if !matchable {
            warn!("no external input store accepts {kind:?}, item {id:?} stays dangling");
        }
        let mut events = occur![event];
        events.extend(self.evaluate());
        self.publish(&events);
        Ok(events)
    }

    pub fn unregister_dangling_item(&mut self, id: ItemId) -> Result<Vec<Event>, EngineError> {
        let courier = self.hauling.get_dangling_item(id)?.worker;
        let mut events = vec![];
        if let Some(store) = self.hauling.reservation_of(id) {
            if let Some(event) = self.hauling.release_reservation(store) {
                events.extend(occur![event]);
            }
        }
        if let Some(worker) = courier {
            // the item leaves the world with the record, nothing to requeue
            if let Ok(record) = self.crew.get_worker_mut(worker) {
                record.assignment = None;
                record.activity = Activity::Idle;
                record.hands = None;
            }
            events.extend(occur![Crew::WorkerReleased { worker }]);
        }
        events.extend(occur![self.hauling.vanish_dangling_item(id)?]);
        events.extend(self.evaluate());
        self.publish(&events);
        Ok(events)
    }
}
