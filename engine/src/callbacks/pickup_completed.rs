use crate::api::{Completion, EngineError};
use crate::inventory::InventoryError;
use crate::model::{Activity, Assignment, Crew, CrewError, WorkerId};
use crate::{occur, Engine};

impl Engine {
    /// The movement collaborator reports the worker arrived and picked up.
    /// The cargo lands in the worker's hands and the matching store leg
    /// starts.
    pub fn pickup_completed(&mut self, id: WorkerId) -> Result<Completion, EngineError> {
        let worker = self.crew.get_worker(id)?;
        match worker.activity {
            Activity::PickingUp { store } => {
                let Some(Assignment::Workstation { workstation }) = worker.assignment else {
                    return Err(CrewError::ActivityMismatch {
                        worker: id,
                        actual: worker.activity,
                    }
                    .into());
                };
                if worker.hands.is_some() {
                    return Err(CrewError::HandsAreFull { worker: id }.into());
                }
                let station = self.working.get_workstation(workstation)?;
                let from_eis = station.eis.contains(&store);
                let from_ios = station.ios.contains(&store);
                let slots = station.iis.clone();
                // choose the destination before touching any stock
                let (wanted, destination) = if from_eis {
                    let mut found = None;
                    for slot_id in slots {
                        let slot = self.inventory.get_store(slot_id)?;
                        if slot.items.is_empty() {
                            found = Some((slot.accepts, slot_id));
                            break;
                        }
                    }
                    found.ok_or(CrewError::NothingToCarry { worker: id })?
                } else if from_ios {
                    let product = self
                        .inventory
                        .peek_item(store)?
                        .ok_or(InventoryError::StoreIsEmpty { id: store })?;
                    let kind = product.kind;
                    let destination = self
                        .eos_with_space_for(workstation, kind)
                        .ok_or(CrewError::NothingToCarry { worker: id })?;
                    (None, destination)
                } else {
                    return Err(CrewError::ActivityMismatch {
                        worker: id,
                        actual: Activity::PickingUp { store },
                    }
                    .into());
                };
                let (item, operation) = self.inventory.remove_item_of(store, wanted)?;
                let mut events = occur![operation()];
                let record = self.crew.get_worker_mut(id)?;
                record.hands = Some(item);
                record.activity = Activity::Storing { store: destination };
                events.extend(occur![Crew::StoreStarted {
                    worker: id,
                    store: destination,
                }]);
                self.publish(&events);
                Ok(self.completion_of(id))
            }
            Activity::PickingUpDangling { item } => {
                let Some(Assignment::Delivery { store, .. }) = worker.assignment else {
                    return Err(CrewError::ActivityMismatch {
                        worker: id,
                        actual: worker.activity,
                    }
                    .into());
                };
                if worker.hands.is_some() {
                    return Err(CrewError::HandsAreFull { worker: id }.into());
                }
                let carried = self.hauling.get_dangling_item(item)?.item;
                let record = self.crew.get_worker_mut(id)?;
                record.hands = Some(carried);
                record.activity = Activity::Storing { store };
                let events = occur![Crew::StoreStarted {
                    worker: id,
                    store,
                }];
                self.publish(&events);
                Ok(self.completion_of(id))
            }
            actual => Err(CrewError::ActivityMismatch { worker: id, actual }.into()),
        }
    }
}
