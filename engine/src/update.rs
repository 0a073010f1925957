use log::{error, warn};

use crate::api::{EngineError, Event};
use crate::inventory::{Item, ItemId};
use crate::model::{Activity, Assignment, Crew};
use crate::working::Working::{CycleCompleted, ProcessCompleted, ProcessStarted};
use crate::working::{Working, WorkingError, WorkstationId, WorkstationStatus};
use crate::{occur, Engine};

impl Engine {
    /// Steps the simulation once. Elapsed processes complete, products land
    /// in internal output stores, and a scheduler pass picks up whatever
    /// became possible.
    pub fn update(&mut self, time: f32) -> Vec<Event> {
        let mut events = vec![];
        for id in self.working.update(time) {
            match self.complete_process(id) {
                Ok(batch) => events.extend(batch),
                Err(error) => {
                    error!("unable to complete process of workstation {id:?}: {error:?}")
                }
            }
        }
        events.extend(self.evaluate());
        self.publish(&events);
        events
    }

    /// Consumes the staged inputs and starts the duration countdown.
    pub(crate) fn start_process(&mut self, id: WorkstationId) -> Vec<Event> {
        let Ok(workstation) = self.working.get_workstation(id) else {
            return vec![];
        };
        let slots = workstation.iis.clone();
        let worker = workstation.worker;
        let mut events = vec![];
        for store in slots {
            match self.inventory.remove_item(store) {
                Ok((_, operation)) => events.extend(occur![operation()]),
                Err(error) => {
                    error!("unable to consume input {store:?} of workstation {id:?}: {error:?}")
                }
            }
        }
        if let Ok(workstation) = self.working.get_workstation_mut(id) {
            workstation.status = WorkstationStatus::Processing;
            workstation.progress = 0.0;
        }
        if let Some(worker) = worker {
            if let Ok(record) = self.crew.get_worker_mut(worker) {
                record.activity = Activity::Tending { workstation: id };
            }
        }
        events.extend(occur![ProcessStarted { workstation: id }]);
        events
    }

    /// Finishes an elapsed process: the product appears in an internal
    /// output store and the output leg is dispatched. A full internal
    /// output keeps the product pending and blocks the station instead.
    pub(crate) fn complete_process(&mut self, id: WorkstationId) -> Result<Vec<Event>, EngineError> {
        let workstation = self.working.get_workstation(id)?;
        let outputs = workstation.ios.clone();
        let mut target = None;
        for store_id in outputs {
            let store = self.inventory.get_store(store_id)?;
            if store.free_space() > 0 {
                let kind = store.accepts.ok_or(EngineError::Working(
                    WorkingError::OutputKindUnspecified {
                        id,
                        store: store_id,
                    },
                ))?;
                target = Some((store_id, kind));
                break;
            }
        }
        let Some((store, kind)) = target else {
            let already_pending = self.working.get_workstation(id)?.output_pending;
            let mut events = if already_pending {
                vec![]
            } else {
                occur![ProcessCompleted { workstation: id }]
            };
            if let Ok(workstation) = self.working.get_workstation_mut(id) {
                workstation.output_pending = true;
                if workstation.status != WorkstationStatus::Blocked {
                    workstation.status = WorkstationStatus::Blocked;
                    events.extend(occur![Working::WorkstationBlocked { workstation: id }]);
                }
            }
            return Ok(events);
        };
        let mut events = if self.working.get_workstation(id)?.output_pending {
            // the completion announcement already went out when it elapsed
            vec![]
        } else {
            occur![ProcessCompleted { workstation: id }]
        };
        let item = Item {
            id: self.inventory.items_id.one(ItemId),
            kind,
        };
        let operation = self.inventory.add_item(store, item)?;
        events.extend(occur![
            operation(),
            CycleCompleted {
                workstation: id,
                item: item.id,
            },
        ]);
        if let Ok(workstation) = self.working.get_workstation_mut(id) {
            workstation.progress = 0.0;
            workstation.output_pending = false;
            workstation.status = WorkstationStatus::AwaitingOutput;
        }
        events.extend(self.dispatch_output(id));
        Ok(events)
    }

    /// Sends a worker to ferry the finished product to an external output
    /// store, blocking the station when none can take it. Safe to call on
    /// every pass, a leg already underway is left alone.
    pub(crate) fn dispatch_output(&mut self, id: WorkstationId) -> Vec<Event> {
        let Some((source, kind)) = self.find_pending_output(id) else {
            let Ok(workstation) = self.working.get_workstation(id) else {
                return vec![];
            };
            let worker = workstation.worker;
            let ferrying = worker
                .and_then(|worker| self.crew.get_worker(worker).ok())
                .map(|record| matches!(record.activity, Activity::Storing { .. }))
                .unwrap_or(false);
            if ferrying {
                // the last product is on its way to the external output
                return vec![];
            }
            // drained by the host, the cycle is over
            if let Ok(workstation) = self.working.get_workstation_mut(id) {
                workstation.status = WorkstationStatus::Idle;
                workstation.worker = None;
            }
            return match worker {
                Some(worker) => {
                    warn!("output of workstation {id:?} drained externally, releasing {worker:?}");
                    self.release_worker(worker)
                }
                None => vec![],
            };
        };
        if self.eos_with_space_for(id, kind).is_none() {
            let Ok(workstation) = self.working.get_workstation_mut(id) else {
                return vec![];
            };
            if workstation.status != WorkstationStatus::Blocked {
                workstation.status = WorkstationStatus::Blocked;
                return occur![Working::WorkstationBlocked { workstation: id }];
            }
            return vec![];
        }
        let Ok(workstation) = self.working.get_workstation(id) else {
            return vec![];
        };
        let mut events = vec![];
        let worker = match workstation.worker {
            Some(worker) => worker,
            None => {
                let Some(worker) = self.select_idle_worker() else {
                    return vec![];
                };
                if let Ok(workstation) = self.working.get_workstation_mut(id) {
                    workstation.worker = Some(worker);
                }
                if let Ok(record) = self.crew.get_worker_mut(worker) {
                    record.assignment = Some(Assignment::Workstation { workstation: id });
                }
                events.extend(occur![Crew::WorkerAssigned {
                    worker,
                    workstation: id,
                }]);
                worker
            }
        };
        let Ok(record) = self.crew.get_worker_mut(worker) else {
            return events;
        };
        match record.activity {
            Activity::Idle | Activity::Tending { .. } => {
                record.activity = Activity::PickingUp { store: source };
                events.extend(occur![Crew::PickupStarted {
                    worker,
                    store: source,
                }]);
            }
            _ => {}
        }
        events
    }
}
