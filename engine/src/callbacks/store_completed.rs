use log::warn;

use crate::api::{Completion, EngineError, Event};
use crate::model::{Activity, Assignment, Crew, CrewError, WorkerId};
use crate::working::Working::{InputConsumed, WorkstationBlocked};
use crate::working::WorkstationStatus;
use crate::{occur, Engine};

impl Engine {
    /// The movement collaborator reports the carried item was placed. The
    /// store accepts the cargo, then the cycle continues: the next input
    /// leg, the process start, or the worker's release.
    pub fn store_completed(&mut self, id: WorkerId) -> Result<Completion, EngineError> {
        let worker = self.crew.get_worker(id)?;
        let Activity::Storing { store } = worker.activity else {
            return Err(CrewError::ActivityMismatch {
                worker: id,
                actual: worker.activity,
            }
            .into());
        };
        let Some(assignment) = worker.assignment else {
            return Err(CrewError::ActivityMismatch {
                worker: id,
                actual: worker.activity,
            }
            .into());
        };
        let item = worker.hands.ok_or(CrewError::HandsAreEmpty { worker: id })?;
        if let Assignment::Workstation { workstation } = assignment {
            let station = self.working.get_workstation(workstation)?;
            if !station.iis.contains(&store) && !station.eos.contains(&store) {
                return Err(CrewError::ActivityMismatch {
                    worker: id,
                    actual: Activity::Storing { store },
                }
                .into());
            }
        }
        // a rejected store leaves the cargo in the worker's hands
        let operation = self.inventory.add_item(store, item)?;
        let mut events = occur![operation()];
        self.crew.get_worker_mut(id)?.hands = None;
        match assignment {
            Assignment::Delivery {
                item: dangling, ..
            } => {
                events.extend(occur![self.hauling.vanish_dangling_item(dangling)?]);
                if let Some(event) = self.hauling.release_reservation(store) {
                    events.extend(occur![event]);
                }
                events.extend(occur![Crew::ItemDelivered {
                    worker: id,
                    item: item.id,
                    store,
                }]);
                events.extend(self.release_worker(id));
                events.extend(self.evaluate());
            }
            Assignment::Workstation { workstation } => {
                let station = self.working.get_workstation(workstation)?;
                let into_iis = station.iis.contains(&store);
                let into_eos = station.eos.contains(&store);
                if into_iis {
                    events.extend(occur![InputConsumed {
                        workstation,
                        store,
                        item: item.id,
                    }]);
                    if self.inputs_complete(workstation) {
                        if self.ios_has_space(workstation) {
                            events.extend(self.start_process(workstation));
                        } else {
                            let station = self.working.get_workstation_mut(workstation)?;
                            station.status = WorkstationStatus::Blocked;
                            self.crew.get_worker_mut(id)?.activity = Activity::Tending {
                                workstation,
                            };
                            events.extend(occur![WorkstationBlocked { workstation }]);
                        }
                    } else if let Some(leg) = self.next_input_leg(workstation) {
                        self.crew.get_worker_mut(id)?.activity =
                            Activity::PickingUp { store: leg };
                        events.extend(occur![Crew::PickupStarted {
                            worker: id,
                            store: leg,
                        }]);
                    } else {
                        warn!(
                            "input stock of workstation {workstation:?} ran out, releasing {id:?}"
                        );
                        let station = self.working.get_workstation_mut(workstation)?;
                        station.worker = None;
                        station.status = WorkstationStatus::Idle;
                        events.extend(self.release_worker(id));
                        events.extend(self.evaluate());
                    }
                } else if into_eos {
                    events.extend(occur![Crew::ItemDelivered {
                        worker: id,
                        item: item.id,
                        store,
                    }]);
                    let station = self.working.get_workstation_mut(workstation)?;
                    station.worker = None;
                    station.status = WorkstationStatus::Idle;
                    station.progress = 0.0;
                    events.extend(self.release_worker(id));
                    events.extend(self.evaluate());
                }
            }
        }
        self.publish(&events);
        Ok(self.completion_of(id))
    }

    /// Back to the idle pool.
    pub(crate) fn release_worker(&mut self, id: WorkerId) -> Vec<Event> {
        if let Ok(record) = self.crew.get_worker_mut(id) {
            record.assignment = None;
            record.activity = Activity::Idle;
        }
        occur![Crew::WorkerReleased { worker: id }]
    }
}
