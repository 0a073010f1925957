use crate::api::Event;
use crate::model::{Activity, Assignment, Crew};
use crate::working::{Working, WorkstationId, WorkstationStatus};
use crate::{occur, Engine};

impl Engine {
    /// Walks workstations in registration order and progresses whichever
    /// ones the current stock and crew allow.
    pub(crate) fn assign_workstations(&mut self) -> Vec<Event> {
        let mut events = vec![];
        let ids: Vec<WorkstationId> = self
            .working
            .workstations
            .iter()
            .map(|workstation| workstation.id)
            .collect();
        for id in ids {
            let Ok(workstation) = self.working.get_workstation(id) else {
                continue;
            };
            match workstation.status {
                WorkstationStatus::Idle | WorkstationStatus::WaitingForWorker => {
                    events.extend(self.advance_station(id));
                }
                WorkstationStatus::AwaitingOutput => {
                    events.extend(self.dispatch_output(id));
                }
                WorkstationStatus::Blocked => {
                    events.extend(self.unblock_station(id));
                }
                _ => {}
            }
        }
        events
    }

    fn advance_station(&mut self, id: WorkstationId) -> Vec<Event> {
        let Ok(workstation) = self.working.get_workstation(id) else {
            return vec![];
        };
        let status = workstation.status;
        if self.inputs_complete(id) {
            if self.ios_has_space(id) {
                return self.start_process(id);
            }
            let Ok(workstation) = self.working.get_workstation_mut(id) else {
                return vec![];
            };
            workstation.status = WorkstationStatus::Blocked;
            return occur![Working::WorkstationBlocked { workstation: id }];
        }
        if self.inputs_matchable(id) {
            if let Some(worker) = self.select_idle_worker() {
                let Some(leg) = self.next_input_leg(id) else {
                    return vec![];
                };
                let Ok(workstation) = self.working.get_workstation_mut(id) else {
                    return vec![];
                };
                workstation.worker = Some(worker);
                workstation.status = WorkstationStatus::AwaitingInputs;
                if let Ok(record) = self.crew.get_worker_mut(worker) {
                    record.assignment = Some(Assignment::Workstation { workstation: id });
                    record.activity = Activity::PickingUp { store: leg };
                }
                return occur![
                    Crew::WorkerAssigned {
                        worker,
                        workstation: id,
                    },
                    Crew::PickupStarted { worker, store: leg },
                ];
            }
            if status != WorkstationStatus::WaitingForWorker {
                let Ok(workstation) = self.working.get_workstation_mut(id) else {
                    return vec![];
                };
                workstation.status = WorkstationStatus::WaitingForWorker;
                return occur![Working::WorkstationQueued { workstation: id }];
            }
            return vec![];
        }
        // stock gone while queued, back to rest
        if status == WorkstationStatus::WaitingForWorker {
            if let Ok(workstation) = self.working.get_workstation_mut(id) {
                workstation.status = WorkstationStatus::Idle;
            }
        }
        vec![]
    }

    fn unblock_station(&mut self, id: WorkstationId) -> Vec<Event> {
        let mut events = vec![];
        let output_pending = self
            .working
            .get_workstation(id)
            .map(|workstation| workstation.output_pending)
            .unwrap_or(false);
        if output_pending && self.ios_has_space(id) {
            // blocked on completion, the internal output drained
            events.extend(occur![Working::WorkstationActivated { workstation: id }]);
            match self.complete_process(id) {
                Ok(batch) => events.extend(batch),
                Err(error) => {
                    log::error!("unable to complete process of workstation {id:?}: {error:?}")
                }
            }
            return events;
        }
        if let Some((_, kind)) = self.find_pending_output(id) {
            // blocked on delivery, wants a drained external output
            if self.eos_with_space_for(id, kind).is_some() {
                if let Ok(workstation) = self.working.get_workstation_mut(id) {
                    workstation.status = WorkstationStatus::AwaitingOutput;
                }
                events.extend(occur![Working::WorkstationActivated { workstation: id }]);
                events.extend(self.dispatch_output(id));
            }
            return events;
        }
        // blocked on start, wants a drained internal output
        if self.inputs_complete(id) && self.ios_has_space(id) {
            events.extend(occur![Working::WorkstationActivated { workstation: id }]);
            events.extend(self.start_process(id));
        }
        events
    }
}
