use crate::api::{EngineError, Event};
use crate::model::{Assignment, WorkerId};
use crate::working::WorkstationStatus;
use crate::{occur, Engine};

impl Engine {
    /// Marks a worker free again. A no-op for an idle worker, an abort for
    /// a busy one: the task unwinds, carried goods return to the world.
    pub fn worker_available(&mut self, id: WorkerId) -> Result<Vec<Event>, EngineError> {
        let worker = self.crew.get_worker(id)?;
        if worker.is_idle() && worker.hands.is_none() {
            return Ok(vec![]);
        }
        let mut events = self.abort_worker_task(id)?;
        events.extend(self.evaluate());
        self.publish(&events);
        Ok(events)
    }

    /// Unwinds whatever the worker was doing and releases it. Dangling
    /// cargo is requeued for assignment, workstation cargo re-enters the
    /// world as a dangling item.
    pub(crate) fn abort_worker_task(&mut self, id: WorkerId) -> Result<Vec<Event>, EngineError> {
        let worker = self.crew.get_worker(id)?;
        let assignment = worker.assignment;
        let carried = worker.hands;
        let mut events = vec![];
        match assignment {
            Some(Assignment::Delivery { item, store }) => {
                if let Some(event) = self.hauling.release_reservation(store) {
                    events.extend(occur![event]);
                }
                if let Ok(dangling) = self.hauling.get_dangling_item_mut(item) {
                    dangling.worker = None;
                }
            }
            Some(Assignment::Workstation { workstation }) => {
                if let Ok(station) = self.working.get_workstation_mut(workstation) {
                    station.worker = None;
                    if station.status == WorkstationStatus::AwaitingInputs {
                        station.status = WorkstationStatus::Idle;
                    }
                }
                if let Some(item) = carried {
                    // goods in transit drop back into the world
                    if let Ok(event) = self.hauling.appear_dangling_item(item) {
                        events.extend(occur![event]);
                    }
                }
            }
            None => {}
        }
        let record = self.crew.get_worker_mut(id)?;
        record.assignment = None;
        record.hands = None;
        events.extend(self.release_worker(id));
        Ok(events)
    }
}
