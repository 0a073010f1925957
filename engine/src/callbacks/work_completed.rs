use crate::api::{EngineError, Event};
use crate::working::{WorkingError, WorkstationId, WorkstationStatus};
use crate::Engine;

impl Engine {
    /// Host-driven completion of a running process, for collaborators that
    /// own the work timing themselves. The tick update is the usual path.
    pub fn work_completed(&mut self, id: WorkstationId) -> Result<Vec<Event>, EngineError> {
        let workstation = self.working.get_workstation(id)?;
        if workstation.status != WorkstationStatus::Processing {
            return Err(WorkingError::ProcessNotRunning { id }.into());
        }
        let mut events = self.complete_process(id)?;
        events.extend(self.evaluate());
        self.publish(&events);
        Ok(events)
    }
}
