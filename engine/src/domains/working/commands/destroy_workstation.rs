use crate::working::Working::WorkstationDestroyed;
use crate::working::{Working, WorkingDomain, WorkingError, WorkstationId};

impl WorkingDomain {
    pub fn destroy_workstation<'operation>(
        &'operation mut self,
        id: WorkstationId,
    ) -> Result<impl FnOnce() -> Vec<Working> + 'operation, WorkingError> {
        let index = self
            .workstations
            .iter()
            .position(|workstation| workstation.id == id)
            .ok_or(WorkingError::WorkstationNotFound { id })?;
        let command = move || {
            self.workstations.remove(index);
            vec![WorkstationDestroyed { workstation: id }]
        };
        Ok(command)
    }
}
