use crate::working::{WorkingDomain, WorkingError, Workstation, WorkstationId};

impl WorkingDomain {
    pub fn get_workstation(&self, id: WorkstationId) -> Result<&Workstation, WorkingError> {
        self.workstations
            .iter()
            .find(|workstation| workstation.id == id)
            .ok_or(WorkingError::WorkstationNotFound { id })
    }

    pub fn get_workstation_mut(
        &mut self,
        id: WorkstationId,
    ) -> Result<&mut Workstation, WorkingError> {
        self.workstations
            .iter_mut()
            .find(|workstation| workstation.id == id)
            .ok_or(WorkingError::WorkstationNotFound { id })
    }
}
