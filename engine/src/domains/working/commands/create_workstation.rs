use crate::inventory::StoreId;
use crate::working::Working::WorkstationCreated;
use crate::working::{
    Working, WorkingDomain, WorkingError, Workstation, WorkstationId, WorkstationStatus,
};

impl WorkingDomain {
    pub fn create_workstation<'operation>(
        &'operation mut self,
        id: WorkstationId,
        eis: Vec<StoreId>,
        iis: Vec<StoreId>,
        ios: Vec<StoreId>,
        eos: Vec<StoreId>,
        duration: f32,
    ) -> Result<impl FnOnce() -> Vec<Working> + 'operation, WorkingError> {
        if self.workstations.iter().any(|workstation| workstation.id == id) {
            return Err(WorkingError::WorkstationAlreadyRegistered { id });
        }
        let command = move || {
            self.workstations.push(Workstation {
                id,
                eis,
                iis,
                ios,
                eos,
                duration,
                progress: 0.0,
                status: WorkstationStatus::Idle,
                worker: None,
                output_pending: false,
            });
            vec![WorkstationCreated { workstation: id }]
        };
        Ok(command)
    }
}
