use crate::inventory::{ItemId, StoreId};
use crate::model::WorkerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct WorkstationId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub enum WorkstationStatus {
    Idle,
    WaitingForWorker,
    AwaitingInputs,
    Processing,
    AwaitingOutput,
    Blocked,
}

pub struct Workstation {
    pub id: WorkstationId,
    pub eis: Vec<StoreId>,
    pub iis: Vec<StoreId>,
    pub ios: Vec<StoreId>,
    pub eos: Vec<StoreId>,
    pub duration: f32,
    pub progress: f32,
    pub status: WorkstationStatus,
    pub worker: Option<WorkerId>,
    /// A finished process whose product could not materialize yet because
    /// every internal output slot was full.
    pub output_pending: bool,
}

#[derive(Debug, Clone, bincode::Encode, bincode::Decode)]
pub enum Working {
    WorkstationCreated {
        workstation: WorkstationId,
    },
    WorkstationDestroyed {
        workstation: WorkstationId,
    },
    WorkstationQueued {
        workstation: WorkstationId,
    },
    WorkstationBlocked {
        workstation: WorkstationId,
    },
    WorkstationActivated {
        workstation: WorkstationId,
    },
    ProcessStarted {
        workstation: WorkstationId,
    },
    InputConsumed {
        workstation: WorkstationId,
        store: StoreId,
        item: ItemId,
    },
    ProcessCompleted {
        workstation: WorkstationId,
    },
    CycleCompleted {
        workstation: WorkstationId,
        item: ItemId,
    },
}

#[derive(Debug, Clone, bincode::Encode, bincode::Decode)]
pub enum WorkingError {
    WorkstationNotFound {
        id: WorkstationId,
    },
    WorkstationAlreadyRegistered {
        id: WorkstationId,
    },
    ProcessNotRunning {
        id: WorkstationId,
    },
    OutputKindUnspecified {
        id: WorkstationId,
        store: StoreId,
    },
    StoreRoleMismatch {
        id: WorkstationId,
        store: StoreId,
    },
}

#[derive(Default)]
pub struct WorkingDomain {
    pub workstations: Vec<Workstation>,
}
