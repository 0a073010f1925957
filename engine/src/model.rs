use crate::inventory::{Item, ItemId, StoreId};
use crate::working::WorkstationId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct WorkerId(pub u64);

/// What a worker is occupied with right now. Travel time between points is
/// owned by the movement collaborator; an activity spans the travel and the
/// act, and ends when the matching completion callback arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub enum Activity {
    Idle,
    PickingUp { store: StoreId },
    PickingUpDangling { item: ItemId },
    Storing { store: StoreId },
    Tending { workstation: WorkstationId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub enum Assignment {
    Workstation { workstation: WorkstationId },
    Delivery { item: ItemId, store: StoreId },
}

pub struct Worker {
    pub id: WorkerId,
    pub priority: u8,
    pub activity: Activity,
    pub assignment: Option<Assignment>,
    pub hands: Option<Item>,
}

impl Worker {
    pub fn is_idle(&self) -> bool {
        self.activity == Activity::Idle && self.assignment.is_none()
    }
}

#[derive(Debug, Clone, bincode::Encode, bincode::Decode)]
pub enum Crew {
    WorkerAppeared {
        worker: WorkerId,
        priority: u8,
    },
    WorkerVanished {
        worker: WorkerId,
    },
    WorkerAssigned {
        worker: WorkerId,
        workstation: WorkstationId,
    },
    WorkerReleased {
        worker: WorkerId,
    },
    PickupStarted {
        worker: WorkerId,
        store: StoreId,
    },
    PickupDanglingStarted {
        worker: WorkerId,
        item: ItemId,
        store: StoreId,
    },
    StoreStarted {
        worker: WorkerId,
        store: StoreId,
    },
    ItemDelivered {
        worker: WorkerId,
        item: ItemId,
        store: StoreId,
    },
}

#[derive(Debug, Clone, bincode::Encode, bincode::Decode)]
pub enum CrewError {
    WorkerNotFound {
        id: WorkerId,
    },
    WorkerAlreadyRegistered {
        id: WorkerId,
    },
    ActivityMismatch {
        worker: WorkerId,
        actual: Activity,
    },
    HandsAreEmpty {
        worker: WorkerId,
    },
    HandsAreFull {
        worker: WorkerId,
    },
    NothingToCarry {
        worker: WorkerId,
    },
}

#[derive(Default)]
pub struct CrewDomain {
    pub workers: Vec<Worker>,
}

impl CrewDomain {
    pub fn appear_worker(&mut self, id: WorkerId, priority: u8) -> Result<Crew, CrewError> {
        if self.workers.iter().any(|worker| worker.id == id) {
            return Err(CrewError::WorkerAlreadyRegistered { id });
        }
        self.workers.push(Worker {
            id,
            priority,
            activity: Activity::Idle,
            assignment: None,
            hands: None,
        });
        Ok(Crew::WorkerAppeared {
            worker: id,
            priority,
        })
    }

    pub fn vanish_worker(&mut self, id: WorkerId) -> Result<Crew, CrewError> {
        let index = self
            .workers
            .iter()
            .position(|worker| worker.id == id)
            .ok_or(CrewError::WorkerNotFound { id })?;
        self.workers.remove(index);
        Ok(Crew::WorkerVanished { worker: id })
    }

    pub fn get_worker(&self, id: WorkerId) -> Result<&Worker, CrewError> {
        self.workers
            .iter()
            .find(|worker| worker.id == id)
            .ok_or(CrewError::WorkerNotFound { id })
    }

    pub fn get_worker_mut(&mut self, id: WorkerId) -> Result<&mut Worker, CrewError> {
        self.workers
            .iter_mut()
            .find(|worker| worker.id == id)
            .ok_or(CrewError::WorkerNotFound { id })
    }

    /// Idle workers ordered for assignment, highest priority first,
    /// then by ascending id.
    pub fn idle_workers(&self) -> Vec<WorkerId> {
        let mut idle: Vec<&Worker> = self.workers.iter().filter(|worker| worker.is_idle()).collect();
        idle.sort_by(|a, b| b.priority.cmp(&a.priority).then(a.id.0.cmp(&b.id.0)));
        idle.iter().map(|worker| worker.id).collect()
    }
}
