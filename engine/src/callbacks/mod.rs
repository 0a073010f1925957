pub use item_added::*;
pub use item_removed::*;
pub use pickup_completed::*;
pub use store_completed::*;
pub use work_completed::*;
pub use worker_available::*;

mod item_added;
mod item_removed;
mod pickup_completed;
mod store_completed;
mod work_completed;
mod worker_available;

use crate::api::{Completion, Task};
use crate::model::{Activity, WorkerId};
use crate::Engine;

impl Engine {
    /// The movement order matching the worker's current activity.
    pub(crate) fn completion_of(&self, worker: WorkerId) -> Completion {
        let Ok(record) = self.crew.get_worker(worker) else {
            return Completion::NoFurtherAction;
        };
        let task = match record.activity {
            Activity::Idle => return Completion::NoFurtherAction,
            Activity::PickingUp { store } => Task::Pickup { store },
            Activity::PickingUpDangling { item } => Task::PickupDangling { item },
            Activity::Storing { store } => Task::Store { store },
            Activity::Tending { workstation } => Task::Tend { workstation },
        };
        Completion::Reassigned { task }
    }
}
