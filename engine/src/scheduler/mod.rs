pub use assign_deliveries::*;
pub use assign_workstations::*;
pub use planning::*;
pub use select_worker::*;

mod assign_deliveries;
mod assign_workstations;
mod planning;
mod select_worker;

use crate::api::Event;
use crate::Engine;

/// Tunables of the assignment scheduler.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Policy {
    /// How many dangling-item deliveries may be reserved at once. Keeps
    /// some workers free for workstation duty.
    pub max_concurrent_deliveries: usize,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            max_concurrent_deliveries: 3,
        }
    }
}

impl Engine {
    /// One assignment pass: deliveries first, then workstation duty.
    /// Finding nothing to assign is a normal outcome, the pass simply
    /// runs again on the next trigger.
    pub(crate) fn evaluate(&mut self) -> Vec<Event> {
        let mut events = self.assign_deliveries();
        events.extend(self.assign_workstations());
        events
    }
}
