use crate::working::{WorkingDomain, WorkstationId, WorkstationStatus};

impl WorkingDomain {
    /// Advances running processes, reporting stations whose duration elapsed.
    pub fn update(&mut self, time: f32) -> Vec<WorkstationId> {
        let mut elapsed = vec![];
        for workstation in self.workstations.iter_mut() {
            if workstation.status != WorkstationStatus::Processing {
                continue;
            }
            workstation.progress += time;
            if workstation.progress >= workstation.duration {
                workstation.progress = workstation.duration;
                elapsed.push(workstation.id);
            }
        }
        elapsed
    }
}
