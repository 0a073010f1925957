use crate::model::WorkerId;
use crate::Engine;

impl Engine {
    /// Next idle worker by priority and id order.
    pub(crate) fn select_idle_worker(&self) -> Option<WorkerId> {
        self.crew.idle_workers().first().copied()
    }

    /// Nearest idle worker to the given entity when a distance function is
    /// injected, falling back to priority and id order.
    pub(crate) fn select_nearest_idle_worker(&self, target: u64) -> Option<WorkerId> {
        let candidates = self.crew.idle_workers();
        let mut best: Option<(WorkerId, f32)> = None;
        for worker in &candidates {
            if let Some(distance) = self.measure(worker.0, target) {
                match best {
                    Some((_, shortest)) if distance >= shortest => {}
                    _ => best = Some((*worker, distance)),
                }
            }
        }
        best.map(|(worker, _)| worker)
            .or_else(|| candidates.first().copied())
    }
}
