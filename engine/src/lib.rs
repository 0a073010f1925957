pub use domains::*;
pub use scheduler::Policy;

use crate::api::{EngineError, Event};
use crate::hauling::HaulingDomain;
use crate::hooks::{EventKind, Hooks};
use crate::inventory::{InventoryDomain, ItemType, StoreId};
use crate::model::CrewDomain;
use crate::working::WorkingDomain;

pub mod api;
pub mod collections;
mod domains;
pub mod hooks;
pub mod model;

mod callbacks;
mod registration;
mod scheduler;
mod update;

pub type Distance = Box<dyn Fn(u64, u64) -> Option<f32>>;

/// The task engine. Owns registration records and assignment bookkeeping;
/// positions and visuals stay with the host, referenced by id only.
pub struct Engine {
    pub inventory: InventoryDomain,
    pub working: WorkingDomain,
    pub crew: CrewDomain,
    pub hauling: HaulingDomain,
    pub policy: Policy,
    hooks: Hooks,
    distance: Option<Distance>,
}

impl Engine {
    pub fn new(policy: Policy) -> Self {
        Self {
            inventory: InventoryDomain::default(),
            working: WorkingDomain::default(),
            crew: CrewDomain::default(),
            hauling: HaulingDomain::default(),
            policy,
            hooks: Hooks::logging(),
            distance: None,
        }
    }

    pub fn subscribe<H>(&mut self, kind: EventKind, hook: H)
    where
        H: FnMut(&Event) + 'static,
    {
        self.hooks.subscribe(kind, hook);
    }

    pub fn install_hooks(&mut self, hooks: Hooks) {
        self.hooks.merge(hooks);
    }

    /// Injects the spatial query used for nearest-worker selection. Without
    /// it workers are chosen by priority and id order.
    pub fn set_distance_function<F>(&mut self, distance: F)
    where
        F: Fn(u64, u64) -> Option<f32> + 'static,
    {
        self.distance = Some(Box::new(distance));
    }

    pub fn has_item(&self, store: StoreId) -> Result<bool, EngineError> {
        Ok(self.inventory.has_item(store)?)
    }

    pub fn peek_item(&self, store: StoreId) -> Result<Option<ItemType>, EngineError> {
        Ok(self.inventory.peek_item(store)?.map(|item| item.kind))
    }

    pub(crate) fn measure(&self, a: u64, b: u64) -> Option<f32> {
        self.distance.as_ref().and_then(|distance| distance(a, b))
    }

    /// Notifies hooks once the triggering transition has fully committed.
    /// Handlers subscribed during dispatch take effect from the next event
    /// batch.
    pub(crate) fn publish(&mut self, events: &[Event]) {
        let mut hooks = std::mem::take(&mut self.hooks);
        for event in events {
            hooks.notify(event);
        }
        hooks.merge(std::mem::take(&mut self.hooks));
        self.hooks = hooks;
    }
}
