#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use engine::api::{Completion, EngineError, Event};
use engine::hooks::EventKind;
use engine::inventory::{ItemId, ItemType, StoreId, StoreRole};
use engine::model::{Activity, WorkerId};
use engine::working::{WorkstationId, WorkstationStatus};
use engine::{Engine, Policy};

/// Scenario builder driving the engine the way a host loop would: the
/// movement collaborator is simulated by answering every pickup and store
/// order with the matching completion callback.
pub struct EngineTestScenario {
    pub engine: Engine,
    stores: HashMap<String, StoreId>,
    workers: HashMap<String, WorkerId>,
    workstations: HashMap<String, WorkstationId>,
    items: HashMap<String, ItemId>,
    observed: Rc<RefCell<Vec<Event>>>,
    current_result: Result<Vec<Event>, EngineError>,
    current_completion: Option<Result<Completion, EngineError>>,
    ids: u64,
}

impl EngineTestScenario {
    pub fn new() -> Self {
        Self::with_policy(Policy::default())
    }

    pub fn with_policy(policy: Policy) -> Self {
        let mut engine = Engine::new(policy);
        let observed = Rc::new(RefCell::new(vec![]));
        for kind in EventKind::ALL {
            let sink = observed.clone();
            engine.subscribe(kind, move |event| sink.borrow_mut().push(event.clone()));
        }
        EngineTestScenario {
            engine,
            stores: Default::default(),
            workers: Default::default(),
            workstations: Default::default(),
            items: Default::default(),
            observed,
            current_result: Err(EngineError::Test),
            current_completion: None,
            ids: 0,
        }
    }

    fn next_id(&mut self) -> u64 {
        self.ids += 1;
        self.ids
    }

    pub fn store(&self, name: &str) -> StoreId {
        *self.stores.get(name).unwrap()
    }

    pub fn worker(&self, name: &str) -> WorkerId {
        *self.workers.get(name).unwrap()
    }

    pub fn workstation(&self, name: &str) -> WorkstationId {
        *self.workstations.get(name).unwrap()
    }

    pub fn item(&self, name: &str) -> ItemId {
        *self.items.get(name).unwrap()
    }

    pub fn given_store(
        self,
        name: &str,
        role: StoreRole,
        accepts: Option<ItemType>,
        capacity: usize,
    ) -> Self {
        self.given_store_with(name, role, accepts, capacity, None)
    }

    pub fn given_stocked_store(
        self,
        name: &str,
        role: StoreRole,
        accepts: Option<ItemType>,
        capacity: usize,
        initial_item: ItemType,
    ) -> Self {
        self.given_store_with(name, role, accepts, capacity, Some(initial_item))
    }

    fn given_store_with(
        mut self,
        name: &str,
        role: StoreRole,
        accepts: Option<ItemType>,
        capacity: usize,
        initial_item: Option<ItemType>,
    ) -> Self {
        let id = StoreId(self.next_id());
        self.engine
            .register_store(id, role, accepts, capacity, initial_item)
            .unwrap();
        self.stores.insert(name.to_string(), id);
        self
    }

    pub fn given_workstation(
        mut self,
        name: &str,
        eis: &[&str],
        iis: &[&str],
        ios: &[&str],
        eos: &[&str],
        duration: f32,
    ) -> Self {
        let id = WorkstationId(self.next_id());
        let resolve = |names: &[&str], stores: &HashMap<String, StoreId>| -> Vec<StoreId> {
            names
                .iter()
                .map(|name| *stores.get(*name).unwrap())
                .collect()
        };
        self.engine
            .register_workstation(
                id,
                resolve(eis, &self.stores),
                resolve(iis, &self.stores),
                resolve(ios, &self.stores),
                resolve(eos, &self.stores),
                duration,
            )
            .unwrap();
        self.workstations.insert(name.to_string(), id);
        self
    }

    pub fn given_worker(mut self, name: &str, priority: u8) -> Self {
        let id = WorkerId(self.next_id());
        self.engine.register_worker(id, priority).unwrap();
        self.workers.insert(name.to_string(), id);
        self
    }

    pub fn given_dangling_item(mut self, name: &str, kind: ItemType) -> Self {
        let id = match self.items.get(name) {
            Some(id) => *id,
            None => {
                let id = ItemId(self.next_id());
                self.items.insert(name.to_string(), id);
                id
            }
        };
        self.engine.register_dangling_item(id, kind).unwrap();
        self
    }

    /// Distances between workers and targets, both referenced by the names
    /// used at registration. A target named before its registration gets
    /// its id assigned here, so distances can be in place before the
    /// registration triggers assignment.
    pub fn given_distances(mut self, table: &[(&str, &str, f32)]) -> Self {
        let mut distances = HashMap::new();
        for (worker, target, distance) in table {
            let worker = self.worker(worker).0;
            let known = self
                .items
                .get(*target)
                .map(|item| item.0)
                .or_else(|| self.stores.get(*target).map(|store| store.0));
            let target = match known {
                Some(id) => id,
                None => {
                    let id = self.next_id();
                    self.items.insert(target.to_string(), ItemId(id));
                    id
                }
            };
            distances.insert((worker, target), *distance);
        }
        self.engine
            .set_distance_function(move |a, b| distances.get(&(a, b)).copied());
        self
    }

    /// Plays the movement collaborator: every worker with an outstanding
    /// pickup or store order arrives instantly and confirms, until the
    /// crew settles into idling or tending.
    pub fn when_movement_runs(mut self) -> Self {
        loop {
            let mut acted = false;
            let crew: Vec<WorkerId> = self
                .engine
                .crew
                .workers
                .iter()
                .map(|worker| worker.id)
                .collect();
            for worker in crew {
                let activity = self.engine.crew.get_worker(worker).unwrap().activity;
                match activity {
                    Activity::PickingUp { .. } | Activity::PickingUpDangling { .. } => {
                        self.engine.pickup_completed(worker).unwrap();
                        acted = true;
                    }
                    Activity::Storing { .. } => {
                        self.engine.store_completed(worker).unwrap();
                        acted = true;
                    }
                    _ => {}
                }
            }
            if !acted {
                break;
            }
        }
        self
    }

    pub fn when_update(mut self, time: f32) -> Self {
        let events = self.engine.update(time);
        self.current_result = Ok(events);
        self
    }

    pub fn when_item_added(mut self, store: &str, kind: ItemType) -> Self {
        self.current_result = self.engine.item_added(self.store(store), kind);
        self
    }

    pub fn when_item_removed(mut self, store: &str) -> Self {
        self.current_result = self.engine.item_removed(self.store(store));
        self
    }

    pub fn when_pickup_completed(mut self, worker: &str) -> Self {
        self.current_completion = Some(self.engine.pickup_completed(self.worker(worker)));
        self
    }

    pub fn when_store_completed(mut self, worker: &str) -> Self {
        self.current_completion = Some(self.engine.store_completed(self.worker(worker)));
        self
    }

    pub fn when_work_completed(mut self, workstation: &str) -> Self {
        self.current_result = self.engine.work_completed(self.workstation(workstation));
        self
    }

    pub fn when_worker_available(mut self, worker: &str) -> Self {
        self.current_result = self.engine.worker_available(self.worker(worker));
        self
    }

    pub fn when_worker_lost(mut self, worker: &str) -> Self {
        self.current_result = self.engine.unregister_worker(self.worker(worker));
        self
    }

    pub fn when_store_unregistered(mut self, store: &str) -> Self {
        self.current_result = self.engine.unregister_store(self.store(store));
        self
    }

    pub fn when_workstation_unregistered(mut self, workstation: &str) -> Self {
        self.current_result = self
            .engine
            .unregister_workstation(self.workstation(workstation));
        self
    }

    pub fn when_dangling_item_unregistered(mut self, item: &str) -> Self {
        self.current_result = self.engine.unregister_dangling_item(self.item(item));
        self
    }

    pub fn then_store_contains(self, name: &str, expected: &[ItemType]) -> Self {
        let store = self.engine.inventory.get_store(self.store(name)).unwrap();
        let actual: Vec<ItemType> = store.items.iter().map(|item| item.kind).collect();
        assert_eq!(actual, expected, "items of {name}");
        self
    }

    pub fn then_worker_idle(self, name: &str) -> Self {
        let worker = self.engine.crew.get_worker(self.worker(name)).unwrap();
        assert!(worker.is_idle(), "{name} is busy: {:?}", worker.activity);
        self
    }

    pub fn then_worker_busy(self, name: &str) -> Self {
        let worker = self.engine.crew.get_worker(self.worker(name)).unwrap();
        assert!(!worker.is_idle(), "{name} is idle");
        self
    }

    pub fn then_worker_tending(self, name: &str, workstation: &str) -> Self {
        let expected = Activity::Tending {
            workstation: self.workstation(workstation),
        };
        let worker = self.engine.crew.get_worker(self.worker(name)).unwrap();
        assert_eq!(worker.activity, expected, "activity of {name}");
        self
    }

    pub fn then_workstation_status(self, name: &str, expected: WorkstationStatus) -> Self {
        let workstation = self
            .engine
            .working
            .get_workstation(self.workstation(name))
            .unwrap();
        assert_eq!(workstation.status, expected, "status of {name}");
        self
    }

    pub fn then_event_count(self, kind: EventKind, expected: usize) -> Self {
        let actual = self
            .observed
            .borrow()
            .iter()
            .filter(|event| event.kind() == kind)
            .count();
        assert_eq!(actual, expected, "count of {kind:?} events");
        self
    }

    pub fn then_dangling_items(self, expected: usize) -> Self {
        assert_eq!(self.engine.hauling.dangling.len(), expected, "dangling items");
        self
    }

    pub fn then_reservations(self, expected: usize) -> Self {
        assert_eq!(
            self.engine.hauling.deliveries_in_flight(),
            expected,
            "reserved stores"
        );
        self
    }

    pub fn then_idle_workers(self, expected: usize) -> Self {
        assert_eq!(self.engine.crew.idle_workers().len(), expected, "idle workers");
        self
    }

    pub fn then_operation_should_fail<F>(self, expected: F) -> Self
    where
        F: FnOnce(&Self) -> EngineError,
    {
        let expected = format!("{:?}", expected(&self));
        match &self.current_result {
            Ok(events) => panic!("expected {expected}, got events {events:?}"),
            Err(error) => assert_eq!(format!("{error:?}"), expected),
        }
        self
    }

    pub fn then_completion_should_be<F>(self, expected: F) -> Self
    where
        F: FnOnce(&Self) -> Completion,
    {
        let expected = expected(&self);
        let actual = self
            .current_completion
            .as_ref()
            .expect("no completion callback was called")
            .as_ref()
            .unwrap();
        assert_eq!(*actual, expected);
        self
    }
}
