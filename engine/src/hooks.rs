use std::collections::HashMap;

use log::debug;

use crate::api::Event;
use crate::hauling::Hauling;
use crate::inventory::Inventory;
use crate::model::Crew;
use crate::working::Working;

/// Flat name of every published event, used for hook subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub enum EventKind {
    StoreCreated,
    StoreDestroyed,
    ItemAdded,
    ItemRemoved,
    WorkstationCreated,
    WorkstationDestroyed,
    WorkstationQueued,
    WorkstationBlocked,
    WorkstationActivated,
    ProcessStarted,
    InputConsumed,
    ProcessCompleted,
    CycleCompleted,
    WorkerAppeared,
    WorkerVanished,
    WorkerAssigned,
    WorkerReleased,
    PickupStarted,
    PickupDanglingStarted,
    StoreStarted,
    ItemDelivered,
    DanglingItemAppeared,
    DanglingItemVanished,
    StoreReserved,
    ReservationReleased,
}

impl EventKind {
    pub const ALL: [EventKind; 25] = [
        EventKind::StoreCreated,
        EventKind::StoreDestroyed,
        EventKind::ItemAdded,
        EventKind::ItemRemoved,
        EventKind::WorkstationCreated,
        EventKind::WorkstationDestroyed,
        EventKind::WorkstationQueued,
        EventKind::WorkstationBlocked,
        EventKind::WorkstationActivated,
        EventKind::ProcessStarted,
        EventKind::InputConsumed,
        EventKind::ProcessCompleted,
        EventKind::CycleCompleted,
        EventKind::WorkerAppeared,
        EventKind::WorkerVanished,
        EventKind::WorkerAssigned,
        EventKind::WorkerReleased,
        EventKind::PickupStarted,
        EventKind::PickupDanglingStarted,
        EventKind::StoreStarted,
        EventKind::ItemDelivered,
        EventKind::DanglingItemAppeared,
        EventKind::DanglingItemVanished,
        EventKind::StoreReserved,
        EventKind::ReservationReleased,
    ];
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Inventory(event) => match event {
                Inventory::StoreCreated { .. } => EventKind::StoreCreated,
                Inventory::StoreDestroyed { .. } => EventKind::StoreDestroyed,
                Inventory::ItemAdded { .. } => EventKind::ItemAdded,
                Inventory::ItemRemoved { .. } => EventKind::ItemRemoved,
            },
            Event::Working(event) => match event {
                Working::WorkstationCreated { .. } => EventKind::WorkstationCreated,
                Working::WorkstationDestroyed { .. } => EventKind::WorkstationDestroyed,
                Working::WorkstationQueued { .. } => EventKind::WorkstationQueued,
                Working::WorkstationBlocked { .. } => EventKind::WorkstationBlocked,
                Working::WorkstationActivated { .. } => EventKind::WorkstationActivated,
                Working::ProcessStarted { .. } => EventKind::ProcessStarted,
                Working::InputConsumed { .. } => EventKind::InputConsumed,
                Working::ProcessCompleted { .. } => EventKind::ProcessCompleted,
                Working::CycleCompleted { .. } => EventKind::CycleCompleted,
            },
            Event::Crew(event) => match event {
                Crew::WorkerAppeared { .. } => EventKind::WorkerAppeared,
                Crew::WorkerVanished { .. } => EventKind::WorkerVanished,
                Crew::WorkerAssigned { .. } => EventKind::WorkerAssigned,
                Crew::WorkerReleased { .. } => EventKind::WorkerReleased,
                Crew::PickupStarted { .. } => EventKind::PickupStarted,
                Crew::PickupDanglingStarted { .. } => EventKind::PickupDanglingStarted,
                Crew::StoreStarted { .. } => EventKind::StoreStarted,
                Crew::ItemDelivered { .. } => EventKind::ItemDelivered,
            },
            Event::Hauling(event) => match event {
                Hauling::DanglingItemAppeared { .. } => EventKind::DanglingItemAppeared,
                Hauling::DanglingItemVanished { .. } => EventKind::DanglingItemVanished,
                Hauling::StoreReserved { .. } => EventKind::StoreReserved,
                Hauling::ReservationReleased { .. } => EventKind::ReservationReleased,
            },
        }
    }
}

pub type Hook = Box<dyn FnMut(&Event)>;

/// Registry of event observers. Handlers only read the payload and command
/// external collaborators; they get no engine access, so a transition can
/// never be mutated from inside its own notification.
#[derive(Default)]
pub struct Hooks {
    subscribers: HashMap<EventKind, Vec<Hook>>,
}

impl Hooks {
    pub fn new() -> Self {
        Hooks::default()
    }

    /// Hook set publishing every event to the log, merged into every engine
    /// by default.
    pub fn logging() -> Self {
        let mut hooks = Hooks::new();
        for kind in EventKind::ALL {
            hooks.subscribe(kind, |event| debug!("{event:?}"));
        }
        hooks
    }

    pub fn subscribe<H>(&mut self, kind: EventKind, hook: H)
    where
        H: FnMut(&Event) + 'static,
    {
        self.subscribers
            .entry(kind)
            .or_default()
            .push(Box::new(hook));
    }

    /// Appends another hook set; handlers keep their per-source registration
    /// order, first-registered first.
    pub fn merge(&mut self, other: Hooks) {
        for (kind, hooks) in other.subscribers {
            self.subscribers.entry(kind).or_default().extend(hooks);
        }
    }

    pub fn notify(&mut self, event: &Event) {
        if let Some(hooks) = self.subscribers.get_mut(&event.kind()) {
            for hook in hooks.iter_mut() {
                hook(event);
            }
        }
    }
}
