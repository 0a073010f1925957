use crate::hauling::{Hauling, HaulingError};
use crate::inventory::{Inventory, InventoryError, ItemId, StoreId};
use crate::model::{Crew, CrewError};
use crate::working::{Working, WorkingError, WorkstationId};

#[derive(Debug, Clone, bincode::Encode, bincode::Decode)]
pub enum Event {
    Inventory(Inventory),
    Working(Working),
    Crew(Crew),
    Hauling(Hauling),
}

impl From<Inventory> for Event {
    fn from(event: Inventory) -> Self {
        Event::Inventory(event)
    }
}

impl From<Working> for Event {
    fn from(event: Working) -> Self {
        Event::Working(event)
    }
}

impl From<Crew> for Event {
    fn from(event: Crew) -> Self {
        Event::Crew(event)
    }
}

impl From<Hauling> for Event {
    fn from(event: Hauling) -> Self {
        Event::Hauling(event)
    }
}

pub trait IntoEvents {
    fn into_events(self) -> Vec<Event>;
}

impl IntoEvents for Inventory {
    fn into_events(self) -> Vec<Event> {
        vec![self.into()]
    }
}

impl IntoEvents for Working {
    fn into_events(self) -> Vec<Event> {
        vec![self.into()]
    }
}

impl IntoEvents for Crew {
    fn into_events(self) -> Vec<Event> {
        vec![self.into()]
    }
}

impl IntoEvents for Hauling {
    fn into_events(self) -> Vec<Event> {
        vec![self.into()]
    }
}

impl IntoEvents for Event {
    fn into_events(self) -> Vec<Event> {
        vec![self]
    }
}

impl IntoEvents for Vec<Inventory> {
    fn into_events(self) -> Vec<Event> {
        self.into_iter().map(Event::Inventory).collect()
    }
}

impl IntoEvents for Vec<Working> {
    fn into_events(self) -> Vec<Event> {
        self.into_iter().map(Event::Working).collect()
    }
}

impl IntoEvents for Vec<Crew> {
    fn into_events(self) -> Vec<Event> {
        self.into_iter().map(Event::Crew).collect()
    }
}

impl IntoEvents for Vec<Hauling> {
    fn into_events(self) -> Vec<Event> {
        self.into_iter().map(Event::Hauling).collect()
    }
}

impl IntoEvents for Vec<Event> {
    fn into_events(self) -> Vec<Event> {
        self
    }
}

#[macro_export]
macro_rules! occur {
    [ $( $event:expr ),* $(,)? ] => {{
        let mut events: Vec<$crate::api::Event> = Vec::new();
        $( events.extend($crate::api::IntoEvents::into_events($event)); )*
        events
    }};
}

#[derive(Debug, Clone, bincode::Encode, bincode::Decode)]
pub enum EngineError {
    Inventory(InventoryError),
    Working(WorkingError),
    Crew(CrewError),
    Hauling(HaulingError),
    Test,
}

impl From<InventoryError> for EngineError {
    fn from(error: InventoryError) -> Self {
        EngineError::Inventory(error)
    }
}

impl From<WorkingError> for EngineError {
    fn from(error: WorkingError) -> Self {
        EngineError::Working(error)
    }
}

impl From<CrewError> for EngineError {
    fn from(error: CrewError) -> Self {
        EngineError::Crew(error)
    }
}

impl From<HaulingError> for EngineError {
    fn from(error: HaulingError) -> Self {
        EngineError::Hauling(error)
    }
}

/// Movement order for the external collaborator, mirroring the worker's
/// current activity so the caller never has to infer it from state diffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub enum Task {
    Pickup { store: StoreId },
    PickupDangling { item: ItemId },
    Store { store: StoreId },
    Tend { workstation: WorkstationId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub enum Completion {
    NoFurtherAction,
    Reassigned { task: Task },
}
