use std::collections::HashMap;

use crate::inventory::{ItemType, StoreId};
use crate::working::WorkstationId;
use crate::Engine;

impl Engine {
    /// Every internal input slot of the station holds an item.
    pub(crate) fn inputs_complete(&self, id: WorkstationId) -> bool {
        let Ok(workstation) = self.working.get_workstation(id) else {
            return false;
        };
        workstation.iis.iter().all(|store| {
            self.inventory
                .get_store(*store)
                .map(|store| !store.items.is_empty())
                .unwrap_or(false)
        })
    }

    /// Every empty internal input slot can be matched to a distinct item in
    /// the station's external input stock. Assignment only starts on a
    /// complete match, the worker never sets out for a partial recipe.
    pub(crate) fn inputs_matchable(&self, id: WorkstationId) -> bool {
        let Ok(workstation) = self.working.get_workstation(id) else {
            return false;
        };
        let mut claimed: HashMap<StoreId, Vec<usize>> = HashMap::new();
        for slot_id in &workstation.iis {
            let Ok(slot) = self.inventory.get_store(*slot_id) else {
                return false;
            };
            if !slot.items.is_empty() {
                continue;
            }
            let mut found = false;
            'sources: for source_id in &workstation.eis {
                let Ok(source) = self.inventory.get_store(*source_id) else {
                    continue;
                };
                for (index, item) in source.items.iter().enumerate() {
                    if claimed
                        .get(source_id)
                        .map(|taken| taken.contains(&index))
                        .unwrap_or(false)
                    {
                        continue;
                    }
                    if slot.accepts.map(|kind| kind == item.kind).unwrap_or(true) {
                        claimed.entry(*source_id).or_default().push(index);
                        found = true;
                        break 'sources;
                    }
                }
            }
            if !found {
                return false;
            }
        }
        true
    }

    /// The next external input store to pick from, for the first unfilled
    /// internal input slot.
    pub(crate) fn next_input_leg(&self, id: WorkstationId) -> Option<StoreId> {
        let workstation = self.working.get_workstation(id).ok()?;
        for slot_id in &workstation.iis {
            let Ok(slot) = self.inventory.get_store(*slot_id) else {
                continue;
            };
            if !slot.items.is_empty() {
                continue;
            }
            for source_id in &workstation.eis {
                let Ok(source) = self.inventory.get_store(*source_id) else {
                    continue;
                };
                let matched = source
                    .items
                    .iter()
                    .any(|item| slot.accepts.map(|kind| kind == item.kind).unwrap_or(true));
                if matched {
                    return Some(*source_id);
                }
            }
        }
        None
    }

    pub(crate) fn ios_has_space(&self, id: WorkstationId) -> bool {
        let Ok(workstation) = self.working.get_workstation(id) else {
            return false;
        };
        workstation.ios.iter().any(|store| {
            self.inventory
                .get_store(*store)
                .map(|store| store.free_space() > 0)
                .unwrap_or(false)
        })
    }

    /// The internal output store holding a finished product, with its kind.
    pub(crate) fn find_pending_output(&self, id: WorkstationId) -> Option<(StoreId, ItemType)> {
        let workstation = self.working.get_workstation(id).ok()?;
        for store_id in &workstation.ios {
            let Ok(store) = self.inventory.get_store(*store_id) else {
                continue;
            };
            if let Some(item) = store.items.first() {
                return Some((*store_id, item.kind));
            }
        }
        None
    }

    pub(crate) fn eos_with_space_for(
        &self,
        id: WorkstationId,
        kind: ItemType,
    ) -> Option<StoreId> {
        let workstation = self.working.get_workstation(id).ok()?;
        workstation
            .eos
            .iter()
            .find(|store| {
                self.inventory
                    .get_store(**store)
                    .map(|store| store.free_space() > 0 && store.accepts_kind(kind))
                    .unwrap_or(false)
            })
            .copied()
    }
}
