use std::collections::{HashMap, hash_map};

use crate::domain::utils::id::{CargoUnitId, SlotId};

/// Assignment of cargo units to slots, the only artifact exchanged between planning and loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingPlan {
    assignments: HashMap<CargoUnitId, SlotId>,
}

impl LoadingPlan {
    pub fn new() -> Self {
        LoadingPlan { assignments: HashMap::new() }
    }

    /// Assigns `cargo` to `slot`.
    ///
    /// # Returns
    /// The slot previously assigned to `cargo`, if any.
    pub fn insert(&mut self, cargo: CargoUnitId, slot: SlotId) -> Option<SlotId> {
        self.assignments.insert(cargo, slot)
    }

    pub fn get(&self, cargo: &CargoUnitId) -> Option<&SlotId> {
        self.assignments.get(cargo)
    }

    pub fn contains(&self, cargo: &CargoUnitId) -> bool {
        self.assignments.contains_key(cargo)
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, CargoUnitId, SlotId> {
        self.assignments.iter()
    }

    /// Entries ordered by cargo id, for reproducible processing.
    pub fn sorted_entries(&self) -> Vec<(CargoUnitId, SlotId)> {
        let mut entries: Vec<(CargoUnitId, SlotId)> = self.assignments.iter().map(|(cargo, slot)| (*cargo, *slot)).collect();
        entries.sort();
        entries
    }
}

impl FromIterator<(CargoUnitId, SlotId)> for LoadingPlan {
    fn from_iter<I: IntoIterator<Item = (CargoUnitId, SlotId)>>(iter: I) -> Self {
        LoadingPlan { assignments: iter.into_iter().collect() }
    }
}

/// Result of a planner run: the plan plus every unit the planner could not assign.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanningOutcome {
    pub plan: LoadingPlan,

    /// Units left out of the plan, in planning order (heaviest first).
    pub unplaced: Vec<CargoUnitId>,
}

impl PlanningOutcome {
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }
}
