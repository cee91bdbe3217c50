use std::path::Path;

use crate::domain::cargo::cargo_unit::CargoUnit;
use crate::domain::inventory::inventory_trait::Inventory;
use crate::domain::planner::loading_plan::LoadingPlan;
use crate::domain::utils::id::{CargoUnitId, SlotId};
use crate::domain::vessel::vessel::Vessel;
use crate::error::Result;
use crate::loader::plan_codec;

/// Result of applying a single plan entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadOutcome {
    Placed,
    /// The inventory does not (or no longer) hold the cargo unit.
    CargoNotFound,
    /// The vessel has no slot with the planned id. The unit is kept in [`LoadReport::rejected`].
    SlotNotFound,
    /// The planned slot is full. The unit is kept in [`LoadReport::rejected`].
    CapacityExceeded,
}

#[derive(Debug, Clone)]
pub struct LoadRecord {
    pub cargo: CargoUnitId,
    pub slot: SlotId,
    pub outcome: LoadOutcome,
}

/// Outcome of a loader run, one record per plan entry.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub records: Vec<LoadRecord>,

    /// Units taken from the inventory that could not be placed. Ownership goes back to the caller.
    pub rejected: Vec<CargoUnit>,
}

impl LoadReport {
    pub fn count(&self, outcome: LoadOutcome) -> usize {
        self.records.iter().filter(|record| record.outcome == outcome).count()
    }

    pub fn placed(&self) -> usize {
        self.count(LoadOutcome::Placed)
    }

    pub fn outcome_of(&self, cargo: CargoUnitId) -> Option<LoadOutcome> {
        self.records.iter().find(|record| record.cargo == cargo).map(|record| record.outcome)
    }

    /// `true` if every plan entry was placed.
    pub fn is_complete(&self) -> bool {
        self.records.iter().all(|record| record.outcome == LoadOutcome::Placed)
    }
}

/// Moves cargo units from an inventory onto the vessel as prescribed by a loading plan.
///
/// This is the only component that mutates the real vessel and the inventory.
#[derive(Debug, Clone, Default)]
pub struct ShipLoader;

impl ShipLoader {
    pub fn new() -> Self {
        Self
    }

    /// Applies `plan`, entries ordered by cargo id.
    pub fn load<I: Inventory + ?Sized>(&self, plan: &LoadingPlan, inventory: &mut I, vessel: &mut Vessel) -> LoadReport {
        let mut report = LoadReport::default();
        let vessel_id = vessel.id();

        for (cargo, slot_id) in plan.sorted_entries() {
            let outcome = match inventory.remove_unit_by_id(cargo) {
                None => {
                    log::warn!("Cargo unit {} is not in the inventory, plan entry skipped.", cargo);
                    LoadOutcome::CargoNotFound
                }
                Some(unit) => match vessel.find_slot_mut(slot_id) {
                    None => {
                        log::warn!("Slot {} does not exist on vessel {}, cargo unit {} not placed.", slot_id, vessel_id, cargo);
                        report.rejected.push(unit);
                        LoadOutcome::SlotNotFound
                    }
                    Some(slot) => match slot.place(unit) {
                        Ok(()) => LoadOutcome::Placed,
                        Err(e) => {
                            log::warn!("{}", e);
                            report.rejected.push(e.into_unit());
                            LoadOutcome::CapacityExceeded
                        }
                    },
                },
            };

            report.records.push(LoadRecord { cargo, slot: slot_id, outcome });
        }

        log::info!(
            "Loaded {} of {} planned cargo units ({} not found, {} unknown slot, {} capacity exceeded).",
            report.placed(),
            plan.len(),
            report.count(LoadOutcome::CargoNotFound),
            report.count(LoadOutcome::SlotNotFound),
            report.count(LoadOutcome::CapacityExceeded)
        );

        report
    }

    /// Reads the plan from `path` and applies it.
    ///
    /// Malformed plans and I/O failures are returned before the vessel or inventory is touched.
    pub fn load_from_file<P: AsRef<Path>, I: Inventory + ?Sized>(&self, path: P, inventory: &mut I, vessel: &mut Vessel) -> Result<LoadReport> {
        let plan = plan_codec::read_plan_from_file(path)?;
        Ok(self.load(&plan, inventory, vessel))
    }
}
