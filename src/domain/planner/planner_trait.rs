use std::fmt::Debug;

use crate::domain::cargo::cargo_unit::CargoUnit;
use crate::domain::planner::loading_plan::PlanningOutcome;
use crate::domain::vessel::vessel::Vessel;

/// Computes a loading plan for a vessel and a cargo population.
///
/// Implementations never mutate the vessel. Units that cannot be assigned are
/// reported in [`PlanningOutcome::unplaced`] instead of being dropped.
pub trait LoadingPlanner: Debug {
    fn name(&self) -> &'static str;

    fn generate_plan(&self, vessel: &Vessel, population: &[CargoUnit]) -> PlanningOutcome;
}

/// Population sorted by weight, heaviest first. The sort is stable, equal weights keep their input order.
pub fn sort_by_weight_descending(population: &[CargoUnit]) -> Vec<&CargoUnit> {
    let mut sorted: Vec<&CargoUnit> = population.iter().collect();
    sorted.sort_by(|a, b| b.weight().total_cmp(&a.weight()));
    sorted
}
