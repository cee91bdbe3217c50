use crate::domain::cargo::cargo_unit::CargoUnit;
use crate::domain::planner::loading_plan::{LoadingPlan, PlanningOutcome};
use crate::domain::planner::planner_trait::{LoadingPlanner, sort_by_weight_descending};
use crate::domain::utils::id::SlotId;
use crate::domain::vessel::vessel::Vessel;

/// Upper bound on the number of cargo units processed in a single planning run.
pub const MAX_ITERATIONS: usize = 10_000_000;

/// Simulation state of one slot during planning, kept in `Vessel::all_slots` order.
#[derive(Debug)]
struct SimulatedSlot {
    slot_id: SlotId,
    section_index: usize,
    capacity: usize,
    occupants: usize,
    simulated_weight: f64,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    slot_index: usize,
    global_difference: f64,
    local_difference: f64,
}

/// Greedy global weight-balancing planner.
///
/// Units are processed heaviest first. For every unit each slot is scored by
///
/// ```text
/// local  = |section_left + section_right - 2 * (simulated_slot_weight + unit_weight)|
/// global = |vessel_left + vessel_right - 2 * local|
/// ```
///
/// and the unit is assigned to the slot with the smallest `global` score; the first slot in
/// traversal order wins ties. Section and vessel weights are read from the real vessel, which is
/// not modified. On an empty vessel this reduces to always choosing the lightest simulated slot.
///
/// Slots whose simulated occupancy reached their capacity are not eligible.
#[derive(Debug, Clone)]
pub struct BalancingPlanner {
    iteration_cap: usize,
}

impl BalancingPlanner {
    pub fn new() -> Self {
        BalancingPlanner { iteration_cap: MAX_ITERATIONS }
    }

    pub fn with_iteration_cap(iteration_cap: usize) -> Self {
        BalancingPlanner { iteration_cap }
    }

    fn simulated_slots(vessel: &Vessel) -> Vec<SimulatedSlot> {
        vessel
            .sections()
            .iter()
            .enumerate()
            .flat_map(|(section_index, section)| {
                section.all_slots().map(move |slot| SimulatedSlot {
                    slot_id: slot.id(),
                    section_index,
                    capacity: slot.capacity(),
                    occupants: slot.occupant_count(),
                    simulated_weight: 0.0,
                })
            })
            .collect()
    }

    fn find_best_slot(slots: &[SimulatedSlot], section_weights: &[f64], vessel_weight: f64, unit_weight: f64) -> Option<Candidate> {
        let mut best: Option<Candidate> = None;

        for (slot_index, slot) in slots.iter().enumerate() {
            if slot.occupants >= slot.capacity {
                continue;
            }

            let new_weight = slot.simulated_weight + unit_weight;
            let local_difference = (section_weights[slot.section_index] - 2.0 * new_weight).abs();
            let global_difference = (vessel_weight - 2.0 * local_difference).abs();

            match best {
                Some(current) if current.global_difference <= global_difference => {}
                _ => best = Some(Candidate { slot_index, global_difference, local_difference }),
            }
        }

        best
    }
}

impl Default for BalancingPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingPlanner for BalancingPlanner {
    fn name(&self) -> &'static str {
        "Balancing"
    }

    fn generate_plan(&self, vessel: &Vessel, population: &[CargoUnit]) -> PlanningOutcome {
        let sorted = sort_by_weight_descending(population);

        let mut slots = Self::simulated_slots(vessel);
        let section_weights: Vec<f64> = vessel.sections().iter().map(|section| section.left_weight() + section.right_weight()).collect();
        let vessel_weight = vessel.total_left_weight() + vessel.total_right_weight();
        let mut section_differences = vec![0.0_f64; section_weights.len()];

        let mut plan = LoadingPlan::new();
        let mut unplaced = Vec::new();

        for (iteration, unit) in sorted.iter().enumerate() {
            if iteration >= self.iteration_cap {
                log::warn!("Iteration cap of {} reached, {} cargo units are left unassigned.", self.iteration_cap, sorted.len() - iteration);
                unplaced.extend(sorted[iteration..].iter().map(|unit| unit.id()));
                break;
            }

            match Self::find_best_slot(&slots, &section_weights, vessel_weight, unit.weight()) {
                Some(candidate) => {
                    let slot = &mut slots[candidate.slot_index];
                    slot.simulated_weight += unit.weight();
                    slot.occupants += 1;
                    section_differences[slot.section_index] = candidate.local_difference;
                    plan.insert(unit.id(), slot.slot_id);
                }
                None => {
                    log::debug!("No slot with free capacity left for cargo unit {} (weight: {:.1}).", unit.id(), unit.weight());
                    unplaced.push(unit.id());
                }
            }
        }

        if !unplaced.is_empty() {
            log::warn!("Balancing planner could not assign {} of {} cargo units.", unplaced.len(), population.len());
        }
        log::debug!(
            "Largest simulated section difference: {:.1}",
            section_differences.iter().copied().fold(0.0_f64, f64::max)
        );
        log::info!("Balancing planner assigned {} cargo units to {} slots.", plan.len(), slots.len());

        PlanningOutcome { plan, unplaced }
    }
}
