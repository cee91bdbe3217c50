use crate::domain::cargo::cargo_unit::CargoUnit;
use crate::domain::planner::loading_plan::{LoadingPlan, PlanningOutcome};
use crate::domain::planner::planner_trait::{LoadingPlanner, sort_by_weight_descending};
use crate::domain::utils::id::CargoUnitId;
use crate::domain::vessel::section::Side;
use crate::domain::vessel::vessel::Vessel;

/// Units split into the two vessel sides, each bucket heaviest first.
#[derive(Debug, Default)]
pub struct Buckets<'a> {
    pub left: Vec<&'a CargoUnit>,
    pub right: Vec<&'a CargoUnit>,
    pub left_total: f64,
    pub right_total: f64,
}

impl Buckets<'_> {
    pub fn difference(&self) -> f64 {
        (self.left_total - self.right_total).abs()
    }
}

/// Two-bucket planner.
///
/// Sorted units are dealt to whichever side currently weighs less (ties go left), then each
/// bucket is stacked into the slots of its side, section by section, filling a slot before moving
/// on. Placement is simulated on a [`Vessel::snapshot`] so slot capacity is checked physically.
#[derive(Debug, Clone, Default)]
pub struct SimplePlanner;

impl SimplePlanner {
    pub fn new() -> Self {
        Self
    }

    /// Single greedy pass over `sorted` assigning each unit to the lighter bucket.
    pub fn split_into_buckets<'a>(sorted: &[&'a CargoUnit]) -> Buckets<'a> {
        let mut buckets = Buckets::default();

        for &unit in sorted {
            if buckets.right_total < buckets.left_total {
                buckets.right.push(unit);
                buckets.right_total += unit.weight();
            } else {
                buckets.left.push(unit);
                buckets.left_total += unit.weight();
            }
        }

        buckets
    }

    /// Stacks `bucket` into the `side` slots of `snapshot`.
    ///
    /// # Returns
    /// The ids of all units that did not fit on this side.
    fn fill_side(snapshot: &mut Vessel, side: Side, bucket: Vec<&CargoUnit>, plan: &mut LoadingPlan) -> Vec<CargoUnitId> {
        let mut pending = bucket.into_iter();
        let mut rejected = Vec::new();

        'sections: for section in snapshot.sections_mut() {
            for slot in section.slots_mut(side) {
                while slot.can_accept() {
                    let Some(unit) = pending.next() else {
                        break 'sections;
                    };

                    let slot_id = slot.id();
                    match slot.place(unit.clone()) {
                        Ok(()) => {
                            plan.insert(unit.id(), slot_id);
                        }
                        Err(e) => {
                            log::error!("Simulated placement failed: {}", e);
                            rejected.push(unit.id());
                        }
                    }
                }
            }
        }

        rejected.extend(pending.map(|unit| unit.id()));
        if !rejected.is_empty() {
            log::warn!("{} cargo units do not fit on the {:?} side of the vessel.", rejected.len(), side);
        }

        rejected
    }
}

impl LoadingPlanner for SimplePlanner {
    fn name(&self) -> &'static str {
        "Simple"
    }

    fn generate_plan(&self, vessel: &Vessel, population: &[CargoUnit]) -> PlanningOutcome {
        let mut snapshot = vessel.snapshot();
        let sorted = sort_by_weight_descending(population);

        let buckets = Self::split_into_buckets(&sorted);
        log::debug!(
            "Bucket split: {} units / {:.1} left, {} units / {:.1} right.",
            buckets.left.len(),
            buckets.left_total,
            buckets.right.len(),
            buckets.right_total
        );

        let mut plan = LoadingPlan::new();
        let mut unplaced = Self::fill_side(&mut snapshot, Side::Left, buckets.left, &mut plan);
        unplaced.extend(Self::fill_side(&mut snapshot, Side::Right, buckets.right, &mut plan));

        log::info!("Simple planner assigned {} cargo units, {} left unassigned.", plan.len(), unplaced.len());

        PlanningOutcome { plan, unplaced }
    }
}
