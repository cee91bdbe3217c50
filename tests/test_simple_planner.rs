use rand::SeedableRng;
use rand::rngs::StdRng;

use stowage_planner::domain::cargo::cargo_unit::CargoUnit;
use stowage_planner::domain::inventory::inventory_trait::Inventory;
use stowage_planner::domain::inventory::terminal::ContainerTerminal;
use stowage_planner::domain::planner::planner_trait::{LoadingPlanner, sort_by_weight_descending};
use stowage_planner::domain::planner::simple_planner::SimplePlanner;
use stowage_planner::domain::ship_loader::ShipLoader;
use stowage_planner::domain::vessel::section::Side;
use stowage_planner::domain::vessel::vessel::Vessel;

fn seeded_terminal(units: usize, seed: u64) -> ContainerTerminal {
    let mut terminal = ContainerTerminal::new(75, 90);
    let mut rng = StdRng::seed_from_u64(seed);
    terminal.place_random_units(units, &mut rng).unwrap();
    terminal
}

#[test]
fn test_bucket_difference_is_bounded_by_heaviest_unit() {
    for seed in [1, 2, 3, 4] {
        for size in [1, 2, 7, 100, 999] {
            let population = seeded_terminal(size, seed).all_units();
            let sorted = sort_by_weight_descending(&population);
            let buckets = SimplePlanner::split_into_buckets(&sorted);

            let heaviest = population.iter().map(CargoUnit::weight).fold(0.0, f64::max);
            assert!(buckets.difference() <= heaviest, "seed {} size {}: {} > {}", seed, size, buckets.difference(), heaviest);
            assert_eq!(buckets.left.len() + buckets.right.len(), size);
        }
    }
}

#[test]
fn test_sides_only_receive_their_bucket() {
    let vessel = Vessel::new(3, 2, 4);
    let population = seeded_terminal(30, 8).all_units();
    let outcome = SimplePlanner::new().generate_plan(&vessel, &population);
    assert!(outcome.is_complete());

    let sorted = sort_by_weight_descending(&population);
    let buckets = SimplePlanner::split_into_buckets(&sorted);

    for unit in &buckets.left {
        let slot = outcome.plan.get(&unit.id()).unwrap();
        let side = vessel.sections().iter().find_map(|section| section.side_of(*slot));
        assert_eq!(side, Some(Side::Left));
    }
    for unit in &buckets.right {
        let slot = outcome.plan.get(&unit.id()).unwrap();
        let side = vessel.sections().iter().find_map(|section| section.side_of(*slot));
        assert_eq!(side, Some(Side::Right));
    }
}

#[test]
fn test_overflowing_side_reports_unplaced_units() {
    // 2 slots per side with capacity 5 -> 10 units per side, 30 units total
    let vessel = Vessel::new(1, 2, 5);
    let population = seeded_terminal(30, 21).all_units();
    let outcome = SimplePlanner::new().generate_plan(&vessel, &population);

    assert_eq!(outcome.plan.len(), 20);
    assert_eq!(outcome.unplaced.len(), 10);
    for unit in &population {
        assert!(outcome.plan.contains(&unit.id()) != outcome.unplaced.contains(&unit.id()));
    }
}

#[test]
fn test_same_input_gives_same_balance() {
    let vessel = Vessel::new(20, 4, 35);
    let terminal = seeded_terminal(4000, 5);
    let population = terminal.all_units();

    let mut runs = Vec::new();
    for _ in 0..3 {
        let outcome = SimplePlanner::new().generate_plan(&vessel, &population);
        let mut loaded = vessel.clone();
        let mut inventory = terminal.clone();
        ShipLoader::new().load(&outcome.plan, &mut inventory, &mut loaded);
        runs.push((outcome.plan, loaded.balance_value()));
    }

    assert_eq!(runs[0], runs[1]);
    assert_eq!(runs[1], runs[2]);
}

#[test]
fn test_reference_scenario_stays_within_threshold() {
    let acceptable_threshold = 6250.0;

    let mut vessel = Vessel::new(20, 4, 35);
    let mut terminal = seeded_terminal(4000, 42);
    let population = terminal.all_units();

    let outcome = SimplePlanner::new().generate_plan(&vessel, &population);
    assert!(outcome.is_complete());

    let report = ShipLoader::new().load(&outcome.plan, &mut terminal, &mut vessel);
    assert!(report.is_complete());
    assert!(terminal.is_empty());

    assert!(vessel.balance_value() <= acceptable_threshold, "imbalance {}", vessel.balance_value());
}
