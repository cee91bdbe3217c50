use std::fs;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use stowage_planner::api::stowage_config_dto::StowageConfigDto;
use stowage_planner::domain::inventory::inventory_trait::Inventory;
use stowage_planner::domain::inventory::terminal::ContainerTerminal;
use stowage_planner::domain::planner::planner_type::PlannerType;
use stowage_planner::domain::ship_loader::ShipLoader;
use stowage_planner::domain::storage::slot::Slot;
use stowage_planner::domain::vessel::vessel::Vessel;
use stowage_planner::error::Error;
use stowage_planner::loader::plan_codec;
use stowage_planner::run_stowage;

fn temp_plan_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{}-{}.csv", name, uuid::Uuid::new_v4()))
}

fn small_config(seed: u64) -> StowageConfigDto {
    let mut config = StowageConfigDto::default();
    config.vessel.sections = 4;
    config.vessel.slots_per_side = 2;
    config.vessel.max_stack_size = 10;
    config.terminal.rows = 20;
    config.terminal.cols = 20;
    config.population.size = 150;
    config.population.seed = seed;
    config
}

#[test]
fn test_run_stowage_with_every_planner() {
    for planner_type in PlannerType::ALL {
        let path = temp_plan_path("pipeline");
        let run = run_stowage(&small_config(17), planner_type, &path).unwrap();

        assert!(run.outcome.is_complete(), "{} left units unplanned", planner_type);
        assert!(run.report.is_complete());
        assert!(run.terminal.is_empty());
        assert_eq!(run.vessel.occupant_count(), 150);
        assert_eq!(run.distribution.occupants(), 150);
        assert_eq!(run.distribution.balance_value(), run.vessel.balance_value());

        fs::remove_file(&path).unwrap();
    }
}

#[test]
fn test_units_end_up_in_planned_slot() {
    let path = temp_plan_path("identity");
    let run = run_stowage(&small_config(3), PlannerType::Balancing, &path).unwrap();
    let plan = plan_codec::read_plan_from_file(&path).unwrap();
    assert_eq!(plan, run.outcome.plan);

    for slot in run.vessel.all_slots() {
        for unit in slot.units() {
            assert_eq!(unit.slot(), Some(slot.id()));
            assert_eq!(plan.get(&unit.id()), Some(&slot.id()));
        }
    }

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_capacity_is_never_exceeded() {
    // Population larger than the vessel: 4 sections * 2 * 2 slots * 10 = 160 positions
    let mut config = small_config(9);
    config.population.size = 250;

    for planner_type in PlannerType::ALL {
        let path = temp_plan_path("overflow");
        let run = run_stowage(&config, planner_type, &path).unwrap();

        assert!(run.vessel.all_slots().all(|slot| slot.occupant_count() <= slot.capacity()));
        assert_eq!(run.vessel.occupant_count() + run.outcome.unplaced.len() + run.report.rejected.len(), 250);
        assert_eq!(run.terminal.len(), run.outcome.unplaced.len());

        fs::remove_file(&path).unwrap();
    }
}

#[test]
fn test_malformed_plan_does_not_touch_vessel() {
    let mut vessel = Vessel::new(2, 2, 5);
    let mut terminal = ContainerTerminal::new(5, 5);
    terminal.place_random_units(10, &mut StdRng::seed_from_u64(1)).unwrap();

    let unit = terminal.all_units()[0].id();
    let slot = vessel.all_slots().map(Slot::id).next().unwrap();
    let path = temp_plan_path("malformed");
    fs::write(&path, format!("ContainerUUID,StackUUID\n{},{}\n{};{}\n", unit, slot, unit, slot)).unwrap();

    let result = ShipLoader::new().load_from_file(&path, &mut terminal, &mut vessel);
    assert!(matches!(result, Err(Error::MalformedRecord { line: 3, .. })));
    assert_eq!(vessel.occupant_count(), 0);
    assert_eq!(terminal.len(), 10);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_unknown_planner_in_config() {
    let config = StowageConfigDto { planner: "Quantum".to_string(), ..StowageConfigDto::default() };
    assert!(config.planner.parse::<PlannerType>().is_err());
}
