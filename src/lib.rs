use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::api::stowage_config_dto::StowageConfigDto;
use crate::domain::inventory::inventory_trait::Inventory;
use crate::domain::inventory::terminal::ContainerTerminal;
use crate::domain::planner::loading_plan::PlanningOutcome;
use crate::domain::planner::planner_type::PlannerType;
use crate::domain::report::LoadDistribution;
use crate::domain::ship_loader::{LoadReport, ShipLoader};
use crate::domain::vessel::vessel::Vessel;
use crate::error::Result;
use crate::loader::plan_codec;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Everything produced by one end-to-end stowage run.
#[derive(Debug)]
pub struct StowageRun {
    pub vessel: Vessel,
    pub terminal: ContainerTerminal,
    pub outcome: PlanningOutcome,
    pub report: LoadReport,
    pub distribution: LoadDistribution,
}

/// Builds vessel and terminal from `config`, seeds the population, plans with `planner_type`,
/// writes the plan to `plan_path`, reads it back and loads the vessel from the terminal.
pub fn run_stowage<P: AsRef<Path>>(config: &StowageConfigDto, planner_type: PlannerType, plan_path: P) -> Result<StowageRun> {
    let mut vessel = Vessel::from_dto(&config.vessel)?;

    let mut terminal = ContainerTerminal::new(config.terminal.rows, config.terminal.cols);
    let mut rng = StdRng::seed_from_u64(config.population.seed);
    terminal.place_random_units_with_weights(config.population.size, config.population.min_weight, config.population.max_weight, &mut rng)?;
    log::info!("Terminal seeded with {} cargo units (seed: {}).", config.population.size, config.population.seed);

    let population = terminal.all_units();
    let planner = planner_type.get_instance();
    log::info!("Active planner: {}", planner.name());

    let outcome = planner.generate_plan(&vessel, &population);
    if !outcome.is_complete() {
        log::warn!("{} cargo units are not part of the loading plan.", outcome.unplaced.len());
    }

    plan_codec::write_plan_to_file(&outcome.plan, &plan_path)?;
    let report = ShipLoader::new().load_from_file(&plan_path, &mut terminal, &mut vessel)?;

    let distribution = LoadDistribution::from_vessel(&vessel);

    Ok(StowageRun { vessel, terminal, outcome, report, distribution })
}
