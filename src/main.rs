use std::path::PathBuf;

use clap::Parser;

use stowage_planner::domain::planner::planner_type::PlannerType;
use stowage_planner::loader::parser::load_config;
use stowage_planner::{logger, run_stowage};

/// Plans a balanced loading of a container vessel and applies it.
#[derive(Debug, Parser)]
#[command(name = "stowage_planner", version, about)]
struct Cli {
    /// JSON configuration file. Without it the reference scenario is used.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Planner to use (Balancing or Simple). Overrides the configuration.
    #[arg(short, long)]
    planner: Option<PlannerType>,

    /// Seed of the random cargo population. Overrides the configuration.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Where to write the loading plan CSV. Overrides the configuration.
    #[arg(long)]
    plan_file: Option<PathBuf>,

    /// Run every planner on the same population, one plan file per planner.
    #[arg(long, default_value_t = false)]
    compare: bool,
}

fn main() -> anyhow::Result<()> {
    logger::init();
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_ref())?;
    if let Some(seed) = cli.seed {
        config.population.seed = seed;
    }
    let plan_file = cli.plan_file.unwrap_or_else(|| PathBuf::from(&config.plan_file));

    let planners = if cli.compare {
        PlannerType::ALL.to_vec()
    } else {
        let planner_type = match cli.planner {
            Some(planner_type) => planner_type,
            None => config.planner.parse()?,
        };
        vec![planner_type]
    };

    for planner_type in planners {
        let path = if cli.compare { plan_file.with_file_name(format!("loading_plan_{}.csv", planner_type)) } else { plan_file.clone() };

        log::info!("=====================================");
        let run = run_stowage(&config, planner_type, &path)?;
        run.distribution.log_summary();

        if !run.outcome.is_complete() || !run.report.is_complete() {
            log::warn!(
                "{} planner left {} cargo units unplanned and {} planned units were not loaded.",
                planner_type,
                run.outcome.unplaced.len(),
                run.report.records.len() - run.report.placed()
            );
        }
    }

    Ok(())
}
