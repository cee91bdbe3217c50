use serde::Deserialize;

use crate::domain::storage::slot::DEFAULT_STACK_CAPACITY;

/// Root of the JSON stowage configuration. Every field falls back to the reference scenario.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StowageConfigDto {
    pub vessel: VesselDto,
    pub terminal: TerminalDto,
    pub population: PopulationDto,
    /// Planner name, see `PlannerType::from_str`.
    pub planner: String,
    pub plan_file: String,
}

impl Default for StowageConfigDto {
    fn default() -> Self {
        StowageConfigDto {
            vessel: VesselDto::default(),
            terminal: TerminalDto::default(),
            population: PopulationDto::default(),
            planner: "Balancing".to_string(),
            plan_file: "loading_plan.csv".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VesselDto {
    pub sections: usize,
    pub slots_per_side: usize,
    pub max_stack_size: usize,
}

impl Default for VesselDto {
    fn default() -> Self {
        VesselDto { sections: 20, slots_per_side: 4, max_stack_size: DEFAULT_STACK_CAPACITY }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TerminalDto {
    pub rows: usize,
    pub cols: usize,
}

impl Default for TerminalDto {
    fn default() -> Self {
        TerminalDto { rows: 75, cols: 90 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PopulationDto {
    pub size: usize,
    pub seed: u64,
    pub min_weight: f64,
    pub max_weight: f64,
}

impl Default for PopulationDto {
    fn default() -> Self {
        PopulationDto { size: 4000, seed: 42, min_weight: 12500.0, max_weight: 32500.0 }
    }
}
