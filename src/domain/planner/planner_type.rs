use crate::domain::planner::balancing_planner::BalancingPlanner;
use crate::domain::planner::planner_trait::LoadingPlanner;
use crate::domain::planner::simple_planner::SimplePlanner;
use crate::error::ConversionError;
use std::fmt;
use std::str::FromStr;

/// The available loading plan heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerType {
    /// Global heuristic: each unit goes to the slot minimising the simulated imbalance score.
    Balancing,
    /// Linear heuristic: split into a left and a right bucket, then fill each side in order.
    Simple,
}

impl PlannerType {
    pub const ALL: [PlannerType; 2] = [PlannerType::Balancing, PlannerType::Simple];

    /// Factory method to return a concrete [`LoadingPlanner`] based on the enum variant.
    pub fn get_instance(&self) -> Box<dyn LoadingPlanner> {
        match self {
            PlannerType::Balancing => Box::new(BalancingPlanner::new()),
            PlannerType::Simple => Box::new(SimplePlanner::new()),
        }
    }
}

impl fmt::Display for PlannerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerType::Balancing => write!(f, "Balancing"),
            PlannerType::Simple => write!(f, "Simple"),
        }
    }
}

impl FromStr for PlannerType {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Balancing" | "GreedyBalancing" | "balancing" => Ok(PlannerType::Balancing),
            "Simple" | "GreedySimple" | "simple" => Ok(PlannerType::Simple),
            _ => Err(ConversionError::UnknownPlannerType(s.to_string())),
        }
    }
}
