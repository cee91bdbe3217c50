pub mod balancing_planner;
pub mod loading_plan;
pub mod planner_trait;
pub mod planner_type;
pub mod simple_planner;
