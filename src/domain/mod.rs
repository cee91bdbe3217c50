pub mod cargo;
pub mod inventory;
pub mod planner;
pub mod report;
pub mod ship_loader;
pub mod storage;
pub mod utils;
pub mod vessel;
