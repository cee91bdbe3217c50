pub mod section;
pub mod vessel;
