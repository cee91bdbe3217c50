pub mod inventory_trait;
pub mod terminal;
