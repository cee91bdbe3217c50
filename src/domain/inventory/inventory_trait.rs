use crate::domain::cargo::cargo_unit::CargoUnit;
use crate::domain::utils::id::CargoUnitId;

/// Source of cargo units consumed by the [`ShipLoader`](crate::domain::ship_loader::ShipLoader).
pub trait Inventory {
    /// Snapshot of every unit currently held, in a stable inventory order.
    fn all_units(&self) -> Vec<CargoUnit>;

    /// Removes the unit with the given id and hands over ownership.
    ///
    /// # Returns
    /// `None` if no such unit is (or is no longer) in the inventory.
    fn remove_unit_by_id(&mut self, id: CargoUnitId) -> Option<CargoUnit>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
