use thiserror::Error;

use crate::domain::cargo::cargo_unit::CargoUnit;
use crate::domain::storage::bounded_stack::{BoundedStack, StackFull};
use crate::domain::utils::id::SlotId;

/// Default number of cargo units a single slot can hold.
pub const DEFAULT_STACK_CAPACITY: usize = 35;

#[derive(Debug, Error)]
pub enum PlacementError {
    /// The slot is full. The rejected unit is handed back to the caller untouched.
    #[error("Slot {slot} is full, cargo unit {} was not placed", unit.id())]
    CapacityExceeded { slot: SlotId, unit: CargoUnit },
}

impl PlacementError {
    pub fn into_unit(self) -> CargoUnit {
        match self {
            PlacementError::CapacityExceeded { unit, .. } => unit,
        }
    }
}

/// A storage area on the vessel: one bounded stack of cargo units.
///
/// The configured maximum stack size is the enforced bound of the underlying stack.
#[derive(Debug, Clone)]
pub struct Slot {
    id: SlotId,
    stack: BoundedStack<CargoUnit>,
}

impl Slot {
    pub fn new(capacity: usize) -> Self {
        Self::with_id(SlotId::new(), capacity)
    }

    pub fn with_id(id: SlotId, capacity: usize) -> Self {
        Slot { id, stack: BoundedStack::new(capacity) }
    }

    /// Empty slot with the same identity and capacity.
    pub fn snapshot(&self) -> Self {
        Self::with_id(self.id, self.capacity())
    }

    pub fn id(&self) -> SlotId {
        self.id
    }

    pub fn capacity(&self) -> usize {
        self.stack.capacity()
    }

    pub fn occupant_count(&self) -> usize {
        self.stack.size()
    }

    pub fn can_accept(&self) -> bool {
        !self.stack.is_full()
    }

    /// Places `unit` on top of this slot and points the unit's slot reference here.
    ///
    /// # Returns
    /// `Err(PlacementError::CapacityExceeded)` carrying the untouched unit if the slot is full.
    pub fn place(&mut self, unit: CargoUnit) -> Result<(), PlacementError> {
        if let Err(StackFull { capacity, item }) = self.stack.push(unit) {
            log::debug!("Slot {} is full (capacity: {}). Cargo unit {} rejected.", self.id, capacity, item.id());
            return Err(PlacementError::CapacityExceeded { slot: self.id, unit: item });
        }

        if let Some(top) = self.stack.peek_mut() {
            top.set_slot(self.id);
        }

        Ok(())
    }

    /// Removes and returns the top unit, `None` if the slot is empty.
    pub fn remove_top(&mut self) -> Option<CargoUnit> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&CargoUnit> {
        self.stack.peek()
    }

    pub fn total_weight(&self) -> f64 {
        self.stack.iter().map(CargoUnit::weight).sum()
    }

    pub fn units(&self) -> impl Iterator<Item = &CargoUnit> {
        self.stack.iter()
    }
}
