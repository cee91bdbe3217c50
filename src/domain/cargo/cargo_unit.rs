use crate::domain::cargo::shipping_company::ShippingCompany;
use crate::domain::utils::id::{CargoUnitId, SlotId};

/// A shipping container waiting in the terminal or stowed on a vessel.
///
/// Identity, weight, heavy flag and carrier are fixed at creation. The only mutable part is
/// the back-reference to the slot holding the unit, which is written by
/// [`Slot::place`](crate::domain::storage::slot::Slot::place) and nowhere else.
#[derive(Debug, Clone, PartialEq)]
pub struct CargoUnit {
    id: CargoUnitId,
    weight: f64,
    is_heavy: bool,
    shipping_company: ShippingCompany,
    slot: Option<SlotId>,
}

impl CargoUnit {
    pub fn new(weight: f64, is_heavy: bool, shipping_company: ShippingCompany) -> Self {
        Self::with_id(CargoUnitId::new(), weight, is_heavy, shipping_company)
    }

    pub fn with_id(id: CargoUnitId, weight: f64, is_heavy: bool, shipping_company: ShippingCompany) -> Self {
        CargoUnit { id, weight, is_heavy, shipping_company, slot: None }
    }

    pub fn id(&self) -> CargoUnitId {
        self.id
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn is_heavy(&self) -> bool {
        self.is_heavy
    }

    pub fn shipping_company(&self) -> ShippingCompany {
        self.shipping_company
    }

    /// The slot currently holding this unit, `None` while the unit is still in the terminal.
    pub fn slot(&self) -> Option<SlotId> {
        self.slot
    }

    pub(crate) fn set_slot(&mut self, slot: SlotId) {
        self.slot = Some(slot);
    }
}
