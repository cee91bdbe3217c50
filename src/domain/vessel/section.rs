use crate::domain::storage::slot::Slot;
use crate::domain::utils::id::{SectionId, SlotId};

/// Which side of the vessel a slot group belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// A lateral division of the vessel with a left and a right group of slots of equal size.
#[derive(Debug, Clone)]
pub struct Section {
    id: SectionId,
    left_slots: Vec<Slot>,
    right_slots: Vec<Slot>,
}

impl Section {
    /// Creates a section with `slots_per_side` slots on each side, each holding up to `capacity` units.
    pub fn new(slots_per_side: usize, capacity: usize) -> Self {
        let left_slots = (0..slots_per_side).map(|_| Slot::new(capacity)).collect();
        let right_slots = (0..slots_per_side).map(|_| Slot::new(capacity)).collect();

        Section { id: SectionId::new(), left_slots, right_slots }
    }

    /// Rebuilds the same topology (ids and capacities) with empty slots.
    pub fn snapshot(&self) -> Self {
        Section {
            id: self.id,
            left_slots: self.left_slots.iter().map(Slot::snapshot).collect(),
            right_slots: self.right_slots.iter().map(Slot::snapshot).collect(),
        }
    }

    pub fn id(&self) -> SectionId {
        self.id
    }

    pub fn left_weight(&self) -> f64 {
        self.left_slots.iter().map(Slot::total_weight).sum()
    }

    pub fn right_weight(&self) -> f64 {
        self.right_slots.iter().map(Slot::total_weight).sum()
    }

    pub fn weight_difference(&self) -> f64 {
        (self.left_weight() - self.right_weight()).abs()
    }

    pub fn left_slots(&self) -> &[Slot] {
        &self.left_slots
    }

    pub fn right_slots(&self) -> &[Slot] {
        &self.right_slots
    }

    pub fn slots(&self, side: Side) -> &[Slot] {
        match side {
            Side::Left => &self.left_slots,
            Side::Right => &self.right_slots,
        }
    }

    pub fn slots_mut(&mut self, side: Side) -> &mut [Slot] {
        match side {
            Side::Left => &mut self.left_slots,
            Side::Right => &mut self.right_slots,
        }
    }

    /// Left group followed by right group, each in construction order.
    pub fn all_slots(&self) -> impl Iterator<Item = &Slot> {
        self.left_slots.iter().chain(self.right_slots.iter())
    }

    pub fn all_slots_mut(&mut self) -> impl Iterator<Item = &mut Slot> {
        self.left_slots.iter_mut().chain(self.right_slots.iter_mut())
    }

    /// The right slot with the smallest total weight; the first one wins ties.
    pub fn lightest_right_slot(&self) -> Option<&Slot> {
        self.right_slots.iter().fold(None, |lightest: Option<&Slot>, slot| match lightest {
            Some(current) if current.total_weight() <= slot.total_weight() => Some(current),
            _ => Some(slot),
        })
    }

    pub fn side_of(&self, slot_id: SlotId) -> Option<Side> {
        if self.left_slots.iter().any(|slot| slot.id() == slot_id) {
            Some(Side::Left)
        } else if self.right_slots.iter().any(|slot| slot.id() == slot_id) {
            Some(Side::Right)
        } else {
            None
        }
    }
}
