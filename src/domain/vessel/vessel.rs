use crate::api::stowage_config_dto::VesselDto;
use crate::domain::storage::slot::Slot;
use crate::domain::utils::id::{SlotId, VesselId};
use crate::domain::vessel::section::Section;
use crate::error::{Error, Result};

/// A container ship: an ordered sequence of sections.
///
/// All weights are derived on demand from the slots, nothing is cached.
#[derive(Debug, Clone)]
pub struct Vessel {
    id: VesselId,
    sections: Vec<Section>,
}

impl Vessel {
    pub fn new(num_sections: usize, slots_per_side: usize, capacity: usize) -> Self {
        let sections = (0..num_sections).map(|_| Section::new(slots_per_side, capacity)).collect();
        Vessel { id: VesselId::new(), sections }
    }

    /// Builds a vessel from its configuration, rejecting topologies without any slot.
    pub fn from_dto(dto: &VesselDto) -> Result<Self> {
        if dto.sections == 0 || dto.slots_per_side == 0 || dto.max_stack_size == 0 {
            return Err(Error::ModelConstructionError(format!(
                "Vessel needs at least one section, slot and stack position (sections: {}, slots per side: {}, max stack size: {})",
                dto.sections, dto.slots_per_side, dto.max_stack_size
            )));
        }

        let vessel = Vessel::new(dto.sections, dto.slots_per_side, dto.max_stack_size);
        log::info!(
            "Vessel {} constructed with {} sections, {} slots per side and a total capacity of {} cargo units.",
            vessel.id,
            dto.sections,
            dto.slots_per_side,
            vessel.total_capacity()
        );

        Ok(vessel)
    }

    /// Independent copy of the slot tree with the same identities and capacities but empty stacks.
    /// Used to simulate placements without touching this vessel.
    pub fn snapshot(&self) -> Self {
        Vessel { id: self.id, sections: self.sections.iter().map(Section::snapshot).collect() }
    }

    pub fn id(&self) -> VesselId {
        self.id
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn sections_mut(&mut self) -> &mut [Section] {
        &mut self.sections
    }

    pub fn total_left_weight(&self) -> f64 {
        self.sections.iter().map(Section::left_weight).sum()
    }

    pub fn total_right_weight(&self) -> f64 {
        self.sections.iter().map(Section::right_weight).sum()
    }

    pub fn total_weight(&self) -> f64 {
        self.total_left_weight() + self.total_right_weight()
    }

    /// Absolute difference between total left and total right weight.
    pub fn balance_value(&self) -> f64 {
        (self.total_left_weight() - self.total_right_weight()).abs()
    }

    /// Every slot of the vessel: sections in order, within a section left group then right group.
    ///
    /// Both planners rely on this order to break ties.
    pub fn all_slots(&self) -> impl Iterator<Item = &Slot> {
        self.sections.iter().flat_map(Section::all_slots)
    }

    pub fn all_slots_mut(&mut self) -> impl Iterator<Item = &mut Slot> {
        self.sections.iter_mut().flat_map(Section::all_slots_mut)
    }

    pub fn find_slot(&self, slot_id: SlotId) -> Option<&Slot> {
        self.all_slots().find(|slot| slot.id() == slot_id)
    }

    pub fn find_slot_mut(&mut self, slot_id: SlotId) -> Option<&mut Slot> {
        self.all_slots_mut().find(|slot| slot.id() == slot_id)
    }

    pub fn total_capacity(&self) -> usize {
        self.all_slots().map(Slot::capacity).sum()
    }

    pub fn occupant_count(&self) -> usize {
        self.all_slots().map(Slot::occupant_count).sum()
    }
}
