use crate::domain::utils::id::{SectionId, VesselId};
use crate::domain::vessel::vessel::Vessel;

#[derive(Debug, Clone, PartialEq)]
pub struct SectionLoad {
    pub section: SectionId,
    pub left_weight: f64,
    pub right_weight: f64,
    pub occupants: usize,
}

/// Weight distribution of a vessel at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadDistribution {
    pub vessel: VesselId,
    pub sections: Vec<SectionLoad>,
    pub total_left_weight: f64,
    pub total_right_weight: f64,
}

impl LoadDistribution {
    pub fn from_vessel(vessel: &Vessel) -> Self {
        let sections: Vec<SectionLoad> = vessel
            .sections()
            .iter()
            .map(|section| SectionLoad {
                section: section.id(),
                left_weight: section.left_weight(),
                right_weight: section.right_weight(),
                occupants: section.all_slots().map(|slot| slot.occupant_count()).sum(),
            })
            .collect();

        let total_left_weight = sections.iter().map(|section| section.left_weight).sum();
        let total_right_weight = sections.iter().map(|section| section.right_weight).sum();

        LoadDistribution { vessel: vessel.id(), sections, total_left_weight, total_right_weight }
    }

    pub fn balance_value(&self) -> f64 {
        (self.total_left_weight - self.total_right_weight).abs()
    }

    pub fn occupants(&self) -> usize {
        self.sections.iter().map(|section| section.occupants).sum()
    }

    /// Writes the per-section and total weights to the log.
    pub fn log_summary(&self) {
        log::info!("Load distribution of vessel {}:", self.vessel);
        for (index, section) in self.sections.iter().enumerate() {
            log::info!(
                "  Section {:>2}: left {:>12.1} | right {:>12.1} | {} units",
                index + 1,
                section.left_weight,
                section.right_weight,
                section.occupants
            );
        }
        log::info!("Total weight left: {:.1}", self.total_left_weight);
        log::info!("Total weight right: {:.1}", self.total_right_weight);
        log::info!("Balance value: {:.1} ({} units on board)", self.balance_value(), self.occupants());
    }
}
