use std::collections::HashMap;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::domain::cargo::cargo_unit::CargoUnit;
use crate::domain::cargo::shipping_company::ShippingCompany;
use crate::domain::inventory::inventory_trait::Inventory;
use crate::domain::utils::id::CargoUnitId;
use crate::error::{Error, Result};

/// Lower bound (inclusive) of generated cargo weights.
pub const MIN_WEIGHT: f64 = 12_500.0;

/// Upper bound (exclusive) of generated cargo weights.
pub const MAX_WEIGHT: f64 = 32_500.0;

/// Container terminal laid out as a `rows x cols` grid, one cargo unit per position.
#[derive(Debug, Clone)]
pub struct ContainerTerminal {
    rows: usize,
    cols: usize,
    grid: Vec<Option<CargoUnit>>,

    /// Lookup position (grid index) using the cargo unit id.
    index: HashMap<CargoUnitId, usize>,
}

impl ContainerTerminal {
    pub fn new(rows: usize, cols: usize) -> Self {
        ContainerTerminal { rows, cols, grid: vec![None; rows * cols], index: HashMap::new() }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn free_positions(&self) -> usize {
        self.grid.len() - self.index.len()
    }

    fn position(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Puts `unit` at the given grid position.
    ///
    /// # Returns
    /// `false` if the position is outside the grid, already taken, or the unit is already stored elsewhere.
    pub fn add_unit(&mut self, row: usize, col: usize, unit: CargoUnit) -> bool {
        let Some(position) = self.position(row, col) else {
            log::warn!("Position ({}, {}) is outside of the {}x{} terminal.", row, col, self.rows, self.cols);
            return false;
        };

        if self.grid[position].is_some() || self.index.contains_key(&unit.id()) {
            return false;
        }

        self.index.insert(unit.id(), position);
        self.grid[position] = Some(unit);
        true
    }

    /// Removes and returns the unit at the given grid position, `None` if it was empty.
    pub fn remove_unit(&mut self, row: usize, col: usize) -> Option<CargoUnit> {
        let position = self.position(row, col)?;
        let unit = self.grid[position].take()?;
        self.index.remove(&unit.id());
        Some(unit)
    }

    /// Seeds the terminal with `count` random cargo units using the default weight range.
    pub fn place_random_units<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Result<()> {
        self.place_random_units_with_weights(count, MIN_WEIGHT, MAX_WEIGHT, rng)
    }

    /// Seeds the terminal with `count` random cargo units on random free positions.
    ///
    /// Weights are uniform in `[min_weight, max_weight)`, the heavy flag is a fair coin and the
    /// shipping company is uniform over [`ShippingCompany::ALL`]. Unit ids are drawn from `rng` as
    /// well, so the same seed always produces the same population.
    pub fn place_random_units_with_weights<R: Rng + ?Sized>(&mut self, count: usize, min_weight: f64, max_weight: f64, rng: &mut R) -> Result<()> {
        if !(min_weight > 0.0 && min_weight < max_weight) {
            return Err(Error::ModelConstructionError(format!("Invalid weight range [{}, {})", min_weight, max_weight)));
        }

        let free = self.free_positions();
        if count > free {
            return Err(Error::TerminalCapacityExceeded { requested: count, free });
        }

        let mut free_cells: Vec<usize> = (0..self.grid.len()).filter(|position| self.grid[*position].is_none()).collect();

        for _ in 0..count {
            let unit = Self::generate_random_unit(min_weight, max_weight, rng);
            let position = free_cells.swap_remove(rng.random_range(0..free_cells.len()));

            self.index.insert(unit.id(), position);
            self.grid[position] = Some(unit);
        }

        log::info!("Placed {} random cargo units in the terminal ({} positions left).", count, self.free_positions());
        Ok(())
    }

    fn generate_random_unit<R: Rng + ?Sized>(min_weight: f64, max_weight: f64, rng: &mut R) -> CargoUnit {
        let id = CargoUnitId::from_random_bytes(rng.random());
        let is_heavy = rng.random_bool(0.5);
        let shipping_company = *ShippingCompany::ALL.choose(rng).unwrap_or(&ShippingCompany::Maersk);
        let weight = rng.random_range(min_weight..max_weight);

        CargoUnit::with_id(id, weight, is_heavy, shipping_company)
    }
}

impl Inventory for ContainerTerminal {
    /// Row-major order over the grid.
    fn all_units(&self) -> Vec<CargoUnit> {
        self.grid.iter().flatten().cloned().collect()
    }

    fn remove_unit_by_id(&mut self, id: CargoUnitId) -> Option<CargoUnit> {
        let position = self.index.remove(&id)?;
        self.grid[position].take()
    }

    fn len(&self) -> usize {
        self.index.len()
    }
}
