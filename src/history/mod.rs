pub mod frame;
pub mod playback;

use crate::agent::predator::Predator;
use crate::agent::prey::Prey;
use crate::agent::EntityRef;
use crate::simulation::TerminationReason;
use crate::stats::StepStats;
use crate::world::food::Food;
use crate::world::Grid;
use frame::Raster;
use serde::{Deserialize, Serialize};

/// World state captured after a step. Owns its agents outright, so nothing done
/// to the live simulation afterwards can reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub stats: StepStats,
    pub prey: Vec<Prey>,
    pub predators: Vec<Predator>,
    pub food: Vec<Food>,
}

impl Snapshot {
    pub fn step(&self) -> u64 {
        self.stats.step
    }

    /// Which population, if any, has died out. Prey take precedence when both have.
    pub fn extinction(&self) -> Option<TerminationReason> {
        if self.prey.is_empty() {
            Some(TerminationReason::ExtinctPrey)
        } else if self.predators.is_empty() {
            Some(TerminationReason::ExtinctPredator)
        } else {
            None
        }
    }

    /// Every entity in paint order: food first, then prey, then predators.
    pub fn entities(&self) -> impl Iterator<Item = EntityRef<'_>> {
        self.food
            .iter()
            .map(EntityRef::Food)
            .chain(self.prey.iter().map(EntityRef::Prey))
            .chain(self.predators.iter().map(EntityRef::Predator))
    }

    pub fn raster(&self, grid: &Grid) -> Raster {
        Raster::paint(grid, self.entities())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationPoint {
    pub step: u64,
    pub prey: usize,
    pub predators: usize,
}

/// Append-only sequence of snapshots. Index 0 is the state before the first tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History {
    grid: Grid,
    snapshots: Vec<Snapshot>,
}

impl History {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            snapshots: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn record(&mut self, prey: &[Prey], predators: &[Predator], food: &[Food], stats: StepStats) {
        self.snapshots.push(Snapshot {
            stats,
            prey: prey.to_vec(),
            predators: predators.to_vec(),
            food: food.to_vec(),
        });
    }

    pub fn at(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }

    /// Population counts for every recorded step, for plotting.
    pub fn population_series(&self) -> Vec<PopulationPoint> {
        self.snapshots
            .iter()
            .map(|s| PopulationPoint {
                step: s.step(),
                prey: s.prey.len(),
                predators: s.predators.len(),
            })
            .collect()
    }

    pub fn raster(&self, index: usize) -> Option<Raster> {
        self.at(index).map(|s| s.raster(&self.grid))
    }
}
