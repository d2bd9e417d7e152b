use super::Mobile;
use crate::config::PredatorConfig;
use crate::world::occupancy::OccupancyMap;
use crate::world::{Grid, Position};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predator {
    pub position: Position,
    pub energy: i64,
    pub steps_since_reproduce: u32,
}

/// The world as it looked after the prey phase.
pub struct PredatorView<'a> {
    pub grid: &'a Grid,
    pub prey_positions: &'a BTreeSet<Position>,
    pub occupied: &'a OccupancyMap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredatorOutcome {
    pub offspring: Option<Predator>,
    /// Reported even when the predator also reproduced, so the caller removes
    /// the prey exactly once.
    pub ate_prey: bool,
}

impl Predator {
    pub fn new(position: Position, energy: i64) -> Self {
        Self {
            position,
            energy,
            steps_since_reproduce: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.energy > 0
    }

    /// Prey cells orthogonally next to this predator, in ascending order.
    pub fn targets(&self, prey_positions: &BTreeSet<Position>) -> Vec<Position> {
        prey_positions
            .iter()
            .filter(|pos| self.position.is_adjacent(pos))
            .copied()
            .collect()
    }

    pub fn step<R: Rng + ?Sized>(
        &mut self,
        rules: &PredatorConfig,
        view: &PredatorView,
        rng: &mut R,
    ) -> PredatorOutcome {
        let targets = self.targets(view.prey_positions);
        match targets.choose(rng) {
            Some(&target) => self.relocate(target),
            None => self.wander(view.grid, rng),
        }

        self.energy -= rules.energy_loss;
        self.steps_since_reproduce = self.steps_since_reproduce.saturating_add(1);

        let ate_prey = view.prey_positions.contains(&self.position);
        if ate_prey {
            self.energy += rules.energy_gain;
        }

        let offspring = self.try_reproduce(rules, view.occupied);

        PredatorOutcome {
            offspring,
            ate_prey,
        }
    }

    /// Halves energy between parent and child. An odd unit is lost, never created.
    fn try_reproduce(&mut self, rules: &PredatorConfig, occupied: &OccupancyMap) -> Option<Predator> {
        if self.steps_since_reproduce < rules.reproduce_interval
            || self.energy <= rules.reproduce_threshold()
            || occupied.is_occupied(self.position)
        {
            return None;
        }

        self.energy /= 2;
        self.steps_since_reproduce = 0;
        Some(Predator::new(self.position, self.energy))
    }
}
