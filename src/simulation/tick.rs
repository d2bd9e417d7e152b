use super::SimulationState;
use crate::agent::predator::{Predator, PredatorView};
use crate::agent::prey::{Prey, PreyView};
use crate::config::Config;
use crate::stats::StepStats;
use crate::world::occupancy::OccupancyMap;
use crate::world::Position;
use rand::Rng;
use std::collections::{BTreeSet, HashSet};

/// What happened during one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub prey_born: usize,
    pub prey_starved: usize,
    pub prey_eaten: usize,
    pub predators_born: usize,
    pub predators_starved: usize,
    pub food_eaten: usize,
    pub stats: StepStats,
}

impl SimulationState {
    /// Advances the world by one step.
    ///
    /// Every agent decides against a frozen view: prey see the occupancy and
    /// food taken at the start of the tick, predators see a second view taken
    /// after the prey phase. Nothing an agent does later in the same phase is
    /// visible to the agents stepping before or after it.
    pub fn tick<R: Rng + ?Sized>(&mut self, config: &Config, rng: &mut R) -> TickReport {
        self.step += 1;

        for food in &mut self.food {
            food.step();
        }

        let food_positions: HashSet<Position> = self
            .food
            .iter()
            .filter(|f| f.is_available())
            .map(|f| f.position)
            .collect();

        let mut occupied = OccupancyMap::new();
        occupied.extend(&self.prey);
        occupied.extend(&self.predators);

        // Prey phase
        let prey_view = PreyView {
            grid: &self.grid,
            occupied: &occupied,
            food_positions: &food_positions,
        };
        let mut newborn_prey: Vec<Prey> = Vec::new();
        for prey in &mut self.prey {
            if let Some(child) = prey.step(&config.prey, &prey_view, rng) {
                newborn_prey.push(child);
            }
        }

        let before = self.prey.len();
        self.prey.retain(Prey::is_alive);
        let prey_starved = before - self.prey.len();
        let prey_born = newborn_prey.len();
        self.prey.extend(newborn_prey);

        let food_eaten = if config.simulation.energy_model.is_enabled() {
            self.consume_food()
        } else {
            0
        };

        // Predator phase
        let mut prey_positions: BTreeSet<Position> =
            self.prey.iter().map(|p| p.position).collect();
        let mut occupied = OccupancyMap::new();
        occupied.extend(&self.prey);
        occupied.extend(&self.predators);

        let mut newborn_predators: Vec<Predator> = Vec::new();
        let mut prey_eaten = 0;
        for predator in &mut self.predators {
            let view = PredatorView {
                grid: &self.grid,
                prey_positions: &prey_positions,
                occupied: &occupied,
            };
            let outcome = predator.step(&config.predator, &view, rng);

            if outcome.ate_prey {
                // Every prey sharing the cell is taken, not just one.
                let at = predator.position;
                let before = self.prey.len();
                self.prey.retain(|p| p.position != at);
                let removed = before - self.prey.len();
                if removed > 0 {
                    prey_positions.remove(&at);
                    prey_eaten += removed;
                }
            }
            if let Some(child) = outcome.offspring {
                newborn_predators.push(child);
            }
        }

        let predators_born = newborn_predators.len();
        self.predators.extend(newborn_predators);
        let before = self.predators.len();
        self.predators.retain(Predator::is_alive);
        let predators_starved = before - self.predators.len();

        self.total_births += (prey_born + predators_born) as u64;
        self.total_deaths += (prey_starved + prey_eaten + predators_starved) as u64;

        log::debug!(
            "Step {}: prey +{} -{} starved -{} eaten | predators +{} -{} starved | food eaten {}",
            self.step,
            prey_born,
            prey_starved,
            prey_eaten,
            predators_born,
            predators_starved,
            food_eaten
        );

        TickReport {
            prey_born,
            prey_starved,
            prey_eaten,
            predators_born,
            predators_starved,
            food_eaten,
            stats: self.stats(),
        }
    }

    /// Each prey eats the first available food source on its cell, in list order,
    /// so two prey on one source leave only the first fed from it.
    fn consume_food(&mut self) -> usize {
        let mut eaten = 0;
        for prey in &self.prey {
            if let Some(food) = self
                .food
                .iter_mut()
                .find(|f| f.position == prey.position && f.is_available())
            {
                if food.consume() {
                    eaten += 1;
                }
            }
        }
        eaten
    }
}
