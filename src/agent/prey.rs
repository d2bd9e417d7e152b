use super::metabolism::Metabolism;
use super::Mobile;
use crate::config::PreyConfig;
use crate::world::occupancy::OccupancyMap;
use crate::world::{Grid, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Prey either carry a metabolism (energy model) or none at all (legacy rules,
/// where they never starve).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prey {
    pub position: Position,
    pub metabolism: Option<Metabolism>,
    pub steps_since_reproduce: u32,
}

/// The world as it looked at the start of the prey phase.
pub struct PreyView<'a> {
    pub grid: &'a Grid,
    pub occupied: &'a OccupancyMap,
    pub food_positions: &'a HashSet<Position>,
}

impl Prey {
    pub fn with_energy(position: Position, energy: i64, max_energy: i64) -> Self {
        Self {
            position,
            metabolism: Some(Metabolism::new(energy, max_energy)),
            steps_since_reproduce: 0,
        }
    }

    pub fn without_energy(position: Position) -> Self {
        Self {
            position,
            metabolism: None,
            steps_since_reproduce: 0,
        }
    }

    pub fn energy(&self) -> Option<i64> {
        self.metabolism.map(|m| m.energy())
    }

    pub fn is_alive(&self) -> bool {
        self.metabolism.map_or(true, |m| m.is_alive())
    }

    /// Moves, feeds, ages and possibly splits off one child. Food eaten here is
    /// only credited; marking the food source consumed is left to the caller.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        rules: &PreyConfig,
        view: &PreyView,
        rng: &mut R,
    ) -> Option<Prey> {
        self.wander(view.grid, rng);

        if let Some(metabolism) = self.metabolism.as_mut() {
            metabolism.spend(rules.move_cost);
            if view.food_positions.contains(&self.position) {
                metabolism.gain(rules.food_energy);
            } else if rng.gen_bool(rules.forage_chance) {
                metabolism.gain(rules.forage_energy);
            }
        }

        self.steps_since_reproduce = self.steps_since_reproduce.saturating_add(1);

        self.try_reproduce(rules, view.occupied)
    }

    fn try_reproduce(&mut self, rules: &PreyConfig, occupied: &OccupancyMap) -> Option<Prey> {
        if self.steps_since_reproduce < rules.reproduce_interval
            || occupied.is_occupied(self.position)
        {
            return None;
        }

        match self.metabolism.as_mut() {
            None => {
                self.steps_since_reproduce = 0;
                Some(Prey::without_energy(self.position))
            }
            Some(metabolism) => {
                let cost = rules.reproduce_cost;
                if !metabolism.can_afford(rules.min_reproduce_energy)
                    || !metabolism.can_afford(2 * cost)
                {
                    return None;
                }
                metabolism.spend(cost);
                self.steps_since_reproduce = 0;
                Some(Prey::with_energy(
                    self.position,
                    cost,
                    metabolism.max_energy(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn quiet_rules() -> PreyConfig {
        let mut rules = Config::default().prey;
        rules.forage_chance = 0.0;
        rules
    }

    fn view<'a>(
        grid: &'a Grid,
        occupied: &'a OccupancyMap,
        food: &'a HashSet<Position>,
    ) -> PreyView<'a> {
        PreyView {
            grid,
            occupied,
            food_positions: food,
        }
    }

    #[test]
    fn test_prey_pays_move_cost() {
        let grid = Grid::new(10);
        let occupied = OccupancyMap::new();
        let food = HashSet::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let rules = quiet_rules();

        let mut prey = Prey::with_energy(Position::new(5, 5), 20, 30);
        let child = prey.step(&rules, &view(&grid, &occupied, &food), &mut rng);

        assert!(child.is_none());
        assert_eq!(prey.energy(), Some(19));
        assert_eq!(prey.steps_since_reproduce, 1);
        assert_ne!(prey.position, Position::new(5, 5));
    }

    #[test]
    fn test_prey_eats_food_capped() {
        // Food on every neighbor, so wherever the prey lands it eats.
        let grid = Grid::new(10);
        let occupied = OccupancyMap::new();
        let food: HashSet<Position> = [(6, 5), (4, 5), (5, 6), (5, 4)]
            .into_iter()
            .map(|(x, y)| Position::new(x, y))
            .collect();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let rules = quiet_rules();

        let mut prey = Prey::with_energy(Position::new(5, 5), 25, 30);
        prey.step(&rules, &view(&grid, &occupied, &food), &mut rng);

        assert_eq!(prey.energy(), Some(30));
    }

    #[test]
    fn test_prey_forages_when_chance_is_certain() {
        let grid = Grid::new(10);
        let occupied = OccupancyMap::new();
        let food = HashSet::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut rules = quiet_rules();
        rules.forage_chance = 1.0;

        let mut prey = Prey::with_energy(Position::new(5, 5), 20, 30);
        prey.step(&rules, &view(&grid, &occupied, &food), &mut rng);

        assert_eq!(prey.energy(), Some(20 - rules.move_cost + rules.forage_energy));
    }

    #[test]
    fn test_prey_reproduces_and_conserves_energy() {
        let grid = Grid::new(10);
        let occupied = OccupancyMap::new();
        let food = HashSet::new();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut rules = quiet_rules();
        rules.reproduce_interval = 1;

        let mut prey = Prey::with_energy(Position::new(5, 5), 30, 30);
        let child = prey
            .step(&rules, &view(&grid, &occupied, &food), &mut rng)
            .unwrap();

        // 30 - move cost = 29 before splitting off the child.
        assert_eq!(child.energy(), Some(rules.reproduce_cost));
        assert_eq!(prey.energy(), Some(29 - rules.reproduce_cost));
        assert_eq!(child.position, prey.position);
        assert_eq!(prey.steps_since_reproduce, 0);
        assert_eq!(child.steps_since_reproduce, 0);
    }

    #[test]
    fn test_prey_needs_interval() {
        let grid = Grid::new(10);
        let occupied = OccupancyMap::new();
        let food = HashSet::new();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut rules = quiet_rules();
        rules.reproduce_interval = 3;

        let mut prey = Prey::with_energy(Position::new(5, 5), 30, 30);
        assert!(prey.step(&rules, &view(&grid, &occupied, &food), &mut rng).is_none());
        assert!(prey.step(&rules, &view(&grid, &occupied, &food), &mut rng).is_none());
        assert!(prey.step(&rules, &view(&grid, &occupied, &food), &mut rng).is_some());
    }

    #[test]
    fn test_prey_energy_gates_reproduction() {
        let grid = Grid::new(10);
        let occupied = OccupancyMap::new();
        let food = HashSet::new();
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut rules = quiet_rules();
        rules.reproduce_interval = 1;
        rules.min_reproduce_energy = 5;
        rules.reproduce_cost = 8;

        // Above the minimum but short of twice the cost.
        let mut prey = Prey::with_energy(Position::new(5, 5), 16, 30);
        assert!(prey.step(&rules, &view(&grid, &occupied, &food), &mut rng).is_none());
        assert_eq!(prey.energy(), Some(15));
        // The timer keeps running while blocked.
        assert_eq!(prey.steps_since_reproduce, 1);
    }

    #[test]
    fn test_occupied_cell_blocks_reproduction() {
        let grid = Grid::new(1);
        let blocker = Prey::without_energy(Position::new(0, 0));
        let mut occupied = OccupancyMap::new();
        occupied.insert(&blocker);
        let food = HashSet::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut rules = quiet_rules();
        rules.reproduce_interval = 1;

        let mut prey = Prey::with_energy(Position::new(0, 0), 30, 30);
        assert!(prey.step(&rules, &view(&grid, &occupied, &food), &mut rng).is_none());
    }

    #[test]
    fn test_prey_without_energy() {
        let grid = Grid::new(10);
        let occupied = OccupancyMap::new();
        let food = HashSet::new();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut rules = quiet_rules();
        rules.reproduce_interval = 2;

        let mut prey = Prey::without_energy(Position::new(5, 5));
        assert!(prey.step(&rules, &view(&grid, &occupied, &food), &mut rng).is_none());
        let child = prey
            .step(&rules, &view(&grid, &occupied, &food), &mut rng)
            .unwrap();

        assert!(prey.is_alive());
        assert_eq!(prey.energy(), None);
        assert_eq!(child.energy(), None);
        assert_eq!(prey.steps_since_reproduce, 0);
    }

    #[test]
    fn test_starved_prey_is_dead() {
        let grid = Grid::new(10);
        let occupied = OccupancyMap::new();
        let food = HashSet::new();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let rules = quiet_rules();

        let mut prey = Prey::with_energy(Position::new(5, 5), 1, 30);
        prey.step(&rules, &view(&grid, &occupied, &food), &mut rng);
        assert!(!prey.is_alive());
    }

    proptest! {
        #[test]
        fn prop_reproduction_conserves_energy(
            energy in 1i64..=60,
            cost in 0i64..=20,
            seed in any::<u64>(),
        ) {
            let grid = Grid::new(8);
            let occupied = OccupancyMap::new();
            let food = HashSet::new();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut rules = quiet_rules();
            rules.move_cost = 0;
            rules.reproduce_interval = 0;
            rules.min_reproduce_energy = 0;
            rules.reproduce_cost = cost;

            let mut prey = Prey::with_energy(Position::new(3, 3), energy, 60);
            let child = prey.step(&rules, &view(&grid, &occupied, &food), &mut rng);

            let parent_after = prey.energy().unwrap();
            prop_assert!(parent_after <= 60);
            match child {
                Some(child) => {
                    prop_assert_eq!(child.energy().unwrap() + parent_after, energy);
                }
                None => {
                    prop_assert_eq!(parent_after, energy);
                }
            }
        }
    }
}
