use crate::agent::predator::Predator;
use crate::agent::prey::Prey;
use crate::world::food::Food;
use serde::{Deserialize, Serialize};

/// Aggregate figures for one recorded step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepStats {
    pub step: u64,
    pub prey_count: usize,
    pub predator_count: usize,
    pub avg_prey_energy: f64,
    pub avg_predator_energy: f64,
    pub available_food: usize,
}

impl StepStats {
    pub fn compute(step: u64, prey: &[Prey], predators: &[Predator], food: &[Food]) -> Self {
        // Prey without a metabolism contribute nothing; an all-legacy
        // population averages to 0.
        let prey_energies: Vec<i64> = prey.iter().filter_map(|p| p.energy()).collect();
        let avg_prey_energy = mean(prey_energies.iter().sum(), prey_energies.len());

        let predator_energy: i64 = predators.iter().map(|p| p.energy).sum();
        let avg_predator_energy = mean(predator_energy, predators.len());

        Self {
            step,
            prey_count: prey.len(),
            predator_count: predators.len(),
            avg_prey_energy,
            avg_predator_energy,
            available_food: food.iter().filter(|f| f.is_available()).count(),
        }
    }

    pub fn total_animals(&self) -> usize {
        self.prey_count + self.predator_count
    }

    /// Percentage of animals that are prey.
    pub fn prey_share(&self) -> f64 {
        share(self.prey_count, self.total_animals())
    }

    pub fn predator_share(&self) -> f64 {
        share(self.predator_count, self.total_animals())
    }

    pub fn summary_line(&self) -> String {
        format!(
            "Step {}: prey = {} (avg energy {:.1}), predators = {} (avg energy {:.1}), food available = {}",
            self.step,
            self.prey_count,
            self.avg_prey_energy,
            self.predator_count,
            self.avg_predator_energy,
            self.available_food
        )
    }
}

fn mean(total: i64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    total as f64 / count as f64
}

fn share(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Position;

    #[test]
    fn test_stats_empty_population() {
        let stats = StepStats::compute(7, &[], &[], &[]);

        assert_eq!(stats.step, 7);
        assert_eq!(stats.prey_count, 0);
        assert_eq!(stats.avg_prey_energy, 0.0);
        assert_eq!(stats.avg_predator_energy, 0.0);
        assert_eq!(stats.available_food, 0);
        assert_eq!(stats.prey_share(), 0.0);
        assert_eq!(stats.predator_share(), 0.0);
    }

    #[test]
    fn test_stats_with_agents() {
        let prey = vec![
            Prey::with_energy(Position::new(0, 0), 10, 30),
            Prey::with_energy(Position::new(1, 0), 15, 30),
        ];
        let predators = vec![
            Predator::new(Position::new(2, 2), 20),
            Predator::new(Position::new(3, 3), 40),
            Predator::new(Position::new(4, 4), 30),
        ];
        let mut eaten = Food::new(Position::new(5, 5), 4);
        eaten.consume();
        let food = vec![Food::new(Position::new(6, 6), 4), eaten];

        let stats = StepStats::compute(3, &prey, &predators, &food);

        assert_eq!(stats.prey_count, 2);
        assert_eq!(stats.predator_count, 3);
        assert_eq!(stats.avg_prey_energy, 12.5);
        assert_eq!(stats.avg_predator_energy, 30.0);
        assert_eq!(stats.available_food, 1);
        assert_eq!(stats.prey_share(), 40.0);
        assert_eq!(stats.predator_share(), 60.0);
    }

    #[test]
    fn test_legacy_prey_average_zero() {
        let prey = vec![Prey::without_energy(Position::new(0, 0))];
        let stats = StepStats::compute(0, &prey, &[], &[]);
        assert_eq!(stats.prey_count, 1);
        assert_eq!(stats.avg_prey_energy, 0.0);
    }

    #[test]
    fn test_summary_line() {
        let prey = vec![Prey::with_energy(Position::new(0, 0), 10, 30)];
        let predators = vec![Predator::new(Position::new(2, 2), 5)];
        let stats = StepStats::compute(12, &prey, &predators, &[]);

        assert_eq!(
            stats.summary_line(),
            "Step 12: prey = 1 (avg energy 10.0), predators = 1 (avg energy 5.0), food available = 0"
        );
    }
}
