use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub world: WorldConfig,
    pub prey: PreyConfig,
    pub predator: PredatorConfig,
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    pub grid_size: usize,
    pub food_density: f64,
    pub food_regen_ticks: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreyConfig {
    pub initial_count: usize,
    pub reproduce_interval: u32,
    pub initial_energy: i64,
    pub max_energy: i64,
    pub move_cost: i64,
    pub food_energy: i64,
    pub forage_chance: f64,
    pub forage_energy: i64,
    pub reproduce_cost: i64,
    pub min_reproduce_energy: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredatorConfig {
    pub initial_count: usize,
    pub reproduce_interval: u32,
    pub initial_energy: i64,
    pub energy_gain: i64,
    pub energy_loss: i64,
    #[serde(default)]
    pub min_reproduce_energy: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub max_steps: u64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub energy_model: EnergyModel,
    pub log_interval_steps: u64,
}

/// Selects between the energy/food rule set and the legacy rules where prey
/// carry no energy at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyModel {
    #[default]
    Enabled,
    Disabled,
}

impl EnergyModel {
    pub fn is_enabled(self) -> bool {
        self == EnergyModel::Enabled
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world: WorldConfig {
                grid_size: 50,
                food_density: 0.1,
                food_regen_ticks: 10,
            },
            prey: PreyConfig {
                initial_count: 250,
                reproduce_interval: 5,
                initial_energy: 20,
                max_energy: 30,
                move_cost: 1,
                food_energy: 10,
                forage_chance: 0.1,
                forage_energy: 2,
                reproduce_cost: 8,
                min_reproduce_energy: 15,
            },
            predator: PredatorConfig {
                initial_count: 200,
                reproduce_interval: 8,
                initial_energy: 20,
                energy_gain: 15,
                energy_loss: 1,
                min_reproduce_energy: None,
            },
            simulation: SimulationConfig {
                max_steps: 100,
                seed: None,
                energy_model: EnergyModel::Enabled,
                log_interval_steps: 1,
            },
        }
    }
}

impl PredatorConfig {
    /// Energy a predator must exceed before it may reproduce.
    pub fn reproduce_threshold(&self) -> i64 {
        self.min_reproduce_energy
            .unwrap_or(self.energy_loss * 10)
    }
}

impl Config {
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Number of food sources seeded at start.
    pub fn food_count(&self) -> usize {
        let cells = self.world.grid_size * self.world.grid_size;
        (cells as f64 * self.world.food_density) as usize
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.world.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if !(0.0..=1.0).contains(&self.world.food_density) {
            return Err(ConfigError::FoodDensityOutOfRange(self.world.food_density));
        }
        if !(0.0..=1.0).contains(&self.prey.forage_chance) {
            return Err(ConfigError::ForageChanceOutOfRange(self.prey.forage_chance));
        }

        let energies = [
            ("prey.initial_energy", self.prey.initial_energy),
            ("prey.move_cost", self.prey.move_cost),
            ("prey.food_energy", self.prey.food_energy),
            ("prey.forage_energy", self.prey.forage_energy),
            ("prey.reproduce_cost", self.prey.reproduce_cost),
            ("prey.min_reproduce_energy", self.prey.min_reproduce_energy),
            ("predator.initial_energy", self.predator.initial_energy),
            ("predator.energy_gain", self.predator.energy_gain),
            ("predator.energy_loss", self.predator.energy_loss),
            (
                "predator.min_reproduce_energy",
                self.predator.min_reproduce_energy.unwrap_or(0),
            ),
        ];
        for (field, value) in energies {
            if value < 0 {
                return Err(ConfigError::NegativeEnergy { field, value });
            }
        }

        if self.prey.max_energy <= 0 {
            return Err(ConfigError::NonPositiveMaxEnergy(self.prey.max_energy));
        }
        if self.prey.initial_energy > self.prey.max_energy {
            return Err(ConfigError::InitialEnergyAboveMax {
                initial: self.prey.initial_energy,
                max: self.prey.max_energy,
            });
        }

        Ok(())
    }
}
