pub mod tick;

use crate::agent::predator::Predator;
use crate::agent::prey::Prey;
use crate::config::Config;
use crate::error::ConfigError;
use crate::history::History;
use crate::rng;
use crate::stats::StepStats;
use crate::world::food::{scatter_food, Food};
use crate::world::Grid;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    ExtinctPrey,
    ExtinctPredator,
    MaxStepsReached,
}

impl TerminationReason {
    pub fn is_extinction(self) -> bool {
        self != TerminationReason::MaxStepsReached
    }
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            TerminationReason::ExtinctPrey => "prey went extinct",
            TerminationReason::ExtinctPredator => "predators went extinct",
            TerminationReason::MaxStepsReached => "maximum steps reached",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    Running,
    Finished(TerminationReason),
}

/// The live world. Owned by the tick engine for the duration of a step.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub grid: Grid,
    pub prey: Vec<Prey>,
    pub predators: Vec<Predator>,
    pub food: Vec<Food>,
    pub step: u64,
    pub total_births: u64,
    pub total_deaths: u64,
}

impl SimulationState {
    /// Seeds prey, then predators, then food at uniformly random cells.
    /// Overlaps are allowed.
    pub fn new<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Self {
        let grid = Grid::new(config.world.grid_size);
        let energy_model = config.simulation.energy_model.is_enabled();

        let prey = (0..config.prey.initial_count)
            .map(|_| {
                let position = grid.random_position(rng);
                if energy_model {
                    Prey::with_energy(position, config.prey.initial_energy, config.prey.max_energy)
                } else {
                    Prey::without_energy(position)
                }
            })
            .collect();

        let predators = (0..config.predator.initial_count)
            .map(|_| Predator::new(grid.random_position(rng), config.predator.initial_energy))
            .collect();

        let food = scatter_food(&grid, config.food_count(), config.world.food_regen_ticks, rng);

        Self {
            grid,
            prey,
            predators,
            food,
            step: 0,
            total_births: 0,
            total_deaths: 0,
        }
    }

    pub fn stats(&self) -> StepStats {
        StepStats::compute(self.step, &self.prey, &self.predators, &self.food)
    }

    pub fn extinction(&self) -> Option<TerminationReason> {
        if self.prey.is_empty() {
            Some(TerminationReason::ExtinctPrey)
        } else if self.predators.is_empty() {
            Some(TerminationReason::ExtinctPredator)
        } else {
            None
        }
    }
}

/// Everything a finished run hands to its consumers.
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    pub history: History,
    pub reason: TerminationReason,
    pub seed: u64,
}

/// Drives the tick engine from seeding to a terminal phase, recording a snapshot
/// after every step.
pub struct Simulation {
    config: Config,
    state: SimulationState,
    history: History,
    rng: ChaCha8Rng,
    seed: u64,
    phase: Phase,
}

impl Simulation {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let seed = rng::resolve_seed(config.simulation.seed);
        let mut rng = rng::create_rng(seed);
        let state = SimulationState::new(&config, &mut rng);
        let history = History::new(state.grid);

        log::info!(
            "Seed {} | grid {}x{} | prey {} | predators {} | food {} | energy model {:?}",
            seed,
            state.grid.size(),
            state.grid.size(),
            state.prey.len(),
            state.predators.len(),
            state.food.len(),
            config.simulation.energy_model
        );

        let mut sim = Self {
            config,
            state,
            history,
            rng,
            seed,
            phase: Phase::Initializing,
        };
        sim.record();

        sim.phase = match sim.state.extinction() {
            Some(reason) => Phase::Finished(reason),
            None if sim.config.simulation.max_steps == 0 => {
                Phase::Finished(TerminationReason::MaxStepsReached)
            }
            None => Phase::Running,
        };
        if let Phase::Finished(reason) = sim.phase {
            log_termination(reason, &sim.history);
        }

        Ok(sim)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs one tick and records it. Returns `None` once the run has finished.
    pub fn step(&mut self) -> Option<StepStats> {
        if self.phase != Phase::Running {
            return None;
        }

        let report = self.state.tick(&self.config, &mut self.rng);
        self.record();

        let interval = self.config.simulation.log_interval_steps;
        if interval > 0 && report.stats.step % interval == 0 {
            log::info!("{}", report.stats.summary_line());
        }

        let reason = match self.state.extinction() {
            Some(reason) => Some(reason),
            None if self.state.step >= self.config.simulation.max_steps => {
                Some(TerminationReason::MaxStepsReached)
            }
            None => None,
        };
        if let Some(reason) = reason {
            self.phase = Phase::Finished(reason);
            log_termination(reason, &self.history);
        }

        Some(report.stats)
    }

    pub fn run(mut self) -> SimulationOutcome {
        while self.step().is_some() {}

        let reason = match self.phase {
            Phase::Finished(reason) => reason,
            // step() only stops once the phase is terminal.
            Phase::Initializing | Phase::Running => TerminationReason::MaxStepsReached,
        };

        SimulationOutcome {
            history: self.history,
            reason,
            seed: self.seed,
        }
    }

    fn record(&mut self) {
        let stats = self.state.stats();
        self.history
            .record(&self.state.prey, &self.state.predators, &self.state.food, stats);
    }
}

fn log_termination(reason: TerminationReason, history: &History) {
    if reason.is_extinction() {
        log::warn!("{}; simulation stopped after {} snapshots", reason, history.len());
    } else {
        log::info!("{}; recorded {} snapshots", reason, history.len());
    }
}
