use super::{Grid, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A fixed food source. It never moves and is never destroyed; eating it only
/// starts a regrowth countdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub position: Position,
    available: bool,
    regeneration_time: u32,
    time_until_regen: u32,
}

impl Food {
    pub fn new(position: Position, regeneration_time: u32) -> Self {
        Self {
            position,
            available: true,
            regeneration_time,
            time_until_regen: 0,
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn time_until_regen(&self) -> u32 {
        self.time_until_regen
    }

    /// Advances the regrowth countdown of consumed food.
    pub fn step(&mut self) {
        if self.available {
            return;
        }
        self.time_until_regen = self.time_until_regen.saturating_sub(1);
        if self.time_until_regen == 0 {
            self.available = true;
        }
    }

    /// Returns false, leaving the countdown untouched, when already eaten.
    pub fn consume(&mut self) -> bool {
        if !self.available {
            return false;
        }
        self.available = false;
        self.time_until_regen = self.regeneration_time;
        true
    }
}

/// Seeds `count` food sources at uniformly random cells. Several may share a cell.
pub fn scatter_food<R: Rng + ?Sized>(
    grid: &Grid,
    count: usize,
    regeneration_time: u32,
    rng: &mut R,
) -> Vec<Food> {
    (0..count)
        .map(|_| Food::new(grid.random_position(rng), regeneration_time))
        .collect()
}
