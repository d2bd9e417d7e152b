use serde::{Deserialize, Serialize};

/// Integer energy store with an upper cap. Spending is unchecked, so energy can
/// reach zero or below; the tick engine removes such agents at the end of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metabolism {
    energy: i64,
    max_energy: i64,
}

impl Metabolism {
    pub fn new(initial_energy: i64, max_energy: i64) -> Self {
        Self {
            energy: initial_energy.min(max_energy),
            max_energy,
        }
    }

    pub fn energy(&self) -> i64 {
        self.energy
    }

    pub fn max_energy(&self) -> i64 {
        self.max_energy
    }

    pub fn is_alive(&self) -> bool {
        self.energy > 0
    }

    pub fn spend(&mut self, amount: i64) {
        self.energy -= amount;
    }

    pub fn gain(&mut self, amount: i64) {
        self.energy = (self.energy + amount).min(self.max_energy);
    }

    pub fn can_afford(&self, cost: i64) -> bool {
        self.energy >= cost
    }
}
