use thiserror::Error;

/// Reasons a configuration is rejected before a simulation is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid size must be positive")]
    ZeroGridSize,

    #[error("food density must be within [0, 1], got {0}")]
    FoodDensityOutOfRange(f64),

    #[error("forage chance must be within [0, 1], got {0}")]
    ForageChanceOutOfRange(f64),

    #[error("{field} must not be negative, got {value}")]
    NegativeEnergy { field: &'static str, value: i64 },

    #[error("prey max energy must be positive, got {0}")]
    NonPositiveMaxEnergy(i64),

    #[error("prey initial energy {initial} exceeds max energy {max}")]
    InitialEnergyAboveMax { initial: i64, max: i64 },
}
