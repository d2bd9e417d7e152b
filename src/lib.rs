pub mod agent;
pub mod config;
pub mod error;
pub mod history;
pub mod rng;
pub mod simulation;
pub mod stats;
pub mod world;
