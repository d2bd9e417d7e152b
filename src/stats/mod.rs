pub mod metrics;

pub use metrics::StepStats;
