pub mod config;
pub mod grid;
pub mod hypothesis;

// Re-export key types for easier use by dependent crates
pub use config::{
    ForestConfig, GenerationConfig, IgnitionConfig, RainCondition, SimulationConfig, ViewConfig,
};
pub use grid::Grid;
pub use hypothesis::Hypothesis;
