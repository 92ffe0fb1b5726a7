//! Time-evolution driver, run configuration, and reporting

mod config;
mod field_simulation;
mod statistics;

pub use config::SimulationConfig;
pub use field_simulation::{Frames, Simulation, Snapshot};
pub use statistics::FieldStatistics;
