//! Advection Core Library
//!
//! Explicit first-order upwind integration of the linear advection equation on
//! uniform 1D and 2D grids, plus a step-by-step driver that produces field
//! snapshots for visualization.
//!
//! ## Layout
//!
//! - [`grid`]: grid geometry, constant velocity, and the scalar field
//! - [`solver`]: time-step setup and the two upwind steppers
//! - [`initial`]: initial-condition generators
//! - [`simulation`]: the time-evolution driver and run configuration
//!
//! ## Stability
//!
//! The scheme is stable only for Courant numbers in (0, 1]. Larger values are
//! accepted, logged as a warning, and produce an oscillating or diverging field.

pub mod error;
pub mod grid;
pub mod initial;
pub mod simulation;
pub mod solver;

// Re-export core types
pub use error::{AdvectionError, Result};
pub use grid::{Axis, Grid, ScalarField, VelocityField};
pub use initial::{GaussianPulse, InitialCondition};
pub use simulation::{FieldStatistics, Simulation, SimulationConfig, Snapshot};
pub use solver::{step_1d, step_2d, Stepper, TimeStepParameters};
