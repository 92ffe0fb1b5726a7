//! Error types for grid setup and stepping
//!
//! Every variant is a precondition violation raised by the call that violates it.
//! Nothing here is retried; callers fix their inputs.

use crate::grid::Axis;

/// Failure raised by grid construction, parameter setup, or a stepper call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdvectionError {
    /// A velocity component used as a divisor in the time-step formula is zero
    #[error("velocity component along {axis} is zero, time step is undefined")]
    DegenerateVelocity { axis: Axis },

    /// Field dimensions differ from what the stepper or grid expects
    ///
    /// Shapes are `(width, height)` in cells; a 1D field has height 1.
    #[error("field shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// Buffer length disagrees with the shape declared alongside it
    #[error("field data holds {got} values, shape {shape:?} needs {expected}")]
    LengthMismatch {
        shape: (usize, usize),
        expected: usize,
        got: usize,
    },

    /// Grid spacing along an axis is zero, negative, or not finite
    #[error("spacing along {axis} must be positive, got {spacing}")]
    NonPositiveSpacing { axis: Axis, spacing: f64 },

    /// Fewer than two cells along an axis
    #[error("cell count along {axis} must be at least 2, got {count}")]
    InvalidCellCount { axis: Axis, count: usize },

    /// Configuration value outside its valid domain
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AdvectionError>;
