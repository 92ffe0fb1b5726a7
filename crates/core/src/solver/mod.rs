//! Explicit upwind steppers for the linear advection equation
//!
//! ```text
//! ∂C/∂t + u·∂C/∂x + v·∂C/∂y = 0
//! ```
//!
//! Two entry points do the numerical work: [`step_1d`] and [`step_2d`]. Both are
//! pure: they read the current field, allocate the next one, and never write
//! into their input. The `Stepper` trait binds them to a grid for the
//! time-evolution driver.
//!
//! # Example
//!
//! ```rust
//! use advection_core::grid::{Grid, VelocityField};
//! use advection_core::solver::{create_stepper, Stepper, TimeStepParameters};
//!
//! let grid = Grid::line(10.0, 200)?;
//! let velocity = VelocityField::Linear(0.5);
//! let params = TimeStepParameters::new(&grid, &velocity, 0.8)?;
//! let stepper = create_stepper(&grid, &velocity, &params)?;
//! assert_eq!(stepper.dimensions(), (200, 1));
//! # Ok::<(), advection_core::AdvectionError>(())
//! ```

mod params;
pub mod profiler;
mod stepper;
#[allow(clippy::module_name_repetitions)]
mod r#trait;
mod upwind_1d;
mod upwind_2d;

// Re-exports
pub use params::{compute_dt, Stability, TimeStepParameters};
pub use profiler::{FrameTimer, ProfilerScope};
pub use r#trait::Stepper;
pub use stepper::{UpwindStepper1d, UpwindStepper2d};
pub use upwind_1d::{step_1d, UpwindDirection};
pub use upwind_2d::{step_2d, UpwindStencil};

use crate::error::{AdvectionError, Result};
use crate::grid::{Axis, Grid, ScalarField, VelocityField};
use tracing::info;

/// Create the stepper for a grid, velocity, and frozen step parameters
///
/// A 1D grid gets an [`UpwindStepper1d`], a 2D grid an [`UpwindStepper2d`].
///
/// # Errors
///
/// `InvalidConfiguration` if the velocity dimension count differs from the
/// grid's, `NonPositiveSpacing` if a spacing is unusable.
pub fn create_stepper(
    grid: &Grid,
    velocity: &VelocityField,
    params: &TimeStepParameters,
) -> Result<Box<dyn Stepper>> {
    let stepper = stepper::build_stepper(grid, velocity, params)?;
    let (width, height) = stepper.dimensions();
    info!(
        "Using {} stepper ({}x{} grid, dt={:.6}s, CFL={})",
        stepper.name(),
        width,
        height,
        params.dt,
        params.cfl
    );
    Ok(stepper)
}

pub(crate) fn check_spacing(axis: Axis, spacing: f64) -> Result<()> {
    if spacing.is_finite() && spacing > 0.0 {
        Ok(())
    } else {
        Err(AdvectionError::NonPositiveSpacing { axis, spacing })
    }
}

/// Data length must agree with the declared shape
pub(crate) fn check_layout(field: &ScalarField) -> Result<()> {
    if field.data.len() == field.width * field.height {
        Ok(())
    } else {
        Err(AdvectionError::LengthMismatch {
            shape: field.shape(),
            expected: field.width * field.height,
            got: field.data.len(),
        })
    }
}
