//! Time-step parameter setup
//!
//! The step size is fixed once for the whole run:
//!
//! ```text
//! dt = CFL × min over axes (Δaxis / |velocity_axis|)
//! ```
//!
//! A Courant number above 1 makes the explicit upwind scheme unstable. That is a
//! precondition of the scheme, not a fault: it is reported as a warning and via
//! [`Stability`], and the run proceeds with the requested value.

use crate::error::{AdvectionError, Result};
use crate::grid::{Axis, Grid, VelocityField};
use tracing::{debug, warn};

/// Courant number stability classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stability {
    /// 0 < CFL ≤ 1
    Stable,
    /// CFL outside (0, 1]; the field will oscillate or diverge
    Unstable { cfl: f64 },
}

impl Stability {
    /// Classify a Courant number
    #[must_use]
    pub fn classify(cfl: f64) -> Self {
        if cfl > 0.0 && cfl <= 1.0 {
            Self::Stable
        } else {
            Self::Unstable { cfl }
        }
    }

    #[must_use]
    pub fn is_stable(&self) -> bool {
        matches!(self, Self::Stable)
    }
}

/// Frozen step parameters derived from grid, velocity, and Courant number
#[derive(Debug, Clone, PartialEq)]
pub struct TimeStepParameters {
    /// Courant number as requested
    pub cfl: f64,
    /// Time step (s)
    pub dt: f64,
    /// Cell spacing per axis in axis order (m)
    pub spacings: Vec<f64>,
    /// Stability of the requested Courant number
    pub stability: Stability,
}

impl TimeStepParameters {
    /// Derive spacing and `dt` for a grid and velocity
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` if the velocity has a different number of
    ///   components than the grid has axes, or `cfl` is not finite
    /// - `NonPositiveSpacing` / `DegenerateVelocity` as for [`compute_dt`]
    pub fn new(grid: &Grid, velocity: &VelocityField, cfl: f64) -> Result<Self> {
        if grid.dimensions() != velocity.dimensions() {
            return Err(AdvectionError::InvalidConfiguration(format!(
                "{}D velocity on a {}D grid",
                velocity.dimensions(),
                grid.dimensions()
            )));
        }

        let spacings: Vec<f64> = grid.axes().map(|(_, g)| g.spacing).collect();
        let dt = compute_dt(&spacings, &velocity.components(), cfl)?;

        let stability = Stability::classify(cfl);
        if let Stability::Unstable { cfl } = stability {
            warn!(
                "Unstable configuration: CFL={} is outside (0, 1], upwind scheme will not converge",
                cfl
            );
        }

        debug!(
            "Time step parameters: CFL={}, dt={:.6}s, spacings={:?}",
            cfl, dt, spacings
        );

        Ok(Self {
            cfl,
            dt,
            spacings,
            stability,
        })
    }

    /// Spacing along `axis`, `None` if the grid has no such axis
    #[must_use]
    pub fn spacing(&self, axis: Axis) -> Option<f64> {
        self.spacings.get(axis.index()).copied()
    }
}

/// Compute `dt = cfl × min(spacing / |velocity|)` over paired axes
///
/// # Arguments
///
/// * `spacings` - Cell spacing per axis (m)
/// * `velocity` - Velocity component per axis (m/s), same length as `spacings`
/// * `cfl` - Courant number
///
/// # Errors
///
/// - `InvalidConfiguration` if the slices differ in length, are empty, or `cfl`
///   or a velocity component is not finite
/// - `NonPositiveSpacing` if a spacing is not strictly positive
/// - `DegenerateVelocity` if a velocity component is exactly zero
pub fn compute_dt(spacings: &[f64], velocity: &[f64], cfl: f64) -> Result<f64> {
    if spacings.is_empty() || spacings.len() != velocity.len() {
        return Err(AdvectionError::InvalidConfiguration(format!(
            "{} spacings paired with {} velocity components",
            spacings.len(),
            velocity.len()
        )));
    }
    if !cfl.is_finite() {
        return Err(AdvectionError::InvalidConfiguration(format!(
            "CFL must be finite, got {cfl}"
        )));
    }

    let mut min_crossing = f64::INFINITY;
    for ((&spacing, &speed), axis) in spacings.iter().zip(velocity).zip(Axis::ALL) {
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(AdvectionError::NonPositiveSpacing { axis, spacing });
        }
        if !speed.is_finite() {
            return Err(AdvectionError::InvalidConfiguration(format!(
                "velocity along {axis} must be finite, got {speed}"
            )));
        }
        if speed == 0.0 {
            return Err(AdvectionError::DegenerateVelocity { axis });
        }
        min_crossing = min_crossing.min(spacing / speed.abs());
    }

    Ok(cfl * min_crossing)
}
