//! Upwind steppers bound to a grid
//!
//! These wrap [`step_1d`] and [`step_2d`] with the velocity, `dt`, and spacing
//! frozen at setup, and check every incoming field against the grid shape.

use super::params::TimeStepParameters;
use super::upwind_1d::step_1d;
use super::upwind_2d::{step_2d, UpwindStencil};
use super::{check_spacing, Stepper};
use crate::error::{AdvectionError, Result};
use crate::grid::{Axis, Grid, ScalarField, VelocityField};

/// 1D upwind stepper with periodic lower and clamped upper boundary
#[derive(Debug, Clone, PartialEq)]
pub struct UpwindStepper1d {
    velocity: f64,
    dt: f64,
    dx: f64,
    width: usize,
}

impl UpwindStepper1d {
    /// Create a stepper for fields of `width` cells
    ///
    /// # Errors
    ///
    /// `NonPositiveSpacing` if `dx` is not strictly positive.
    pub fn new(width: usize, velocity: f64, dt: f64, dx: f64) -> Result<Self> {
        check_spacing(Axis::X, dx)?;
        Ok(Self {
            velocity,
            dt,
            dx,
            width,
        })
    }

    /// Advection velocity (m/s)
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }
}

impl Stepper for UpwindStepper1d {
    fn step(&self, field: &ScalarField) -> Result<ScalarField> {
        field.ensure_shape((self.width, 1))?;
        step_1d(field, self.velocity, self.dt, self.dx)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.width, 1)
    }

    fn dt(&self) -> f64 {
        self.dt
    }

    fn name(&self) -> &'static str {
        "upwind-1d"
    }
}

/// 2D upwind stepper, periodic on all four boundaries
#[derive(Debug, Clone, PartialEq)]
pub struct UpwindStepper2d {
    u: f64,
    v: f64,
    dt: f64,
    dx: f64,
    dy: f64,
    width: usize,
    height: usize,
}

impl UpwindStepper2d {
    /// Create a stepper for `width × height` fields
    ///
    /// # Errors
    ///
    /// `NonPositiveSpacing` if `dx` or `dy` is not strictly positive.
    pub fn new(
        (width, height): (usize, usize),
        (u, v): (f64, f64),
        dt: f64,
        (dx, dy): (f64, f64),
    ) -> Result<Self> {
        check_spacing(Axis::X, dx)?;
        check_spacing(Axis::Y, dy)?;
        Ok(Self {
            u,
            v,
            dt,
            dx,
            dy,
            width,
            height,
        })
    }

    /// Stencil variant every step of this stepper uses
    #[must_use]
    pub fn stencil(&self) -> UpwindStencil {
        UpwindStencil::from_velocity(self.u, self.v)
    }
}

impl Stepper for UpwindStepper2d {
    fn step(&self, field: &ScalarField) -> Result<ScalarField> {
        field.ensure_shape((self.width, self.height))?;
        step_2d(field, self.u, self.v, self.dt, self.dx, self.dy)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn dt(&self) -> f64 {
        self.dt
    }

    fn name(&self) -> &'static str {
        "upwind-2d"
    }
}

/// Build the stepper matching the grid's dimension count
///
/// # Errors
///
/// `InvalidConfiguration` if the velocity has a different dimension count than
/// the grid, `NonPositiveSpacing` for an unusable spacing.
pub(crate) fn build_stepper(
    grid: &Grid,
    velocity: &VelocityField,
    params: &TimeStepParameters,
) -> Result<Box<dyn Stepper>> {
    let (width, height) = grid.shape();
    let spacing = |axis: Axis| {
        params.spacing(axis).ok_or_else(|| {
            AdvectionError::InvalidConfiguration(format!("no spacing along {axis}"))
        })
    };

    match (grid.dimensions(), velocity) {
        (1, VelocityField::Linear(u)) => Ok(Box::new(UpwindStepper1d::new(
            width,
            *u,
            params.dt,
            spacing(Axis::X)?,
        )?)),
        (2, VelocityField::Planar(uv)) => Ok(Box::new(UpwindStepper2d::new(
            (width, height),
            (uv.x, uv.y),
            params.dt,
            (spacing(Axis::X)?, spacing(Axis::Y)?),
        )?)),
        (dims, velocity) => Err(AdvectionError::InvalidConfiguration(format!(
            "{}D velocity on a {}D grid",
            velocity.dimensions(),
            dims
        ))),
    }
}
