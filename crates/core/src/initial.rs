//! Initial-condition generators
//!
//! Fields are sampled at grid node coordinates (see [`Grid::coordinates`]).
//! A Gaussian bump follows
//!
//! ```text
//! C(x, y) = A · exp(-|p - p₀|² / w)
//! ```
//!
//! with `w` the width parameter as written (it is not a standard deviation).

use crate::error::{AdvectionError, Result};
use crate::grid::{Axis, Grid, ScalarField};
use nalgebra::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Gaussian bump centred at a point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianPulse {
    /// Centre (m); `y` is ignored on a 1D grid
    pub center: Point2<f64>,
    /// Width parameter `w` (m²)
    pub width: f64,
    /// Peak value
    pub amplitude: f64,
}

impl GaussianPulse {
    /// Unit-amplitude pulse
    #[must_use]
    pub fn new(center: Point2<f64>, width: f64) -> Self {
        Self {
            center,
            width,
            amplitude: 1.0,
        }
    }

    /// Value at `(x, y)`; `planar` selects whether `y` contributes
    #[must_use]
    pub fn value_at(&self, x: f64, y: f64, planar: bool) -> f64 {
        let dx = x - self.center.x;
        let dy = if planar { y - self.center.y } else { 0.0 };
        self.amplitude * (-(dx * dx + dy * dy) / self.width).exp()
    }

    fn validate(&self) -> Result<()> {
        if self.width.is_finite() && self.width > 0.0 {
            Ok(())
        } else {
            Err(AdvectionError::InvalidConfiguration(format!(
                "pulse width must be positive, got {}",
                self.width
            )))
        }
    }
}

/// Recipe for the field at t = 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InitialCondition {
    /// Single Gaussian bump
    Gaussian(GaussianPulse),
    /// Same value everywhere
    Uniform { value: f64 },
    /// Sum of `count` unit pulses at seeded random centres inside the domain
    RandomPulses { count: usize, width: f64, seed: u64 },
}

impl InitialCondition {
    /// Sample this condition on `grid`
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if a pulse width is not strictly positive.
    pub fn sample(&self, grid: &Grid) -> Result<ScalarField> {
        let planar = grid.dimensions() == 2;
        match self {
            Self::Gaussian(pulse) => {
                pulse.validate()?;
                Ok(ScalarField::from_grid_fn(grid, |x, y| {
                    pulse.value_at(x, y, planar)
                }))
            }
            Self::Uniform { value } => {
                let (width, height) = grid.shape();
                Ok(ScalarField::with_value(width, height, *value))
            }
            Self::RandomPulses { count, width, seed } => {
                let pulses = random_pulses(grid, *count, *width, *seed);
                for pulse in &pulses {
                    pulse.validate()?;
                }
                Ok(ScalarField::from_grid_fn(grid, |x, y| {
                    pulses.iter().map(|p| p.value_at(x, y, planar)).sum()
                }))
            }
        }
    }
}

/// Draw pulse centres uniformly over the domain from a seeded generator
fn random_pulses(grid: &Grid, count: usize, width: f64, seed: u64) -> Vec<GaussianPulse> {
    let mut rng = StdRng::seed_from_u64(seed);
    let extent = |axis: Axis| grid.axis(axis).map_or(0.0, |g| g.extent);
    let (extent_x, extent_y) = (extent(Axis::X), extent(Axis::Y));

    (0..count)
        .map(|_| {
            let x = rng.random_range(0.0..=extent_x);
            let y = rng.random_range(0.0..=extent_y);
            GaussianPulse::new(Point2::new(x, y), width)
        })
        .collect()
}
