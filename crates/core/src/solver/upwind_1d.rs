//! First-order upwind stepper in one dimension
//!
//! ```text
//! v > 0:  C'[i] = C[i] - v·Δt/Δx · (C[i]   - C[i-1])
//! v ≤ 0:  C'[i] = C[i] - v·Δt/Δx · (C[i+1] - C[i])
//! ```
//!
//! # Boundaries
//!
//! The two boundaries differ:
//! - lower: `i - 1` at `i = 0` wraps to `n - 1` (periodic)
//! - upper: `i + 1` at `i = n - 1` is clamped to `n - 1` (zero gradient)
//!
//! So flow to the right re-enters at the left edge, while flow to the left
//! leaves through it and the right edge sees a zero-gradient inflow.

use super::{check_layout, check_spacing};
use crate::error::{AdvectionError, Result};
use crate::grid::{Axis, ScalarField};
use rayon::prelude::*;

/// Cells per rayon task
const CHUNK_SIZE: usize = 4096;

/// Which neighbour the 1D difference reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpwindDirection {
    /// `C[i] - C[i-1]`, used when v > 0
    Backward,
    /// `C[i+1] - C[i]`, used when v ≤ 0
    Forward,
}

impl UpwindDirection {
    /// Select the upwind side from the velocity sign
    #[must_use]
    pub fn from_velocity(velocity: f64) -> Self {
        if velocity > 0.0 {
            Self::Backward
        } else {
            Self::Forward
        }
    }
}

/// Advance a 1D field by one time step
///
/// Returns a new field; `field` is only read.
///
/// # Arguments
///
/// * `field` - Current field, a single row
/// * `velocity` - Advection velocity (m/s)
/// * `dt` - Time step (s)
/// * `dx` - Cell spacing (m)
///
/// # Errors
///
/// `ShapeMismatch` if the field has more than one row, `LengthMismatch` if its
/// data length disagrees with its width, `NonPositiveSpacing` if `dx` is not strictly
/// positive.
pub fn step_1d(field: &ScalarField, velocity: f64, dt: f64, dx: f64) -> Result<ScalarField> {
    if field.height != 1 {
        return Err(AdvectionError::ShapeMismatch {
            expected: (field.width, 1),
            got: field.shape(),
        });
    }
    check_layout(field)?;
    check_spacing(Axis::X, dx)?;

    let n = field.width;
    let courant = velocity * dt / dx;
    let old = field.as_slice();
    let mut next = ScalarField::new(n, 1);

    match UpwindDirection::from_velocity(velocity) {
        UpwindDirection::Backward => fill_cells(next.as_mut_slice(), |i| {
            let im = if i == 0 { n - 1 } else { i - 1 };
            old[i] - courant * (old[i] - old[im])
        }),
        UpwindDirection::Forward => fill_cells(next.as_mut_slice(), |i| {
            let ip = if i + 1 < n { i + 1 } else { i };
            old[i] - courant * (old[ip] - old[i])
        }),
    }

    Ok(next)
}

/// Write `update(i)` into every cell, chunked across the rayon pool
fn fill_cells<F>(out: &mut [f64], update: F)
where
    F: Fn(usize) -> f64 + Sync,
{
    out.par_chunks_mut(CHUNK_SIZE)
        .enumerate()
        .for_each(|(chunk, cells)| {
            let offset = chunk * CHUNK_SIZE;
            for (k, cell) in cells.iter_mut().enumerate() {
                *cell = update(offset + k);
            }
        });
}
