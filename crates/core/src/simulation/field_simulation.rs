//! Time-evolution driver
//!
//! `Simulation` owns the current field and feeds it through a `Stepper` once per
//! frame, replacing it wholesale with the result. There is no shared or global
//! field state: whoever holds the `Simulation` holds the field.

use super::statistics::FieldStatistics;
use crate::error::Result;
use crate::grid::{Grid, ScalarField};
use crate::solver::{FrameTimer, ProfilerScope, Stepper};
use tracing::{debug, info};

/// Field at one frame of the evolution
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Steps taken to reach this field
    pub step: u64,
    /// Simulated time (s), `step × dt`
    pub time: f64,
    /// Field values
    pub field: ScalarField,
}

/// Step-by-step advection run
pub struct Simulation {
    /// Pure stepping function (1D or 2D)
    stepper: Box<dyn Stepper>,

    /// Current field, replaced on every step
    field: ScalarField,

    /// Steps taken so far
    step_count: u64,

    /// Cell area (m² in 2D, m in 1D) for integrals
    cell_area: f64,

    timer: FrameTimer,
}

impl Simulation {
    /// Create a driver from a grid, its stepper, and the field at t = 0
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if `initial` or the stepper disagree with the grid shape.
    pub fn new(grid: &Grid, stepper: Box<dyn Stepper>, initial: ScalarField) -> Result<Self> {
        initial.ensure_shape(grid.shape())?;
        initial.ensure_shape(stepper.dimensions())?;

        let cell_area: f64 = grid.axes().map(|(_, g)| g.spacing).product();
        let (width, height) = grid.shape();
        info!(
            "Simulation initialized: {}x{} grid, {} stepper, dt={:.6}s",
            width,
            height,
            stepper.name(),
            stepper.dt()
        );

        Ok(Self {
            stepper,
            field: initial,
            step_count: 0,
            cell_area,
            timer: FrameTimer::new(),
        })
    }

    /// Advance one frame and return the new field
    ///
    /// # Errors
    ///
    /// Propagates stepper failures; the current field is left untouched on error.
    pub fn step(&mut self) -> Result<&ScalarField> {
        let scope = ProfilerScope::new("advection step");
        self.field = self.stepper.step(&self.field)?;
        self.step_count += 1;
        self.timer.record(scope.elapsed_ms());

        debug!(
            "Step {}: t={:.4}s, {:.3}ms",
            self.step_count,
            self.time(),
            self.timer.last_frame_time_ms()
        );
        Ok(&self.field)
    }

    /// Advance `frames` steps
    ///
    /// # Errors
    ///
    /// Stops at and returns the first stepper failure.
    pub fn run(&mut self, frames: usize) -> Result<()> {
        for _ in 0..frames {
            self.step()?;
        }
        Ok(())
    }

    /// Iterator yielding a snapshot after every step
    ///
    /// The iterator is unbounded; bound it with `take`. It yields the first
    /// stepper error once and then ends.
    pub fn frames(self) -> Frames {
        Frames {
            simulation: self,
            failed: false,
        }
    }

    /// Current field
    pub fn field(&self) -> &ScalarField {
        &self.field
    }

    /// Give up the driver and keep the field
    pub fn into_field(self) -> ScalarField {
        self.field
    }

    /// Steps taken so far
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Time step (s)
    pub fn dt(&self) -> f64 {
        self.stepper.dt()
    }

    /// Simulated time (s)
    pub fn time(&self) -> f64 {
        self.step_count as f64 * self.stepper.dt()
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            step: self.step_count,
            time: self.time(),
            field: self.field.clone(),
        }
    }

    /// Summary of the current field
    pub fn statistics(&self) -> FieldStatistics {
        FieldStatistics::from_field(&self.field, self.cell_area)
    }

    /// Step timing
    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }
}

/// Iterator over successive frames of a [`Simulation`]
pub struct Frames {
    simulation: Simulation,
    failed: bool,
}

impl Frames {
    /// Driver state after the frames consumed so far
    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }
}

impl Iterator for Frames {
    type Item = Result<Snapshot>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.simulation.step() {
            Ok(_) => Some(Ok(self.simulation.snapshot())),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}
