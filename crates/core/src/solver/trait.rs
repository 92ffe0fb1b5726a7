//! Stepper trait definition
//!
//! The time-evolution driver only needs "give me the next field". Both upwind
//! variants implement this trait so the driver never branches on dimension.

use crate::error::Result;
use crate::grid::ScalarField;

/// One explicit time step as a pure function of the current field
///
/// Implementations hold their velocity, `dt`, and spacing fixed for the whole
/// run and keep no other state: equal inputs give bit-identical outputs.
pub trait Stepper: Send + Sync {
    /// Produce the field one time step after `field`
    ///
    /// `field` is read only; the result is a freshly allocated field of the
    /// same shape.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if `field` does not have the shape this stepper was
    /// built for.
    fn step(&self, field: &ScalarField) -> Result<ScalarField>;

    /// Expected field shape `(width, height)`
    fn dimensions(&self) -> (usize, usize);

    /// Time step in seconds
    fn dt(&self) -> f64;

    /// Short label for logs
    fn name(&self) -> &'static str;
}
