//! Grid geometry, velocity, and field state

mod field;
mod geometry;
mod velocity;

// Re-export main types
pub use field::ScalarField;
pub use geometry::{Axis, AxisGeometry, Grid};
pub use velocity::VelocityField;
