//! Constant advection velocity
//!
//! Velocity is uniform in space and time. Only the sign of each component
//! matters for stencil selection; the magnitude enters the Courant factor.

use super::geometry::Axis;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// One constant velocity component per grid axis (m/s)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum VelocityField {
    /// Velocity along x for a 1D grid
    Linear(f64),
    /// `(u, v)` along x and y for a 2D grid
    Planar(Vector2<f64>),
}

impl VelocityField {
    /// 2D velocity from its components
    #[must_use]
    pub fn planar(u: f64, v: f64) -> Self {
        Self::Planar(Vector2::new(u, v))
    }

    /// Number of components
    #[must_use]
    pub fn dimensions(&self) -> usize {
        match self {
            Self::Linear(_) => 1,
            Self::Planar(_) => 2,
        }
    }

    /// Component along `axis`, `None` for y on a 1D velocity
    #[must_use]
    pub fn component(&self, axis: Axis) -> Option<f64> {
        match (self, axis) {
            (Self::Linear(u), Axis::X) => Some(*u),
            (Self::Linear(_), Axis::Y) => None,
            (Self::Planar(uv), axis) => Some(uv[axis.index()]),
        }
    }

    /// Components in axis order
    #[must_use]
    pub fn components(&self) -> Vec<f64> {
        match self {
            Self::Linear(u) => vec![*u],
            Self::Planar(uv) => vec![uv.x, uv.y],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components() {
        let linear = VelocityField::Linear(-0.5);
        assert_eq!(linear.dimensions(), 1);
        assert_eq!(linear.component(Axis::X), Some(-0.5));
        assert_eq!(linear.component(Axis::Y), None);

        let planar = VelocityField::planar(1.0, -2.0);
        assert_eq!(planar.dimensions(), 2);
        assert_eq!(planar.component(Axis::Y), Some(-2.0));
        assert_eq!(planar.components(), vec![1.0, -2.0]);
    }
}
