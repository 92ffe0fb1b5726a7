//! Uniform grid geometry
//!
//! A `Grid` is frozen at construction: extents, cell counts and the derived
//! spacing `extent / count` never change afterwards.

use crate::error::{AdvectionError, Result};
use std::fmt;

/// Spatial axis of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis, column index `i`
    X,
    /// Vertical axis, row index `j`
    Y,
}

impl Axis {
    /// Axes in storage order
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// Position of this axis in per-axis arrays
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

/// Geometry along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisGeometry {
    /// Domain length (m)
    pub extent: f64,
    /// Number of cells
    pub count: usize,
    /// Cell width (m), `extent / count`
    pub spacing: f64,
}

impl AxisGeometry {
    fn new(axis: Axis, extent: f64, count: usize) -> Result<Self> {
        if count < 2 {
            return Err(AdvectionError::InvalidCellCount { axis, count });
        }

        let spacing = extent / count as f64;
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(AdvectionError::NonPositiveSpacing { axis, spacing });
        }

        Ok(Self {
            extent,
            count,
            spacing,
        })
    }
}

/// Uniform 1D or 2D grid
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    axes: Vec<AxisGeometry>,
}

impl Grid {
    /// Create a 1D grid along x
    ///
    /// # Errors
    ///
    /// `InvalidCellCount` if `count < 2`, `NonPositiveSpacing` if the extent
    /// yields a spacing that is not strictly positive.
    pub fn line(extent: f64, count: usize) -> Result<Self> {
        Ok(Self {
            axes: vec![AxisGeometry::new(Axis::X, extent, count)?],
        })
    }

    /// Create a 2D grid with `count_x` columns and `count_y` rows
    ///
    /// # Errors
    ///
    /// Same conditions as [`Grid::line`], checked per axis.
    pub fn plane(extent_x: f64, count_x: usize, extent_y: f64, count_y: usize) -> Result<Self> {
        Ok(Self {
            axes: vec![
                AxisGeometry::new(Axis::X, extent_x, count_x)?,
                AxisGeometry::new(Axis::Y, extent_y, count_y)?,
            ],
        })
    }

    /// Number of spatial dimensions (1 or 2)
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.axes.len()
    }

    /// Geometry along `axis`, `None` for y on a 1D grid
    #[must_use]
    pub fn axis(&self, axis: Axis) -> Option<&AxisGeometry> {
        self.axes.get(axis.index())
    }

    /// Iterate `(axis, geometry)` pairs in storage order
    pub fn axes(&self) -> impl Iterator<Item = (Axis, &AxisGeometry)> {
        Axis::ALL.into_iter().zip(self.axes.iter())
    }

    /// Cell spacing along `axis`
    #[must_use]
    pub fn spacing(&self, axis: Axis) -> Option<f64> {
        self.axis(axis).map(|g| g.spacing)
    }

    /// Field shape `(width, height)`; a 1D grid has height 1
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        let width = self.axes[0].count;
        let height = self.axes.get(1).map_or(1, |g| g.count);
        (width, height)
    }

    /// Total number of cells
    #[must_use]
    pub fn cell_count(&self) -> usize {
        let (width, height) = self.shape();
        width * height
    }

    /// Node coordinates along `axis`, evenly spaced from 0 to the extent inclusive
    ///
    /// These are the sampling points for initial conditions. Note they are spaced
    /// `extent / (count - 1)` apart, slightly wider than the cell spacing used by
    /// the stepper.
    #[must_use]
    pub fn coordinates(&self, axis: Axis) -> Vec<f64> {
        let Some(geometry) = self.axis(axis) else {
            return vec![0.0];
        };
        let last = (geometry.count - 1) as f64;
        (0..geometry.count)
            .map(|k| geometry.extent * k as f64 / last)
            .collect()
    }
}
