//! Scalar field storage
//!
//! A field is a flat `Vec<f64>` in row-major order. Row `j` runs along the
//! y-axis and column `i` along the x-axis, so cell `[j, i]` lives at
//! `j * width + i`. A 1D field is a single row.

use super::geometry::{Axis, Grid};
use crate::error::{AdvectionError, Result};

/// Dense scalar field over a uniform grid
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    /// Field values in row-major order (j * width + i)
    pub data: Vec<f64>,
    /// Cells along x
    pub width: usize,
    /// Cells along y (1 for a 1D field)
    pub height: usize,
}

impl ScalarField {
    /// Create a new field with given dimensions, initialized to zero
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_value(width, height, 0.0)
    }

    /// Create a new field with given dimensions, initialized to a value
    ///
    /// # Arguments
    ///
    /// * `width` - Cells along x
    /// * `height` - Cells along y
    /// * `value` - Initial value for all cells
    #[must_use]
    pub fn with_value(width: usize, height: usize, value: f64) -> Self {
        Self {
            data: vec![value; width * height],
            width,
            height,
        }
    }

    /// Wrap existing values as a 1D field
    #[must_use]
    pub fn from_row(data: Vec<f64>) -> Self {
        let width = data.len();
        Self {
            data,
            width,
            height: 1,
        }
    }

    /// Wrap existing row-major values
    ///
    /// # Errors
    ///
    /// `LengthMismatch` if `data.len() != width * height`.
    pub fn from_vec(width: usize, height: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != width * height {
            return Err(AdvectionError::LengthMismatch {
                shape: (width, height),
                expected: width * height,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Sample `f(x, y)` at every grid node
    ///
    /// For a 1D grid `y` is always 0.
    pub fn from_grid_fn<F>(grid: &Grid, f: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        let xs = grid.coordinates(Axis::X);
        let ys = grid.coordinates(Axis::Y);
        let data = ys
            .iter()
            .flat_map(|&y| xs.iter().map(move |&x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        let (width, height) = grid.shape();
        Self {
            data,
            width,
            height,
        }
    }

    /// Field shape `(width, height)`
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of cells
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the field has no cells
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get reference to field data
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Get mutable reference to field data
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Get value at column `i`, row `j`
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.width && j < self.height, "Coordinates out of bounds");
        self.data[j * self.width + i]
    }

    /// Set value at column `i`, row `j`
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        assert!(i < self.width && j < self.height, "Coordinates out of bounds");
        self.data[j * self.width + i] = value;
    }

    /// Fill entire field with a value
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Sum over all cells
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Smallest cell value, `None` for an empty field
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        self.data.iter().copied().reduce(f64::min)
    }

    /// Largest cell value, `None` for an empty field
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.data.iter().copied().reduce(f64::max)
    }

    /// `(i, j)` of the largest value; the first one wins on ties
    #[must_use]
    pub fn argmax(&self) -> Option<(usize, usize)> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, &value) in self.data.iter().enumerate() {
            if best.is_none_or(|(_, b)| value > b) {
                best = Some((idx, value));
            }
        }
        best.map(|(idx, _)| (idx % self.width, idx / self.width))
    }

    pub(crate) fn ensure_shape(&self, expected: (usize, usize)) -> Result<()> {
        if self.shape() == expected {
            Ok(())
        } else {
            Err(AdvectionError::ShapeMismatch {
                expected,
                got: self.shape(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_creation() {
        let field = ScalarField::new(10, 20);
        assert_eq!(field.width, 10);
        assert_eq!(field.height, 20);
        assert_eq!(field.len(), 200);
        assert!(field.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_field_get_set() {
        let mut field = ScalarField::new(10, 10);
        field.set(3, 4, 123.45);
        assert_eq!(field.get(3, 4), 123.45);

        // Verify row-major indexing
        let index = 4 * 10 + 3;
        assert_eq!(field.data[index], 123.45);
    }

    #[test]
    #[should_panic(expected = "Coordinates out of bounds")]
    fn test_field_bounds_check() {
        let field = ScalarField::new(10, 10);
        let _ = field.get(10, 5);
    }

    #[test]
    fn test_from_vec_checks_length() {
        assert!(ScalarField::from_vec(3, 2, vec![0.0; 6]).is_ok());
        let err = ScalarField::from_vec(3, 2, vec![0.0; 5]).unwrap_err();
        assert_eq!(
            err,
            AdvectionError::LengthMismatch {
                shape: (3, 2),
                expected: 6,
                got: 5
            }
        );
    }

    #[test]
    fn test_from_grid_fn_rows_follow_y() {
        let grid = Grid::plane(2.0, 3, 1.0, 2).unwrap();
        let field = ScalarField::from_grid_fn(&grid, |x, y| x + 10.0 * y);
        assert_eq!(field.shape(), (3, 2));
        assert_eq!(field.get(2, 0), 2.0);
        assert_eq!(field.get(0, 1), 10.0);
        assert_eq!(field.get(1, 1), 11.0);
    }

    #[test]
    fn test_reductions() {
        let mut field = ScalarField::new(4, 3);
        assert_eq!(field.argmax(), Some((0, 0)));
        field.set(2, 1, 5.0);
        field.set(0, 2, -1.0);
        assert_eq!(field.sum(), 4.0);
        assert_eq!(field.max(), Some(5.0));
        assert_eq!(field.min(), Some(-1.0));
        assert_eq!(field.argmax(), Some((2, 1)));

        let empty = ScalarField::from_row(Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.max(), None);
        assert_eq!(empty.argmax(), None);
    }
}
