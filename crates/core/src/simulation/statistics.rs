//! Per-frame field summaries for reporting

use crate::grid::ScalarField;
use serde::{Deserialize, Serialize};

/// Summary of one field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldStatistics {
    /// Sum over all cells
    pub total: f64,
    /// Sum times cell area
    pub integral: f64,
    /// Smallest cell value
    pub min: f64,
    /// Largest cell value
    pub max: f64,
    /// `(i, j)` of the largest value
    pub peak: (usize, usize),
}

impl FieldStatistics {
    /// Summarize `field` whose cells each cover `cell_area`
    ///
    /// An empty field reports zeros everywhere.
    #[must_use]
    pub fn from_field(field: &ScalarField, cell_area: f64) -> Self {
        let total = field.sum();
        Self {
            total,
            integral: total * cell_area,
            min: field.min().unwrap_or(0.0),
            max: field.max().unwrap_or(0.0),
            peak: field.argmax().unwrap_or((0, 0)),
        }
    }
}
