use serde::{Deserialize, Serialize};

use crate::core::{PdeError, PdeResult};

/// Uniform spatial grid on `[boundary_inf, boundary_sup]` with `size` nodes.
///
/// Immutable after construction. Deserialization goes through the same validation as
/// [`RegularGrid1D::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RegularGrid1DPayload", into = "RegularGrid1DPayload")]
pub struct RegularGrid1D {
    size: usize,
    boundary_inf: f64,
    boundary_sup: f64,
    step: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RegularGrid1DPayload {
    size: usize,
    boundary_inf: f64,
    boundary_sup: f64,
}

impl RegularGrid1D {
    /// Builds a grid with `step = (sup - inf) / (size - 1)`.
    pub fn new(size: usize, boundary_inf: f64, boundary_sup: f64) -> PdeResult<Self> {
        if size <= 1 {
            return Err(PdeError::InvalidArgument(format!(
                "grid size must be > 1, got {size}"
            )));
        }
        if !boundary_inf.is_finite() || !boundary_sup.is_finite() {
            return Err(PdeError::InvalidArgument(
                "grid bounds must be finite".to_string(),
            ));
        }
        if boundary_sup < boundary_inf {
            return Err(PdeError::InvalidArgument(format!(
                "grid upper bound {boundary_sup} is below lower bound {boundary_inf}"
            )));
        }

        Ok(Self {
            size,
            boundary_inf,
            boundary_sup,
            step: (boundary_sup - boundary_inf) / (size as f64 - 1.0),
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn boundary_inf(&self) -> f64 {
        self.boundary_inf
    }

    #[inline]
    pub fn boundary_sup(&self) -> f64 {
        self.boundary_sup
    }

    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Coordinate of node `i`; the last node maps exactly to `boundary_sup`.
    #[inline]
    pub fn coordinate(&self, i: usize) -> f64 {
        if i + 1 == self.size {
            self.boundary_sup
        } else {
            self.boundary_inf + i as f64 * self.step
        }
    }

    pub fn coordinates(&self) -> Vec<f64> {
        (0..self.size).map(|i| self.coordinate(i)).collect()
    }
}

impl TryFrom<RegularGrid1DPayload> for RegularGrid1D {
    type Error = PdeError;

    fn try_from(payload: RegularGrid1DPayload) -> Result<Self, Self::Error> {
        Self::new(payload.size, payload.boundary_inf, payload.boundary_sup)
    }
}

impl From<RegularGrid1D> for RegularGrid1DPayload {
    fn from(grid: RegularGrid1D) -> Self {
        Self {
            size: grid.size,
            boundary_inf: grid.boundary_inf,
            boundary_sup: grid.boundary_sup,
        }
    }
}
