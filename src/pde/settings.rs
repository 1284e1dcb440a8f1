use serde::{Deserialize, Serialize};

use crate::core::{PdeError, PdeResult};
use crate::pde::boundary::BoundaryCondition1D;
use crate::pde::discretizer::FiniteDiffDiscretizer1D;
use crate::pde::sampler::PdeCoeffSampler1D;
use crate::pde::theta_scheme::ThetaScheme1D;

/// Serializable description of a theta scheme over a finite-difference discretizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThetaSchemeSettings {
    /// Implicitness weight, `0` explicit, `1` implicit.
    pub theta: f64,
    /// Condition folded into the first row, if any.
    pub inf_boundary: Option<BoundaryCondition1D>,
    /// Condition folded into the last row, if any.
    pub sup_boundary: Option<BoundaryCondition1D>,
}

impl Default for ThetaSchemeSettings {
    fn default() -> Self {
        Self {
            theta: 0.5,
            inf_boundary: None,
            sup_boundary: None,
        }
    }
}

impl ThetaSchemeSettings {
    pub fn new(theta: f64) -> Self {
        Self {
            theta,
            ..Self::default()
        }
    }

    pub fn with_inf_boundary(mut self, condition: BoundaryCondition1D) -> Self {
        self.inf_boundary = Some(condition);
        self
    }

    pub fn with_sup_boundary(mut self, condition: BoundaryCondition1D) -> Self {
        self.sup_boundary = Some(condition);
        self
    }

    pub fn validate(&self) -> PdeResult<()> {
        if !self.theta.is_finite() || !(0.0..=1.0).contains(&self.theta) {
            return Err(PdeError::InvalidArgument(format!(
                "theta must lie in [0, 1], got {}",
                self.theta
            )));
        }
        Ok(())
    }

    /// Wraps `sampler` in a discretizer carrying these boundary conditions and returns the
    /// scheme stepping it.
    pub fn build<S: PdeCoeffSampler1D>(
        &self,
        sampler: S,
    ) -> PdeResult<ThetaScheme1D<FiniteDiffDiscretizer1D<S>>> {
        self.validate()?;
        let mut discretizer = FiniteDiffDiscretizer1D::new(sampler);
        if let Some(bc) = self.inf_boundary {
            discretizer = discretizer.with_inf_boundary(bc);
        }
        if let Some(bc) = self.sup_boundary {
            discretizer = discretizer.with_sup_boundary(bc);
        }
        ThetaScheme1D::new(discretizer, self.theta)
    }
}
