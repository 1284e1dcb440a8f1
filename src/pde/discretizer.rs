//! Finite-difference discretization of sampled PDE coefficients.
//!
//! Each node picks its own stencil: central differences while diffusion dominates the local
//! drift, one-sided upwind differences once `|dx * h| > 2 * d2x`. Off-diagonal entries stay
//! non-negative in every branch, which keeps `I - θ dt L` diagonally dominant.

use crate::core::{PdeError, PdeResult};
use crate::math::vector::ensure_equal_len;
use crate::pde::boundary::BoundaryCondition1D;
use crate::pde::operator::TridiagOperator1D;
use crate::pde::sampler::{PdeCoeffSampler1D, PdeCoefficients};

/// Produces the discrete generator and forcing term for one time interval.
pub trait OperatorDiscretizer {
    /// Number of nodes the produced operators act on.
    fn size(&self) -> usize;

    fn discretize(&self, start: f64, end: f64) -> PdeResult<TridiagOperator1D>;

    /// Forcing term integrated over `[start, end]`, one entry per node.
    fn source_term(&self, start: f64, end: f64) -> PdeResult<Vec<f64>>;
}

impl<D: OperatorDiscretizer + ?Sized> OperatorDiscretizer for &D {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn discretize(&self, start: f64, end: f64) -> PdeResult<TridiagOperator1D> {
        (**self).discretize(start, end)
    }

    fn source_term(&self, start: f64, end: f64) -> PdeResult<Vec<f64>> {
        (**self).source_term(start, end)
    }
}

/// Upwind-aware finite-difference discretizer over a regular grid.
#[derive(Debug, Clone)]
pub struct FiniteDiffDiscretizer1D<S> {
    sampler: S,
    inf_boundary: Option<BoundaryCondition1D>,
    sup_boundary: Option<BoundaryCondition1D>,
}

impl<S: PdeCoeffSampler1D> FiniteDiffDiscretizer1D<S> {
    /// Discretizer that leaves the boundary rows exactly as the stencil produced them.
    pub fn new(sampler: S) -> Self {
        Self {
            sampler,
            inf_boundary: None,
            sup_boundary: None,
        }
    }

    /// Folds `condition` into row 0 of every produced operator.
    pub fn with_inf_boundary(mut self, condition: BoundaryCondition1D) -> Self {
        self.inf_boundary = Some(condition);
        self
    }

    /// Folds `condition` into the last row of every produced operator.
    pub fn with_sup_boundary(mut self, condition: BoundaryCondition1D) -> Self {
        self.sup_boundary = Some(condition);
        self
    }

    pub fn with_boundary_conditions(
        self,
        inf: BoundaryCondition1D,
        sup: BoundaryCondition1D,
    ) -> Self {
        self.with_inf_boundary(inf).with_sup_boundary(sup)
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    pub fn inf_boundary(&self) -> Option<BoundaryCondition1D> {
        self.inf_boundary
    }

    pub fn sup_boundary(&self) -> Option<BoundaryCondition1D> {
        self.sup_boundary
    }
}

impl<S: PdeCoeffSampler1D> OperatorDiscretizer for FiniteDiffDiscretizer1D<S> {
    fn size(&self) -> usize {
        self.sampler.grid().size()
    }

    fn discretize(&self, start: f64, end: f64) -> PdeResult<TridiagOperator1D> {
        let grid = self.sampler.grid();
        let n = grid.size();
        let coeffs = self.sampler.sample(start, end)?;
        ensure_equal_len(n, &[&coeffs.d2x, &coeffs.dx, &coeffs.zero])?;
        if grid.step() <= 0.0 {
            return Err(PdeError::InvalidArgument(format!(
                "cannot discretize a degenerate grid on [{}, {}]",
                grid.boundary_inf(),
                grid.boundary_sup()
            )));
        }

        let (lower, diag, upper) = finite_difference(&coeffs, grid.step());
        let mut op = TridiagOperator1D::new(lower, diag, upper)?;

        if let Some(bc) = self.inf_boundary {
            bc.set_inf(&mut op, grid.step());
        }
        if let Some(bc) = self.sup_boundary {
            bc.set_sup(&mut op, grid.step());
        }
        if self.inf_boundary.is_some() || self.sup_boundary.is_some() {
            log::debug!(
                "folded boundary conditions inf={:?} sup={:?} on {n} nodes",
                self.inf_boundary,
                self.sup_boundary
            );
        }
        ensure_finite(&op)?;
        Ok(op)
    }

    fn source_term(&self, _start: f64, _end: f64) -> PdeResult<Vec<f64>> {
        Err(PdeError::NotSupported(
            "finite-difference source term is not implemented".to_string(),
        ))
    }
}

fn ensure_finite(op: &TridiagOperator1D) -> PdeResult<()> {
    let bands = [("lower", op.lower()), ("diag", op.diag()), ("upper", op.upper())];
    for (name, band) in bands {
        if let Some(i) = band.iter().position(|v| !v.is_finite()) {
            return Err(PdeError::InvalidArgument(format!(
                "non-finite {name} coefficient {} at node {i}",
                band[i]
            )));
        }
    }
    if !op.inf_shift().is_finite() || !op.sup_shift().is_finite() {
        return Err(PdeError::InvalidArgument(
            "non-finite boundary shift".to_string(),
        ));
    }
    Ok(())
}

fn finite_difference(coeffs: &PdeCoefficients, step: f64) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let n = coeffs.d2x.len();
    let mut lower = vec![0.0_f64; n];
    let mut diag = vec![0.0_f64; n];
    let mut upper = vec![0.0_f64; n];
    let step2 = step * step;

    for i in 0..n {
        let drift = coeffs.dx[i] * step;
        let diffusion = 2.0 * coeffs.d2x[i];

        if drift < -diffusion {
            diag[i] = (drift - diffusion) / step2 + coeffs.zero[i];
            upper[i] = 0.5 * diffusion / step2;
            lower[i] = (-drift + 0.5 * diffusion) / step2;
        } else if drift > diffusion {
            diag[i] = (-drift - diffusion) / step2 + coeffs.zero[i];
            upper[i] = (drift + 0.5 * diffusion) / step2;
            lower[i] = 0.5 * diffusion / step2;
        } else {
            diag[i] = -diffusion / step2 + coeffs.zero[i];
            upper[i] = 0.5 * (drift + diffusion) / step2;
            lower[i] = 0.5 * (-drift + diffusion) / step2;
        }
    }

    (lower, diag, upper)
}
