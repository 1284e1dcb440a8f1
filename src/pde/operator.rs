//! Tridiagonal affine operator `y = M * x + shift`.
//!
//! `shift` is zero except on the first and last components, where it carries the
//! inhomogeneous part of folded boundary conditions. All mutating operations act in place and
//! keep the three bands at the same length.

use crate::core::{PdeError, PdeResult};
use crate::math::tridiagonal::{mult_tridiagonal, solve_tridiagonal};
use crate::math::vector::{ax_plus_b, ensure_equal_len, scale};

/// Discrete tridiagonal operator over node values.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagOperator1D {
    lower: Vec<f64>,
    diag: Vec<f64>,
    upper: Vec<f64>,
    inf_shift: f64,
    sup_shift: f64,
}

impl TridiagOperator1D {
    /// Linear operator (zero shifts) from its three bands.
    pub fn new(lower: Vec<f64>, diag: Vec<f64>, upper: Vec<f64>) -> PdeResult<Self> {
        Self::with_shifts(lower, diag, upper, 0.0, 0.0)
    }

    pub fn with_shifts(
        lower: Vec<f64>,
        diag: Vec<f64>,
        upper: Vec<f64>,
        inf_shift: f64,
        sup_shift: f64,
    ) -> PdeResult<Self> {
        ensure_equal_len(diag.len(), &[&lower, &upper])?;
        Ok(Self {
            lower,
            diag,
            upper,
            inf_shift,
            sup_shift,
        })
    }

    /// Identity operator on `size` nodes.
    pub fn identity(size: usize) -> Self {
        Self {
            lower: vec![0.0; size],
            diag: vec![1.0; size],
            upper: vec![0.0; size],
            inf_shift: 0.0,
            sup_shift: 0.0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.diag.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.diag.is_empty()
    }

    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    pub fn diag(&self) -> &[f64] {
        &self.diag
    }

    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    pub fn inf_shift(&self) -> f64 {
        self.inf_shift
    }

    pub fn sup_shift(&self) -> f64 {
        self.sup_shift
    }

    /// `x <- M * x + shift`.
    pub fn apply(&self, x: &mut [f64]) -> PdeResult<()> {
        ensure_equal_len(self.len(), &[&*x])?;
        mult_tridiagonal(x, &self.lower, &self.diag, &self.upper)?;
        self.add_shifts(x, 1.0);
        Ok(())
    }

    /// `y <- M^-1 * (y - shift)`.
    pub fn solve(&self, y: &mut [f64]) -> PdeResult<()> {
        ensure_equal_len(self.len(), &[&*y])?;
        self.add_shifts(y, -1.0);
        solve_tridiagonal(y, &self.lower, &self.diag, &self.upper)
    }

    /// `M <- a * M + I`; the affine shifts are scaled by `a` as well.
    pub fn scale_plus_identity(&mut self, a: f64) {
        scale(&mut self.lower, a);
        scale(&mut self.upper, a);
        ax_plus_b(&mut self.diag, a, 1.0);
        self.inf_shift *= a;
        self.sup_shift *= a;
    }

    /// Transposes the operator in place.
    ///
    /// Only defined for a purely linear operator; a non-zero boundary shift is an error and
    /// leaves the operator untouched.
    pub fn adjoint(&mut self) -> PdeResult<()> {
        if self.inf_shift != 0.0 || self.sup_shift != 0.0 {
            return Err(PdeError::InvalidOperation(
                "transpose is not defined with a non-zero boundary shift".to_string(),
            ));
        }
        let n = self.len();
        if n == 0 {
            return Ok(());
        }
        // Row i of M^T holds (u_{i-1}, d_i, l_{i+1}); the unused corner slots trade places.
        self.upper.rotate_right(1);
        self.lower.rotate_left(1);
        std::mem::swap(&mut self.lower, &mut self.upper);
        Ok(())
    }

    /// Fold the ghost-node relation `V[-1] = a * V[0] + b * V[1] + c` into row 0.
    pub fn set_inf_boundary_condition(&mut self, a: f64, b: f64, c: f64) {
        let Some(&l0) = self.lower.first() else {
            return;
        };
        self.lower[0] = 0.0;
        self.diag[0] += l0 * a;
        if self.len() > 1 {
            self.upper[0] += l0 * b;
        }
        self.inf_shift += l0 * c;
    }

    /// Fold the ghost-node relation `V[N] = a * V[N-1] + b * V[N-2] + c` into row `N - 1`.
    pub fn set_sup_boundary_condition(&mut self, a: f64, b: f64, c: f64) {
        let Some(&un) = self.upper.last() else {
            return;
        };
        let n = self.len() - 1;
        self.upper[n] = 0.0;
        self.diag[n] += un * a;
        if n > 0 {
            self.lower[n] += un * b;
        }
        self.sup_shift += un * c;
    }

    fn add_shifts(&self, x: &mut [f64], sign: f64) {
        let n = x.len();
        if n == 0 {
            return;
        }
        x[0] += sign * self.inf_shift;
        x[n - 1] += sign * self.sup_shift;
    }
}
