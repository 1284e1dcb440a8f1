//! Theta-scheme time stepping for `dV/dt + L(V) = 0`.
//!
//! Over one interval `[start, end]` with `dt = end - start` the scheme reads
//!
//! ```text
//! (V(end) - V(start)) / dt + θ L V(start) + (1 - θ) L V(end) + f = 0
//! ```
//!
//! `θ = 0` is explicit Euler, `θ = 1` implicit Euler and `θ = 0.5` Crank-Nicolson.
//!
//! Numerical considerations: Crank-Nicolson is second order in time but can ring on
//! non-smooth payoffs; a few fully implicit steps first damp that. The explicit scheme is
//! only stable under a CFL-type bound on `dt / h²`.

use crate::core::{PdeError, PdeResult};
use crate::math::vector::{add_assign, ensure_equal_len};
use crate::pde::discretizer::OperatorDiscretizer;
use crate::pde::operator::TridiagOperator1D;

/// One-interval PDE stepper over a caller-owned solution slice.
pub trait PdeStepSolver {
    /// Pricing direction: `slice` holds `V(end)` on entry and `V(start)` on return.
    fn backward(&self, slice: &mut [f64], start: f64, end: f64) -> PdeResult<()>;

    /// Density direction: `slice` holds `p(start)` on entry and `p(end)` on return.
    fn forward(&self, slice: &mut [f64], start: f64, end: f64) -> PdeResult<()>;
}

/// Theta-weighted combination of an implicit and an explicit operator part.
///
/// Holds no state across calls; every step rediscretizes the generator for its interval.
#[derive(Debug, Clone)]
pub struct ThetaScheme1D<D> {
    discretizer: D,
    theta: f64,
}

impl<D: OperatorDiscretizer> ThetaScheme1D<D> {
    /// Creates a scheme with `0 <= theta <= 1`.
    pub fn new(discretizer: D, theta: f64) -> PdeResult<Self> {
        if !theta.is_finite() || !(0.0..=1.0).contains(&theta) {
            return Err(PdeError::InvalidArgument(format!(
                "theta must lie in [0, 1], got {theta}"
            )));
        }
        Ok(Self::with_theta(discretizer, theta))
    }

    pub fn explicit(discretizer: D) -> Self {
        Self::with_theta(discretizer, 0.0)
    }

    pub fn implicit(discretizer: D) -> Self {
        Self::with_theta(discretizer, 1.0)
    }

    pub fn crank_nicolson(discretizer: D) -> Self {
        Self::with_theta(discretizer, 0.5)
    }

    fn with_theta(discretizer: D, theta: f64) -> Self {
        log::debug!(
            "theta scheme on {} nodes with theta={theta}",
            discretizer.size()
        );
        Self { discretizer, theta }
    }

    #[inline]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn discretizer(&self) -> &D {
        &self.discretizer
    }

    /// Returns `(I - θ dt L, I + (1 - θ) dt L)` for the interval.
    pub fn build_parts(
        &self,
        start: f64,
        end: f64,
    ) -> PdeResult<(TridiagOperator1D, TridiagOperator1D)> {
        let dt = checked_dt(start, end)?;
        let mut implicit_part = self.discretizer.discretize(start, end)?;
        let mut explicit_part = implicit_part.clone();
        implicit_part.scale_plus_identity(-self.theta * dt);
        explicit_part.scale_plus_identity((1.0 - self.theta) * dt);
        Ok((implicit_part, explicit_part))
    }
}

impl<D: OperatorDiscretizer> PdeStepSolver for ThetaScheme1D<D> {
    fn backward(&self, slice: &mut [f64], start: f64, end: f64) -> PdeResult<()> {
        ensure_equal_len(self.discretizer.size(), &[&*slice])?;
        log::trace!(
            "backward step [{start}, {end}] theta={} nodes={}",
            self.theta,
            slice.len()
        );
        let source = self.discretizer.source_term(start, end)?;
        ensure_equal_len(slice.len(), &[&source])?;
        let (implicit_part, explicit_part) = self.build_parts(start, end)?;

        explicit_part.apply(slice)?;
        add_assign(slice, &source)?;
        implicit_part.solve(slice)
    }

    fn forward(&self, slice: &mut [f64], start: f64, end: f64) -> PdeResult<()> {
        ensure_equal_len(self.discretizer.size(), &[&*slice])?;
        log::trace!(
            "forward step [{start}, {end}] theta={} nodes={}",
            self.theta,
            slice.len()
        );
        let (mut implicit_part, mut explicit_part) = self.build_parts(start, end)?;
        explicit_part.adjoint()?;
        implicit_part.adjoint()?;

        implicit_part.solve(slice)?;
        explicit_part.apply(slice)
    }
}

fn checked_dt(start: f64, end: f64) -> PdeResult<f64> {
    if !start.is_finite() || !end.is_finite() || end <= start {
        return Err(PdeError::InvalidArgument(format!(
            "time interval must satisfy start < end, got [{start}, {end}]"
        )));
    }
    Ok(end - start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pde::boundary::BoundaryCondition1D;
    use crate::pde::discretizer::FiniteDiffDiscretizer1D;
    use crate::pde::grid::RegularGrid1D;
    use crate::pde::sampler::ConstantCoeffSampler1D;
    use approx::assert_relative_eq;

    /// Finite-difference generator paired with a constant forcing rate.
    struct WithSource<D> {
        inner: D,
        rate: f64,
    }

    impl<D: OperatorDiscretizer> OperatorDiscretizer for WithSource<D> {
        fn size(&self) -> usize {
            self.inner.size()
        }

        fn discretize(&self, start: f64, end: f64) -> PdeResult<TridiagOperator1D> {
            self.inner.discretize(start, end)
        }

        fn source_term(&self, start: f64, end: f64) -> PdeResult<Vec<f64>> {
            Ok(vec![self.rate * (end - start); self.size()])
        }
    }

    fn heat_discretizer() -> FiniteDiffDiscretizer1D<ConstantCoeffSampler1D> {
        let grid = RegularGrid1D::new(11, 0.0, 1.0).unwrap();
        FiniteDiffDiscretizer1D::new(ConstantCoeffSampler1D::new(grid, 0.5, 0.0, 0.0))
    }

    fn profile(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| {
                let x = i as f64 / (n - 1) as f64;
                (std::f64::consts::PI * x).sin()
            })
            .collect()
    }

    #[test]
    fn theta_outside_unit_interval_is_rejected() {
        assert!(ThetaScheme1D::new(heat_discretizer(), -0.1).is_err());
        assert!(ThetaScheme1D::new(heat_discretizer(), 1.5).is_err());
        assert!(ThetaScheme1D::new(heat_discretizer(), f64::NAN).is_err());
        assert_eq!(ThetaScheme1D::new(heat_discretizer(), 0.3).unwrap().theta(), 0.3);
    }

    #[test]
    fn named_constructors_match_validated_new() {
        let cases = [
            (ThetaScheme1D::explicit(heat_discretizer()), 0.0),
            (ThetaScheme1D::implicit(heat_discretizer()), 1.0),
            (ThetaScheme1D::crank_nicolson(heat_discretizer()), 0.5),
        ];
        for (scheme, theta) in cases {
            let checked = ThetaScheme1D::new(heat_discretizer(), theta).unwrap();
            assert_eq!(scheme.theta(), checked.theta());
            assert_eq!(
                scheme.build_parts(0.0, 0.01).unwrap(),
                checked.build_parts(0.0, 0.01).unwrap()
            );
        }
    }

    #[test]
    fn explicit_scheme_has_identity_implicit_part() {
        let scheme = ThetaScheme1D::explicit(heat_discretizer());
        let (implicit_part, _) = scheme.build_parts(0.0, 0.01).unwrap();
        assert_eq!(implicit_part, TridiagOperator1D::identity(11));
    }

    #[test]
    fn explicit_backward_is_multiply_and_add_source() {
        let d = WithSource {
            inner: heat_discretizer(),
            rate: 2.0,
        };
        let dt = 0.001;
        let scheme = ThetaScheme1D::explicit(&d);
        let mut v = profile(11);

        let mut expected = v.clone();
        let mut generator = d.discretize(0.0, dt).unwrap();
        generator.scale_plus_identity(dt);
        generator.apply(&mut expected).unwrap();
        for e in expected.iter_mut() {
            *e += 2.0 * dt;
        }

        scheme.backward(&mut v, 0.0, dt).unwrap();
        for (a, b) in v.iter().zip(&expected) {
            assert_relative_eq!(*a, *b, epsilon = 1e-14);
        }
    }

    #[test]
    fn implicit_backward_matches_direct_solve() {
        let d = WithSource {
            inner: heat_discretizer(),
            rate: 0.0,
        };
        let dt = 0.05;
        let scheme = ThetaScheme1D::implicit(&d);
        let mut v = profile(11);

        let mut expected = v.clone();
        let mut lhs = d.discretize(0.0, dt).unwrap();
        lhs.scale_plus_identity(-dt);
        lhs.solve(&mut expected).unwrap();

        scheme.backward(&mut v, 0.0, dt).unwrap();
        for (a, b) in v.iter().zip(&expected) {
            assert_relative_eq!(*a, *b, epsilon = 1e-14);
        }
    }

    #[test]
    fn backward_without_source_support_fails_before_mutation() {
        let scheme = ThetaScheme1D::crank_nicolson(heat_discretizer());
        let mut v = profile(11);
        let before = v.clone();
        assert!(matches!(
            scheme.backward(&mut v, 0.0, 0.1),
            Err(PdeError::NotSupported(_))
        ));
        assert_eq!(v, before);
    }

    #[test]
    fn forward_is_the_discrete_adjoint_of_backward() {
        let grid = RegularGrid1D::new(21, -1.0, 1.0).unwrap();
        let inner = FiniteDiffDiscretizer1D::new(ConstantCoeffSampler1D::new(grid, 0.3, 0.8, -0.05))
            .with_boundary_conditions(
                BoundaryCondition1D::NoConvexity,
                BoundaryCondition1D::Exponential,
            );
        let d = WithSource { inner, rate: 0.0 };
        let scheme = ThetaScheme1D::new(&d, 0.6).unwrap();

        let v0: Vec<f64> = (0..21).map(|i| (0.3 * i as f64).cos()).collect();
        let p0: Vec<f64> = (0..21).map(|i| 1.0 + 0.1 * i as f64).collect();
        let mut v = v0.clone();
        let mut p = p0.clone();
        scheme.backward(&mut v, 0.0, 0.02).unwrap();
        scheme.forward(&mut p, 0.0, 0.02).unwrap();

        let lhs: f64 = p.iter().zip(&v0).map(|(a, b)| a * b).sum();
        let rhs: f64 = p0.iter().zip(&v).map(|(a, b)| a * b).sum();
        assert_relative_eq!(lhs, rhs, max_relative = 1e-12);
    }

    #[test]
    fn slice_length_must_match_grid() {
        let scheme = ThetaScheme1D::implicit(heat_discretizer());
        let mut short = vec![0.0; 10];
        assert_eq!(
            scheme.forward(&mut short, 0.0, 0.1).unwrap_err(),
            PdeError::SizeMismatch {
                expected: 11,
                actual: 10
            }
        );
    }

    #[test]
    fn non_finite_operator_fails_without_touching_slice() {
        let grid = RegularGrid1D::new(11, 0.0, 10.0).unwrap();
        let d = WithSource {
            inner: FiniteDiffDiscretizer1D::new(ConstantCoeffSampler1D::new(grid, 0.5, 0.0, 0.0))
                .with_sup_boundary(BoundaryCondition1D::Exponential),
            rate: 0.0,
        };
        let scheme = ThetaScheme1D::crank_nicolson(&d);
        let original = profile(11);

        let mut v = original.clone();
        assert!(matches!(
            scheme.backward(&mut v, 0.0, 0.1),
            Err(PdeError::InvalidArgument(_))
        ));
        assert_eq!(v, original);
        assert!(matches!(
            scheme.forward(&mut v, 0.0, 0.1),
            Err(PdeError::InvalidArgument(_))
        ));
        assert_eq!(v, original);
    }

    #[test]
    fn reversed_interval_is_rejected() {
        let scheme = ThetaScheme1D::implicit(heat_discretizer());
        let mut v = profile(11);
        assert!(matches!(
            scheme.forward(&mut v, 1.0, 0.5),
            Err(PdeError::InvalidArgument(_))
        ));
    }
}
