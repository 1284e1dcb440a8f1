//! `pde1d` is the numerical core for pricing with one-dimensional linear parabolic PDEs,
//! `dV/dt + L(V) = 0` with `L(V) = a(x) V'' + b(x) V' + c(x) V`, on a regular grid.
//!
//! The crate is built from three coupled pieces:
//! - an upwind-aware finite-difference discretizer turning sampled coefficients into a
//!   tridiagonal operator ([`pde::FiniteDiffDiscretizer1D`]),
//! - tridiagonal operator algebra: in-place multiply, Thomas solve, `a M + I`, transpose and
//!   ghost-node boundary folding ([`pde::TridiagOperator1D`]),
//! - a theta scheme stepping a caller-owned slice backward (pricing) or forward (density)
//!   ([`pde::ThetaScheme1D`]).
//!
//! Models plug in through [`pde::PdeCoeffSampler1D`]; the driver looping over a time grid,
//! payoffs and calibration live outside this crate.
//!
//! Numerical considerations:
//! - The stencil switches to one-sided differences where drift dominates diffusion, which
//!   keeps the implicit matrix diagonally dominant so the unpivoted Thomas solve is stable.
//! - Crank-Nicolson (`θ = 0.5`) is second order in time; `θ = 1` is the robust choice on
//!   rough initial data.
//!
//! # Feature Flags
//! - `parallel`: steps batches of independent slices on the Rayon pool.
//!
//! # Quick Start
//! Diffuse a profile one implicit step backward in time:
//! ```rust
//! use pde1d::pde::{
//!     BoundaryCondition1D, ConstantCoeffSampler1D, FiniteDiffDiscretizer1D, RegularGrid1D,
//!     ThetaScheme1D,
//! };
//!
//! let grid = RegularGrid1D::new(101, -1.0, 1.0).unwrap();
//! let sampler = ConstantCoeffSampler1D::new(grid, 0.5, 0.0, 0.0);
//! let discretizer = FiniteDiffDiscretizer1D::new(sampler)
//!     .with_boundary_conditions(BoundaryCondition1D::NoConvexity, BoundaryCondition1D::NoConvexity);
//! let scheme = ThetaScheme1D::implicit(&discretizer);
//!
//! let mut slice: Vec<f64> = grid.coordinates().iter().map(|x| x.abs()).collect();
//! let (implicit_part, _) = scheme.build_parts(0.0, 0.01).unwrap();
//! implicit_part.solve(&mut slice).unwrap();
//! assert!(slice[50] > 0.0);
//! ```
//!
//! Price a European call in log-spot with a forcing-free discretizer:
//! ```rust
//! use pde1d::core::PdeResult;
//! use pde1d::pde::{
//!     BoundaryCondition1D, ConstantCoeffSampler1D, FiniteDiffDiscretizer1D, OperatorDiscretizer,
//!     PdeStepSolver, RegularGrid1D, ThetaScheme1D, TridiagOperator1D,
//! };
//!
//! struct Homogeneous<D>(D);
//!
//! impl<D: OperatorDiscretizer> OperatorDiscretizer for Homogeneous<D> {
//!     fn size(&self) -> usize {
//!         self.0.size()
//!     }
//!     fn discretize(&self, start: f64, end: f64) -> PdeResult<TridiagOperator1D> {
//!         self.0.discretize(start, end)
//!     }
//!     fn source_term(&self, _start: f64, _end: f64) -> PdeResult<Vec<f64>> {
//!         Ok(vec![0.0; self.size()])
//!     }
//! }
//!
//! let grid = RegularGrid1D::new(401, (100.0_f64).ln() - 2.0, (100.0_f64).ln() + 2.0).unwrap();
//! let sampler = ConstantCoeffSampler1D::black_scholes_log_spot(grid, 0.05, 0.0, 0.2).unwrap();
//! let discretizer = Homogeneous(
//!     FiniteDiffDiscretizer1D::new(sampler)
//!         .with_boundary_conditions(BoundaryCondition1D::NoConvexity, BoundaryCondition1D::Exponential),
//! );
//! let scheme = ThetaScheme1D::crank_nicolson(&discretizer);
//!
//! let mut values: Vec<f64> = grid.coordinates().iter().map(|x| (x.exp() - 100.0).max(0.0)).collect();
//! let steps = 100;
//! for k in (0..steps).rev() {
//!     let (start, end) = (k as f64 / steps as f64, (k + 1) as f64 / steps as f64);
//!     scheme.backward(&mut values, start, end).unwrap();
//! }
//! let atm = values[200];
//! assert!((atm - 10.4506).abs() < 0.05);
//! ```

pub mod core;
pub mod math;
pub mod pde;
