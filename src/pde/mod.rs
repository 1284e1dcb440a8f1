//! One-dimensional finite-difference PDE machinery.
//!
//! Data flows sampler -> discretizer -> tridiagonal operator -> theta scheme. The scheme
//! rebuilds its operators for every interval and mutates only the caller's slice.

pub mod batch;
pub mod boundary;
pub mod discretizer;
pub mod grid;
pub mod operator;
pub mod sampler;
pub mod settings;
pub mod theta_scheme;

pub use batch::{backward_batch, forward_batch};
pub use boundary::BoundaryCondition1D;
pub use discretizer::{FiniteDiffDiscretizer1D, OperatorDiscretizer};
pub use grid::RegularGrid1D;
pub use operator::TridiagOperator1D;
pub use sampler::{ConstantCoeffSampler1D, PdeCoeffSampler1D, PdeCoefficients};
pub use settings::ThetaSchemeSettings;
pub use theta_scheme::{PdeStepSolver, ThetaScheme1D};
