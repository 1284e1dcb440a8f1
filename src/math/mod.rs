//! Numerical kernels shared by the PDE machinery.

pub mod tridiagonal;
pub mod vector;

pub use tridiagonal::{mult_tridiagonal, solve_tridiagonal, solve_tridiagonal_with_scratch};
