//! Stepping many independent slices over the same interval.
//!
//! A scheme is read-only while stepping, so one instance can be shared across slices. With
//! the `parallel` feature the slices are distributed over the Rayon pool; otherwise they are
//! stepped in order. The first error aborts the batch and the remaining slices are left in an
//! unspecified state.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::PdeResult;
use crate::pde::theta_scheme::PdeStepSolver;

/// Runs [`PdeStepSolver::backward`] on every slice.
pub fn backward_batch<P>(scheme: &P, slices: &mut [Vec<f64>], start: f64, end: f64) -> PdeResult<()>
where
    P: PdeStepSolver + Sync,
{
    log::debug!("backward batch of {} slices over [{start}, {end}]", slices.len());
    #[cfg(feature = "parallel")]
    let result = slices
        .par_iter_mut()
        .try_for_each(|slice| scheme.backward(slice, start, end));
    #[cfg(not(feature = "parallel"))]
    let result = slices
        .iter_mut()
        .try_for_each(|slice| scheme.backward(slice, start, end));
    result
}

/// Runs [`PdeStepSolver::forward`] on every slice.
pub fn forward_batch<P>(scheme: &P, slices: &mut [Vec<f64>], start: f64, end: f64) -> PdeResult<()>
where
    P: PdeStepSolver + Sync,
{
    log::debug!("forward batch of {} slices over [{start}, {end}]", slices.len());
    #[cfg(feature = "parallel")]
    let result = slices
        .par_iter_mut()
        .try_for_each(|slice| scheme.forward(slice, start, end));
    #[cfg(not(feature = "parallel"))]
    let result = slices
        .iter_mut()
        .try_for_each(|slice| scheme.forward(slice, start, end));
    result
}
