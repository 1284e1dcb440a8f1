//! Dense-vector helpers shared by the operator and stepping code.
//!
//! All binary helpers check lengths up front and never truncate to the shorter input.

use crate::core::{PdeError, PdeResult};

/// Fails with [`PdeError::SizeMismatch`] unless every slice has length `len`.
pub fn ensure_equal_len(len: usize, slices: &[&[f64]]) -> PdeResult<()> {
    match slices.iter().find(|s| s.len() != len) {
        Some(s) => Err(PdeError::size_mismatch(len, s.len())),
        None => Ok(()),
    }
}

/// `x[i] += y[i]`.
pub fn add_assign(x: &mut [f64], y: &[f64]) -> PdeResult<()> {
    ensure_equal_len(x.len(), &[y])?;
    for (xi, &yi) in x.iter_mut().zip(y) {
        *xi += yi;
    }
    Ok(())
}

/// `x[i] -= y[i]`.
pub fn sub_assign(x: &mut [f64], y: &[f64]) -> PdeResult<()> {
    ensure_equal_len(x.len(), &[y])?;
    for (xi, &yi) in x.iter_mut().zip(y) {
        *xi -= yi;
    }
    Ok(())
}

/// `x[i] *= a`.
#[inline]
pub fn scale(x: &mut [f64], a: f64) {
    for xi in x.iter_mut() {
        *xi *= a;
    }
}

/// `x[i] = a * x[i] + b`.
#[inline]
pub fn ax_plus_b(x: &mut [f64], a: f64, b: f64) {
    for xi in x.iter_mut() {
        *xi = a * *xi + b;
    }
}

#[inline]
pub fn fill(x: &mut [f64], value: f64) {
    x.fill(value);
}

/// Copies `src` into `dst`; lengths must agree.
pub fn copy_into(dst: &mut [f64], src: &[f64]) -> PdeResult<()> {
    ensure_equal_len(dst.len(), &[src])?;
    dst.copy_from_slice(src);
    Ok(())
}

pub fn constant(value: f64, len: usize) -> Vec<f64> {
    vec![value; len]
}

/// Element-wise exponential map.
#[inline]
pub fn apply_exp(x: &mut [f64]) {
    for xi in x.iter_mut() {
        *xi = xi.exp();
    }
}
