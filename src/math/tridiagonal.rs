//! In-place tridiagonal kernels.
//!
//! Bands follow the row convention
//!
//! ```text
//! M = ( d_0 u_0  0    0  )
//!     ( l_1 d_1 u_1   0  )
//!     (  0  l_2 d_2  u_2 )
//!     (  0   0  l_3  d_3 )
//! ```
//!
//! so `lower[0]` and `upper[n - 1]` are never read by either kernel. Callers may leave them
//! at any value, including `NaN`.
//!
//! Numerical considerations: the Thomas sweep does not pivot. It is stable for diagonally
//! dominant bands; otherwise the result is unspecified.

use crate::core::PdeResult;
use crate::math::vector::ensure_equal_len;

/// Computes `x <- M * x` in place.
///
/// The sweep runs left to right carrying the pre-update value of the previous component in a
/// single scalar, so no second buffer is needed.
pub fn mult_tridiagonal(
    x: &mut [f64],
    lower: &[f64],
    diag: &[f64],
    upper: &[f64],
) -> PdeResult<()> {
    let n = x.len();
    ensure_equal_len(n, &[lower, diag, upper])?;
    match n {
        0 => return Ok(()),
        1 => {
            x[0] *= diag[0];
            return Ok(());
        }
        _ => {}
    }

    let mut x_prev = x[0];
    x[0] = diag[0] * x[0] + upper[0] * x[1];
    for i in 1..n - 1 {
        let current = x[i];
        x[i] = lower[i] * x_prev + diag[i] * x[i] + upper[i] * x[i + 1];
        x_prev = current;
    }
    x[n - 1] = lower[n - 1] * x_prev + diag[n - 1] * x[n - 1];
    Ok(())
}

/// Computes `x <- M^-1 * x` in place with the Thomas algorithm.
pub fn solve_tridiagonal(
    x: &mut [f64],
    lower: &[f64],
    diag: &[f64],
    upper: &[f64],
) -> PdeResult<()> {
    let mut c_prime = vec![0.0_f64; x.len()];
    solve_tridiagonal_with_scratch(x, lower, diag, upper, &mut c_prime)
}

/// Same as [`solve_tridiagonal`] but reuses `c_prime` for the modified upper band.
pub fn solve_tridiagonal_with_scratch(
    x: &mut [f64],
    lower: &[f64],
    diag: &[f64],
    upper: &[f64],
    c_prime: &mut [f64],
) -> PdeResult<()> {
    let n = x.len();
    ensure_equal_len(n, &[lower, diag, upper, &*c_prime])?;
    match n {
        0 => return Ok(()),
        1 => {
            x[0] /= diag[0];
            return Ok(());
        }
        _ => {}
    }

    c_prime[0] = upper[0] / diag[0];
    x[0] /= diag[0];
    for i in 1..n {
        let m = 1.0 / (diag[i] - lower[i] * c_prime[i - 1]);
        c_prime[i] = upper[i] * m;
        x[i] = (x[i] - lower[i] * x[i - 1]) * m;
    }

    for i in (0..n - 1).rev() {
        x[i] -= c_prime[i] * x[i + 1];
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PdeError;
    use approx::assert_relative_eq;

    #[test]
    fn empty_inputs_are_a_no_op() {
        let mut x: Vec<f64> = Vec::new();
        mult_tridiagonal(&mut x, &[], &[], &[]).unwrap();
        solve_tridiagonal(&mut x, &[], &[], &[]).unwrap();
        assert!(x.is_empty());
    }

    #[test]
    fn single_node_scales_by_diagonal() {
        let mut x = vec![3.14159265359];
        mult_tridiagonal(&mut x, &[f64::NAN], &[18.5284515], &[f64::NAN]).unwrap();
        assert_eq!(x[0], 3.14159265359 * 18.5284515);

        let mut y = vec![3.14159265359];
        solve_tridiagonal(&mut y, &[f64::NAN], &[18.5284515], &[f64::NAN]).unwrap();
        assert_eq!(y[0], 3.14159265359 / 18.5284515);
    }

    #[test]
    fn band_length_mismatch_is_rejected() {
        let mut x = vec![1.0, 2.0, 3.0];
        let err = mult_tridiagonal(&mut x, &[0.0; 3], &[1.0; 2], &[0.0; 3]).unwrap_err();
        assert_eq!(
            err,
            PdeError::SizeMismatch {
                expected: 3,
                actual: 2
            }
        );
        assert!(solve_tridiagonal(&mut x, &[0.0; 3], &[1.0; 3], &[0.0; 4]).is_err());
        assert_eq!(x, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn solve_matches_known_system() {
        // [2 1 0; 1 2 1; 0 1 2] * [1, 2, 3] = [4, 8, 8]
        let lower = [0.0, 1.0, 1.0];
        let diag = [2.0, 2.0, 2.0];
        let upper = [1.0, 1.0, 0.0];
        let mut rhs = vec![4.0, 8.0, 8.0];
        solve_tridiagonal(&mut rhs, &lower, &diag, &upper).unwrap();
        assert_relative_eq!(rhs[0], 1.0, epsilon = 1e-14);
        assert_relative_eq!(rhs[1], 2.0, epsilon = 1e-14);
        assert_relative_eq!(rhs[2], 3.0, epsilon = 1e-14);
    }

    #[test]
    fn scratch_buffer_must_match() {
        let mut x = vec![1.0, 1.0];
        let mut scratch = vec![0.0; 1];
        assert!(
            solve_tridiagonal_with_scratch(&mut x, &[0.0; 2], &[1.0; 2], &[0.0; 2], &mut scratch)
                .is_err()
        );
    }
}
