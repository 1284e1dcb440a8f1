use crate::core::{PdeError, PdeResult};
use crate::pde::grid::RegularGrid1D;

/// Coefficients of `L(V) = d2x * V'' + dx * V' + zero * V` sampled on every grid node.
#[derive(Debug, Clone, PartialEq)]
pub struct PdeCoefficients {
    /// Second-order (diffusion) term.
    pub d2x: Vec<f64>,
    /// First-order (drift) term.
    pub dx: Vec<f64>,
    /// Zero-order (discount / reaction) term.
    pub zero: Vec<f64>,
}

impl PdeCoefficients {
    /// Zero-filled triple for `size` nodes.
    pub fn zeros(size: usize) -> Self {
        Self {
            d2x: vec![0.0; size],
            dx: vec![0.0; size],
            zero: vec![0.0; size],
        }
    }
}

/// Model-side source of PDE coefficients over a fixed grid.
///
/// Implementations are expected to live outside this crate, one per pricing model. The
/// returned triple must have one entry per grid node; the discretizer rejects anything else.
pub trait PdeCoeffSampler1D {
    fn grid(&self) -> &RegularGrid1D;

    /// Samples the generator coefficients representative of the interval `[start, end]`.
    fn sample(&self, start: f64, end: f64) -> PdeResult<PdeCoefficients>;
}

impl<S: PdeCoeffSampler1D + ?Sized> PdeCoeffSampler1D for &S {
    fn grid(&self) -> &RegularGrid1D {
        (**self).grid()
    }

    fn sample(&self, start: f64, end: f64) -> PdeResult<PdeCoefficients> {
        (**self).sample(start, end)
    }
}

/// Time- and space-homogeneous coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantCoeffSampler1D {
    grid: RegularGrid1D,
    pub diffusion: f64,
    pub drift: f64,
    pub zero_order: f64,
}

impl ConstantCoeffSampler1D {
    pub fn new(grid: RegularGrid1D, diffusion: f64, drift: f64, zero_order: f64) -> Self {
        Self {
            grid,
            diffusion,
            drift,
            zero_order,
        }
    }

    /// Black-Scholes generator in `x = ln(S)`:
    /// `0.5 σ² V'' + (r - q - 0.5 σ²) V' - r V`.
    pub fn black_scholes_log_spot(
        grid: RegularGrid1D,
        rate: f64,
        dividend_yield: f64,
        vol: f64,
    ) -> PdeResult<Self> {
        if !vol.is_finite() || vol < 0.0 {
            return Err(PdeError::InvalidArgument(
                "vol must be finite and >= 0".to_string(),
            ));
        }
        if !rate.is_finite() || !dividend_yield.is_finite() {
            return Err(PdeError::InvalidArgument(
                "rate and dividend_yield must be finite".to_string(),
            ));
        }
        let half_var = 0.5 * vol * vol;
        Ok(Self::new(grid, half_var, rate - dividend_yield - half_var, -rate))
    }
}

impl PdeCoeffSampler1D for ConstantCoeffSampler1D {
    fn grid(&self) -> &RegularGrid1D {
        &self.grid
    }

    fn sample(&self, _start: f64, _end: f64) -> PdeResult<PdeCoefficients> {
        let n = self.grid.size();
        Ok(PdeCoefficients {
            d2x: vec![self.diffusion; n],
            dx: vec![self.drift; n],
            zero: vec![self.zero_order; n],
        })
    }
}
