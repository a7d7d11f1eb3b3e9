//! Expansion coefficients of the initial state over the box eigenbasis.
//!
//! The initial state is the left half of the second eigenstate, renormalized
//! to the half-box:
//! ```text
//! ψ(x, 0) = √(4/a) sin(2πx/a)   for 0 ≤ x < a/2
//!         = 0                   otherwise
//! ```
//! Projecting onto `φ_n(x) = √(2/a) sin(nπx/a)` gives
//! ```text
//!       √2  ⎡ sin((2 - n)π/2)   sin((2 + n)π/2) ⎤
//! c_n = -- ⎢ --------------- - --------------- ⎥
//!       π  ⎣      2 - n             2 + n      ⎦
//! ```
//! which is independent of `a` and has a removable singularity at `n = 2`,
//! where the overlap is simply `1/√2`.

use std::f64::consts::{ FRAC_1_SQRT_2, PI, SQRT_2 };
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    error::{ LengthError, ParamError, WaveError },
    grid::SpatialGrid,
    params::Params,
    utils::sine_transform,
};

pub type CResult<T> = Result<T, WaveError>;

/// Classification of an eigenindex for the purpose of evaluating its
/// coefficient.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Term {
    /// `n = 2`, where the initial state overlaps its parent eigenstate.
    Resonant,
    /// Any other `n ≥ 1`.
    General(usize),
}

impl Term {
    /// Classify an eigenindex, returning `None` for `n = 0`.
    pub fn classify(n: usize) -> Option<Self> {
        match n {
            0 => None,
            2 => Some(Self::Resonant),
            n => Some(Self::General(n)),
        }
    }

    /// Evaluate the coefficient for this term.
    pub fn value(self) -> f64 {
        match self {
            Self::Resonant => FRAC_1_SQRT_2,
            Self::General(n) => {
                let n = n as f64;
                let dm = 2.0 - n;
                let dp = 2.0 + n;
                SQRT_2 / PI * (
                    (dm * PI / 2.0).sin() / dm
                    - (dp * PI / 2.0).sin() / dp
                )
            },
        }
    }
}

/// Compute the expansion coefficient `c_n` of the initial state.
pub fn coefficient(n: usize) -> CResult<f64> {
    Term::classify(n)
        .map(Term::value)
        .ok_or(ParamError::EigenIndex(n).into())
}

/// Cached coefficients `c_1, ..., c_nmax`.
///
/// Built once per run; evaluation only ever borrows it.
#[derive(Clone, Debug)]
pub struct CoefficientTable {
    // c[k] holds c_{k + 1}
    c: nd::Array1<C64>,
}

impl CoefficientTable {
    /// Tabulate the analytic coefficients of the initial state for
    /// `n = 1, ..., nmax`.
    pub fn new(nmax: usize) -> CResult<Self> {
        ParamError::check_nmax(nmax)?;
        let c: nd::Array1<C64>
            = (1..=nmax)
            .map(|n| coefficient(n).map(C64::from))
            .collect::<CResult<_>>()?;
        Ok(Self { c })
    }

    /// Tabulate the analytic coefficients for a set of run parameters.
    pub fn from_params(params: &Params) -> CResult<Self> {
        Self::new(params.nmax)
    }

    /// Project an arbitrary initial state, sampled on `grid`, onto the first
    /// `nmax` eigenstates.
    ///
    /// The overlaps are computed with trapezoidal quadrature evaluated as a
    /// single discrete sine transform, so accuracy is limited by the grid
    /// resolution rather than `nmax`.
    pub fn from_samples<S>(grid: &SpatialGrid, psi0: &Arr1<S>, nmax: usize)
        -> CResult<Self>
    where S: nd::Data<Elem = C64>
    {
        ParamError::check_nmax(nmax)?;
        LengthError::check(grid.x(), psi0)?;
        if let Some(k) = psi0.iter().position(|q| !q.is_finite()) {
            return Err(ParamError::Sample(k).into());
        }
        let norm = grid.dx() * (2.0 / grid.length()).sqrt();
        let c = sine_transform(psi0, nmax) * norm;
        Ok(Self { c })
    }

    /// Number of tabulated eigenstates.
    pub fn nmax(&self) -> usize { self.c.len() }

    /// Get `c_n`, if tabulated.
    pub fn get(&self, n: usize) -> Option<C64> {
        n.checked_sub(1).and_then(|k| self.c.get(k)).copied()
    }

    /// Iterate over `(n, c_n)` pairs in increasing order of `n`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, C64)> + '_ {
        self.c.iter().enumerate().map(|(k, ck)| (k + 1, *ck))
    }

    /// Get a reference to the underlying array, where element `k` holds
    /// `c_{k + 1}`.
    pub fn as_array(&self) -> &nd::Array1<C64> { &self.c }

    /// Total weight `Σ |c_n|²`, which approaches 1 as `nmax` grows.
    pub fn parseval(&self) -> f64 {
        self.c.iter().map(|ck| ck.norm_sqr()).sum()
    }
}
