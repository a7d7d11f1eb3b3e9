//! Run-scoped configuration.
//!
//! Everything that defines a problem instance lives in a [`Params`], which is
//! built once, validated once, and then passed by reference to every other
//! component. Nothing in this crate reads global state, so independent runs
//! (e.g. a sweep over box lengths) never interfere with each other.

use std::f64::consts::PI;
use crate::{
    error::ParamError,
    units::{ self, Units },
};

pub type PResult<T> = Result<T, ParamError>;

/// Default number of eigenstates kept in the expansion.
pub const DEF_NMAX: usize = 50;
/// Default number of spatial grid points.
pub const DEF_GRID_POINTS: usize = 1000;
/// Default number of animation frames.
pub const DEF_TIME_STEPS: usize = 200;
/// Default animation span, in units of the characteristic time.
pub const DEF_SPAN_TAU: f64 = 10.0;

/// Box length, particle mass, and reduced Planck constant (MKS).
///
/// Only constructible through [`Self::new`], so every instance holds finite,
/// positive values.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhysicalConstants {
    a: f64,
    m: f64,
    hbar: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self { a: units::angstrom, m: units::me, hbar: units::hbar }
    }
}

impl PhysicalConstants {
    /// Create a new set of constants, checking that each is finite and
    /// positive, and that they combine into a finite, nonzero time scale.
    pub fn new(a: f64, m: f64, hbar: f64) -> PResult<Self> {
        ParamError::check_box_length(a)?;
        ParamError::check_mass(m)?;
        ParamError::check_hbar(hbar)?;
        let consts = Self { a, m, hbar };
        ParamError::check_time_scale(a, m, hbar, consts.omega(1), consts.tau())?;
        Ok(consts)
    }

    /// Box length.
    pub fn a(&self) -> f64 { self.a }

    /// Particle mass.
    pub fn m(&self) -> f64 { self.m }

    /// Reduced Planck constant.
    pub fn hbar(&self) -> f64 { self.hbar }

    /// Phase angular frequency of the `n`-th eigenstate, `n²π²ħ / 2ma²`.
    pub fn omega(&self, n: usize) -> f64 {
        let n = n as f64;
        (n * PI).powi(2) * self.hbar / (2.0 * self.m * self.a.powi(2))
    }

    /// Energy of the `n`-th eigenstate, `ħ ω(n)`.
    pub fn energy(&self, n: usize) -> f64 { self.hbar * self.omega(n) }

    /// Characteristic time `τ = 2ma² / π²ħ`, the inverse of the ground-state
    /// angular frequency.
    pub fn tau(&self) -> f64 { self.omega(1).recip() }

    /// Natural unit system for this box.
    pub fn units(&self) -> Units { Units::from_mks(self.m, self.a, self.hbar) }
}

/// All parameters of a single run.
///
/// Defaults reproduce an electron in a 1 Å box, expanded over 50 eigenstates,
/// sampled on 1000 points and animated over 200 frames spanning 10τ.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Params {
    /// Physical constants.
    pub consts: PhysicalConstants,
    /// Number of eigenstates kept in the expansion.
    pub nmax: usize,
    /// Number of spatial grid points over `[0, a]`.
    pub grid_points: usize,
    /// Number of time samples (animation frames).
    pub time_steps: usize,
    /// Total animation span in units of τ.
    pub span_tau: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            consts: PhysicalConstants::default(),
            nmax: DEF_NMAX,
            grid_points: DEF_GRID_POINTS,
            time_steps: DEF_TIME_STEPS,
            span_tau: DEF_SPAN_TAU,
        }
    }
}

impl Params {
    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> PResult<()> {
        ParamError::check_nmax(self.nmax)?;
        ParamError::check_grid_size(self.grid_points)?;
        ParamError::check_time_steps(self.time_steps)?;
        ParamError::check_span(self.span_tau)?;
        Ok(())
    }

    /// Replace the physical constants, validating the new values.
    pub fn with_constants(mut self, a: f64, m: f64, hbar: f64)
        -> PResult<Self>
    {
        self.consts = PhysicalConstants::new(a, m, hbar)?;
        Ok(self)
    }

    /// Set the number of eigenstates.
    pub fn with_nmax(mut self, nmax: usize) -> Self {
        self.nmax = nmax;
        self
    }

    /// Set the number of spatial grid points.
    pub fn with_grid_points(mut self, grid_points: usize) -> Self {
        self.grid_points = grid_points;
        self
    }

    /// Set the number of animation frames.
    pub fn with_time_steps(mut self, time_steps: usize) -> Self {
        self.time_steps = time_steps;
        self
    }

    /// Set the animation span in units of τ.
    pub fn with_span_tau(mut self, span_tau: f64) -> Self {
        self.span_tau = span_tau;
        self
    }

    /// Total animation span in seconds.
    pub fn span(&self) -> f64 { self.span_tau * self.consts.tau() }
}
