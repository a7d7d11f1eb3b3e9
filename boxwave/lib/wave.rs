//! Evaluation of the truncated eigenstate expansion
//! ```text
//!            N
//! Ψ(x, t) =  Σ  c_n φ_n(x) exp(-i ω_n t),   ω_n = n²π²ħ / 2ma²
//!           n=1
//! ```
//! and its probability density `|Ψ(x, t)|²`.
//!
//! Every eigenstate evolves by a pure phase, so no time stepping is involved:
//! each time sample is evaluated independently of every other, and the total
//! probability is fixed by the coefficients alone. Nothing here renormalizes.

use std::f64::consts::PI;
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    coeffs::CoefficientTable,
    error::{ ParamError, WaveError },
    grid::SpatialGrid,
    params::PhysicalConstants,
    utils::trapz,
};

pub type WResult<T> = Result<T, WaveError>;

/// The initial state, `√(4/a) sin(2πx/a)` on `[0, a/2)` and zero elsewhere.
pub fn initial_state(x: f64, a: f64) -> f64 {
    if (0.0..a / 2.0).contains(&x) {
        (4.0 / a).sqrt() * (2.0 * PI * x / a).sin()
    } else {
        0.0
    }
}

/// Probability density of the initial state.
pub fn initial_density(x: f64, a: f64) -> f64 { initial_state(x, a).powi(2) }

/// Probability density sampled over a spatial grid at a single time.
#[derive(Clone, Debug)]
pub struct DensityFrame {
    t: f64,
    rho: nd::Array1<f64>,
}

impl DensityFrame {
    /// Time of this frame.
    pub fn time(&self) -> f64 { self.t }

    /// Get a reference to the density values, aligned with the grid.
    pub fn values(&self) -> &nd::Array1<f64> { &self.rho }

    /// Number of samples.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.rho.len() }

    /// Total probability over the grid, via the trapezoidal rule.
    ///
    /// *Panics if the frame has fewer than 2 samples*.
    pub fn total(&self, dx: f64) -> f64 { trapz(&self.rho, dx) }

    /// Index and value of the largest sample.
    pub fn peak(&self) -> (usize, f64) {
        self.rho.iter().copied().enumerate()
            .fold((0, f64::NEG_INFINITY), |acc, (k, r)| {
                if r > acc.1 { (k, r) } else { acc }
            })
    }

    /// Largest sample.
    pub fn max(&self) -> f64 { self.peak().1 }
}

/// Evaluates `Ψ(x, t)` and `|Ψ(x, t)|²` from a fixed coefficient table.
///
/// Borrows both of its inputs, which are required to outlive every evaluation;
/// since neither is ever mutated, one evaluator can be shared freely across
/// threads.
#[derive(Copy, Clone, Debug)]
pub struct WaveEvaluator<'a> {
    consts: &'a PhysicalConstants,
    table: &'a CoefficientTable,
}

impl<'a> WaveEvaluator<'a> {
    /// Create a new evaluator.
    pub fn new(consts: &'a PhysicalConstants, table: &'a CoefficientTable)
        -> WResult<Self>
    {
        ParamError::check_box_length(consts.a())?;
        ParamError::check_mass(consts.m())?;
        ParamError::check_hbar(consts.hbar())?;
        ParamError::check_nmax(table.nmax())?;
        Ok(Self { consts, table })
    }

    /// Get a reference to the physical constants.
    pub fn constants(&self) -> &PhysicalConstants { self.consts }

    /// Get a reference to the coefficient table.
    pub fn table(&self) -> &CoefficientTable { self.table }

    /// Number of eigenstates in the expansion.
    pub fn nmax(&self) -> usize { self.table.nmax() }

    /// Characteristic time `τ = 2ma² / π²ħ`.
    pub fn tau(&self) -> f64 { self.consts.tau() }

    /// Normalized box eigenfunction `φ_n(x) = √(2/a) sin(nπx/a)`.
    pub fn eigenfunction(&self, n: usize, x: f64) -> f64 {
        let a = self.consts.a();
        (2.0 / a).sqrt() * (n as f64 * PI * x / a).sin()
    }

    // c_n exp(-i ω_n t) for n = 1, ..., nmax
    fn phased_coefficients(&self, t: f64) -> nd::Array1<C64> {
        self.table.as_array().iter().enumerate()
            .map(|(k, ck)| ck * C64::cis(-self.consts.omega(k + 1) * t))
            .collect()
    }

    fn sum_terms(&self, phased: &nd::Array1<C64>, x: f64) -> C64 {
        phased.iter().enumerate()
            .map(|(k, ck)| ck * self.eigenfunction(k + 1, x))
            .sum()
    }

    /// Evaluate `Ψ(x, t)` at a single point.
    pub fn psi(&self, x: f64, t: f64) -> WResult<C64> {
        ParamError::check_position(x)?;
        ParamError::check_time(t)?;
        Ok(self.sum_terms(&self.phased_coefficients(t), x))
    }

    /// Evaluate `Ψ(x, t)` over a whole grid at a single time.
    pub fn psi_grid(&self, grid: &SpatialGrid, t: f64)
        -> WResult<nd::Array1<C64>>
    {
        ParamError::check_time(t)?;
        let phased = self.phased_coefficients(t);
        Ok(grid.x().mapv(|x| self.sum_terms(&phased, x)))
    }

    /// Evaluate `|Ψ(x, t)|²` at a single point.
    pub fn density(&self, x: f64, t: f64) -> WResult<f64> {
        let rho = self.psi(x, t)?.norm_sqr();
        WaveError::check_density(x, t, rho)?;
        Ok(rho)
    }

    /// Evaluate `|Ψ(x, t)|²` over a whole grid at a single time.
    ///
    /// Fails with [`WaveError::NonFiniteResult`] at the first non-finite
    /// sample.
    pub fn density_frame(&self, grid: &SpatialGrid, t: f64)
        -> WResult<DensityFrame>
    {
        let rho = self.psi_grid(grid, t)?.mapv(|q| q.norm_sqr());
        rho.iter().zip(grid.x())
            .try_for_each(|(&r, &x)| WaveError::check_density(x, t, r))?;
        Ok(DensityFrame { t, rho })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ params::Params, utils::wf_norm };

    fn setup(nmax: usize) -> (PhysicalConstants, CoefficientTable) {
        let consts = PhysicalConstants::default();
        let table = CoefficientTable::new(nmax).unwrap();
        (consts, table)
    }

    #[test]
    fn density_is_normalized_at_all_times() {
        let (consts, table) = setup(50);
        let eval = WaveEvaluator::new(&consts, &table).unwrap();
        let grid = SpatialGrid::new(consts.a(), 1000).unwrap();
        for s in [0.0, 0.37, 1.0, 3.3, 10.0] {
            let frame = eval.density_frame(&grid, s * eval.tau()).unwrap();
            let total = frame.total(grid.dx());
            assert!((total - 1.0).abs() < 1e-5, "t = {s}τ: {total}");
            let q = eval.psi_grid(&grid, s * eval.tau()).unwrap();
            assert!((wf_norm(&q, grid.dx()) - total).abs() < 1e-12);
        }
    }

    #[test]
    fn normalization_tightens_with_nmax() {
        let consts = PhysicalConstants::default();
        let grid = SpatialGrid::new(consts.a(), 2000).unwrap();
        let err = |nmax: usize| {
            let table = CoefficientTable::new(nmax).unwrap();
            let eval = WaveEvaluator::new(&consts, &table).unwrap();
            let frame = eval.density_frame(&grid, 0.5 * eval.tau()).unwrap();
            (frame.total(grid.dx()) - 1.0).abs()
        };
        assert!(err(10) > err(50));
    }

    #[test]
    fn initial_density_is_reproduced() {
        let (consts, table) = setup(50);
        let a = consts.a();
        let eval = WaveEvaluator::new(&consts, &table).unwrap();
        let grid = SpatialGrid::new(a, 1000).unwrap();
        let frame = eval.density_frame(&grid, 0.0).unwrap();
        let peak = 4.0 / a;
        frame.values().iter().zip(grid.x())
            .for_each(|(&r, &x)| {
                let err = (r - initial_density(x, a)).abs() / peak;
                assert!(err < 5e-3, "x = {:.3}a: {err}", x / a);
            });
    }

    #[test]
    fn initial_peak_sits_at_quarter_box() {
        let params = Params::default();
        let table = CoefficientTable::from_params(&params).unwrap();
        let eval = WaveEvaluator::new(&params.consts, &table).unwrap();
        let grid = SpatialGrid::from_params(&params).unwrap();
        let a = params.consts.a();
        let frame = eval.density_frame(&grid, 0.0).unwrap();
        let (k, max) = frame.peak();
        assert!((grid.x()[k] / a - 0.25).abs() < 2e-3);
        assert!((max * a / 4.0 - 1.0).abs() < 5e-3);
        let right_half
            = frame.values().iter().zip(grid.x())
            .filter(|(_, x)| **x >= a / 2.0)
            .map(|(&r, _)| r)
            .fold(0.0, f64::max);
        assert!(right_half < 1e-3 * max);
    }

    #[test]
    fn walls_are_nodes() {
        let (consts, table) = setup(50);
        let a = consts.a();
        let eval = WaveEvaluator::new(&consts, &table).unwrap();
        for s in [0.0, 0.25, 1.7, 9.9] {
            let t = s * eval.tau();
            assert_eq!(eval.density(0.0, t).unwrap(), 0.0);
            assert!(eval.density(a, t).unwrap() < 1e-12 * (4.0 / a));
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        let (consts, table) = setup(50);
        let eval = WaveEvaluator::new(&consts, &table).unwrap();
        let grid = SpatialGrid::new(consts.a(), 200).unwrap();
        let t = 2.345 * eval.tau();
        let f1 = eval.density_frame(&grid, t).unwrap();
        let f2 = eval.density_frame(&grid, t).unwrap();
        assert_eq!(f1.values(), f2.values());
        let x = 0.3 * consts.a();
        assert_eq!(eval.psi(x, t).unwrap(), eval.psi(x, t).unwrap());
    }

    #[test]
    fn grid_and_point_evaluation_agree() {
        let (consts, table) = setup(20);
        let eval = WaveEvaluator::new(&consts, &table).unwrap();
        let grid = SpatialGrid::new(consts.a(), 50).unwrap();
        let t = 0.8 * eval.tau();
        let q = eval.psi_grid(&grid, t).unwrap();
        q.iter().zip(grid.x())
            .for_each(|(qk, &x)| {
                assert!((qk - eval.psi(x, t).unwrap()).norm() < 1e-6);
            });
    }

    #[test]
    fn single_eigenstate_only_rotates() {
        // a one-term table is a stationary state: density is time-independent
        let (consts, table) = setup(1);
        let eval = WaveEvaluator::new(&consts, &table).unwrap();
        let x = 0.4 * consts.a();
        let r0 = eval.density(x, 0.0).unwrap();
        let r1 = eval.density(x, 3.7 * eval.tau()).unwrap();
        assert!((r0 - r1).abs() < 1e-9 * r0);
        // full period of the ground state is 2πτ
        let q0 = eval.psi(x, 0.0).unwrap();
        let q1 = eval.psi(x, 2.0 * PI * eval.tau()).unwrap();
        assert!((q0 - q1).norm() < 1e-6 * q0.norm());
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        let (consts, table) = setup(5);
        let eval = WaveEvaluator::new(&consts, &table).unwrap();
        let grid = SpatialGrid::new(consts.a(), 10).unwrap();
        assert!(matches!(
            eval.psi(0.5e-10, f64::NAN),
            Err(WaveError::InvalidParameter(ParamError::Time(_)))
        ));
        assert!(matches!(
            eval.density(f64::INFINITY, 0.0),
            Err(WaveError::InvalidParameter(ParamError::Position(_)))
        ));
        assert!(matches!(
            eval.density_frame(&grid, f64::INFINITY),
            Err(WaveError::InvalidParameter(ParamError::Time(_)))
        ));
    }

    #[test]
    fn overflowing_density_is_reported() {
        // finite amplitudes whose squared magnitude overflows
        let consts = PhysicalConstants::default();
        let grid = SpatialGrid::new(consts.a(), 10).unwrap();
        let psi0: nd::Array1<C64> = nd::Array1::from_elem(10, C64::from(1e300));
        let table = CoefficientTable::from_samples(&grid, &psi0, 5).unwrap();
        let eval = WaveEvaluator::new(&consts, &table).unwrap();
        assert!(matches!(
            eval.density_frame(&grid, 0.0),
            Err(WaveError::NonFiniteResult { .. })
        ));
    }
}
