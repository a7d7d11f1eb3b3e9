//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned when a run parameter or evaluation input is unusable.
///
/// These are all fatal: the computation is deterministic, so the only remedy
/// is a different configuration.
#[derive(Debug, Error)]
pub enum ParamError {
    /// Box length must be finite and positive.
    #[error("box length must be finite and greater than 0; got {0}")]
    BoxLength(f64),

    /// Particle mass must be finite and positive.
    #[error("particle mass must be finite and greater than 0; got {0}")]
    Mass(f64),

    /// Reduced Planck constant must be finite and positive.
    #[error("hbar must be finite and greater than 0; got {0}")]
    Hbar(f64),

    /// Box length, mass, and hbar must combine into a finite, nonzero
    /// characteristic time `2ma² / π²ħ`.
    #[error(
        "box length {a:e}, mass {m:e}, and hbar {hbar:e} give a degenerate \
        time scale: ω₁ = {omega:e}, τ = {tau:e}"
    )]
    TimeScale { a: f64, m: f64, hbar: f64, omega: f64, tau: f64 },

    /// The expansion must keep at least one eigenstate.
    #[error("number of eigenstates must be greater than 0; got {0}")]
    NMax(usize),

    /// Eigenstates are indexed from 1.
    #[error("eigenstate index must be at least 1; got {0}")]
    EigenIndex(usize),

    /// A spatial grid needs both endpoints.
    #[error("spatial grid must have at least 2 points; got {0}")]
    GridSize(usize),

    /// An animation needs at least one frame.
    #[error("number of time steps must be greater than 0; got {0}")]
    TimeSteps(usize),

    /// Animation span (in units of the characteristic time) must be finite
    /// and positive.
    #[error("animation span must be finite and greater than 0; got {0}")]
    Span(f64),

    /// Evaluation positions must be finite.
    #[error("position must be finite; got {0}")]
    Position(f64),

    /// Evaluation times must be finite.
    #[error("time must be finite; got {0}")]
    Time(f64),

    /// Sampled initial states must be finite everywhere.
    #[error("initial state sample {0} is not finite")]
    Sample(usize),
}

impl ParamError {
    fn positive(x: f64) -> bool { x.is_finite() && x > 0.0 }

    pub(crate) fn check_box_length(a: f64) -> Result<(), Self> {
        Self::positive(a).then_some(()).ok_or(Self::BoxLength(a))
    }

    pub(crate) fn check_mass(m: f64) -> Result<(), Self> {
        Self::positive(m).then_some(()).ok_or(Self::Mass(m))
    }

    pub(crate) fn check_hbar(hbar: f64) -> Result<(), Self> {
        Self::positive(hbar).then_some(()).ok_or(Self::Hbar(hbar))
    }

    pub(crate) fn check_time_scale(
        a: f64,
        m: f64,
        hbar: f64,
        omega: f64,
        tau: f64,
    ) -> Result<(), Self>
    {
        (Self::positive(omega) && Self::positive(tau)).then_some(())
            .ok_or(Self::TimeScale { a, m, hbar, omega, tau })
    }

    pub(crate) fn check_nmax(nmax: usize) -> Result<(), Self> {
        (nmax != 0).then_some(()).ok_or(Self::NMax(nmax))
    }

    pub(crate) fn check_grid_size(n: usize) -> Result<(), Self> {
        (n >= 2).then_some(()).ok_or(Self::GridSize(n))
    }

    pub(crate) fn check_time_steps(n: usize) -> Result<(), Self> {
        (n != 0).then_some(()).ok_or(Self::TimeSteps(n))
    }

    pub(crate) fn check_span(span: f64) -> Result<(), Self> {
        Self::positive(span).then_some(()).ok_or(Self::Span(span))
    }

    pub(crate) fn check_position(x: f64) -> Result<(), Self> {
        x.is_finite().then_some(()).ok_or(Self::Position(x))
    }

    pub(crate) fn check_time(t: f64) -> Result<(), Self> {
        t.is_finite().then_some(()).ok_or(Self::Time(t))
    }
}

/// Returned from coefficient and wavefunction evaluation.
#[derive(Debug, Error)]
pub enum WaveError {
    /// [`ParamError`]
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParamError),

    /// Returned when a computed density is NaN or infinite. This always points
    /// to an upstream parameter problem and is never rendered.
    #[error("non-finite density {value} at x = {x:e}, t = {t:e}")]
    NonFiniteResult {
        /// Position of the offending sample.
        x: f64,
        /// Time of the offending sample.
        t: f64,
        /// The offending value.
        value: f64,
    },

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),
}

impl WaveError {
    pub(crate) fn check_density(x: f64, t: f64, value: f64)
        -> Result<(), Self>
    {
        value.is_finite().then_some(())
            .ok_or(Self::NonFiniteResult { x, t, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_checks_reject_zero_and_nan() {
        assert!(ParamError::check_box_length(1e-10).is_ok());
        assert!(matches!(
            ParamError::check_box_length(0.0),
            Err(ParamError::BoxLength(_))
        ));
        assert!(ParamError::check_mass(f64::NAN).is_err());
        assert!(ParamError::check_hbar(f64::INFINITY).is_err());
        assert!(ParamError::check_hbar(-1.0).is_err());
    }

    #[test]
    fn non_finite_density_is_reported() {
        assert!(WaveError::check_density(0.0, 0.0, 1.0).is_ok());
        let err = WaveError::check_density(0.5, 2.0, f64::NAN).unwrap_err();
        assert!(matches!(err, WaveError::NonFiniteResult { x, t, .. }
            if x == 0.5 && t == 2.0));
    }

    #[test]
    fn length_check() {
        let a = nd::Array1::<f64>::zeros(3);
        let b = nd::Array1::<f64>::zeros(4);
        assert!(LengthError::check(&a, &a).is_ok());
        assert!(matches!(LengthError::check(&a, &b), Err(LengthError(3, 4))));
    }
}
