//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Units](#units)
//! - [Initial state](#initial-state)
//! - [Time dependence](#time-dependence)
//! - [Truncation](#truncation)
//!
//! # Background
//! A particle of mass *m* confined to 0 ≤ *x* ≤ *a* by infinitely high walls
//! obeys the free Schrödinger equation inside the box with the boundary
//! conditions *ψ*(0) = *ψ*(*a*) = 0. The stationary states are
//! ```text
//!          ⎛2⎞½     ⎛n π x⎞
//! φ_n(x) = ⎜-⎟  sin ⎜-----⎟,   n = 1, 2, 3, ...
//!          ⎝a⎠      ⎝  a  ⎠
//! ```
//! with energies
//! ```text
//!        n² π² ħ²
//! E_n = ----------
//!         2 m a²
//! ```
//! The *φ*<sub>*n*</sub> are orthonormal on \[0, *a*\] and complete for
//! square-integrable functions vanishing at the walls, so any admissible state
//! can be written as Σ *c*<sub>*n*</sub> *φ*<sub>*n*</sub>(*x*).
//!
//! # Units
//! The natural energy scale is the ground-state energy *E*<sub>1</sub>, and the
//! natural time scale is
//! ```text
//!      ħ     2 m a²
//! τ = --- = -------
//!     E_1    π² ħ
//! ```
//! In these units the *n*-th state accumulates phase as exp(-*i* *n*² *t*/*τ*),
//! so the full pattern repeats with period 2*πτ* and higher states rotate
//! quadratically faster. For an electron in a 1 Å box, *τ* ≈ 1.75×10⁻¹⁷ s and
//! *E*<sub>1</sub> ≈ 37.6 eV. [`Units`][crate::units::Units] holds these
//! scales.
//!
//! # Initial state
//! The initial state is the left lobe of *φ*<sub>2</sub>, renormalized:
//! ```text
//!           ⎧ (4/a)½ sin(2πx/a)   0 ≤ x < a/2
//! ψ(x, 0) = ⎨
//!           ⎩ 0                   otherwise
//! ```
//! Its overlaps *c*<sub>*n*</sub> = ⟨*φ*<sub>*n*</sub>|*ψ*(0)⟩ follow from
//! elementary integrals of products of sines:
//! ```text
//!       √2  ⎡ sin((2 - n)π/2)   sin((2 + n)π/2) ⎤
//! c_n = -- ⎢ --------------- - --------------- ⎥
//!       π  ⎣      2 - n             2 + n      ⎦
//! ```
//! At *n* = 2 the first term is 0/0. The limit is π/2, giving
//! *c*<sub>2</sub> = 1/√2: half the probability sits in the parent state. All
//! other even coefficients vanish, and the odd ones fall off as 1/*n*².
//! [`Term`][crate::coeffs::Term] routes *n* = 2 to its limit explicitly.
//!
//! # Time dependence
//! Since each *φ*<sub>*n*</sub> is stationary,
//! ```text
//!                                  -i E_n t / ħ
//! Ψ(x, t) = Σ c_n φ_n(x) e
//! ```
//! exactly, and the probability density is *ρ* = |Ψ|². Because the
//! time dependence is a pure phase per term, Σ|*c*<sub>*n*</sub>|² and hence
//! ∫*ρ* d*x* are constant in time; the density never needs renormalizing.
//! Frames at different times share nothing but the coefficient table and can
//! be evaluated in any order, or in parallel.
//!
//! # Truncation
//! Keeping only *N* terms drops a tail of weight
//! ```text
//! 1 - Σ_{n ≤ N} |c_n|²  ~  N⁻³
//! ```
//! which is ≈ 4×10⁻⁶ for *N* = 50. The kink of the initial state at *x* = *a*/2
//! is smoothed over a width of roughly *a*/*N*, and the truncated sum respects
//! the wall boundary conditions exactly at every *t*.
//!
//! When the *x* grid is sampled at *M* evenly spaced points including both
//! walls, the sampled sines are mutually orthogonal under the trapezoidal rule
//! for *n* < *M* - 1, so the trapezoidal integral of *ρ* reproduces
//! Σ|*c*<sub>*n*</sub>|² to rounding error. The same identity makes the
//! numerical projection in
//! [`CoefficientTable::from_samples`][crate::coeffs::CoefficientTable::from_samples]
//! a single discrete sine transform.
