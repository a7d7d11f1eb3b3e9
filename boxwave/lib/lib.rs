//! Time evolution of a particle in a one-dimensional infinite square well,
//! computed from a truncated expansion over the well's energy eigenstates.
//!
//! The initial state is half of the second eigenstate squeezed into the left
//! half of the box. Its overlaps with every eigenstate are known in closed form,
//! so the wavefunction at any time is a finite sum of stationary states, each
//! carrying its own phase; no time integration is needed.
//!
//! Provides:
//! - [`params`]: run-scoped configuration (constants, truncation, sampling)
//! - [`coeffs`]: analytic (and numerically projected) expansion coefficients
//! - [`wave`]: evaluation of the wavefunction and probability density
//! - [`animate`]: the frame loop driving an external renderer
//!
//! ```
//! use boxwave::{ coeffs::CoefficientTable, grid::SpatialGrid,
//!     params::Params, wave::WaveEvaluator };
//!
//! let params = Params::default();
//! let table = CoefficientTable::from_params(&params).unwrap();
//! let eval = WaveEvaluator::new(&params.consts, &table).unwrap();
//! let grid = SpatialGrid::from_params(&params).unwrap();
//! let frame = eval.density_frame(&grid, 2.0 * eval.tau()).unwrap();
//! assert!((frame.total(grid.dx()) - 1.0).abs() < 1e-5);
//! ```
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod units;
pub mod params;
pub mod grid;
pub mod coeffs;
pub mod wave;
pub mod animate;
pub mod utils;

pub mod docs;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
