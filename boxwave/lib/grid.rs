//! Spatial sampling of the box.

use ndarray as nd;
use crate::{
    error::ParamError,
    params::{ Params, PResult },
};

/// Evenly spaced positions covering `[0, a]`, endpoints included.
///
/// Built once per run and only borrowed afterwards.
#[derive(Clone, Debug)]
pub struct SpatialGrid {
    // coordinate array
    x: nd::Array1<f64>,
    // coordinate array grid spacing
    dx: f64,
    // box length
    a: f64,
}

impl SpatialGrid {
    /// Create a grid of `n` points over a box of length `a`.
    pub fn new(a: f64, n: usize) -> PResult<Self> {
        ParamError::check_box_length(a)?;
        ParamError::check_grid_size(n)?;
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, a, n);
        let dx = a / (n - 1) as f64;
        Ok(Self { x, dx, a })
    }

    /// Create the grid described by a set of run parameters.
    pub fn from_params(params: &Params) -> PResult<Self> {
        Self::new(params.consts.a(), params.grid_points)
    }

    /// Get a reference to the coordinate array.
    pub fn x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get the grid spacing.
    pub fn dx(&self) -> f64 { self.dx }

    /// Get the box length.
    pub fn length(&self) -> f64 { self.a }

    /// Get the number of grid points.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.x.len() }
}
