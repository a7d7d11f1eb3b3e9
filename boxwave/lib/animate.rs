//! Frame-by-frame driver for animating the probability density.
//!
//! An [`Animation`] owns the spatial grid and the list of time samples, and
//! hands each computed [`DensityFrame`] to a [`FrameSink`], which is
//! responsible for drawing and encoding. Because frames are independent of
//! each other, they can either be streamed one at a time with
//! [`Animation::run`] or computed all at once in parallel with
//! [`Animation::precompute`] and then fed to a sink with [`Animation::play`].
//!
//! ```
//! use boxwave::{ animate::*, coeffs::CoefficientTable, params::Params,
//!     wave::{ DensityFrame, WaveEvaluator }, grid::SpatialGrid,
//!     error::WaveError };
//!
//! struct Peaks(Vec<f64>);
//!
//! impl FrameSink for Peaks {
//!     type Error = WaveError;
//!
//!     fn frame(&mut self, _grid: &SpatialGrid, frame: &DensityFrame)
//!         -> Result<(), WaveError>
//!     {
//!         self.0.push(frame.max());
//!         Ok(())
//!     }
//! }
//!
//! let params = Params::default().with_time_steps(5).with_grid_points(100);
//! let table = CoefficientTable::from_params(&params).unwrap();
//! let eval = WaveEvaluator::new(&params.consts, &table).unwrap();
//! let anim = Animation::from_params(&params).unwrap();
//! let mut peaks = Peaks(Vec::new());
//! assert_eq!(anim.run(&eval, &mut peaks).unwrap(), 5);
//! assert_eq!(peaks.0.len(), 5);
//! ```

use ndarray as nd;
use rayon::prelude::*;
use tracing::{ debug, info, instrument };
use crate::{
    error::{ ParamError, WaveError },
    grid::SpatialGrid,
    params::{ Params, PResult },
    wave::{ DensityFrame, WaveEvaluator, WResult },
};

/// Return `steps` evenly spaced times covering `[0, span_tau * tau]`.
pub fn time_samples(tau: f64, span_tau: f64, steps: usize)
    -> PResult<nd::Array1<f64>>
{
    ParamError::check_span(span_tau)?;
    ParamError::check_time_steps(steps)?;
    ParamError::check_time(tau)?;
    Ok(nd::Array1::linspace(0.0, span_tau * tau, steps))
}

/// Consumer of computed frames, e.g. a plotting backend or file encoder.
pub trait FrameSink {
    /// Error type of the sink. Evaluation errors must convert into it so that
    /// a streamed run can report both through one channel.
    type Error: From<WaveError>;

    /// Receive the next frame, in increasing order of time.
    fn frame(&mut self, grid: &SpatialGrid, frame: &DensityFrame)
        -> Result<(), Self::Error>;

    /// Called once after the last frame.
    fn finish(&mut self) -> Result<(), Self::Error> { Ok(()) }
}

/// Spatial grid plus time samples of a single animation.
#[derive(Clone, Debug)]
pub struct Animation {
    grid: SpatialGrid,
    times: nd::Array1<f64>,
}

impl Animation {
    /// Create a new animation from a grid and explicit time samples.
    pub fn new(grid: SpatialGrid, times: nd::Array1<f64>) -> PResult<Self> {
        ParamError::check_time_steps(times.len())?;
        if let Some(&t) = times.iter().find(|t| !t.is_finite()) {
            return Err(ParamError::Time(t));
        }
        Ok(Self { grid, times })
    }

    /// Create the animation described by a set of run parameters.
    pub fn from_params(params: &Params) -> PResult<Self> {
        params.validate()?;
        let grid = SpatialGrid::from_params(params)?;
        let times = time_samples(
            params.consts.tau(), params.span_tau, params.time_steps)?;
        Self::new(grid, times)
    }

    /// Get a reference to the spatial grid.
    pub fn grid(&self) -> &SpatialGrid { &self.grid }

    /// Get a reference to the time samples.
    pub fn times(&self) -> &nd::Array1<f64> { &self.times }

    /// Number of frames.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.times.len() }

    /// Compute every frame in parallel.
    ///
    /// Either all frames are returned, in time order, or none are.
    #[instrument(skip_all, fields(frames = self.len(), points = self.grid.len()))]
    pub fn precompute(&self, eval: &WaveEvaluator) -> WResult<Vec<DensityFrame>> {
        info!("computing frames");
        let frames: Vec<DensityFrame>
            = self.times.to_vec()
            .into_par_iter()
            .map(|t| eval.density_frame(&self.grid, t))
            .collect::<WResult<_>>()?;
        info!("done");
        Ok(frames)
    }

    /// Feed precomputed frames to a sink, then finish it.
    pub fn play<K>(&self, frames: &[DensityFrame], sink: &mut K)
        -> Result<usize, K::Error>
    where K: FrameSink
    {
        for (k, frame) in frames.iter().enumerate() {
            debug!(frame = k, t = frame.time(), "emit");
            sink.frame(&self.grid, frame)?;
        }
        sink.finish()?;
        Ok(frames.len())
    }

    /// Compute and emit frames one at a time, then finish the sink.
    ///
    /// Frames already handed to the sink stay there if a later frame fails.
    #[instrument(skip_all, fields(frames = self.len(), points = self.grid.len()))]
    pub fn run<K>(&self, eval: &WaveEvaluator, sink: &mut K)
        -> Result<usize, K::Error>
    where K: FrameSink
    {
        for (k, &t) in self.times.iter().enumerate() {
            let frame = eval.density_frame(&self.grid, t)?;
            debug!(frame = k, t, max = frame.max(), "emit");
            sink.frame(&self.grid, &frame)?;
        }
        sink.finish()?;
        Ok(self.times.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ coeffs::CoefficientTable, params::PhysicalConstants };

    #[derive(Default)]
    struct Collect {
        times: Vec<f64>,
        totals: Vec<f64>,
        finished: bool,
    }

    impl FrameSink for Collect {
        type Error = WaveError;

        fn frame(&mut self, grid: &SpatialGrid, frame: &DensityFrame)
            -> Result<(), WaveError>
        {
            assert_eq!(frame.len(), grid.len());
            self.times.push(frame.time());
            self.totals.push(frame.total(grid.dx()));
            Ok(())
        }

        fn finish(&mut self) -> Result<(), WaveError> {
            self.finished = true;
            Ok(())
        }
    }

    fn small_params() -> Params {
        Params::default().with_grid_points(300).with_time_steps(12)
    }

    #[test]
    fn samples_span_ten_tau() {
        let tau = PhysicalConstants::default().tau();
        let t = time_samples(tau, 10.0, 200).unwrap();
        assert_eq!(t.len(), 200);
        assert_eq!(t[0], 0.0);
        assert!((t[199] - 10.0 * tau).abs() < 1e-12 * tau);
        assert!(matches!(time_samples(tau, 10.0, 0), Err(ParamError::TimeSteps(0))));
        assert!(matches!(time_samples(tau, 0.0, 10), Err(ParamError::Span(_))));
    }

    #[test]
    fn streamed_and_precomputed_frames_agree() {
        let params = small_params();
        let table = CoefficientTable::from_params(&params).unwrap();
        let eval = WaveEvaluator::new(&params.consts, &table).unwrap();
        let anim = Animation::from_params(&params).unwrap();

        let mut streamed = Collect::default();
        assert_eq!(anim.run(&eval, &mut streamed).unwrap(), 12);
        assert!(streamed.finished);

        let frames = anim.precompute(&eval).unwrap();
        let mut played = Collect::default();
        assert_eq!(anim.play(&frames, &mut played).unwrap(), 12);
        assert!(played.finished);

        assert_eq!(streamed.times, played.times);
        assert_eq!(streamed.totals, played.totals);
        assert!(played.times.windows(2).all(|w| w[0] < w[1]));
        assert!(played.totals.iter().all(|p| (p - 1.0).abs() < 1e-5));
    }

    #[test]
    fn invalid_parameters_abort_before_any_frame() {
        let params = small_params().with_nmax(0);
        assert!(matches!(
            CoefficientTable::from_params(&params),
            Err(WaveError::InvalidParameter(ParamError::NMax(0)))
        ));
        assert!(matches!(
            Animation::from_params(&params),
            Err(ParamError::NMax(0))
        ));
        assert!(matches!(
            small_params().with_constants(0.0, 1.0, 1.0),
            Err(ParamError::BoxLength(_))
        ));
    }

    #[test]
    fn non_finite_times_are_rejected() {
        let grid = SpatialGrid::new(1e-10, 10).unwrap();
        let times = nd::array![0.0, f64::NAN];
        assert!(matches!(Animation::new(grid, times), Err(ParamError::Time(_))));
    }
}
