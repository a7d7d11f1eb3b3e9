//! Command-line configuration shared by the driver binaries.

use std::path::PathBuf;
use clap::{ Args, Parser };
use tracing_subscriber::EnvFilter;
use boxwave::{
    error::ParamError,
    params::{ Params, PhysicalConstants },
};

/// Optional overrides of the run parameters; anything left unset keeps its
/// default (an electron in a 1 Å box, 50 eigenstates, 1000 points, 200 frames
/// over 10τ).
#[derive(Args, Clone, Debug, Default)]
pub struct ParamArgs {
    /// Box length (m)
    #[arg(long)]
    pub length: Option<f64>,

    /// Particle mass (kg)
    #[arg(long)]
    pub mass: Option<f64>,

    /// Reduced Planck constant (J s)
    #[arg(long)]
    pub hbar: Option<f64>,

    /// Number of eigenstates kept in the expansion
    #[arg(short, long)]
    pub nmax: Option<usize>,

    /// Number of spatial grid points
    #[arg(long)]
    pub points: Option<usize>,

    /// Number of animation frames
    #[arg(long)]
    pub steps: Option<usize>,

    /// Animation span in units of the characteristic time
    #[arg(long)]
    pub span: Option<f64>,
}

impl ParamArgs {
    /// Overlay the given overrides onto the defaults and validate the result.
    pub fn to_params(&self) -> Result<Params, ParamError> {
        let base = Params::default();
        let consts = PhysicalConstants::new(
            self.length.unwrap_or(base.consts.a()),
            self.mass.unwrap_or(base.consts.m()),
            self.hbar.unwrap_or(base.consts.hbar()),
        )?;
        let params = Params {
            consts,
            nmax: self.nmax.unwrap_or(base.nmax),
            grid_points: self.points.unwrap_or(base.grid_points),
            time_steps: self.steps.unwrap_or(base.time_steps),
            span_tau: self.span.unwrap_or(base.span_tau),
        };
        params.validate()?;
        Ok(params)
    }
}

/// Logging verbosity.
#[derive(Args, Clone, Debug, Default)]
pub struct LogArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Initialize the global `tracing` subscriber. `RUST_LOG`, if set, takes
/// precedence over the command-line flags.
pub fn setup_logging(log: &LogArgs) {
    let level
        = if log.quiet {
            "error"
        } else if log.verbose {
            "debug"
        } else {
            "info"
        };
    let filter
        = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Render the time evolution of the probability density to an animated GIF.
#[derive(Parser, Debug)]
#[command(name = "animate", author, version, about)]
pub struct AnimateArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Output file
    #[arg(short, long, default_value = "wavefunction2.gif")]
    pub output: PathBuf,

    /// Image width (px)
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Image height (px)
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Delay between frames (ms)
    #[arg(long, default_value_t = 50)]
    pub delay: u32,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Print the expansion coefficients of the initial state.
#[derive(Parser, Debug)]
#[command(name = "coefficients", author, version, about)]
pub struct CoefficientArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    #[command(flatten)]
    pub log: LogArgs,
}
