use anyhow::Context;
use clap::Parser;
use tracing::info;
use boxwave::{
    animate::Animation,
    coeffs::CoefficientTable,
    wave::WaveEvaluator,
};
use lib::{
    cli::{ AnimateArgs, setup_logging },
    render::{ GifRenderer, GifTarget, PlotStyle },
};

// density axis limit relative to the initial peak
const Y_HEADROOM: f64 = 1.4;

fn main() -> anyhow::Result<()> {
    let args = AnimateArgs::parse();
    setup_logging(&args.log);

    // everything that can be rejected is checked before the output file exists
    let params = args.params.to_params().context("invalid configuration")?;
    let table = CoefficientTable::from_params(&params)?;
    let eval = WaveEvaluator::new(&params.consts, &table)?;
    let anim = Animation::from_params(&params)?;
    info!(
        nmax = table.nmax(),
        missing_weight = 1.0 - table.parseval(),
        tau = eval.tau(),
        span = params.span(),
        "configured"
    );

    let frames = anim.precompute(&eval)?;
    let y_max
        = frames.first()
        .map(|frame| Y_HEADROOM * frame.max())
        .filter(|y| y.is_finite() && *y > 0.0)
        .context("initial frame has no positive density")?;

    let target = GifTarget::new(args.output);
    let style = PlotStyle {
        size: (args.width, args.height),
        frame_delay: args.delay,
        x_max: params.consts.a(),
        y_max,
    };
    let mut renderer = GifRenderer::new(&target, style)?;
    anim.play(&frames, &mut renderer)?;
    Ok(())
}
