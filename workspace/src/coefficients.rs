use clap::Parser;
use boxwave::{
    coeffs::{ CoefficientTable, Term },
    grid::SpatialGrid,
    units,
    utils::wf_norm,
    wave::WaveEvaluator,
};
use lib::cli::{ CoefficientArgs, setup_logging };

fn main() -> anyhow::Result<()> {
    let args = CoefficientArgs::parse();
    setup_logging(&args.log);
    let params = args.params.to_params()?;
    let table = CoefficientTable::from_params(&params)?;
    let uu = params.consts.units();

    println!(
        "{:>4}  {:>13}  {:>11}  {:>12}  {:>9}",
        "n", "c_n", "|c_n|²", "E_n (eV)", "E_n/E_1",
    );
    for (n, cn) in table.iter() {
        let mark = if Term::classify(n) == Some(Term::Resonant) { "*" } else { "" };
        let en = params.consts.energy(n);
        let en_nat: f64 = uu.to_nat_energy(en);
        println!(
            "{:>4}  {:>13.6e}  {:>11.4e}  {:>12.4e}  {:>9.1}{}",
            n, cn.re, cn.norm_sqr(), en / units::e, en_nat, mark,
        );
    }

    // norm of the truncated initial state as sampled on the run's grid
    let eval = WaveEvaluator::new(&params.consts, &table)?;
    let grid = SpatialGrid::from_params(&params)?;
    let norm = wf_norm(&eval.psi_grid(&grid, 0.0)?, grid.dx());

    let total = table.parseval();
    println!();
    println!("Σ|c_n|²       = {:.12}", total);
    println!("1 - Σ|c_n|²   = {:.3e}", 1.0 - total);
    println!("∫|Ψ(x, 0)|²dx = {:.12}", norm);
    println!("E_1           = {:.6e} eV", uu.e / units::e);
    println!("τ             = {:.6e} s", uu.t);
    Ok(())
}
